/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{EVENT_HEADER, SIGNATURE_HEADER};
use crate::error::AppError;
use crate::webhook::registry::SubscriberRegistry;
use crate::webhook::signature::Signature;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

/// What happened to a webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The payload was handed to the subscribers of `event`
    Dispatched {
        /// Event name taken from `x-webmini-event`
        event: String,
        /// Number of handlers that ran
        subscribers: usize,
    },
    /// The signature did not match; nothing was dispatched
    Rejected,
    /// The payload was valid but carried no event name
    Ignored,
}

/// Verifies and dispatches incoming webhooks
///
/// Built by [`Client::webhook`](crate::application::client::Client::webhook).
/// The handler does not read request bodies itself: the surrounding HTTP
/// framework collects the body and passes the bytes in.
#[derive(Clone)]
pub struct WebhookHandler {
    secret: Option<String>,
    registry: SubscriberRegistry,
}

impl WebhookHandler {
    /// Creates a handler dispatching into `registry`
    ///
    /// With `secret` set every delivery must carry a matching signature;
    /// with `None` signatures are not checked at all.
    pub fn new(registry: SubscriberRegistry, secret: Option<String>) -> Self {
        Self { secret, registry }
    }

    /// Whether deliveries are checked against a shared secret
    #[must_use]
    pub fn verifies_signatures(&self) -> bool {
        self.secret.is_some()
    }

    /// Handles one delivery given its headers and raw body
    ///
    /// # Returns
    /// * `Ok(WebhookOutcome::Rejected)` - The signature is missing or does not match
    /// * `Ok(WebhookOutcome::Dispatched { .. })` - The payload reached the subscribers
    /// * `Err(AppError::Decode)` - The body is not UTF-8 JSON
    pub fn handle(&self, headers: &HeaderMap, body: &[u8]) -> Result<WebhookOutcome, AppError> {
        let signature = header_str(headers, SIGNATURE_HEADER);
        let event = header_str(headers, EVENT_HEADER);
        self.handle_raw(signature, event, body)
    }

    /// Same as [`handle`](Self::handle) for callers that extract headers themselves
    pub fn handle_raw(
        &self,
        signature: Option<&str>,
        event: Option<&str>,
        body: &[u8],
    ) -> Result<WebhookOutcome, AppError> {
        let text = std::str::from_utf8(body).map_err(|e| AppError::Decode(e.to_string()))?;

        if let Some(secret) = &self.secret {
            if !signature_matches(signature, secret, body) {
                warn!("Dropping webhook with invalid signature");
                return Ok(WebhookOutcome::Rejected);
            }
        }

        let payload: Value =
            serde_json::from_str(text).map_err(|e| AppError::Decode(e.to_string()))?;

        let Some(event) = event else {
            debug!("Webhook without {} header, nothing to dispatch", EVENT_HEADER);
            return Ok(WebhookOutcome::Ignored);
        };

        let subscribers = self.registry.dispatch(event, &payload);
        info!("Webhook {} dispatched to {} subscribers", event, subscribers);

        Ok(WebhookOutcome::Dispatched {
            event: event.to_string(),
            subscribers,
        })
    }
}

impl fmt::Debug for WebhookHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookHandler")
            .field("verifies_signatures", &self.verifies_signatures())
            .field("registry", &self.registry)
            .finish()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn signature_matches(header: Option<&str>, secret: &str, body: &[u8]) -> bool {
    let Some(header) = header else {
        debug!("Missing {} header", SIGNATURE_HEADER);
        return false;
    };
    match header.parse::<Signature>() {
        Ok(signature) => signature.verify(secret.as_bytes(), body),
        Err(e) => {
            debug!("Unusable {} header: {}", SIGNATURE_HEADER, e);
            false
        }
    }
}
