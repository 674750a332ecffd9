/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{API_PREFIX, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::CallOptions;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Request, Response};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Transport used by the services to reach the platform
#[async_trait]
pub trait PlatformHttpClient: Send + Sync {
    /// Sends one call and returns its parsed JSON result
    async fn call(&self, options: CallOptions) -> Result<Value, AppError>;
}

/// Authenticated HTTP client for the item platform
///
/// Every request carries Basic authentication built from the configured
/// token and the crate's `User-Agent`. No retries are attempted: each call
/// either succeeds or returns the first error it meets.
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client for the given configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for a call
    ///
    /// `base_url` + `/api/v1/itemplatform` + `/<account_id>` (unless
    /// suppressed) + the call's `uri`.
    pub fn url_for(&self, options: &CallOptions) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        if options.no_account_id {
            format!("{base}{API_PREFIX}{}", options.uri)
        } else {
            format!(
                "{base}{API_PREFIX}/{}{}",
                self.config.credentials.account_id, options.uri
            )
        }
    }

    /// Builds the request for a call without sending it
    ///
    /// `GET` parameters are encoded into the query string; for every other
    /// method they become the JSON body.
    pub fn build_request(&self, options: &CallOptions) -> Result<Request, AppError> {
        let url = self.url_for(options);
        let credentials = &self.config.credentials;

        let mut request = self
            .http_client
            .request(options.method.clone(), &url)
            .basic_auth(&credentials.token_username, Some(&credentials.token_secret))
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(params) = &options.params {
            request = if options.params_in_query() {
                request.query(params)
            } else {
                request.json(params)
            };
        }

        Ok(request.build()?)
    }

    async fn send(&self, options: CallOptions) -> Result<Value, AppError> {
        let request = self.build_request(&options)?;
        debug!("{} {}", request.method(), request.url());

        let response = self.http_client.execute(request).await.map_err(|e| {
            error!("Request to {} failed: {}", options.uri, e);
            AppError::Network(e)
        })?;

        parse_response(response).await
    }
}

#[async_trait]
impl PlatformHttpClient for HttpClient {
    /// Sends a call and maps the outcome to a single result
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed JSON body of a 2xx response (`Value::Null` when empty)
    /// * `Err(AppError::Network)` - If no response was received
    /// * `Err(AppError::Remote)` - If the status is outside `200..300`
    async fn call(&self, options: CallOptions) -> Result<Value, AppError> {
        self.send(options).await
    }
}

/// Converts a response into the call result
///
/// Transport errors are handled by the caller before this point, so they
/// always take precedence over status inspection.
pub async fn parse_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;

    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&body).map_err(|e| {
            error!("Invalid JSON in {} response: {}", status, e);
            AppError::Deserialization(e.to_string())
        });
    }

    let err = AppError::from_response(status, &body);
    warn!("Request failed with status {}: {}", status, err);
    Err(err)
}
