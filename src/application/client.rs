/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the item platform
//!
//! Bundles the API service and the webhook subscribers behind one value:
//!
//! ```ignore
//! use itemplatform_client::prelude::*;
//!
//! let client = Client::new(Config::from_env())?;
//! let deposit = client
//!     .deposit(&DepositRequest::new(trade_url, items).allow_escrow(false))
//!     .await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::item_platform::ItemPlatformService;
use crate::application::services::item_platform_service::ItemPlatformServiceImpl;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{DepositRequest, InventoryRequest, WithdrawalRequest};
use crate::webhook::{SubscriberRegistry, WebhookHandler};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Item platform client
///
/// Owns the configuration, the HTTP service and the webhook subscriber
/// registry for its whole lifetime. Credentials never change after
/// construction.
pub struct Client {
    config: Arc<Config>,
    service: ItemPlatformServiceImpl<HttpClient>,
    subscribers: SubscriberRegistry,
}

impl Client {
    /// Creates a new client
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        debug!(
            "Item platform client for account {} at {}",
            config.credentials.account_id, config.rest_api.base_url
        );

        Ok(Self {
            service: ItemPlatformServiceImpl::new(config.clone(), http_client),
            config,
            subscribers: SubscriberRegistry::new(),
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a handler for webhooks carrying `event`
    pub fn subscribe<F>(&self, event: impl Into<String>, handler: F)
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(event, handler);
    }

    /// Registry shared with every handler built by [`webhook`](Self::webhook)
    pub fn subscribers(&self) -> &SubscriberRegistry {
        &self.subscribers
    }

    /// Builds a webhook handler dispatching to this client's subscribers
    ///
    /// `secret` takes precedence over the configured webhook secret. An empty
    /// secret counts as unset. When neither is set, signatures are not verified.
    pub fn webhook(&self, secret: Option<&str>) -> WebhookHandler {
        let secret = secret
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.config
                    .webhook
                    .hmac_secret
                    .clone()
                    .filter(|s| !s.is_empty())
            });
        WebhookHandler::new(self.subscribers.clone(), secret)
    }
}

#[async_trait]
impl ItemPlatformService for Client {
    async fn get_inventory(&self, request: &InventoryRequest) -> Result<Value, AppError> {
        self.service.get_inventory(request).await
    }

    async fn get_items(&self) -> Result<Value, AppError> {
        self.service.get_items().await
    }

    async fn deposit(&self, request: &DepositRequest) -> Result<Value, AppError> {
        self.service.deposit(request).await
    }

    async fn withdraw(&self, request: &WithdrawalRequest) -> Result<Value, AppError> {
        self.service.withdraw(request).await
    }

    async fn get_deposit(&self, id: &str) -> Result<Value, AppError> {
        self.service.get_deposit(id).await
    }

    async fn get_withdrawal(&self, id: &str) -> Result<Value, AppError> {
        self.service.get_withdrawal(id).await
    }
}
