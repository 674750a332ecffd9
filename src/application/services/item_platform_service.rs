/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::item_platform::ItemPlatformService;
use crate::constants::{DEPOSITS_PATH, INVENTORY_PATH, ITEMS_PATH, WITHDRAWALS_PATH};
use crate::error::AppError;
use crate::model::http::PlatformHttpClient;
use crate::model::requests::{CallOptions, DepositRequest, InventoryRequest, WithdrawalRequest};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the item platform service
pub struct ItemPlatformServiceImpl<T: PlatformHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: PlatformHttpClient> ItemPlatformServiceImpl<T> {
    /// Creates a new instance of the service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

/// Path of a single deposit or withdrawal
///
/// Ids are placed into the URL verbatim, so anything that would change the
/// shape of the path is refused up front.
fn resource_path(collection: &str, id: &str) -> Result<String, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidInput("id must not be empty".to_string()));
    }
    if id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidInput(format!("invalid id: {id:?}")));
    }
    Ok(format!("{collection}/{id}"))
}

#[async_trait]
impl<T: PlatformHttpClient + 'static> ItemPlatformService for ItemPlatformServiceImpl<T> {
    async fn get_inventory(&self, request: &InventoryRequest) -> Result<Value, AppError> {
        info!("Getting inventory for game {}", request.game);

        let options = CallOptions::new(INVENTORY_PATH)
            .params(&request.to_params(&self.config.defaults))?
            .without_account_id();

        self.client.call(options).await
    }

    async fn get_items(&self) -> Result<Value, AppError> {
        debug!("Getting items for account {}", self.config.credentials.account_id);
        self.client.call(CallOptions::new(ITEMS_PATH)).await
    }

    async fn deposit(&self, request: &DepositRequest) -> Result<Value, AppError> {
        info!("Requesting deposit of {} items", request.items.len());

        let options = CallOptions::new(DEPOSITS_PATH)
            .method(Method::POST)
            .params(&request.to_params(&self.config.defaults))?;

        let result = self.client.call(options).await?;
        debug!("Deposit accepted: {}", result);
        Ok(result)
    }

    async fn withdraw(&self, request: &WithdrawalRequest) -> Result<Value, AppError> {
        info!("Requesting withdrawal of {} items", request.item_ids.len());

        let options = CallOptions::new(WITHDRAWALS_PATH)
            .method(Method::POST)
            .params(&request.to_params())?;

        let result = self.client.call(options).await?;
        debug!("Withdrawal accepted: {}", result);
        Ok(result)
    }

    async fn get_deposit(&self, id: &str) -> Result<Value, AppError> {
        let path = resource_path(DEPOSITS_PATH, id)?;
        debug!("Getting deposit {}", id);
        self.client
            .call(CallOptions::new(path).without_account_id())
            .await
    }

    async fn get_withdrawal(&self, id: &str) -> Result<Value, AppError> {
        let path = resource_path(WITHDRAWALS_PATH, id)?;
        debug!("Getting withdrawal {}", id);
        self.client
            .call(CallOptions::new(path).without_account_id())
            .await
    }
}
