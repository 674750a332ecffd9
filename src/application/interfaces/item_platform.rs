use crate::error::AppError;
use crate::model::requests::{DepositRequest, InventoryRequest, WithdrawalRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the item platform endpoints
///
/// Every method issues exactly one request and resolves to the parsed JSON
/// body on success.
#[async_trait]
pub trait ItemPlatformService: Send + Sync {
    /// Gets the tradable inventory behind a trade URL
    ///
    /// # Arguments
    /// * `request` - Trade URL, game and the optional extensive flag
    async fn get_inventory(&self, request: &InventoryRequest) -> Result<Value, AppError>;

    /// Gets the items held by the configured account
    async fn get_items(&self) -> Result<Value, AppError>;

    /// Requests a deposit of items from a user
    ///
    /// # Arguments
    /// * `request` - Trade URL, items and the optional escrow flag
    async fn deposit(&self, request: &DepositRequest) -> Result<Value, AppError>;

    /// Requests a withdrawal of items to a user
    async fn withdraw(&self, request: &WithdrawalRequest) -> Result<Value, AppError>;

    /// Gets the status of a deposit
    ///
    /// # Arguments
    /// * `id` - Deposit identifier returned by [`deposit`](Self::deposit)
    async fn get_deposit(&self, id: &str) -> Result<Value, AppError>;

    /// Gets the status of a withdrawal
    async fn get_withdrawal(&self, id: &str) -> Result<Value, AppError>;
}
