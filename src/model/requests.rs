/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::CallDefaults;
use crate::error::AppError;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Shape of a single call to the platform
///
/// Built fresh for every operation and consumed by
/// [`PlatformHttpClient::call`](crate::model::http::PlatformHttpClient::call).
#[derive(Debug, Clone, PartialEq)]
pub struct CallOptions {
    /// HTTP method, `GET` unless set otherwise
    pub method: Method,
    /// Endpoint path appended after the account segment, e.g. `/items`
    pub uri: String,
    /// Parameters sent as query string for `GET` and as JSON body otherwise
    pub params: Option<Value>,
    /// Leaves the account id out of the URL
    pub no_account_id: bool,
}

impl CallOptions {
    /// Creates `GET` options for an account-scoped endpoint
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            uri: uri.into(),
            params: None,
            no_account_id: false,
        }
    }

    /// Sets the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Serializes `params` into the parameters of the call
    pub fn params<P: Serialize>(mut self, params: &P) -> Result<Self, AppError> {
        self.params = Some(serde_json::to_value(params)?);
        Ok(self)
    }

    /// Leaves the account id out of the URL
    #[must_use]
    pub fn without_account_id(mut self) -> Self {
        self.no_account_id = true;
        self
    }

    /// Whether the parameters travel in the query string
    #[must_use]
    pub fn params_in_query(&self) -> bool {
        self.method == Method::GET
    }
}

/// Inventory lookup for the owner of a trade URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRequest {
    /// Trade URL of the inventory owner
    pub trade_url: String,
    /// Game the inventory belongs to
    pub game: String,
    /// Request the extensive listing; `None` uses the configured default
    pub extensive: Option<bool>,
}

impl InventoryRequest {
    /// Creates a lookup using the configured `extensive` default
    pub fn new(trade_url: impl Into<String>, game: impl Into<String>) -> Self {
        Self {
            trade_url: trade_url.into(),
            game: game.into(),
            extensive: None,
        }
    }

    /// Sets the extensive flag explicitly
    #[must_use]
    pub fn extensive(mut self, extensive: bool) -> Self {
        self.extensive = Some(extensive);
        self
    }

    pub(crate) fn to_params(&self, defaults: &CallDefaults) -> InventoryParams<'_> {
        InventoryParams {
            tradeurl: &self.trade_url,
            game: &self.game,
            extensive: self.extensive.unwrap_or(defaults.extensive),
        }
    }
}

/// Deposit of items from a user's inventory
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRequest {
    /// Trade URL of the depositing user
    pub trade_url: String,
    /// Items to deposit, in the platform's item format
    pub items: Vec<Value>,
    /// Allow the deposit to go through escrow; `None` uses the configured default
    pub allow_escrow: Option<bool>,
}

impl DepositRequest {
    /// Creates a deposit using the configured escrow default
    pub fn new(trade_url: impl Into<String>, items: Vec<Value>) -> Self {
        Self {
            trade_url: trade_url.into(),
            items,
            allow_escrow: None,
        }
    }

    /// Sets the escrow flag explicitly
    #[must_use]
    pub fn allow_escrow(mut self, allow_escrow: bool) -> Self {
        self.allow_escrow = Some(allow_escrow);
        self
    }

    pub(crate) fn to_params(&self, defaults: &CallDefaults) -> DepositParams<'_> {
        DepositParams {
            tradeurl: &self.trade_url,
            items: &self.items,
            escrow: self.allow_escrow.unwrap_or(defaults.allow_escrow),
        }
    }
}

/// Withdrawal of items to a user's inventory
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalRequest {
    /// Trade URL of the receiving user
    pub trade_url: String,
    /// Ids of the items to withdraw
    pub item_ids: Vec<Value>,
}

impl WithdrawalRequest {
    /// Creates a withdrawal
    pub fn new(trade_url: impl Into<String>, item_ids: Vec<Value>) -> Self {
        Self {
            trade_url: trade_url.into(),
            item_ids,
        }
    }

    pub(crate) fn to_params(&self) -> WithdrawalParams<'_> {
        WithdrawalParams {
            tradeurl: &self.trade_url,
            items: &self.item_ids,
        }
    }
}

/// Wire parameters of an inventory lookup
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InventoryParams<'a> {
    /// Trade URL
    pub tradeurl: &'a str,
    /// Game
    pub game: &'a str,
    /// Extensive flag
    pub extensive: bool,
}

/// Wire parameters of a deposit
#[derive(Debug, Serialize, PartialEq)]
pub struct DepositParams<'a> {
    /// Trade URL
    pub tradeurl: &'a str,
    /// Items
    pub items: &'a [Value],
    /// Escrow flag
    pub escrow: bool,
}

/// Wire parameters of a withdrawal
#[derive(Debug, Serialize, PartialEq)]
pub struct WithdrawalParams<'a> {
    /// Trade URL
    pub tradeurl: &'a str,
    /// Item ids
    pub items: &'a [Value],
}
