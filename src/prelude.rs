/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Item Platform Client Prelude
//!
//! Imports the types needed for most interactions with the item platform.
//!
//! ## Usage
//!
//! ```rust
//! use itemplatform_client::prelude::*;
//!
//! let config = Config::new(Credentials::new("1234", "user", "secret"));
//! let client = Client::new(config).expect("client");
//! client.subscribe("deposit.accepted", |payload| info!("{payload}"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the item platform client
pub use crate::application::config::{CallDefaults, Config, Credentials, RestApiConfig, WebhookConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Service trait with one method per endpoint
pub use crate::application::interfaces::item_platform::ItemPlatformService;

/// Service implementation
pub use crate::application::services::item_platform_service::ItemPlatformServiceImpl;

/// HTTP transport
pub use crate::model::http::{HttpClient, PlatformHttpClient};

/// Request models
pub use crate::model::requests::{CallOptions, DepositRequest, InventoryRequest, WithdrawalRequest};

// ============================================================================
// WEBHOOKS
// ============================================================================

/// Webhook verification and dispatch
pub use crate::webhook::{
    EventHandler, Signature, SignatureAlgorithm, SubscriberRegistry, WebhookHandler,
    WebhookOutcome, format_signature_header, sign,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in the public API
pub use reqwest::Method;
pub use reqwest::header::HeaderMap;
