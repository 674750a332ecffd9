/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Item Platform Client
//!
//! A Rust client for the item platform REST API, together with a verifier and
//! dispatcher for the webhooks the platform sends back.
//!
//! ## Features
//!
//! - One async method per remote endpoint: inventory lookup, item listing,
//!   deposits, withdrawals and their status
//! - Basic authentication and a fixed client identifier on every request
//! - A single error type for transport failures and non-2xx responses
//! - HMAC verification of incoming webhooks and dispatch by event name
//!
//! ## Example
//!
//! ```ignore
//! use itemplatform_client::prelude::*;
//!
//! let config = Config::new(Credentials::new("1234", "user", "secret"))
//!     .with_webhook_secret("hook-secret");
//! let client = Client::new(config)?;
//!
//! let items = client.get_items().await?;
//!
//! client.subscribe("deposit.accepted", |payload| {
//!     info!("deposit accepted: {payload}");
//! });
//! let handler = client.webhook(None);
//! handler.handle(&headers, &body)?;
//! ```

/// Application layer: configuration, client facade, service traits and implementations
pub mod application;

/// Global constants
pub mod constants;

/// Error type shared by every operation
pub mod error;

/// HTTP plumbing and request/response models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Configuration and logging helpers
pub mod utils;

/// Webhook verification and event dispatch
pub mod webhook;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
