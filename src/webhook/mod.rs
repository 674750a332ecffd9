//! Incoming webhooks
//!
//! [`WebhookHandler`] authenticates a delivery against the shared HMAC secret
//! and hands the parsed payload to the handlers registered in a
//! [`SubscriberRegistry`] under the delivery's event name.

/// Delivery verification and dispatch
pub mod handler;
/// Event subscribers
pub mod registry;
/// HMAC signatures
pub mod signature;

pub use handler::{WebhookHandler, WebhookOutcome};
pub use registry::{EventHandler, SubscriberRegistry};
pub use signature::{Signature, SignatureAlgorithm, format_signature_header, sign};
