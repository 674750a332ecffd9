/// Client facade bundling the API service and webhook subscribers
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
