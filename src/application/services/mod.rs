/// Module containing the item platform service implementation
pub mod item_platform_service;

pub use item_platform_service::*;
