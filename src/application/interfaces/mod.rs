/// Item platform service interface
pub mod item_platform;
