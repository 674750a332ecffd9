/// Default host of the item platform API
pub const DEFAULT_BASE_URL: &str = "https://my.webmini.com";
/// Path prefix shared by every item platform endpoint
pub const API_PREFIX: &str = "/api/v1/itemplatform";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Client identifier sent as `User-Agent` on every request
pub const USER_AGENT: &str = concat!("itemplatform-client/", env!("CARGO_PKG_VERSION"));
/// Whether deposits allow escrow when the caller does not say
pub const DEFAULT_ALLOW_ESCROW: bool = true;
/// Whether inventory lookups are extensive when the caller does not say
pub const DEFAULT_EXTENSIVE: bool = false;

/// Endpoint listing a user's tradable inventory (not account scoped)
pub const INVENTORY_PATH: &str = "/external/items";
/// Endpoint listing the account's items
pub const ITEMS_PATH: &str = "/items";
/// Endpoint for deposits
pub const DEPOSITS_PATH: &str = "/deposits";
/// Endpoint for withdrawals
pub const WITHDRAWALS_PATH: &str = "/withdrawals";

/// Header carrying the webhook signature, formatted as `algorithm=hexdigest`
pub const SIGNATURE_HEADER: &str = "x-webmini-signature";
/// Header carrying the webhook event name
pub const EVENT_HEADER: &str = "x-webmini-event";
