use crate::constants::{
    DEFAULT_ALLOW_ESCROW, DEFAULT_BASE_URL, DEFAULT_EXTENSIVE, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Account identifier and API token for the item platform
pub struct Credentials {
    /// Account the account-scoped endpoints operate on
    pub account_id: String,
    /// Basic auth username of the API token
    pub token_username: String,
    /// Basic auth secret of the API token
    pub token_secret: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        account_id: impl Into<String>,
        token_username: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            token_username: token_username.into(),
            token_secret: token_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("token_username", &self.token_username)
            .field("token_secret", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Scheme and host of the platform, without the `/api/v1/itemplatform` prefix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Configuration for incoming webhooks
pub struct WebhookConfig {
    /// Shared secret used to verify `x-webmini-signature`; `None` disables verification
    pub hmac_secret: Option<String>,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("hmac_secret", &self.hmac_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Values used for optional call flags the caller leaves unset
pub struct CallDefaults {
    /// Escrow flag sent with deposits
    pub allow_escrow: bool,
    /// Extensive flag sent with inventory lookups
    pub extensive: bool,
}

impl Default for CallDefaults {
    fn default() -> Self {
        Self {
            allow_escrow: DEFAULT_ALLOW_ESCROW,
            extensive: DEFAULT_EXTENSIVE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the item platform client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Webhook configuration
    pub webhook: WebhookConfig,
    /// Defaults for optional call flags
    pub defaults: CallDefaults,
}

impl Config {
    /// Creates a configuration for the default platform host
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            webhook: WebhookConfig::default(),
            defaults: CallDefaults::default(),
        }
    }

    /// Sets the shared secret used to verify incoming webhooks
    ///
    /// An empty secret leaves verification off.
    #[must_use]
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.webhook.hmac_secret = (!secret.is_empty()).then_some(secret);
        self
    }

    /// Points the client at another host, e.g. a staging or mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Replaces the defaults for optional call flags
    #[must_use]
    pub fn with_defaults(mut self, defaults: CallDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Builds a configuration from `ITEMPLATFORM_*` environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// | variable                      | field                          |
    /// |-------------------------------|--------------------------------|
    /// | `ITEMPLATFORM_ACCOUNT_ID`     | `credentials.account_id`       |
    /// | `ITEMPLATFORM_TOKEN_USERNAME` | `credentials.token_username`   |
    /// | `ITEMPLATFORM_TOKEN_SECRET`   | `credentials.token_secret`     |
    /// | `ITEMPLATFORM_WEBHOOK_HMAC`   | `webhook.hmac_secret`          |
    /// | `ITEMPLATFORM_BASE_URL`       | `rest_api.base_url`            |
    /// | `ITEMPLATFORM_TIMEOUT`        | `rest_api.timeout`             |
    /// | `ITEMPLATFORM_ALLOW_ESCROW`   | `defaults.allow_escrow`        |
    /// | `ITEMPLATFORM_EXTENSIVE`      | `defaults.extensive`           |
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                account_id: get_env_required("ITEMPLATFORM_ACCOUNT_ID"),
                token_username: get_env_required("ITEMPLATFORM_TOKEN_USERNAME"),
                token_secret: get_env_required("ITEMPLATFORM_TOKEN_SECRET"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "ITEMPLATFORM_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("ITEMPLATFORM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            webhook: WebhookConfig {
                hmac_secret: get_env_or_none("ITEMPLATFORM_WEBHOOK_HMAC"),
            },
            defaults: CallDefaults {
                allow_escrow: get_env_or_default("ITEMPLATFORM_ALLOW_ESCROW", DEFAULT_ALLOW_ESCROW),
                extensive: get_env_or_default("ITEMPLATFORM_EXTENSIVE", DEFAULT_EXTENSIVE),
            },
        }
    }
}
