use itemplatform_client::application::config::{
    CallDefaults, Config, Credentials, RestApiConfig, WebhookConfig,
};
use itemplatform_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use std::env;

#[test]
fn test_config_new_uses_platform_defaults() {
    let config = Config::new(Credentials::new("ACC1", "user", "secret"));
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.webhook, WebhookConfig::default());
    assert!(config.defaults.allow_escrow);
    assert!(!config.defaults.extensive);
}

#[test]
fn test_credentials_serialization() {
    let creds = Credentials::new("ACC1", "user", "secret");
    let json = serde_json::to_string(&creds).unwrap();
    let deserialized: Credentials = serde_json::from_str(&json).unwrap();
    assert_eq!(creds, deserialized);
}

#[test]
fn test_config_deserializes_from_json() {
    let json = r#"{
        "credentials": {"account_id": "7", "token_username": "u", "token_secret": "s"},
        "rest_api": {"base_url": "https://staging.example", "timeout": 10},
        "webhook": {"hmac_secret": "hook"},
        "defaults": {"allow_escrow": false, "extensive": true}
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.rest_api,
        RestApiConfig {
            base_url: "https://staging.example".to_string(),
            timeout: 10
        }
    );
    assert_eq!(config.webhook.hmac_secret.as_deref(), Some("hook"));
    assert_eq!(
        config.defaults,
        CallDefaults {
            allow_escrow: false,
            extensive: true
        }
    );
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("ITEMPLATFORM_ACCOUNT_ID", "ENV_ACC");
        env::set_var("ITEMPLATFORM_TOKEN_USERNAME", "env_user");
        env::set_var("ITEMPLATFORM_TOKEN_SECRET", "env_secret");
        env::set_var("ITEMPLATFORM_WEBHOOK_HMAC", "env_hook");
        env::set_var("ITEMPLATFORM_BASE_URL", "http://localhost:9999");
        env::set_var("ITEMPLATFORM_TIMEOUT", "3");
        env::set_var("ITEMPLATFORM_ALLOW_ESCROW", "false");
    }

    let config = Config::from_env();

    assert_eq!(config.credentials.account_id, "ENV_ACC");
    assert_eq!(config.credentials.token_username, "env_user");
    assert_eq!(config.credentials.token_secret, "env_secret");
    assert_eq!(config.webhook.hmac_secret.as_deref(), Some("env_hook"));
    assert_eq!(config.rest_api.base_url, "http://localhost:9999");
    assert_eq!(config.rest_api.timeout, 3);
    assert!(!config.defaults.allow_escrow);

    unsafe {
        for var in [
            "ITEMPLATFORM_ACCOUNT_ID",
            "ITEMPLATFORM_TOKEN_USERNAME",
            "ITEMPLATFORM_TOKEN_SECRET",
            "ITEMPLATFORM_WEBHOOK_HMAC",
            "ITEMPLATFORM_BASE_URL",
            "ITEMPLATFORM_TIMEOUT",
            "ITEMPLATFORM_ALLOW_ESCROW",
        ] {
            env::remove_var(var);
        }
    }
}
