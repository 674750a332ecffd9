/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {env_var}={val:?} ({e:?}), using default");
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// Blank values are treated as missing, so `ITEMPLATFORM_WEBHOOK_HMAC=` in a
/// `.env` file disables webhook verification instead of configuring an empty key.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = env::var(env_var).ok()?;
    let val = val.trim();
    if val.is_empty() {
        return None;
    }
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {env_var}: could not parse {val:?} ({e:?})");
            None
        }
    }
}

/// Gets a required string variable, logging an error when it is missing
///
/// Returns an empty string when the variable is not set so that the caller can
/// still build a configuration and fail later on the first request.
pub fn get_env_required(env_var: &str) -> String {
    match get_env_or_none::<String>(env_var) {
        Some(val) => val,
        None => {
            error!("{env_var} not found in environment variables or .env file");
            String::new()
        }
    }
}
