/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error returned by every fallible operation of the crate
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response (DNS, connection, timeout)
    Network(reqwest::Error),
    /// The platform answered with a status outside `200..300`
    Remote {
        /// HTTP status returned by the platform
        status: StatusCode,
        /// Remote `message` field, or the numeric status when absent
        message: String,
    },
    /// A webhook body could not be decoded as UTF-8 JSON
    Decode(String),
    /// A successful response body was not valid JSON
    Deserialization(String),
    /// Request parameters could not be serialized
    Json(serde_json::Error),
    /// The call was rejected before anything was sent
    InvalidInput(String),
}

impl AppError {
    /// Builds a remote error from a status and the raw response body
    ///
    /// The message is the body's `message` string field when there is one,
    /// otherwise the numeric status code.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.as_u16().to_string());
        AppError::Remote { status, message }
    }

    /// HTTP status for remote errors
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Remote { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Remote { message, .. } => write!(f, "{message}"),
            AppError::Decode(msg) => write!(f, "could not handle webhook: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
