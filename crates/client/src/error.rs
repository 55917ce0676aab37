//! Error types for the codeverify client.

use codeverify_core::RouteError;
use serde_json::Value;
use std::time::Duration;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Ways an outbound call can fail.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Connection or protocol failure before a status was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No response within the configured ceiling.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Backend answered with a non-2xx status.
    #[error("Backend error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request could not be built from the route.
    #[error("Invalid route: {0}")]
    Route(#[from] RouteError),
}

impl BackendError {
    /// Timeouts, transport failures and 5xx are worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Most specific human-readable message available.
    pub fn message(&self) -> String {
        let message = match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(e) => e.to_string(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }

    /// Raw backend error body, or null.
    pub fn details(&self) -> Value {
        match self {
            Self::Api {
                details: Some(details),
                ..
            } => details.clone(),
            _ => Value::Null,
        }
    }

    /// Build an API error from a status code and response body.
    ///
    /// The message comes from the body's `error` field, then `message`, then
    /// a generic status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.as_str().or_else(|| e.get("message")?.as_str()))
                    .or_else(|| v.get("message")?.as_str())
            })
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Backend responded with status {}", status));

        let details = match parsed {
            Some(value) => Some(value),
            None if body.trim().is_empty() => None,
            None => Some(Value::String(body.to_string())),
        };

        Self::Api {
            status,
            message,
            details,
        }
    }
}
