//! Command bridge transport
//!
//! Carries named backend commands over local HTTP. Every command is a POST to
//! `{base_url}/invoke/{command}` with a JSON object of named arguments; the
//! response body is the command's JSON payload (or empty for void commands).

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Request timeout in seconds
const TIMEOUT: u64 = 100;

/// Failure kinds surfaced by the bridge
///
/// Callers map these to short user-facing status lines; the distinction
/// matters where the UI wants different wording per cause (e.g. unknown
/// username vs. unreachable backend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The named entity does not exist (HTTP 404)
    NotFound,
    /// The backend rejected the arguments (HTTP 400)
    Validation(String),
    /// Authentication or permission failure (HTTP 401/403)
    Auth(String),
    /// Transport-level failure: connection refused, timeout, DNS
    Network(String),
    /// Any other backend-reported failure
    Backend(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::Validation(msg) => write!(f, "Invalid request: {}", msg),
            Self::Auth(msg) => write!(f, "Not authorized: {}", msg),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Backend(format!("Malformed response: {}", err))
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Map a non-success HTTP status plus the backend's message body to an error
fn classify_status(status: StatusCode, message: String) -> BridgeError {
    match status {
        StatusCode::NOT_FOUND => BridgeError::NotFound,
        StatusCode::BAD_REQUEST => BridgeError::Validation(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BridgeError::Auth(message),
        _ => BridgeError::Backend(if message.is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            message
        }),
    }
}

/// Low-level bridge to the backend process
#[derive(Clone)]
pub struct Bridge {
    client: Client,
    base_url: String,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Bridge {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send a named command with a JSON argument object and decode the result
    ///
    /// Void commands decode into `()`; an empty response body is treated as
    /// JSON null so they round-trip cleanly.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Value,
    ) -> Result<T, BridgeError> {
        let url = format!("{}/invoke/{}", self.base_url, command);
        debug!("invoke {}", command);

        let response = self.client.post(&url).json(&args).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_status(status, body));
        }

        let value: Value = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)
                .map_err(|e| BridgeError::Backend(format!("Malformed response: {}", e)))?
        };
        serde_json::from_value(value)
            .map_err(|e| BridgeError::Backend(format!("Unexpected payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND, "no such user".into()),
            BridgeError::NotFound
        );
    }

    #[test]
    fn status_400_maps_to_validation() {
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, "missing field".into()),
            BridgeError::Validation("missing field".into())
        );
    }

    #[test]
    fn auth_statuses_map_to_auth() {
        assert_eq!(
            classify_status(StatusCode::UNAUTHORIZED, "log in first".into()),
            BridgeError::Auth("log in first".into())
        );
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN, "not yours".into()),
            BridgeError::Auth("not yours".into())
        );
    }

    #[test]
    fn other_statuses_keep_the_backend_message() {
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            BridgeError::Backend("boom".into())
        );
    }

    #[test]
    fn empty_body_falls_back_to_status_code() {
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY, String::new()),
            BridgeError::Backend("HTTP 502".into())
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let bridge = Bridge::new("http://127.0.0.1:4780/");
        assert_eq!(bridge.base_url, "http://127.0.0.1:4780");
    }
}
