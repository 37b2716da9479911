//! HTTP plumbing shared by every endpoint.
//!
//! The backend wraps each response in an envelope:
//!
//! ```json
//! { "success": true, "helpers": [ ... ] }
//! { "success": false, "message": "Helper not found" }
//! ```
//!
//! [`ApiClient::send`] checks `success` and then deserializes the *whole* body
//! into the endpoint's payload type, which picks out the keys it cares about
//! and ignores the rest.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Client for the admin backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client. Only [`ApiClient::login`] works
    /// without a token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ApiConfig::new(base_url))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            token: None,
        }
    }

    /// Attach the admin's bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.put(self.url(path)))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.patch(self.url(path)))
    }

    /// Send `request` and decode the envelope into `T`.
    ///
    /// `action` names the operation in logs ("approve helper", ...).
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{action}: request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("{action}: failed to read body: {e}");
            ApiError::Network(e.to_string())
        })?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("{action}: unauthorized");
            return Err(ApiError::Unauthorized {
                message: envelope_message(&text),
            });
        }

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                tracing::error!("{action}: server responded with {status}");
                return Err(ApiError::Status {
                    status: status.as_u16(),
                });
            }
            Err(e) => {
                tracing::error!("{action}: body is not JSON: {e}");
                return Err(ApiError::Decode(e.to_string()));
            }
        };

        let decoded = decode_envelope(body);
        match decoded {
            Ok(_) => tracing::debug!("{action}: ok"),
            Err(ref e) => tracing::warn!("{action}: {e}"),
        }
        decoded
    }

    /// Like [`ApiClient::send`] for endpoints whose payload the console ignores.
    pub(crate) async fn send_ack(&self, request: RequestBuilder, action: &str) -> Result<()> {
        self.send::<serde::de::IgnoredAny>(request, action)
            .await
            .map(|_| ())
    }
}

/// Check the envelope's `success` flag and decode the payload.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<T> {
    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(ApiError::Rejected { message });
    }

    Ok(serde_json::from_value(body)?)
}

/// The envelope's `message`, when `text` is a JSON envelope carrying one.
fn envelope_message(text: &str) -> Option<String> {
    let body: Value = serde_json::from_str(text).ok()?;
    body.get("message").and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Payload {
        token: String,
    }

    #[test]
    fn test_decode_envelope_success() {
        let payload: Payload =
            decode_envelope(json!({ "success": true, "token": "abc", "extra": 1 })).unwrap();
        assert_eq!(payload.token, "abc");
    }

    #[test]
    fn test_decode_envelope_rejected() {
        let err = decode_envelope::<Payload>(json!({
            "success": false,
            "message": "Invalid credentials"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("Invalid credentials".to_string())
            }
        );
    }

    #[test]
    fn test_decode_envelope_missing_success_is_rejection() {
        let err = decode_envelope::<Payload>(json!({ "token": "abc" })).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: None });
    }

    #[test]
    fn test_decode_envelope_shape_mismatch() {
        let err = decode_envelope::<Payload>(json!({ "success": true })).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_with_token() {
        let client = ApiClient::new("http://localhost:3000/").with_token("t0k");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.token(), Some("t0k"));
    }
}
