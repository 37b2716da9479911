//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

/// Everything that can go wrong between a view and the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401: the backend refused the token or, on login, the credentials.
    #[error("session expired, please sign in again")]
    Unauthorized { message: Option<String> },

    /// The envelope came back with `success: false`.
    #[error("{}", message.as_deref().unwrap_or("request rejected by server"))]
    Rejected { message: Option<String> },

    /// Non-2xx response without a readable envelope.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The body did not have the shape the console expects.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the admin: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message) } if !message.trim().is_empty() => {
                message.clone()
            }
            ApiError::Unauthorized { .. } => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// The `message` the server sent with a rejection or a 401, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } | ApiError::Unauthorized { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected {
            message: Some("User is already blocked".to_string()),
        };
        assert_eq!(err.user_message("Failed to block user"), "User is already blocked");
    }

    #[test]
    fn test_user_message_falls_back() {
        let blank = ApiError::Rejected {
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("Failed to block user"), "Failed to block user");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Failed to block user"),
            "Failed to block user"
        );
        assert_eq!(
            ApiError::Rejected { message: None }.to_string(),
            "request rejected by server"
        );
    }

    #[test]
    fn test_server_message_covers_unauthorized() {
        let err = ApiError::Unauthorized {
            message: Some("Token expired".to_string()),
        };
        assert_eq!(err.server_message(), Some("Token expired"));
        assert_eq!(err.user_message("Failed to load"), "session expired, please sign in again");
        assert!(err.is_unauthorized());
        assert_eq!(ApiError::Unauthorized { message: None }.server_message(), None);
        assert_eq!(ApiError::Status { status: 500 }.server_message(), None);
    }
}
