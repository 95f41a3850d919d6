//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required option was missing or empty. Raised before any network I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP transport failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server returned a non-2xx response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server, or a generic one.
        message: String,
        /// Raw JSON error body, when the server sent one.
        body: Option<serde_json::Value>,
    },

    /// The response arrived but did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a validation error for a required field that is missing or empty.
    pub(crate) fn missing_field(field: &str) -> Self {
        Error::Validation(format!("`{}` is required and must not be empty", field))
    }

    /// HTTP status code of a protocol error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error was raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Transient failures worth retrying for idempotent requests.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::Api { .. } => self.is_rate_limited() || self.is_server_error(),
            _ => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the service.
///
/// The service reports either a single `error` string or an `errors` array.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message from the body.
    pub(crate) fn message(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.errors.iter().find_map(|e| e.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_field() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error": "Resource not found", "errors": [{"message": "other"}], "code": 404}"#,
        )
        .unwrap();
        assert_eq!(body.message().as_deref(), Some("Resource not found"));
    }

    #[test]
    fn test_error_message_falls_back_to_errors_array() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"errors": [{"code": "x"}, {"message": "Invalid intent name"}]}"#)
                .unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid intent name"));
    }

    #[test]
    fn test_status_helpers() {
        let err = Error::Api {
            status: 404,
            message: "missing".to_string(),
            body: None,
        };
        assert!(err.is_not_found());
        assert!(!err.is_server_error());
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(404));

        let err = Error::Api {
            status: 503,
            message: "busy".to_string(),
            body: None,
        };
        assert!(err.is_server_error());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = Error::missing_field("workspace_id");
        assert!(err.is_validation());
        assert!(err.to_string().contains("workspace_id"));
    }
}
