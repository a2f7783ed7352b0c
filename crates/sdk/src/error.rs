//! Error types for the Grapevine SDK.

/// Result type for SDK operations.
pub type StaffbaseResult<T> = Result<T, StaffbaseError>;

/// Error types that can occur when talking to the Staffbase API.
#[derive(Debug, thiserror::Error)]
pub enum StaffbaseError {
    /// The request never produced a response (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// The API answered with a non-2xx status.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API answered 2xx but the payload had an unusable shape.
    #[error("Unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },
}

impl StaffbaseError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            body: body.to_string(),
        }
    }

    /// Status code carried by an [`StaffbaseError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StaffbaseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_keeps_body() {
        let err = StaffbaseError::from_response(403, "{\"message\":\"forbidden\"}");
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.to_string(),
            "API error (status 403): {\"message\":\"forbidden\"}"
        );
    }

    #[test]
    fn test_timeout_has_no_status() {
        assert_eq!(StaffbaseError::Timeout.status(), None);
    }
}
