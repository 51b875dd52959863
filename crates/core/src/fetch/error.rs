use thiserror::Error;

/// Errors that can occur while fetching a context.
///
/// Variants carry string payloads only, so a settled error can be cloned
/// out to every caller sharing the same in-flight fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("identifier parameter is required")]
    MissingIdentifier,
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_display() {
        let error = FetchError::MissingIdentifier;
        assert_eq!(error.to_string(), "identifier parameter is required");
    }

    #[test]
    fn test_http_display() {
        let error = FetchError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(error.to_string(), "server returned 404: not found");
    }

    #[test]
    fn test_transport_display() {
        let error = FetchError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "transport error: connection refused");
    }

    #[test]
    fn test_invalid_response_display() {
        let error = FetchError::InvalidResponse("expected value".to_string());
        assert_eq!(error.to_string(), "invalid response: expected value");
    }
}
