//! Error types for counter endpoint integration.

/// Error from a view-count fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The request could not be completed (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body is not the expected payload.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = FetchError::Http {
            status: 500,
            body: "Internal Server Error".to_owned(),
        };

        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_network_error_message() {
        let err = FetchError::Network("connection refused".to_owned());

        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_parse_error_message() {
        let err = FetchError::Parse("expected value at line 1 column 1".to_owned());

        assert_eq!(
            err.to_string(),
            "invalid response body: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::from(json_err);

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_fetch_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
    }
}
