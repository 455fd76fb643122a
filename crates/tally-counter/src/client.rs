//! Blocking HTTP client for the counter endpoint.

use std::time::Duration;

use ureq::Agent;

use crate::error::FetchError;
use crate::types::ViewCount;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// View-counter endpoint client.
///
/// Wraps a [`ureq::Agent`] with a global timeout. HTTP statuses are handled
/// explicitly rather than surfacing as transport errors.
pub struct CounterClient {
    agent: Agent,
    endpoint: String,
}

impl CounterClient {
    /// Create a client for the given endpoint with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client for the given endpoint with an explicit timeout.
    ///
    /// The timeout covers the whole request, including the body read.
    #[must_use]
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// Get the endpoint this client queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the current view count.
    ///
    /// Issues a GET request against the endpoint, used verbatim as the
    /// request target, and parses the JSON payload.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if the request or body read fails
    /// - [`FetchError::Http`] if the endpoint answers with a non-2xx status
    /// - [`FetchError::Parse`] if the body is not the expected payload
    pub fn fetch_views(&self) -> Result<ViewCount, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting view count");

        let response = self.agent.get(&self.endpoint).call()?;

        let status = response.status();
        let mut body = response.into_body();

        if !status.is_success() {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(FetchError::Http {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let text = body.read_to_string()?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testutil;

    #[test]
    fn test_endpoint_accessor() {
        let client = CounterClient::new("https://api.example.com/prod/views");

        assert_eq!(client.endpoint(), "https://api.example.com/prod/views");
    }

    #[test]
    fn test_fetch_views_ok() {
        let (url, server) = testutil::serve(1, "200 OK", "application/json", r#"{"views": 42}"#);
        let client = CounterClient::new(url);

        let count = client.fetch_views().unwrap();

        assert_eq!(count.views, 42);
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_ignores_extra_fields() {
        let (url, server) = testutil::serve(
            1,
            "200 OK",
            "application/json",
            r#"{"views": 7, "page": "home"}"#,
        );
        let client = CounterClient::new(url);

        let count = client.fetch_views().unwrap();

        assert_eq!(count.views, 7);
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_server_error() {
        let (url, server) = testutil::serve(
            1,
            "500 Internal Server Error",
            "text/plain",
            "counter backend down",
        );
        let client = CounterClient::new(url);

        let err = client.fetch_views().unwrap_err();

        match err {
            FetchError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "counter backend down");
            }
            other => panic!("Expected FetchError::Http, got {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_not_found() {
        let (url, server) = testutil::serve(1, "404 Not Found", "text/plain", "no such counter");
        let client = CounterClient::new(url);

        let err = client.fetch_views().unwrap_err();

        assert!(matches!(err, FetchError::Http { status: 404, .. }));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_malformed_body() {
        let (url, server) = testutil::serve(1, "200 OK", "text/html", "<html>not json</html>");
        let client = CounterClient::new(url);

        let err = client.fetch_views().unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_missing_field() {
        let (url, server) = testutil::serve(1, "200 OK", "application/json", r#"{"count": 42}"#);
        let client = CounterClient::new(url);

        let err = client.fetch_views().unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_views_connection_refused() {
        let client = CounterClient::new(testutil::refused_endpoint());

        let err = client.fetch_views().unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }
}
