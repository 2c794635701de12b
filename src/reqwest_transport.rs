//! Production transport implementation using reqwest.

use super::{HttpRequest, HttpResponse, Transport, TransportError};

/// Production [`Transport`] backed by `reqwest::Client`.
///
/// A thin wrapper that inherits reqwest's defaults, including connection
/// pooling. The response body is fully buffered before returning, so the
/// underlying connection is released on every path.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use teams_webhook::ReqwestTransport;
///
/// # fn example() -> Result<(), reqwest::Error> {
/// // Default configuration:
/// let transport = ReqwestTransport::new();
///
/// // Or with a custom timeout:
/// let client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// let transport = ReqwestTransport::from_client(client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when custom configuration (timeouts, proxy, TLS) is
    /// needed.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        // Buffering the full body consumes the response, returning the
        // connection to the pool even when the read fails mid-stream.
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
