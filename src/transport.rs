//! HTTP request/response types and the transport trait.

use super::TransportError;

/// An outbound HTTP request handed to a [`Transport`].
///
/// A plain value type built from standard `http` crate parts, so any
/// transport implementation can execute it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with the given method and URL, empty headers,
    /// and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response returned by a [`Transport`].
///
/// The body is fully buffered; any underlying connection resources are
/// released by the transport before the response is returned.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for executing outbound HTTP requests.
///
/// This is the single seam for substituting the networking stack: the
/// production implementation is [`ReqwestTransport`], and tests supply
/// doubles that return scripted responses. Implementations must not
/// apply business logic — no retries, no status interpretation.
///
/// [`ReqwestTransport`]: crate::ReqwestTransport
///
/// # Example
///
/// ```ignore
/// use teams_webhook::{Transport, HttpRequest, HttpResponse, TransportError};
///
/// struct FixedTransport {
///     response: HttpResponse,
/// }
///
/// impl Transport for FixedTransport {
///     async fn execute(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Executes the request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the connection fails
    /// ([`TransportError::Connection`]), the request deadline elapses
    /// ([`TransportError::Timeout`]), or the request cannot be built
    /// ([`TransportError::InvalidRequest`]).
    fn execute(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
