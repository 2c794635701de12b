//! Webhook client binding a URL to a transport.

use tokio_util::sync::CancellationToken;

use super::{HttpRequest, Message, ReqwestTransport, SendError, Transport};

/// A client for posting messages to a single Teams incoming webhook.
///
/// Holds the webhook URL and a [`Transport`]. The client is immutable
/// after construction and holds no per-call state, so a shared
/// reference can be used from any number of concurrent tasks.
///
/// # Type Parameters
///
/// - `T`: The transport implementation (defaults to [`ReqwestTransport`])
///
/// # Example
///
/// ```no_run
/// use teams_webhook::{Client, Message};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), teams_webhook::SendError> {
/// let client = Client::new("https://outlook.office.com/webhook/abc");
/// let cancel = CancellationToken::new();
/// client.send(&cancel, &Message::new("Backup finished")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    webhook: String,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Creates a client for the given webhook URL with the default
    /// transport.
    ///
    /// The URL is not validated here; a malformed URL surfaces as
    /// [`SendError::InvalidUrl`] on the first send.
    #[must_use]
    pub fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            transport: ReqwestTransport::new(),
        }
    }
}

impl<T> Client<T> {
    /// Replaces the transport implementation.
    ///
    /// This is the seam for injecting a test double or an alternate
    /// networking stack.
    #[must_use]
    pub fn with_transport<T2: Transport>(self, transport: T2) -> Client<T2> {
        Client {
            webhook: self.webhook,
            transport,
        }
    }

    /// Returns the bound webhook URL.
    #[must_use]
    pub fn webhook(&self) -> &str {
        &self.webhook
    }
}

impl<T: Transport> Client<T> {
    /// Serializes the message and builds the POST request.
    fn build_request(&self, message: &Message) -> Result<HttpRequest, SendError> {
        let payload = serde_json::to_vec(message).map_err(SendError::Serialization)?;
        let url = url::Url::parse(&self.webhook).map_err(SendError::InvalidUrl)?;

        Ok(HttpRequest::post(url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(payload))
    }

    /// Serializes the message and posts it to the bound webhook.
    ///
    /// Returns `Ok(())` only for a 2xx response. The response body is
    /// fully buffered by the transport on every path, so no connection
    /// resources leak regardless of outcome. Cancellation is honored
    /// at the transport boundary: a token cancelled before or during
    /// execution yields [`SendError::Cancelled`] without inspecting
    /// any response. No retries are performed.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when serialization fails, the URL is
    /// malformed, the transport fails, the token is cancelled, or the
    /// webhook answers with a non-2xx status.
    pub async fn send(
        &self,
        cancel: &CancellationToken,
        message: &Message,
    ) -> Result<(), SendError> {
        let request = self.build_request(message)?;
        tracing::debug!("Posting message to webhook: {}", request.url);

        // biased: a pre-cancelled token wins before the transport is polled
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(SendError::Cancelled),
            result = self.transport.execute(request) => result?,
        };

        if response.is_success() {
            tracing::debug!("Webhook accepted message with status {}", response.status);
            return Ok(());
        }

        Err(SendError::Rejected {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        })
    }
}

/// Posts a message to a webhook using the default transport.
///
/// Stateless convenience equivalent to
/// `Client::new(webhook).send(cancel, message)`, with identical
/// serialization, request-construction, and status-interpretation
/// rules.
///
/// # Errors
///
/// Returns [`SendError`] under the same conditions as [`Client::send`].
pub async fn send_message(
    cancel: &CancellationToken,
    webhook: &str,
    message: &Message,
) -> Result<(), SendError> {
    Client::new(webhook).send(cancel, message).await
}
