//! Async client for posting MessageCard notifications to Microsoft
//! Teams incoming webhooks.
//!
//! This crate provides:
//! - The message payload model ([`Message`], [`Section`], [`Fact`],
//!   [`ThemeColor`])
//! - A transport seam for substituting the networking stack
//!   ([`Transport`], [`HttpRequest`], [`HttpResponse`])
//! - The production transport ([`ReqwestTransport`])
//! - The webhook client ([`Client`]) and a stateless convenience
//!   function ([`send_message`])
//!
//! # Example
//!
//! ```no_run
//! use teams_webhook::{send_message, Message, ThemeColor};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), teams_webhook::SendError> {
//! let msg = Message::new("Nightly build failed")
//!     .with_text("See the CI logs for details")
//!     .with_theme(ThemeColor::ERROR);
//!
//! let cancel = CancellationToken::new();
//! send_message(&cancel, "https://outlook.office.com/webhook/abc", &msg).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod message;
mod reqwest_transport;
mod transport;

#[cfg(test)]
mod transport_tests;

pub use client::{Client, send_message};
pub use error::{SendError, TransportError};
pub use message::{Fact, Message, Section, ThemeColor};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Transport};
