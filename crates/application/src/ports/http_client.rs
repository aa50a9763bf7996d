//! HTTP client port and cancellation primitives

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::Notify;

/// A raw HTTP response as captured by a transport adapter.
///
/// Adapters report every received response, whatever its status; the
/// dispatcher decides what a non-2xx status means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

/// Errors a transport adapter can surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Status {
        /// The received status code.
        status: u16,
    },

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Hostname resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// The host that failed to resolve.
        host: String,
        /// The resolver's message.
        message: String,
    },

    /// The connection could not be established or was lost.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The caller-configured transport timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Port for executing HTTP GET requests.
///
/// This trait abstracts the HTTP implementation so the request pipeline
/// stays independent of any specific HTTP library. Connection pooling,
/// TLS, and decompression are adapter concerns.
pub trait HttpClient: Send + Sync {
    /// Executes a single GET and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error for network-level failures. Receiving a non-2xx
    /// status is not an error at this layer.
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>>;
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Handle used to cancel in-flight calls.
///
/// Cloning yields handles over the same state; cancelling any of them
/// wakes every receiver.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    state: Arc<CancelState>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a receiver observing this token.
    #[must_use]
    pub fn receiver(&self) -> CancellationReceiver {
        CancellationReceiver {
            state: Arc::clone(&self.state),
        }
    }

    /// Cancels the token, waking all current and future receivers.
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::Release);
        self.state.notify.notify_waiters();
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Acquire)
    }
}

/// Observer side of a [`CancellationToken`], passed into a call.
#[derive(Debug, Clone)]
pub struct CancellationReceiver {
    state: Arc<CancelState>,
}

impl CancellationReceiver {
    /// Returns true once the token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once the token is cancelled; immediately if it already
    /// was.
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag, so a cancel landing
            // between the check and the await still wakes us.
            let mut notified = std::pin::pin!(self.state.notify.notified());
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_uncancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(!token.receiver().is_cancelled());
    }

    #[test]
    fn test_cancel_reaches_all_receivers() {
        let token = CancellationToken::new();
        let first = token.receiver();
        let second = token.receiver();
        token.cancel();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_immediately_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        // Must not hang.
        token.receiver().cancelled().await;
    }

    #[tokio::test]
    async fn test_cancelled_wakes_pending_waiter() {
        let token = CancellationToken::new();
        let receiver = token.receiver();
        let waiter = tokio::spawn(async move { receiver.cancelled().await });
        tokio::task::yield_now().await;
        token.cancel();
        waiter.await.expect("waiter should resolve");
    }
}
