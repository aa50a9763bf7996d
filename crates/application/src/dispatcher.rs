//! Request dispatcher
//!
//! Assembles the final URL (base + resource path + filter fragment +
//! auth fragment), executes exactly one GET through the transport port,
//! and records status and latency for observability. Retries, timeouts,
//! and backoff are caller concerns.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::auth::SignatureProvider;
use crate::error::{ClientError, ClientResult};
use crate::ports::{CancellationReceiver, HttpClient, MetricsSink, RequestMetrics};

/// Executes signed GET requests against the API.
pub struct RequestDispatcher {
    base_url: Url,
    http: Arc<dyn HttpClient>,
    signer: SignatureProvider,
    metrics: Arc<dyn MetricsSink>,
}

impl RequestDispatcher {
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(
        base_url: Url,
        http: Arc<dyn HttpClient>,
        signer: SignatureProvider,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            base_url,
            http,
            signer,
            metrics,
        }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The signature provider backing this dispatcher.
    #[must_use]
    pub const fn signer(&self) -> &SignatureProvider {
        &self.signer
    }

    /// Issues one GET for `resource_path` with the given filter
    /// fragment and returns the raw response body.
    ///
    /// A fresh signature is computed per call. When `cancel` is supplied
    /// and fires while the request is in flight, the call resolves with
    /// [`ClientError::Cancelled`] and the response is abandoned.
    ///
    /// # Errors
    ///
    /// [`ClientError::Transport`] for network failures and non-2xx
    /// statuses, [`ClientError::Cancelled`] on cancellation.
    pub async fn dispatch(
        &self,
        resource_path: &str,
        fragment: &str,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<String> {
        let signature = self.signer.issue();
        let url = self.build_url(resource_path, fragment, &signature.ts, &signature.hash);
        let request_id = Uuid::now_v7();

        debug!(%request_id, "GET: {url}");
        let start = Instant::now();

        // None means the cancellation signal won the race.
        let outcome = match cancel {
            Some(receiver) => {
                tokio::select! {
                    () = receiver.cancelled() => None,
                    outcome = self.http.get(&url) => Some(outcome),
                }
            }
            None => Some(self.http.get(&url).await),
        };
        let duration = start.elapsed();

        let Some(outcome) = outcome else {
            debug!(%request_id, "cancelled after {}ms", duration.as_millis());
            self.metrics.record(&RequestMetrics {
                request_id,
                url,
                status: None,
                duration,
            });
            return Err(ClientError::Cancelled);
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                debug!(%request_id, "transport failure after {}ms: {err}", duration.as_millis());
                self.metrics.record(&RequestMetrics {
                    request_id,
                    url,
                    status: None,
                    duration,
                });
                return Err(err.into());
            }
        };

        debug!(
            %request_id,
            "received {} after {}ms",
            response.status,
            duration.as_millis()
        );
        self.metrics.record(&RequestMetrics {
            request_id,
            url,
            status: Some(response.status),
            duration,
        });

        if !(200..300).contains(&response.status) {
            return Err(crate::ports::HttpClientError::Status {
                status: response.status,
            }
            .into());
        }

        Ok(response.body)
    }

    /// Builds `<base>/<path>?<fragment>&ts=<ts>&hash=<hash>`, collapsing
    /// separators when the filter fragment is empty.
    fn build_url(&self, resource_path: &str, fragment: &str, ts: &str, hash: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = format!("{base}/{resource_path}?");
        if !fragment.is_empty() {
            url.push_str(fragment);
            url.push('&');
        }
        url.push_str("ts=");
        url.push_str(ts);
        url.push_str("&hash=");
        url.push_str(hash);
        url
    }
}
