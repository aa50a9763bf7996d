//! Observability sink port

use std::time::Duration;

use uuid::Uuid;

/// The observable outcome of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetrics {
    /// Identifier assigned to the request at dispatch time.
    pub request_id: Uuid,
    /// The full URL that was requested.
    pub url: String,
    /// HTTP status code; `None` when no response arrived (network
    /// failure or cancellation).
    pub status: Option<u16>,
    /// Wall-clock time from dispatch until the outcome was known.
    pub duration: Duration,
}

/// Port for recording request outcomes.
///
/// Implementations must be cheap and non-blocking; they are invoked on
/// the request path.
pub trait MetricsSink: Send + Sync {
    /// Records the outcome of one request.
    fn record(&self, metrics: &RequestMetrics);
}

/// Sink that discards everything. The default when no sink is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetricsSink;

impl MetricsSink for NoopMetricsSink {
    fn record(&self, _metrics: &RequestMetrics) {}
}
