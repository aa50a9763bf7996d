//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the request pipeline and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a test double.

mod clock;
mod http_client;
mod metrics;

pub use clock::Clock;
pub use http_client::{
    CancellationReceiver, CancellationToken, HttpClient, HttpClientError, HttpResponse,
};
pub use metrics::{MetricsSink, NoopMetricsSink, RequestMetrics};
