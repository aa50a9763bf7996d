//! Client construction
//!
//! Wires the default adapters (reqwest transport, system clock, no-op
//! metrics) behind overridable slots and validates configuration before
//! any request is attempted.

use std::sync::Arc;

use marvel_application::auth::ApiCredentials;
use marvel_application::client::{DEFAULT_BASE_URL, MarvelClient};
use marvel_application::error::ClientError;
use marvel_application::ports::{Clock, HttpClient, MetricsSink, NoopMetricsSink};
use marvel_infrastructure::{ReqwestHttpClient, SystemClock};
use url::Url;

/// Starts building a client for the given key pair.
#[must_use]
pub fn builder(
    public_key: impl Into<String>,
    private_key: impl Into<String>,
) -> ClientBuilder {
    ClientBuilder::new(public_key, private_key)
}

/// Builder for [`MarvelClient`].
///
/// Only the key pair is required; every collaborator has a production
/// default.
pub struct ClientBuilder {
    public_key: String,
    private_key: String,
    base_url: Option<Url>,
    http: Option<Arc<dyn HttpClient>>,
    clock: Option<Arc<dyn Clock>>,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl ClientBuilder {
    /// Creates a builder for the given key pair.
    #[must_use]
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            base_url: None,
            http: None,
            clock: None,
            metrics: None,
        }
    }

    /// Overrides the API root, e.g. to target a staging host.
    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Supplies a custom transport. Timeouts and proxies are configured
    /// on the transport; the pipeline imposes neither.
    #[must_use]
    pub fn http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Supplies a custom clock, typically a fixed one under test.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Supplies an observability sink for request outcomes.
    #[must_use]
    pub fn metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the public key is
    /// empty, and [`ClientError::Transport`] when the default transport
    /// cannot be constructed.
    pub fn build(self) -> Result<MarvelClient, ClientError> {
        let credentials = ApiCredentials::new(self.public_key, self.private_key)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| ClientError::Configuration(e.to_string()))?,
        };
        let http: Arc<dyn HttpClient> = match self.http {
            Some(http) => http,
            None => Arc::new(ReqwestHttpClient::new()?),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock::new()),
        };
        let metrics: Arc<dyn MetricsSink> = match self.metrics {
            Some(metrics) => metrics,
            None => Arc::new(NoopMetricsSink),
        };

        Ok(MarvelClient::new(credentials, base_url, http, clock, metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_public_key_fails_fast() {
        let err = builder("", "secret").build().expect_err("must fail");
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_defaults_target_the_production_root() {
        let client = builder("pk", "sk").build().expect("client should build");
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.public_key(), "pk");
    }
}
