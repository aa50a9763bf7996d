//! HTTP client adapter backed by reqwest
//!
//! Implements the `HttpClient` port. Connection pooling, TLS, and
//! automatic gzip/deflate decompression are handled here; the port
//! surface stays a plain GET returning status and body.

use std::future::Future;
use std::pin::Pin;

use marvel_application::ports::{HttpClient, HttpClientError, HttpResponse};
use reqwest::Client;
use url::Url;

/// HTTP adapter wrapping a pooled `reqwest::Client`.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an adapter with default settings: compressed transfer
    /// encodings enabled, up to 10 redirects, a crate-identifying
    /// user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("marvel-client/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates an adapter over a caller-configured reqwest client.
    ///
    /// Use this to control timeouts, proxies, or TLS settings; the
    /// pipeline imposes none of its own.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors onto the port's error type.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            if message.to_lowercase().contains("dns")
                || message.to_lowercase().contains("resolve")
            {
                return HttpClientError::Dns { host, message };
            }
            return HttpClientError::Connection(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>> {
        Box::pin(async move {
            let parsed =
                Url::parse(url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let response = self
                .client
                .get(parsed)
                .send()
                .await
                .map_err(|e| Self::map_error(&e))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpClientError::Body(e.to_string()))?;

            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(ReqwestHttpClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_any_io() {
        let client = ReqwestHttpClient::new().expect("client should build");
        let result = client.get("not a url").await;
        assert!(matches!(result, Err(HttpClientError::InvalidUrl(_))));
    }
}
