//! Client error taxonomy

use marvel_domain::envelope::EnvelopeError;
use marvel_domain::error::ApiError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Every way a client call can fail.
///
/// A call either fully succeeds with typed results or resolves with
/// exactly one of these; nothing is retried internally and no partial
/// results are returned.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid construction-time configuration; no request was
    /// attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure or non-2xx HTTP status, surfaced verbatim.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The caller cancelled the request while it was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// The HTTP exchange succeeded but the body was not a valid
    /// response envelope.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The envelope parsed but the API reported a non-200 embedded
    /// code.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Malformed(parse) => Self::Malformed(parse.to_string()),
            EnvelopeError::Api(api) => Self::Api(api),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_errors_split_into_distinct_variants() {
        let api: ClientError = EnvelopeError::Api(ApiError::new(405, "Method Not Allowed")).into();
        assert!(matches!(api, ClientError::Api(_)));

        let parse_err = serde_json::from_str::<marvel_domain::Envelope<()>>("nope")
            .expect_err("garbage must not parse");
        let malformed: ClientError = EnvelopeError::Malformed(parse_err).into();
        assert!(matches!(malformed, ClientError::Malformed(_)));
    }

    #[test]
    fn test_status_failures_are_transport_errors() {
        let err: ClientError = HttpClientError::Status { status: 500 }.into();
        assert_eq!(err.to_string(), "transport error: HTTP status 500");
    }
}
