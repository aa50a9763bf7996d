//! Response envelope and paged result container
//!
//! The Marvel API wraps every response in a JSON envelope that carries
//! its own status code alongside a paginated data block. The envelope is
//! parsed once per response and discarded after unwrapping.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// Top-level shape of every Marvel API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The API's embedded status code; 200 on success.
    pub code: i32,
    /// The API's status text (e.g. "Ok", "InvalidParameter").
    #[serde(default)]
    pub status: String,
    /// Entity tag for the result set, when the server provides one.
    #[serde(default)]
    pub etag: Option<String>,
    /// The paginated result block.
    pub data: Page<T>,
}

/// One page of results as returned by the server.
///
/// `results` keeps the server-defined ordering exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of skipped results.
    #[serde(default)]
    pub offset: i32,
    /// Requested result limit.
    #[serde(default)]
    pub limit: i32,
    /// Total number of results available on the server.
    #[serde(default)]
    pub total: i32,
    /// Number of results in this page.
    #[serde(default)]
    pub count: i32,
    /// The results themselves, in server order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Failure to turn a response body into a page of results.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The body was not a syntactically valid envelope.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The envelope parsed but carried a non-200 embedded code.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parses a raw response body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Malformed`] when the body does not match
    /// the envelope shape.
    pub fn parse(body: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl<T> Envelope<T> {
    /// Validates the embedded status code and unwraps the data block.
    ///
    /// # Errors
    ///
    /// Returns the embedded [`ApiError`] when `code != 200`; this happens
    /// even though the HTTP layer already reported success.
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        if self.code == 200 {
            Ok(self.data)
        } else {
            Err(ApiError {
                code: self.code,
                status: self.status,
            })
        }
    }
}

/// Parses a body and unwraps its result page in one step.
///
/// # Errors
///
/// Returns [`EnvelopeError::Malformed`] for unparseable bodies and
/// [`EnvelopeError::Api`] for envelopes with a non-200 embedded code.
pub fn unwrap_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, EnvelopeError> {
    let envelope = Envelope::<T>::parse(body)?;
    Ok(envelope.into_page()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    struct Named {
        id: i32,
        name: String,
    }

    const OK_BODY: &str = r#"{
        "code": 200,
        "status": "Ok",
        "etag": "deadbeef",
        "data": {
            "offset": 0,
            "limit": 20,
            "total": 2,
            "count": 2,
            "results": [
                {"id": 2, "name": "second"},
                {"id": 1, "name": "first"}
            ]
        }
    }"#;

    #[test]
    fn test_unwrap_ok_envelope_preserves_order() {
        let page = unwrap_page::<Named>(OK_BODY).expect("envelope should unwrap");
        assert_eq!(page.total, 2);
        assert_eq!(
            page.results,
            vec![
                Named {
                    id: 2,
                    name: "second".into()
                },
                Named {
                    id: 1,
                    name: "first".into()
                },
            ]
        );
    }

    #[test]
    fn test_etag_is_surfaced() {
        let envelope = Envelope::<Named>::parse(OK_BODY).expect("body should parse");
        assert_eq!(envelope.etag.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_non_200_code_is_an_api_error() {
        let body = r#"{"code": 409, "status": "Limit invalid", "data": {"results": []}}"#;
        let err = unwrap_page::<Named>(body).expect_err("code 409 must fail");
        match err {
            EnvelopeError::Api(api) => {
                assert_eq!(api.code, 409);
                assert_eq!(api.status, "Limit invalid");
            }
            EnvelopeError::Malformed(_) => panic!("expected an API error"),
        }
    }

    #[test]
    fn test_malformed_body_is_distinct_from_api_error() {
        let err = unwrap_page::<Named>("not json at all").expect_err("garbage must fail");
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_missing_page_counters_default_to_zero() {
        let body = r#"{"code": 200, "status": "Ok", "data": {"results": []}}"#;
        let page = unwrap_page::<Named>(body).expect("defaults should apply");
        assert_eq!((page.offset, page.limit, page.total, page.count), (0, 0, 0, 0));
        assert!(page.results.is_empty());
    }
}
