//! API-embedded error type

use thiserror::Error;

/// Failure reported by the Marvel API inside an otherwise successful
/// HTTP response.
///
/// Every payload is wrapped in an envelope carrying its own status code;
/// a non-200 `code` means the API rejected the request even though the
/// transport returned 2xx. The status text is the server's, verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("marvel API error {code}: {status}")]
pub struct ApiError {
    /// The envelope's embedded status code.
    pub code: i32,
    /// The server's status text.
    pub status: String,
}

impl ApiError {
    /// Creates a new `ApiError`.
    #[must_use]
    pub fn new(code: i32, status: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_status() {
        let err = ApiError::new(409, "InvalidParameter");
        assert_eq!(err.to_string(), "marvel API error 409: InvalidParameter");
    }
}
