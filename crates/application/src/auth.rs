//! Request signing
//!
//! The API authenticates GET requests with a `ts`/`hash` query pair:
//! the hash is the MD5 hex digest of `ts + private_key + public_key`.
//! MD5 is fixed by the server's verification logic and is used here for
//! wire compatibility only.

use std::sync::Arc;

use md5::{Digest, Md5};

use crate::error::ClientError;
use crate::ports::Clock;

/// Immutable API key pair.
///
/// The public key is validated at construction; requests are never
/// attempted with an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    public_key: String,
    private_key: String,
}

impl ApiCredentials {
    /// Creates a credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the public key is
    /// empty.
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let public_key = public_key.into();
        if public_key.is_empty() {
            return Err(ClientError::Configuration(
                "public API key cannot be empty".into(),
            ));
        }
        Ok(Self {
            public_key,
            private_key: private_key.into(),
        })
    }

    /// The public API key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The private API key.
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

/// A per-request timestamp and hash pair.
///
/// The hashed timestamp and the transmitted `ts` value are the same
/// string; the server rejects signatures where they differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Timestamp string, exactly as hashed.
    pub ts: String,
    /// MD5 hex digest over `ts + private_key + public_key`.
    pub hash: String,
}

/// Computes the signature hash for a fixed timestamp.
///
/// Pure and deterministic; the concatenation order is mandated by the
/// server.
#[must_use]
pub fn sign(ts: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(ts.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Issues a fresh signature for every request.
///
/// Nothing is cached: concurrent calls each read the clock and hash
/// independently.
pub struct SignatureProvider {
    credentials: ApiCredentials,
    clock: Arc<dyn Clock>,
}

impl SignatureProvider {
    /// Creates a provider over the given credentials and clock.
    #[must_use]
    pub fn new(credentials: ApiCredentials, clock: Arc<dyn Clock>) -> Self {
        Self { credentials, clock }
    }

    /// The credentials this provider signs with.
    #[must_use]
    pub const fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Produces a `(ts, hash)` pair from the current clock reading.
    #[must_use]
    pub fn issue(&self) -> Signature {
        let ts = self.clock.now().timestamp().to_string();
        let hash = sign(
            &ts,
            self.credentials.private_key(),
            self.credentials.public_key(),
        );
        Signature { ts, hash }
    }
}
