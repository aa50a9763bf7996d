//! Marvel Application - Request pipeline and client facade
//!
//! This crate orchestrates a call against the Marvel API: it signs the
//! request, dispatches it through the transport port, and unwraps the
//! response envelope. The facade exposes one method per endpoint shape.

pub mod auth;
pub mod client;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod ports;

pub use auth::{ApiCredentials, Signature, SignatureProvider};
pub use client::MarvelClient;
pub use dispatcher::RequestDispatcher;
pub use error::{ClientError, ClientResult};
