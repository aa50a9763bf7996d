//! Marvel Infrastructure - Adapters for the request pipeline ports
//!
//! Concrete implementations of the transport and clock ports: a reqwest
//! HTTP client and the system clock.

pub mod adapters;

pub use adapters::{ReqwestHttpClient, SystemClock};
