//! Marvel Domain - Core types for the Marvel Comics API
//!
//! This crate defines the data model for the Marvel API client:
//! entity shapes, the response envelope, and query-parameter encoding.
//! All types here are pure Rust with no I/O dependencies.

pub mod envelope;
pub mod error;
pub mod filters;
pub mod model;
pub mod query;

pub use envelope::{Envelope, EnvelopeError, Page};
pub use error::ApiError;
pub use filters::{
    CharacterFilters, ComicFilters, CreatorFilters, EventFilters, SeriesFilters, StoryFilters,
};
pub use query::{
    ComicFormat, ComicSortBy, ComicType, CreatorSortBy, DateDescriptor, FilterSet, Order,
    SeriesType, Sort, SortBy, SortField,
};
