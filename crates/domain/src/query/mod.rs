//! Query-string construction
//!
//! Filter values, sort specifications, and the canonical encoding of both
//! into the query fragment sent to the API.

mod enums;
mod filter_set;
mod sort;

pub use enums::{ComicFormat, ComicType, DateDescriptor, SeriesType};
pub use filter_set::FilterSet;
pub use sort::{ComicSortBy, CreatorSortBy, Order, Sort, SortBy, SortField};
