//! Typed async client for the Marvel Comics API
//!
//! Builds authenticated query URLs, issues GET requests, and
//! deserializes the response envelope into typed entities. Each call
//! performs exactly one request and returns exactly one page of
//! results; retries, caching, and pagination loops are caller concerns.
//!
//! ```no_run
//! use marvel_client::{CharacterFilters, builder};
//!
//! # async fn run() -> Result<(), marvel_client::ClientError> {
//! let client = builder("<public key>", "<private key>").build()?;
//! let filters = CharacterFilters {
//!     name: Some("Spider-Man".into()),
//!     ..Default::default()
//! };
//! let characters = client.characters(&filters, None).await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::{ClientBuilder, builder};

pub use marvel_application::auth::{ApiCredentials, Signature, SignatureProvider, sign};
pub use marvel_application::client::{DEFAULT_BASE_URL, MarvelClient};
pub use marvel_application::endpoints;
pub use marvel_application::error::{ClientError, ClientResult};
pub use marvel_application::ports;
pub use marvel_application::ports::{CancellationReceiver, CancellationToken};
pub use marvel_domain::envelope::{Envelope, EnvelopeError, Page};
pub use marvel_domain::error::ApiError;
pub use marvel_domain::filters::{
    CharacterFilters, ComicFilters, CreatorFilters, EventFilters, SeriesFilters, StoryFilters,
};
pub use marvel_domain::model;
pub use marvel_domain::model::{Character, Comic, Creator, Event, Series, Story};
pub use marvel_domain::query::{
    ComicFormat, ComicSortBy, ComicType, CreatorSortBy, DateDescriptor, FilterSet, Order,
    SeriesType, Sort, SortBy,
};
pub use marvel_infrastructure::{ReqwestHttpClient, SystemClock};
