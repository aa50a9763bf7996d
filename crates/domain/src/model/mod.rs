//! Entity models
//!
//! Deserialized shapes for the six resource families and the value
//! objects they share. Fields default when the server omits them, so a
//! sparse payload still produces a usable entity.

mod character;
mod comic;
mod common;
mod creator;
mod event;
mod series;
mod story;

pub use character::Character;
pub use comic::Comic;
pub use common::{
    Collection, CollectionItem, ComicDate, ComicPrice, CreatorCollection, CreatorSummary, Image,
    ResourceLink, TextObject, Url,
};
pub use creator::Creator;
pub use event::Event;
pub use series::Series;
pub use story::Story;
