//! Character entity

use serde::{Deserialize, Serialize};

use super::common::{Collection, Image, Url};

/// A Marvel character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique character id.
    #[serde(default)]
    pub id: i32,
    /// Character name.
    #[serde(default)]
    pub name: String,
    /// Short biography or description.
    #[serde(default)]
    pub description: String,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Canonical URI of this character.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Comics this character appears in.
    #[serde(default)]
    pub comics: Option<Collection>,
    /// Series this character appears in.
    #[serde(default)]
    pub series: Option<Collection>,
    /// Stories this character appears in.
    #[serde(default)]
    pub stories: Option<Collection>,
    /// Events this character appears in.
    #[serde(default)]
    pub events: Option<Collection>,
    /// Public website links for this character.
    #[serde(default)]
    pub urls: Vec<Url>,
}
