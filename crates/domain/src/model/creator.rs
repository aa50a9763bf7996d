//! Creator entity

use serde::{Deserialize, Serialize};

use super::common::{Collection, Image, Url};

/// A writer, artist, or other credited contributor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    /// Unique creator id.
    #[serde(default)]
    pub id: i32,
    /// First name.
    #[serde(default, rename = "firstName")]
    pub first_name: String,
    /// Middle name.
    #[serde(default, rename = "middleName")]
    pub middle_name: String,
    /// Last name.
    #[serde(default, rename = "lastName")]
    pub last_name: String,
    /// Name suffix (e.g. "Jr.").
    #[serde(default)]
    pub suffix: String,
    /// Full display name.
    #[serde(default, rename = "fullName")]
    pub full_name: String,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// Canonical URI of this creator.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Public website links for this creator.
    #[serde(default)]
    pub urls: Vec<Url>,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Series this creator worked on.
    #[serde(default)]
    pub series: Option<Collection>,
    /// Stories this creator worked on.
    #[serde(default)]
    pub stories: Option<Collection>,
    /// Comics this creator worked on.
    #[serde(default)]
    pub comics: Option<Collection>,
    /// Events this creator worked on.
    #[serde(default)]
    pub events: Option<Collection>,
}
