//! Value objects shared across entity families

use serde::{Deserialize, Serialize};

/// An image resource with a path and extension.
///
/// The API serves every image in a set of named size variants; the
/// helpers below build the variant URIs the way the image server
/// expects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Base path of the image, without extension.
    #[serde(default)]
    pub path: String,
    /// File extension, without the leading dot.
    #[serde(default)]
    pub extension: String,
}

impl Image {
    fn variant(&self, name: &str) -> String {
        format!("{}/{}.{}", self.path, name, self.extension)
    }

    /// The full-size image URI.
    #[must_use]
    pub fn full_size_uri(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }

    /// Portrait small (50x75).
    #[must_use]
    pub fn portrait_small_uri(&self) -> String {
        self.variant("portrait_small")
    }

    /// Portrait medium (100x150).
    #[must_use]
    pub fn portrait_medium_uri(&self) -> String {
        self.variant("portrait_medium")
    }

    /// Portrait extra large (150x225).
    #[must_use]
    pub fn portrait_xlarge_uri(&self) -> String {
        self.variant("portrait_xlarge")
    }

    /// Portrait fantastic (168x252).
    #[must_use]
    pub fn portrait_fantastic_uri(&self) -> String {
        self.variant("portrait_fantastic")
    }

    /// Portrait uncanny (300x450).
    #[must_use]
    pub fn portrait_uncanny_uri(&self) -> String {
        self.variant("portrait_uncanny")
    }

    /// Portrait incredible (216x324).
    #[must_use]
    pub fn portrait_incredible_uri(&self) -> String {
        self.variant("portrait_incredible")
    }

    /// Standard small (65x45).
    #[must_use]
    pub fn standard_small_uri(&self) -> String {
        self.variant("standard_small")
    }

    /// Standard medium (100x100).
    #[must_use]
    pub fn standard_medium_uri(&self) -> String {
        self.variant("standard_medium")
    }

    /// Standard large (140x140).
    #[must_use]
    pub fn standard_large_uri(&self) -> String {
        self.variant("standard_large")
    }

    /// Standard extra large (200x200).
    #[must_use]
    pub fn standard_xlarge_uri(&self) -> String {
        self.variant("standard_xlarge")
    }

    /// Standard fantastic (250x250).
    #[must_use]
    pub fn standard_fantastic_uri(&self) -> String {
        self.variant("standard_fantastic")
    }

    /// Standard amazing (180x180).
    #[must_use]
    pub fn standard_amazing_uri(&self) -> String {
        self.variant("standard_amazing")
    }

    /// Landscape small (120x90).
    #[must_use]
    pub fn landscape_small_uri(&self) -> String {
        self.variant("landscape_small")
    }

    /// Landscape medium (175x130).
    #[must_use]
    pub fn landscape_medium_uri(&self) -> String {
        self.variant("landscape_medium")
    }

    /// Landscape large (190x140).
    #[must_use]
    pub fn landscape_large_uri(&self) -> String {
        self.variant("landscape_large")
    }

    /// Landscape extra large (270x200).
    #[must_use]
    pub fn landscape_xlarge_uri(&self) -> String {
        self.variant("landscape_xlarge")
    }

    /// Landscape amazing (250x156).
    #[must_use]
    pub fn landscape_amazing_uri(&self) -> String {
        self.variant("landscape_amazing")
    }

    /// Landscape incredible (464x261).
    #[must_use]
    pub fn landscape_incredible_uri(&self) -> String {
        self.variant("landscape_incredible")
    }
}

/// A public website link attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    /// Link type (e.g. "detail", "wiki").
    #[serde(default, rename = "type")]
    pub kind: String,
    /// The link target.
    #[serde(default)]
    pub url: String,
}

/// A descriptive text blob attached to a comic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    /// Text type (e.g. "issue_solicit_text").
    #[serde(default, rename = "type")]
    pub kind: String,
    /// IETF language tag of the text.
    #[serde(default)]
    pub language: String,
    /// The text itself.
    #[serde(default)]
    pub text: String,
}

/// A dated milestone of a comic (on-sale date, FOC date, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicDate {
    /// Date type (e.g. "onsaleDate", "focDate").
    #[serde(default, rename = "type")]
    pub kind: String,
    /// The date, as the server renders it.
    #[serde(default)]
    pub date: String,
}

/// A price point of a comic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComicPrice {
    /// Price type (e.g. "printPrice").
    #[serde(default, rename = "type")]
    pub kind: String,
    /// The price in US dollars.
    #[serde(default)]
    pub price: f64,
}

/// A summary reference to a related resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Canonical URI of the referenced resource.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Display name of the referenced resource.
    #[serde(default)]
    pub name: String,
    /// Item type, where the relationship distinguishes one (stories).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// An inlined preview of a related resource list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Number of related resources available in total.
    #[serde(default)]
    pub available: i32,
    /// URI of the full related-resource list.
    #[serde(default, rename = "collectionURI")]
    pub collection_uri: String,
    /// Up to 20 summary references.
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    /// Number of summaries returned inline.
    #[serde(default)]
    pub returned: i32,
}

/// A summary reference to a creator, with their credited role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorSummary {
    /// Canonical URI of the creator.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// The creator's full name.
    #[serde(default)]
    pub name: String,
    /// The credited role (e.g. "writer", "penciller").
    #[serde(default)]
    pub role: String,
}

/// An inlined preview of the creators credited on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorCollection {
    /// Number of credited creators available in total.
    #[serde(default)]
    pub available: i32,
    /// URI of the full creator list.
    #[serde(default, rename = "collectionURI")]
    pub collection_uri: String,
    /// Up to 20 creator summaries.
    #[serde(default)]
    pub items: Vec<CreatorSummary>,
    /// Number of summaries returned inline.
    #[serde(default)]
    pub returned: i32,
}

/// A link to the chronologically adjacent resource (next/previous).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Canonical URI of the adjacent resource.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Display name of the adjacent resource.
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_image_variant_uris() {
        let image = Image {
            path: "http://i.annihil.us/u/prod/marvel/i/mg/3/40/4bb4680432f73".into(),
            extension: "jpg".into(),
        };
        assert_eq!(
            image.full_size_uri(),
            "http://i.annihil.us/u/prod/marvel/i/mg/3/40/4bb4680432f73.jpg"
        );
        assert_eq!(
            image.portrait_uncanny_uri(),
            "http://i.annihil.us/u/prod/marvel/i/mg/3/40/4bb4680432f73/portrait_uncanny.jpg"
        );
        assert_eq!(
            image.landscape_amazing_uri(),
            "http://i.annihil.us/u/prod/marvel/i/mg/3/40/4bb4680432f73/landscape_amazing.jpg"
        );
    }

    #[test]
    fn test_collection_deserializes_wire_names() {
        let json = r#"{
            "available": 3,
            "collectionURI": "http://gateway.marvel.com/v1/public/characters/1009718/comics",
            "items": [{"resourceURI": "http://gateway.marvel.com/v1/public/comics/123", "name": "Some Comic"}],
            "returned": 1
        }"#;
        let collection: Collection = serde_json::from_str(json).expect("collection should parse");
        assert_eq!(collection.available, 3);
        assert_eq!(collection.items[0].name, "Some Comic");
        assert!(collection.items[0].kind.is_none());
    }
}
