//! Series entity

use serde::{Deserialize, Serialize};

use super::common::{Collection, CreatorCollection, Image, ResourceLink, Url};

/// A comic series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique series id.
    #[serde(default)]
    pub id: i32,
    /// Canonical title, including the start year.
    #[serde(default)]
    pub title: String,
    /// Description of the series.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical URI of this series.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Public website links for this series.
    #[serde(default)]
    pub urls: Vec<Url>,
    /// First year of publication.
    #[serde(default, rename = "startYear")]
    pub start_year: i32,
    /// Last year of publication; 2099 for ongoing series.
    #[serde(default, rename = "endYear")]
    pub end_year: i32,
    /// Age-suitability rating.
    #[serde(default)]
    pub rating: String,
    /// Publication frequency type.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Creators credited across the series.
    #[serde(default)]
    pub creators: Option<CreatorCollection>,
    /// Characters appearing in the series.
    #[serde(default)]
    pub characters: Option<Collection>,
    /// Stories contained in the series.
    #[serde(default)]
    pub stories: Option<Collection>,
    /// Comics contained in the series.
    #[serde(default)]
    pub comics: Option<Collection>,
    /// Events the series ties into.
    #[serde(default)]
    pub events: Option<Collection>,
    /// The series that follows this one.
    #[serde(default)]
    pub next: Option<ResourceLink>,
    /// The series that precedes this one.
    #[serde(default)]
    pub previous: Option<ResourceLink>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_year_span_deserializes() {
        let json = r#"{"id": 1945, "title": "Avengers: The Initiative (2007 - 2010)", "startYear": 2007, "endYear": 2010}"#;
        let series: Series = serde_json::from_str(json).expect("series should parse");
        assert_eq!(series.start_year, 2007);
        assert_eq!(series.end_year, 2010);
    }
}
