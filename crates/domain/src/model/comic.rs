//! Comic entity

use serde::{Deserialize, Serialize};

use super::common::{
    Collection, CollectionItem, ComicDate, ComicPrice, CreatorCollection, Image, TextObject, Url,
};

/// A single comic issue or collected edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    /// Unique comic id.
    #[serde(default)]
    pub id: i32,
    /// Digital edition id, 0 when there is none.
    #[serde(default, rename = "digitalId")]
    pub digital_id: i32,
    /// Canonical title.
    #[serde(default)]
    pub title: String,
    /// Issue number within the series.
    #[serde(default, rename = "issueNumber")]
    pub issue_number: i32,
    /// Description of how this issue differs from its parent, for
    /// variant covers.
    #[serde(default, rename = "variantDescription")]
    pub variant_description: String,
    /// Preferred description.
    #[serde(default)]
    pub description: Option<String>,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// ISBN, mainly for collected editions.
    #[serde(default)]
    pub isbn: String,
    /// UPC barcode number.
    #[serde(default)]
    pub upc: String,
    /// Diamond distributor code.
    #[serde(default, rename = "diamondCode")]
    pub diamond_code: String,
    /// EAN barcode number.
    #[serde(default)]
    pub ean: String,
    /// ISSN, mainly for periodicals.
    #[serde(default)]
    pub issn: String,
    /// Publication format.
    #[serde(default)]
    pub format: String,
    /// Page count, 0 when unknown.
    #[serde(default, rename = "pageCount")]
    pub page_count: i32,
    /// Descriptive text blobs.
    #[serde(default, rename = "textObjects")]
    pub text_objects: Vec<TextObject>,
    /// Canonical URI of this comic.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Public website links for this comic.
    #[serde(default)]
    pub urls: Vec<Url>,
    /// The series this comic belongs to.
    #[serde(default)]
    pub series: Option<Collection>,
    /// Variant issues of this comic.
    #[serde(default)]
    pub variants: Vec<CollectionItem>,
    /// Collections including this comic.
    #[serde(default)]
    pub collections: Vec<CollectionItem>,
    /// Issues collected in this comic.
    #[serde(default, rename = "collectedIssues")]
    pub collected_issues: Vec<CollectionItem>,
    /// Key dates (on-sale, FOC, ...).
    #[serde(default)]
    pub dates: Vec<ComicDate>,
    /// Price points.
    #[serde(default)]
    pub prices: Vec<ComicPrice>,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Promotional images.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Creators credited on this comic.
    #[serde(default)]
    pub creators: Option<CreatorCollection>,
    /// Characters appearing in this comic.
    #[serde(default)]
    pub characters: Option<Collection>,
    /// Stories contained in this comic.
    #[serde(default)]
    pub stories: Option<Collection>,
    /// Events this comic ties into.
    #[serde(default)]
    pub events: Option<Collection>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wire_names_map_to_fields() {
        let json = r#"{
            "id": 41530,
            "digitalId": 27848,
            "title": "Ant-Man (2003) #2",
            "issueNumber": 2,
            "pageCount": 32,
            "dates": [{"type": "onsaleDate", "date": "2029-12-31T00:00:00-0500"}],
            "prices": [{"type": "printPrice", "price": 2.99}]
        }"#;
        let comic: Comic = serde_json::from_str(json).expect("comic should parse");
        assert_eq!(comic.digital_id, 27848);
        assert_eq!(comic.page_count, 32);
        assert_eq!(comic.dates[0].kind, "onsaleDate");
        assert!((comic.prices[0].price - 2.99).abs() < f64::EPSILON);
    }
}
