//! Story entity

use serde::{Deserialize, Serialize};

use super::common::{Collection, CollectionItem, CreatorCollection, Image};

/// An individual story, interior or cover, within a comic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique story id.
    #[serde(default)]
    pub id: i32,
    /// Story title.
    #[serde(default)]
    pub title: String,
    /// Short description of the story.
    #[serde(default)]
    pub description: String,
    /// Canonical URI of this story.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Story type ("interiorStory", "cover", ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// Representative image; frequently absent for stories.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Creators credited on this story.
    #[serde(default)]
    pub creators: Option<CreatorCollection>,
    /// Characters appearing in this story.
    #[serde(default)]
    pub characters: Option<Collection>,
    /// Series this story appears in.
    #[serde(default)]
    pub series: Option<Collection>,
    /// Comics this story appears in.
    #[serde(default)]
    pub comics: Option<Collection>,
    /// Events this story ties into.
    #[serde(default)]
    pub events: Option<Collection>,
    /// The comic this story first appeared in.
    #[serde(default, rename = "originalIssue")]
    pub original_issue: Option<CollectionItem>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_null_thumbnail_deserializes() {
        let json = r#"{"id": 7, "title": "Cover #7", "type": "cover", "thumbnail": null}"#;
        let story: Story = serde_json::from_str(json).expect("story should parse");
        assert_eq!(story.kind, "cover");
        assert!(story.thumbnail.is_none());
    }
}
