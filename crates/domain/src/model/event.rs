//! Event entity

use serde::{Deserialize, Serialize};

use super::common::{Collection, CreatorCollection, Image, ResourceLink, Url};

/// A multi-title crossover event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event id.
    #[serde(default)]
    pub id: i32,
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// Description of the event.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical URI of this event.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,
    /// Public website links for this event.
    #[serde(default)]
    pub urls: Vec<Url>,
    /// Last modification time, as the server renders it.
    #[serde(default)]
    pub modified: String,
    /// Publication date of the first issue.
    #[serde(default)]
    pub start: Option<String>,
    /// Publication date of the last issue.
    #[serde(default)]
    pub end: Option<String>,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Image>,
    /// Creators credited across the event.
    #[serde(default)]
    pub creators: Option<CreatorCollection>,
    /// Characters appearing in the event.
    #[serde(default)]
    pub characters: Option<Collection>,
    /// Stories belonging to the event.
    #[serde(default)]
    pub stories: Option<Collection>,
    /// Comics belonging to the event.
    #[serde(default)]
    pub comics: Option<Collection>,
    /// Series the event spans.
    #[serde(default)]
    pub series: Option<Collection>,
    /// The event that follows this one.
    #[serde(default)]
    pub next: Option<ResourceLink>,
    /// The event that precedes this one.
    #[serde(default)]
    pub previous: Option<ResourceLink>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_adjacent_events_deserialize() {
        let json = r#"{
            "id": 269,
            "title": "Secret Invasion",
            "next": {"resourceURI": "http://gateway.marvel.com/v1/public/events/318", "name": "Dark Reign"},
            "previous": {"resourceURI": "http://gateway.marvel.com/v1/public/events/271", "name": "Secret War"}
        }"#;
        let event: Event = serde_json::from_str(json).expect("event should parse");
        assert_eq!(event.next.map(|n| n.name).as_deref(), Some("Dark Reign"));
        assert_eq!(
            event.previous.map(|p| p.name).as_deref(),
            Some("Secret War")
        );
    }
}
