//! Per-endpoint allowed-filter table
//!
//! The API accepts historically uneven filter subsets across endpoints
//! that nominally query the same family (`events for creator` takes a
//! `characters` filter, `events for character` does not). Each facade
//! method builds its family's full filter set and then intersects it
//! with the endpoint's entry here. Identifiers ride in the path and are
//! never duplicated into the query. `orderBy`, `limit`, and `offset` are
//! accepted everywhere.

/// The query parameters one endpoint shape accepts.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSchema {
    /// Accepted parameter names, in no particular order.
    pub allowed: &'static [&'static str],
}

/// `characters`
pub const CHARACTERS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "comics",
        "series",
        "events",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `comics/{id}/characters`
pub const COMIC_CHARACTERS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "series",
        "events",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `events/{id}/characters`
pub const EVENT_CHARACTERS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "series",
        "comics",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `series/{id}/characters`
pub const SERIES_CHARACTERS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "comics",
        "events",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `stories/{id}/characters`
pub const STORY_CHARACTERS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "series",
        "events",
        "comics",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `comics`
pub const COMICS: EndpointSchema = EndpointSchema {
    allowed: &[
        "format",
        "formatType",
        "noVariants",
        "dateDescriptor",
        "dateRange",
        "hasDigitalIssue",
        "modifiedSince",
        "creators",
        "series",
        "events",
        "stories",
        "sharedAppearances",
        "collaborators",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `characters/{id}/comics`
pub const CHARACTER_COMICS: EndpointSchema = COMICS;

/// `events/{id}/comics`
pub const EVENT_COMICS: EndpointSchema = COMICS;

/// `creators/{id}/comics`
pub const CREATOR_COMICS: EndpointSchema = EndpointSchema {
    allowed: &[
        "format",
        "formatType",
        "noVariants",
        "dateDescriptor",
        "dateRange",
        "hasDigitalIssue",
        "modifiedSince",
        "series",
        "events",
        "stories",
        "sharedAppearances",
        "collaborators",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `series/{id}/comics`
pub const SERIES_COMICS: EndpointSchema = EndpointSchema {
    allowed: &[
        "format",
        "formatType",
        "noVariants",
        "dateDescriptor",
        "dateRange",
        "hasDigitalIssue",
        "modifiedSince",
        "creators",
        "events",
        "stories",
        "sharedAppearances",
        "collaborators",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `stories/{id}/comics`
pub const STORY_COMICS: EndpointSchema = EndpointSchema {
    allowed: &[
        "format",
        "formatType",
        "noVariants",
        "dateDescriptor",
        "dateRange",
        "hasDigitalIssue",
        "modifiedSince",
        "creators",
        "series",
        "events",
        "sharedAppearances",
        "collaborators",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `creators`
pub const CREATORS: EndpointSchema = EndpointSchema {
    allowed: &[
        "firstName",
        "middleName",
        "lastName",
        "suffix",
        "modifiedSince",
        "comics",
        "series",
        "events",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `comics/{id}/creators`
pub const COMIC_CREATORS: EndpointSchema = EndpointSchema {
    allowed: &[
        "firstName",
        "middleName",
        "lastName",
        "suffix",
        "modifiedSince",
        "comics",
        "series",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `events/{id}/creators`
pub const EVENT_CREATORS: EndpointSchema = COMIC_CREATORS;

/// `series/{id}/creators`
pub const SERIES_CREATORS: EndpointSchema = EndpointSchema {
    allowed: &[
        "firstName",
        "middleName",
        "lastName",
        "suffix",
        "modifiedSince",
        "comics",
        "events",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `stories/{id}/creators`
pub const STORY_CREATORS: EndpointSchema = EndpointSchema {
    allowed: &[
        "firstName",
        "middleName",
        "lastName",
        "suffix",
        "modifiedSince",
        "comics",
        "series",
        "events",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `events`
pub const EVENTS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "creators",
        "characters",
        "series",
        "comics",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `characters/{id}/events`
pub const CHARACTER_EVENTS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "creators",
        "series",
        "comics",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `comics/{id}/events`
pub const COMIC_EVENTS: EndpointSchema = CHARACTER_EVENTS;

/// `creators/{id}/events`
pub const CREATOR_EVENTS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "characters",
        "series",
        "comics",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `series/{id}/events`
pub const SERIES_EVENTS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "creators",
        "characters",
        "comics",
        "stories",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `stories/{id}/events`
pub const STORY_EVENTS: EndpointSchema = EndpointSchema {
    allowed: &[
        "name",
        "modifiedSince",
        "creators",
        "series",
        "comics",
        "characters",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `series`
pub const SERIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "title",
        "modifiedSince",
        "comics",
        "stories",
        "events",
        "creators",
        "characters",
        "seriesType",
        "contains",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `stories`
pub const STORIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "modifiedSince",
        "comics",
        "series",
        "events",
        "creators",
        "characters",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `characters/{id}/stories`
pub const CHARACTER_STORIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "modifiedSince",
        "creators",
        "series",
        "comics",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `comics/{id}/stories`
pub const COMIC_STORIES: EndpointSchema = EndpointSchema {
    allowed: &["modifiedSince", "creators", "series", "orderBy", "limit", "offset"],
};

/// `creators/{id}/stories`
pub const CREATOR_STORIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "modifiedSince",
        "comics",
        "series",
        "events",
        "characters",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `events/{id}/stories`
pub const EVENT_STORIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "modifiedSince",
        "creators",
        "series",
        "comics",
        "characters",
        "orderBy",
        "limit",
        "offset",
    ],
};

/// `series/{id}/stories`
pub const SERIES_STORIES: EndpointSchema = EndpointSchema {
    allowed: &[
        "modifiedSince",
        "creators",
        "characters",
        "comics",
        "events",
        "orderBy",
        "limit",
        "offset",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_subsets_differ_from_their_list_endpoint() {
        assert!(EVENTS.allowed.contains(&"characters"));
        assert!(!CHARACTER_EVENTS.allowed.contains(&"characters"));
        assert!(CREATOR_EVENTS.allowed.contains(&"characters"));
        assert!(!CREATOR_EVENTS.allowed.contains(&"creators"));
    }

    #[test]
    fn test_paging_and_ordering_are_always_allowed() {
        for schema in [
            CHARACTERS,
            COMICS,
            CREATORS,
            EVENTS,
            SERIES,
            STORIES,
            COMIC_STORIES,
            STORY_CREATORS,
        ] {
            assert!(schema.allowed.contains(&"orderBy"));
            assert!(schema.allowed.contains(&"limit"));
            assert!(schema.allowed.contains(&"offset"));
        }
    }
}
