//! Per-family filter structs
//!
//! One struct per resource family, carrying the union of the filters any
//! endpoint of that family accepts. Every field is optional and the empty
//! struct encodes to nothing. Which parameters actually survive for a
//! given endpoint is decided later against that endpoint's allowed set.

use chrono::NaiveDate;

use crate::query::{
    ComicFormat, ComicSortBy, ComicType, CreatorSortBy, DateDescriptor, FilterSet, SeriesType,
    Sort, SortBy,
};

/// Filters for character listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFilters {
    /// Exact character name.
    pub name: Option<String>,
    /// Only characters modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only characters appearing in these comics.
    pub comics: Vec<i32>,
    /// Only characters appearing in these series.
    pub series: Vec<i32>,
    /// Only characters appearing in these events.
    pub events: Vec<i32>,
    /// Only characters appearing in these stories.
    pub stories: Vec<i32>,
    /// Result ordering.
    pub sort: Option<Sort<SortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl CharacterFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_str("name", self.name.as_deref());
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("comics", &self.comics);
        set.push_ids("series", &self.series);
        set.push_ids("events", &self.events);
        set.push_ids("stories", &self.stories);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

/// Filters for comic listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComicFilters {
    /// Publication format.
    pub format: Option<ComicFormat>,
    /// Issue or collection scope.
    pub format_type: Option<ComicType>,
    /// Exclude variant covers.
    pub no_variants: Option<bool>,
    /// Named release window.
    pub date_descriptor: Option<DateDescriptor>,
    /// Lower bound of the release date range; only emitted together with
    /// `to_date`.
    pub from_date: Option<NaiveDate>,
    /// Upper bound of the release date range; only emitted together with
    /// `from_date`.
    pub to_date: Option<NaiveDate>,
    /// Only comics available digitally.
    pub has_digital_issue: Option<bool>,
    /// Only comics modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only comics credited to these creators.
    pub creators: Vec<i32>,
    /// Only comics in these series.
    pub series: Vec<i32>,
    /// Only comics tied to these events.
    pub events: Vec<i32>,
    /// Only comics containing these stories.
    pub stories: Vec<i32>,
    /// Only comics where these characters also appear.
    pub shared_appearances: Vec<i32>,
    /// Only comics where these creators collaborated.
    pub collaborators: Vec<i32>,
    /// Result ordering.
    pub sort: Option<Sort<ComicSortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl ComicFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_str("format", self.format.map(ComicFormat::as_str));
        set.push_str("formatType", self.format_type.map(ComicType::as_str));
        set.push_flag("noVariants", self.no_variants);
        set.push_str(
            "dateDescriptor",
            self.date_descriptor.map(DateDescriptor::as_str),
        );
        set.push_date_range("dateRange", self.from_date, self.to_date);
        set.push_flag("hasDigitalIssue", self.has_digital_issue);
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("creators", &self.creators);
        set.push_ids("series", &self.series);
        set.push_ids("events", &self.events);
        set.push_ids("stories", &self.stories);
        set.push_ids("sharedAppearances", &self.shared_appearances);
        set.push_ids("collaborators", &self.collaborators);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

/// Filters for creator listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatorFilters {
    /// Exact first name.
    pub first_name: Option<String>,
    /// Exact middle name.
    pub middle_name: Option<String>,
    /// Exact last name.
    pub last_name: Option<String>,
    /// Exact name suffix.
    pub suffix: Option<String>,
    /// Only creators modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only creators credited in these comics.
    pub comics: Vec<i32>,
    /// Only creators credited in these series.
    pub series: Vec<i32>,
    /// Only creators credited in these events.
    pub events: Vec<i32>,
    /// Only creators credited in these stories.
    pub stories: Vec<i32>,
    /// Result ordering.
    pub sort: Option<Sort<CreatorSortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl CreatorFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_str("firstName", self.first_name.as_deref());
        set.push_str("middleName", self.middle_name.as_deref());
        set.push_str("lastName", self.last_name.as_deref());
        set.push_str("suffix", self.suffix.as_deref());
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("comics", &self.comics);
        set.push_ids("series", &self.series);
        set.push_ids("events", &self.events);
        set.push_ids("stories", &self.stories);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

/// Filters for event listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilters {
    /// Exact event name.
    pub name: Option<String>,
    /// Only events modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only events worked on by these creators.
    pub creators: Vec<i32>,
    /// Only events featuring these characters.
    pub characters: Vec<i32>,
    /// Only events spanning these series.
    pub series: Vec<i32>,
    /// Only events spanning these comics.
    pub comics: Vec<i32>,
    /// Only events containing these stories.
    pub stories: Vec<i32>,
    /// Result ordering.
    pub sort: Option<Sort<SortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl EventFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_str("name", self.name.as_deref());
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("creators", &self.creators);
        set.push_ids("characters", &self.characters);
        set.push_ids("series", &self.series);
        set.push_ids("comics", &self.comics);
        set.push_ids("stories", &self.stories);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

/// Filters for series listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesFilters {
    /// Series title.
    pub title: Option<String>,
    /// Only series modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only series containing these comics.
    pub comics: Vec<i32>,
    /// Only series containing these stories.
    pub stories: Vec<i32>,
    /// Only series spanning these events.
    pub events: Vec<i32>,
    /// Only series worked on by these creators.
    pub creators: Vec<i32>,
    /// Only series featuring these characters.
    pub characters: Vec<i32>,
    /// Publication frequency type.
    pub series_type: Option<SeriesType>,
    /// Only series issued in these formats.
    pub contains: Vec<ComicFormat>,
    /// Result ordering.
    pub sort: Option<Sort<SortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl SeriesFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_str("title", self.title.as_deref());
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("comics", &self.comics);
        set.push_ids("stories", &self.stories);
        set.push_ids("events", &self.events);
        set.push_ids("creators", &self.creators);
        set.push_ids("characters", &self.characters);
        set.push_str("seriesType", self.series_type.map(SeriesType::as_str));
        let formats: Vec<&'static str> =
            self.contains.iter().map(|f| f.as_str()).collect();
        set.push_tokens("contains", &formats);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

/// Filters for story listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryFilters {
    /// Only stories modified on or after this date.
    pub modified_since: Option<NaiveDate>,
    /// Only stories contained in these comics.
    pub comics: Vec<i32>,
    /// Only stories contained in these series.
    pub series: Vec<i32>,
    /// Only stories tied to these events.
    pub events: Vec<i32>,
    /// Only stories worked on by these creators.
    pub creators: Vec<i32>,
    /// Only stories featuring these characters.
    pub characters: Vec<i32>,
    /// Result ordering.
    pub sort: Option<Sort<SortBy>>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl StoryFilters {
    /// Builds the full filter set for this family.
    #[must_use]
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();
        set.push_date("modifiedSince", self.modified_since);
        set.push_ids("comics", &self.comics);
        set.push_ids("series", &self.series);
        set.push_ids("events", &self.events);
        set.push_ids("creators", &self.creators);
        set.push_ids("characters", &self.characters);
        set.push_sort(self.sort);
        set.push_int("limit", self.limit);
        set.push_int("offset", self.offset);
        set
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::Order;

    #[test]
    fn test_default_filters_encode_to_nothing() {
        assert_eq!(CharacterFilters::default().to_filter_set().encode(), "");
        assert_eq!(ComicFilters::default().to_filter_set().encode(), "");
        assert_eq!(CreatorFilters::default().to_filter_set().encode(), "");
        assert_eq!(EventFilters::default().to_filter_set().encode(), "");
        assert_eq!(SeriesFilters::default().to_filter_set().encode(), "");
        assert_eq!(StoryFilters::default().to_filter_set().encode(), "");
    }

    #[test]
    fn test_character_filters_encode_in_declaration_order() {
        let filters = CharacterFilters {
            name: Some("Hulk".into()),
            comics: vec![10, 20],
            sort: Some(Sort {
                by: SortBy::Modified,
                order: Order::Descending,
            }),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(
            filters.to_filter_set().encode(),
            "name=Hulk&comics=10%2C20&orderBy=-modified&limit=25"
        );
    }

    #[test]
    fn test_comic_filters_format_type_uses_comic_type_value() {
        let filters = ComicFilters {
            format: Some(ComicFormat::TradePaperback),
            format_type: Some(ComicType::Collection),
            ..Default::default()
        };
        assert_eq!(
            filters.to_filter_set().encode(),
            "format=trade+paperback&formatType=collection"
        );
    }

    #[test]
    fn test_series_contains_joins_format_tokens() {
        let filters = SeriesFilters {
            contains: vec![ComicFormat::Comic, ComicFormat::Hardcover],
            ..Default::default()
        };
        assert_eq!(
            filters.to_filter_set().encode(),
            "contains=comic%2Chardcover"
        );
    }
}
