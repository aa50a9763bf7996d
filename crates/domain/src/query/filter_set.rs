//! Ordered filter parameters and their wire encoding

use chrono::NaiveDate;

use super::sort::{Sort, SortField};

/// Date rendering used everywhere a date crosses the wire.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// An insertion-ordered set of query parameters for a single API call.
///
/// Absent values never enter the set: an unset `Option` is absent, and an
/// empty id list is absent. Because parameters keep insertion order, the
/// same inputs always encode to the same fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    params: Vec<(&'static str, String)>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a parameter unconditionally.
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.params.push((name, value.into()));
    }

    /// Adds a string parameter when present.
    pub fn push_str(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Adds a boolean parameter when present, rendered as `true`/`false`.
    pub fn push_flag(&mut self, name: &'static str, value: Option<bool>) {
        if let Some(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// Adds an integer parameter when present.
    pub fn push_int(&mut self, name: &'static str, value: Option<u32>) {
        if let Some(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// Adds a comma-joined id list; empty lists are treated as absent.
    pub fn push_ids(&mut self, name: &'static str, ids: &[i32]) {
        if ids.is_empty() {
            return;
        }
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, joined);
    }

    /// Adds a comma-joined list of wire tokens; empty lists are absent.
    pub fn push_tokens(&mut self, name: &'static str, tokens: &[&'static str]) {
        if tokens.is_empty() {
            return;
        }
        self.push(name, tokens.join(","));
    }

    /// Adds an ISO-8601 date parameter when present.
    pub fn push_date(&mut self, name: &'static str, value: Option<NaiveDate>) {
        if let Some(value) = value {
            self.push(name, value.format(DATE_FORMAT).to_string());
        }
    }

    /// Adds a comma-joined ISO-8601 date pair, but only when both bounds
    /// are present. A single bound is silently dropped.
    pub fn push_date_range(
        &mut self,
        name: &'static str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) {
        if let (Some(from), Some(to)) = (from, to) {
            self.push(
                name,
                format!("{},{}", from.format(DATE_FORMAT), to.format(DATE_FORMAT)),
            );
        }
    }

    /// Adds the `orderBy` parameter when a sort is specified.
    ///
    /// Descending sorts prefix the field token with `-`; when `sort` is
    /// unset no parameter is emitted at all.
    pub fn push_sort<F: SortField>(&mut self, sort: Option<Sort<F>>) {
        if let Some(sort) = sort {
            self.push("orderBy", sort.to_query_value());
        }
    }

    /// Drops every parameter whose name is not in `allowed`.
    ///
    /// Endpoints accept historically uneven subsets of their family's
    /// filters; the surviving parameters keep their relative order.
    pub fn retain_allowed(&mut self, allowed: &[&str]) {
        self.params.retain(|(name, _)| allowed.contains(name));
    }

    /// Returns the parameter names currently in the set, in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(name, _)| *name)
    }

    /// Returns the number of parameters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encodes the set as a query-string fragment with no leading `?`/`&`.
    ///
    /// An empty set encodes to the empty string; no stray separators are
    /// ever produced.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::sort::{ComicSortBy, Sort};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_empty_set_encodes_to_empty_string() {
        let mut set = FilterSet::new();
        set.push_str("name", None);
        set.push_ids("comics", &[]);
        set.push_flag("noVariants", None);
        set.push_sort::<ComicSortBy>(None);
        assert!(set.is_empty());
        assert_eq!(set.encode(), "");
    }

    #[test]
    fn test_id_lists_join_with_commas() {
        let mut set = FilterSet::new();
        set.push_ids("series", &[1, 22, 333]);
        assert_eq!(set.encode(), "series=1%2C22%2C333");
    }

    #[test]
    fn test_encoding_is_deterministic_for_identical_input() {
        let build = || {
            let mut set = FilterSet::new();
            set.push_str("name", Some("Spider-Man"));
            set.push_ids("events", &[269]);
            set.push_int("limit", Some(5));
            set.encode()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_sort_direction_prefixes() {
        let mut asc = FilterSet::new();
        asc.push_sort(Some(Sort::ascending(ComicSortBy::FocDate)));
        assert_eq!(asc.encode(), "orderBy=focdate");

        let mut desc = FilterSet::new();
        desc.push_sort(Some(Sort::descending(ComicSortBy::FocDate)));
        assert_eq!(desc.encode(), "orderBy=-focdate");
    }

    #[test]
    fn test_date_range_requires_both_bounds() {
        let mut only_from = FilterSet::new();
        only_from.push_date_range("dateRange", date(2014, 1, 1), None);
        assert_eq!(only_from.encode(), "");

        let mut only_to = FilterSet::new();
        only_to.push_date_range("dateRange", None, date(2014, 6, 30));
        assert_eq!(only_to.encode(), "");

        let mut both = FilterSet::new();
        both.push_date_range("dateRange", date(2014, 1, 1), date(2014, 6, 30));
        assert_eq!(both.encode(), "dateRange=2014-01-01%2C2014-06-30");
    }

    #[test]
    fn test_retain_allowed_drops_disallowed_names() {
        let mut set = FilterSet::new();
        set.push_str("name", Some("Onslaught"));
        set.push_ids("characters", &[1009718]);
        set.push_int("limit", Some(10));
        set.retain_allowed(&["name", "limit"]);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["name", "limit"]);
    }

    #[test]
    fn test_zero_values_are_not_dropped() {
        let mut set = FilterSet::new();
        set.push_int("offset", Some(0));
        set.push_ids("comics", &[0]);
        assert_eq!(set.encode(), "offset=0&comics=0");
    }
}
