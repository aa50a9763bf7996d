//! Sort specifications
//!
//! Each resource family orders by its own field set; the direction is
//! shared. A descending sort encodes as the field token prefixed with `-`.

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Lowest values first. The default when a direction is not given.
    #[default]
    Ascending,
    /// Highest values first.
    Descending,
}

/// A field a resource family can be ordered by.
///
/// The token is the lowercase wire form the API expects in `orderBy`.
pub trait SortField: Copy {
    /// The wire token for this field.
    fn token(self) -> &'static str;
}

/// A sort specification: a field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    /// The field to order by.
    pub by: F,
    /// The direction to order in.
    pub order: Order,
}

impl<F: SortField> Sort<F> {
    /// Creates an ascending sort.
    #[must_use]
    pub const fn ascending(by: F) -> Self {
        Self {
            by,
            order: Order::Ascending,
        }
    }

    /// Creates a descending sort.
    #[must_use]
    pub const fn descending(by: F) -> Self {
        Self {
            by,
            order: Order::Descending,
        }
    }

    /// Renders the `orderBy` value: the field token, `-`-prefixed when
    /// descending.
    #[must_use]
    pub fn to_query_value(self) -> String {
        match self.order {
            Order::Ascending => self.by.token().to_string(),
            Order::Descending => format!("-{}", self.by.token()),
        }
    }
}

/// Sort fields shared by characters, events, stories, and series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Order by display name or title.
    Name,
    /// Order by last modification time.
    Modified,
}

impl SortField for SortBy {
    fn token(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Modified => "modified",
        }
    }
}

/// Sort fields for comic listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicSortBy {
    /// Order by final order cutoff date.
    FocDate,
    /// Order by on-sale date.
    OnsaleDate,
    /// Order by title.
    Title,
    /// Order by issue number.
    IssueNumber,
    /// Order by last modification time.
    Modified,
}

impl SortField for ComicSortBy {
    fn token(self) -> &'static str {
        match self {
            Self::FocDate => "focdate",
            Self::OnsaleDate => "onsaledate",
            Self::Title => "title",
            Self::IssueNumber => "issuenumber",
            Self::Modified => "modified",
        }
    }
}

/// Sort fields for creator listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorSortBy {
    /// Order by last name.
    LastName,
    /// Order by first name.
    FirstName,
    /// Order by middle name.
    MiddleName,
    /// Order by name suffix.
    Suffix,
    /// Order by last modification time.
    Modified,
}

impl SortField for CreatorSortBy {
    fn token(self) -> &'static str {
        match self {
            Self::LastName => "lastname",
            Self::FirstName => "firstname",
            Self::MiddleName => "middlename",
            Self::Suffix => "suffix",
            Self::Modified => "modified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_has_no_prefix() {
        assert_eq!(Sort::ascending(SortBy::Name).to_query_value(), "name");
    }

    #[test]
    fn test_descending_prefixes_minus() {
        assert_eq!(
            Sort::descending(CreatorSortBy::LastName).to_query_value(),
            "-lastname"
        );
    }

    #[test]
    fn test_comic_tokens_are_lowercase() {
        assert_eq!(ComicSortBy::OnsaleDate.token(), "onsaledate");
        assert_eq!(ComicSortBy::IssueNumber.token(), "issuenumber");
    }
}
