//! Enumerated filter values and their wire tokens
//!
//! Where the API documents a multi-word phrase (e.g. `trade paperback`)
//! the token is that phrase; otherwise it is the lowercased variant name.

/// Publication format of a comic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicFormat {
    /// A standard comic issue.
    Comic,
    /// A magazine.
    Magazine,
    /// A trade paperback collection.
    TradePaperback,
    /// A hardcover collection.
    Hardcover,
    /// A digest.
    Digest,
    /// A graphic novel.
    GraphicNovel,
    /// A digital-first comic.
    DigitalComic,
    /// An infinite comic.
    InfiniteComic,
}

impl ComicFormat {
    /// The wire token for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comic => "comic",
            Self::Magazine => "magazine",
            Self::TradePaperback => "trade paperback",
            Self::Hardcover => "hardcover",
            Self::Digest => "digest",
            Self::GraphicNovel => "graphic novel",
            Self::DigitalComic => "digital comic",
            Self::InfiniteComic => "infinite comic",
        }
    }
}

/// Whether a comic listing targets single issues or collected editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicType {
    /// Single issues.
    Comic,
    /// Collected editions.
    Collection,
}

impl ComicType {
    /// The wire token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comic => "comic",
            Self::Collection => "collection",
        }
    }
}

/// Named release windows for comic date filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDescriptor {
    /// Released last week.
    LastWeek,
    /// Released this week.
    ThisWeek,
    /// Releasing next week.
    NextWeek,
    /// Released this month.
    ThisMonth,
}

impl DateDescriptor {
    /// The wire token for this window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastWeek => "lastweek",
            Self::ThisWeek => "thisweek",
            Self::NextWeek => "nextweek",
            Self::ThisMonth => "thismonth",
        }
    }
}

/// Publication frequency type of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    /// A collection series.
    Collection,
    /// A one-shot.
    OneShot,
    /// A limited series.
    Limited,
    /// An ongoing series.
    Ongoing,
}

impl SeriesType {
    /// The wire token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::OneShot => "one shot",
            Self::Limited => "limited",
            Self::Ongoing => "ongoing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_tokens_use_documented_spelling() {
        assert_eq!(ComicFormat::TradePaperback.as_str(), "trade paperback");
        assert_eq!(ComicFormat::GraphicNovel.as_str(), "graphic novel");
        assert_eq!(SeriesType::OneShot.as_str(), "one shot");
    }

    #[test]
    fn test_single_word_tokens_are_lowercased_names() {
        assert_eq!(ComicFormat::Hardcover.as_str(), "hardcover");
        assert_eq!(DateDescriptor::ThisMonth.as_str(), "thismonth");
        assert_eq!(ComicType::Collection.as_str(), "collection");
    }
}
