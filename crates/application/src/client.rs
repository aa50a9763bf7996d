//! Client facade
//!
//! One method per endpoint shape. Every method builds its family's
//! filter set, intersects it with the endpoint's allowed-parameter
//! entry, and runs the sign → dispatch → unwrap pipeline. Methods
//! return the unwrapped results array; page counters stay inside the
//! envelope layer.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use marvel_domain::envelope::unwrap_page;
use marvel_domain::filters::{
    CharacterFilters, ComicFilters, CreatorFilters, EventFilters, SeriesFilters, StoryFilters,
};
use marvel_domain::model::{Character, Comic, Creator, Event, Series, Story};
use marvel_domain::query::FilterSet;

use crate::auth::{ApiCredentials, SignatureProvider};
use crate::dispatcher::RequestDispatcher;
use crate::endpoints::{self, EndpointSchema};
use crate::error::ClientResult;
use crate::ports::{CancellationReceiver, Clock, HttpClient, MetricsSink};

/// Default production API root.
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";

/// Typed facade over the Marvel Comics API.
///
/// Calls are independent and stateless; the only shared resource is the
/// transport's connection pool, so a single client can serve concurrent
/// callers. Each call performs exactly one GET and returns exactly one
/// page of results.
pub struct MarvelClient {
    dispatcher: RequestDispatcher,
}

impl std::fmt::Debug for MarvelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarvelClient")
            .field("base_url", self.base_url())
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

impl MarvelClient {
    /// Creates a client from explicit collaborators.
    #[must_use]
    pub fn new(
        credentials: ApiCredentials,
        base_url: Url,
        http: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        let signer = SignatureProvider::new(credentials, clock);
        Self {
            dispatcher: RequestDispatcher::new(base_url, http, signer, metrics),
        }
    }

    /// The configured public API key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        self.dispatcher.signer().credentials().public_key()
    }

    /// The API root requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.dispatcher.base_url()
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        schema: EndpointSchema,
        mut filters: FilterSet,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<T>> {
        filters.retain_allowed(schema.allowed);
        let body = self
            .dispatcher
            .dispatch(path, &filters.encode(), cancel)
            .await?;
        let page = unwrap_page::<T>(&body)?;
        Ok(page.results)
    }

    async fn fetch_by_id<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<T>> {
        let body = self.dispatcher.dispatch(path, "", cancel).await?;
        let page = unwrap_page::<T>(&body)?;
        Ok(page.results)
    }

    // characters

    /// Lists characters matching the given filters.
    ///
    /// # Errors
    ///
    /// Resolves with a [`crate::ClientError`] on transport failure,
    /// cancellation, an unparseable body, or an API-reported error.
    pub async fn characters(
        &self,
        filters: &CharacterFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch(
            "characters",
            endpoints::CHARACTERS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Fetches a single character by id.
    ///
    /// The result array carries at most one element.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn character(
        &self,
        character_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch_by_id(&format!("characters/{character_id}"), cancel)
            .await
    }

    /// Lists comics featuring a character.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics_for_character(
        &self,
        character_id: i32,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch(
            &format!("characters/{character_id}/comics"),
            endpoints::CHARACTER_COMICS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists events a character appears in.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events_for_character(
        &self,
        character_id: i32,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch(
            &format!("characters/{character_id}/events"),
            endpoints::CHARACTER_EVENTS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists stories a character appears in.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories_for_character(
        &self,
        character_id: i32,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            &format!("characters/{character_id}/stories"),
            endpoints::CHARACTER_STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    // comics

    /// Lists comics matching the given filters.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics(
        &self,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch("comics", endpoints::COMICS, filters.to_filter_set(), cancel)
            .await
    }

    /// Fetches a single comic by id.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comic(
        &self,
        comic_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch_by_id(&format!("comics/{comic_id}"), cancel).await
    }

    /// Lists characters appearing in a comic.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn characters_for_comic(
        &self,
        comic_id: i32,
        filters: &CharacterFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch(
            &format!("comics/{comic_id}/characters"),
            endpoints::COMIC_CHARACTERS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists creators credited on a comic.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creators_for_comic(
        &self,
        comic_id: i32,
        filters: &CreatorFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch(
            &format!("comics/{comic_id}/creators"),
            endpoints::COMIC_CREATORS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists events a comic ties into.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events_for_comic(
        &self,
        comic_id: i32,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch(
            &format!("comics/{comic_id}/events"),
            endpoints::COMIC_EVENTS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists stories contained in a comic.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories_for_comic(
        &self,
        comic_id: i32,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            &format!("comics/{comic_id}/stories"),
            endpoints::COMIC_STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    // creators

    /// Lists creators matching the given filters.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creators(
        &self,
        filters: &CreatorFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch(
            "creators",
            endpoints::CREATORS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Fetches a single creator by id.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creator(
        &self,
        creator_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch_by_id(&format!("creators/{creator_id}"), cancel)
            .await
    }

    /// Lists comics a creator worked on.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics_for_creator(
        &self,
        creator_id: i32,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch(
            &format!("creators/{creator_id}/comics"),
            endpoints::CREATOR_COMICS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists events a creator worked on.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events_for_creator(
        &self,
        creator_id: i32,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch(
            &format!("creators/{creator_id}/events"),
            endpoints::CREATOR_EVENTS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists stories a creator worked on.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories_for_creator(
        &self,
        creator_id: i32,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            &format!("creators/{creator_id}/stories"),
            endpoints::CREATOR_STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    // events

    /// Lists events matching the given filters.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events(
        &self,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch("events", endpoints::EVENTS, filters.to_filter_set(), cancel)
            .await
    }

    /// Fetches a single event by id.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn event(
        &self,
        event_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch_by_id(&format!("events/{event_id}"), cancel).await
    }

    /// Lists characters appearing in an event.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn characters_for_event(
        &self,
        event_id: i32,
        filters: &CharacterFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch(
            &format!("events/{event_id}/characters"),
            endpoints::EVENT_CHARACTERS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists comics belonging to an event.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics_for_event(
        &self,
        event_id: i32,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch(
            &format!("events/{event_id}/comics"),
            endpoints::EVENT_COMICS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists creators credited across an event.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creators_for_event(
        &self,
        event_id: i32,
        filters: &CreatorFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch(
            &format!("events/{event_id}/creators"),
            endpoints::EVENT_CREATORS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists stories belonging to an event.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories_for_event(
        &self,
        event_id: i32,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            &format!("events/{event_id}/stories"),
            endpoints::EVENT_STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    // series

    /// Lists series matching the given filters.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn series(
        &self,
        filters: &SeriesFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Series>> {
        self.fetch("series", endpoints::SERIES, filters.to_filter_set(), cancel)
            .await
    }

    /// Fetches a single series by id.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn series_by_id(
        &self,
        series_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Series>> {
        self.fetch_by_id(&format!("series/{series_id}"), cancel).await
    }

    /// Lists characters appearing in a series.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn characters_for_series(
        &self,
        series_id: i32,
        filters: &CharacterFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch(
            &format!("series/{series_id}/characters"),
            endpoints::SERIES_CHARACTERS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists comics contained in a series.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics_for_series(
        &self,
        series_id: i32,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch(
            &format!("series/{series_id}/comics"),
            endpoints::SERIES_COMICS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists creators credited across a series.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creators_for_series(
        &self,
        series_id: i32,
        filters: &CreatorFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch(
            &format!("series/{series_id}/creators"),
            endpoints::SERIES_CREATORS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists events a series ties into.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events_for_series(
        &self,
        series_id: i32,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch(
            &format!("series/{series_id}/events"),
            endpoints::SERIES_EVENTS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists stories contained in a series.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories_for_series(
        &self,
        series_id: i32,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            &format!("series/{series_id}/stories"),
            endpoints::SERIES_STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    // stories

    /// Lists stories matching the given filters.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn stories(
        &self,
        filters: &StoryFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch(
            "stories",
            endpoints::STORIES,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Fetches a single story by id.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn story(
        &self,
        story_id: i32,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Story>> {
        self.fetch_by_id(&format!("stories/{story_id}"), cancel).await
    }

    /// Lists characters appearing in a story.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn characters_for_story(
        &self,
        story_id: i32,
        filters: &CharacterFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Character>> {
        self.fetch(
            &format!("stories/{story_id}/characters"),
            endpoints::STORY_CHARACTERS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists comics a story appears in.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn comics_for_story(
        &self,
        story_id: i32,
        filters: &ComicFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Comic>> {
        self.fetch(
            &format!("stories/{story_id}/comics"),
            endpoints::STORY_COMICS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists creators credited on a story.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn creators_for_story(
        &self,
        story_id: i32,
        filters: &CreatorFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Creator>> {
        self.fetch(
            &format!("stories/{story_id}/creators"),
            endpoints::STORY_CREATORS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }

    /// Lists events a story ties into.
    ///
    /// # Errors
    ///
    /// See [`characters`](Self::characters).
    pub async fn events_for_story(
        &self,
        story_id: i32,
        filters: &EventFilters,
        cancel: Option<&CancellationReceiver>,
    ) -> ClientResult<Vec<Event>> {
        self.fetch(
            &format!("stories/{story_id}/events"),
            endpoints::STORY_EVENTS,
            filters.to_filter_set(),
            cancel,
        )
        .await
    }
}
