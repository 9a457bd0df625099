//! The search controller
//!
//! Owns the state of the search page and decides what a search action does to
//! it. Every search is tagged with a sequence number so that only the most
//! recently issued search ever gets to change what is displayed, no matter in
//! which order the responses arrive.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use super::api::parody_lookup::{MovieResult, ParodyLookup};
use super::api::ApiError;

/// Shown when a lookup failed without saying why
const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Please enter a movie title")]
    EmptyInput,
    #[error(transparent)]
    Lookup(#[from] ApiError),
}

/// A movie title that is ready to be sent out, never empty and always trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw_input: &str) -> Result<Self, SearchError> {
        let title = raw_input.trim();
        if title.is_empty() {
            Err(SearchError::EmptyInput)
        } else {
            Ok(Self(title.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Showing(MovieResult),
}

/// A search that has been accepted and now waits for its lookup to settle
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub sequence: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: UiState,
    latest_sequence: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    /// Sequence number of the most recent search action
    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence
    }

    /// Handles a search action on the raw content of the input field
    ///
    /// Returns the search to perform, or `None` when the input holds no title,
    /// in which case the state already reflects the error. Any search still in
    /// flight is superseded either way.
    pub fn submit_search(&mut self, raw_input: &str) -> Option<PendingSearch> {
        self.latest_sequence += 1;

        match SearchQuery::parse(raw_input) {
            Ok(query) => {
                info!("searching for '{}' (#{})", query, self.latest_sequence);
                self.state = UiState::Loading;
                Some(PendingSearch {
                    sequence: self.latest_sequence,
                    query,
                })
            }
            Err(err) => {
                self.state = UiState::Error(err.to_string());
                None
            }
        }
    }

    /// Applies the outcome of the search with the given sequence number
    ///
    /// Returns whether the outcome was applied. Outcomes of superseded searches
    /// are dropped.
    pub fn settle<E: fmt::Display>(
        &mut self,
        sequence: u64,
        outcome: Result<MovieResult, E>,
    ) -> bool {
        if sequence != self.latest_sequence || !self.is_loading() {
            debug!(
                "dropping outcome of search #{}, latest is #{}",
                sequence, self.latest_sequence
            );
            return false;
        }

        self.state = match outcome {
            Ok(movie) => {
                info!("search #{} found '{}'", sequence, movie.title);
                UiState::Showing(movie)
            }
            Err(err) => {
                let message = err.to_string();
                info!("search #{} failed: {}", sequence, message);
                if message.is_empty() {
                    UiState::Error(GENERIC_ERROR_MESSAGE.to_owned())
                } else {
                    UiState::Error(message)
                }
            }
        };

        true
    }
}

/// The displayable fields of a movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMovie<'a> {
    pub title: &'a str,
    pub year: &'a str,
    pub genre: &'a str,
    pub poster_url: &'a str,
    pub parody: &'a str,
}

impl<'a> RenderedMovie<'a> {
    pub fn new(movie: &'a MovieResult, placeholder_poster_url: &'a str) -> Self {
        Self {
            title: &movie.title,
            year: movie.year.as_deref().unwrap_or_default(),
            genre: movie.genres.as_deref().unwrap_or_default(),
            poster_url: movie.poster_url(placeholder_poster_url),
            parody: &movie.parody,
        }
    }
}

/// What the search page should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView<'a> {
    pub loader_visible: bool,
    pub error: Option<&'a str>,
    pub movie: Option<RenderedMovie<'a>>,
}

impl SearchView<'_> {
    pub fn results_visible(&self) -> bool {
        self.movie.is_some()
    }
}

pub fn render<'a>(state: &'a UiState, placeholder_poster_url: &'a str) -> SearchView<'a> {
    match state {
        UiState::Idle => SearchView {
            loader_visible: false,
            error: None,
            movie: None,
        },
        UiState::Loading => SearchView {
            loader_visible: true,
            error: None,
            movie: None,
        },
        UiState::Error(message) => SearchView {
            loader_visible: false,
            error: Some(message),
            movie: None,
        },
        UiState::Showing(movie) => SearchView {
            loader_visible: false,
            error: None,
            movie: Some(RenderedMovie::new(movie, placeholder_poster_url)),
        },
    }
}

/// Runs a single search to completion without any page state
pub async fn search_once(
    lookup: &ParodyLookup,
    raw_input: &str,
) -> Result<MovieResult, SearchError> {
    let query = SearchQuery::parse(raw_input)?;
    Ok(lookup.search(&query).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image+Available";

    fn movie(title: &str) -> MovieResult {
        MovieResult {
            title: title.to_owned(),
            year: Some("1999".to_owned()),
            genres: None,
            image_url: None,
            plot: "...".to_owned(),
            parody: "funny text".to_owned(),
        }
    }

    #[test]
    fn blank_input_is_rejected_without_a_search() {
        for input in ["", " ", "\t\n", "    \r\n  "] {
            let mut controller = SearchController::new();

            assert!(controller.submit_search(input).is_none());
            assert_eq!(
                controller.state(),
                &UiState::Error("Please enter a movie title".to_owned())
            );
            assert!(!controller.is_loading());
        }
    }

    #[test]
    fn search_carries_trimmed_title() {
        let mut controller = SearchController::new();

        let pending = controller.submit_search("  Blade Runner  ").unwrap();

        assert_eq!(pending.query.as_str(), "Blade Runner");
        assert_eq!(pending.sequence, 1);
        assert!(controller.is_loading());
    }

    #[test]
    fn loading_clears_previous_result_and_error() {
        let mut controller = SearchController::new();

        controller.submit_search("");
        assert!(matches!(controller.state(), UiState::Error(_)));
        controller.submit_search("Alien").unwrap();
        assert_eq!(controller.state(), &UiState::Loading);

        let pending = controller.submit_search("Alien").unwrap();
        controller.settle::<ApiError>(pending.sequence, Ok(movie("Alien")));
        assert!(matches!(controller.state(), UiState::Showing(_)));
        controller.submit_search("Aliens").unwrap();
        assert_eq!(controller.state(), &UiState::Loading);
    }

    #[test]
    fn loader_is_visible_only_until_the_search_settles() {
        let mut controller = SearchController::new();
        assert!(!render(controller.state(), PLACEHOLDER).loader_visible);

        let pending = controller.submit_search("Heat").unwrap();
        assert!(render(controller.state(), PLACEHOLDER).loader_visible);

        assert!(controller.settle(pending.sequence, Err(ApiError::NotFound)));
        let view = render(controller.state(), PLACEHOLDER);
        assert!(!view.loader_visible);
        assert_eq!(view.error, Some("Could not find movie plot"));
        assert!(!view.results_visible());
    }

    #[test]
    fn service_error_message_is_shown() {
        let mut controller = SearchController::new();
        let pending = controller.submit_search("Nothing").unwrap();

        controller.settle(
            pending.sequence,
            Err(ApiError::Service {
                status: 404,
                message: "not found".to_owned(),
            }),
        );

        assert_eq!(controller.state(), &UiState::Error("not found".to_owned()));
    }

    #[test]
    fn empty_error_message_gets_generic_text() {
        let mut controller = SearchController::new();
        let pending = controller.submit_search("Brazil").unwrap();

        controller.settle(pending.sequence, Err(String::new()));

        assert_eq!(
            controller.state(),
            &UiState::Error(GENERIC_ERROR_MESSAGE.to_owned())
        );
    }

    #[test]
    fn found_movie_renders_with_placeholder_poster() {
        let mut controller = SearchController::new();
        let pending = controller.submit_search("X").unwrap();

        controller.settle::<ApiError>(pending.sequence, Ok(movie("X")));

        let view = render(controller.state(), PLACEHOLDER);
        assert!(!view.loader_visible);
        assert!(view.results_visible());
        assert_eq!(view.error, None);
        assert_eq!(
            view.movie,
            Some(RenderedMovie {
                title: "X",
                year: "1999",
                genre: "",
                poster_url: PLACEHOLDER,
                parody: "funny text",
            })
        );
    }

    #[test]
    fn only_the_latest_search_is_displayed() {
        let mut controller = SearchController::new();
        let first = controller.submit_search("Jaws").unwrap();
        let second = controller.submit_search("Jaws 2").unwrap();

        // the older search answers last, but it must not win
        assert!(controller.settle::<ApiError>(second.sequence, Ok(movie("Jaws 2"))));
        assert!(!controller.settle::<ApiError>(first.sequence, Ok(movie("Jaws"))));

        assert_eq!(controller.state(), &UiState::Showing(movie("Jaws 2")));
    }

    #[test]
    fn stale_outcome_keeps_loader_visible() {
        let mut controller = SearchController::new();
        let first = controller.submit_search("Up").unwrap();
        controller.submit_search("Cars").unwrap();

        assert!(!controller.settle(first.sequence, Err(ApiError::NotFound)));
        assert!(controller.is_loading());
    }

    #[test]
    fn blank_input_supersedes_search_in_flight() {
        let mut controller = SearchController::new();
        let pending = controller.submit_search("Tron").unwrap();
        controller.submit_search("   ");

        assert!(!controller.settle::<ApiError>(pending.sequence, Ok(movie("Tron"))));
        assert_eq!(
            controller.state(),
            &UiState::Error("Please enter a movie title".to_owned())
        );
    }

    #[test]
    fn outcome_is_applied_once() {
        let mut controller = SearchController::new();
        let pending = controller.submit_search("Big").unwrap();

        assert!(controller.settle::<ApiError>(pending.sequence, Ok(movie("Big"))));
        assert!(!controller.settle(pending.sequence, Err(ApiError::NotFound)));
        assert_eq!(controller.state(), &UiState::Showing(movie("Big")));
    }

    #[tokio::test]
    async fn search_once_rejects_blank_input_before_any_request() {
        // nothing listens here, a request would fail with a network error
        let lookup = ParodyLookup::new(reqwest::Client::new(), "http://127.0.0.1:9/api/search");

        assert!(matches!(
            search_once(&lookup, "  ").await,
            Err(SearchError::EmptyInput)
        ));
    }
}
