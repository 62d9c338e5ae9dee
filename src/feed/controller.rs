//! The pagination/dedup/filter state machine behind the headline list.
//!
//! The controller owns all feed state and is only ever touched from the UI
//! event loop: loads are dispatched through [`FeedController::begin_load`]
//! and their results delivered back through [`FeedController::complete_load`]
//! as plain values, so no locking is involved anywhere.
//!
//! The in-flight flag is a true mutual-exclusion gate: a second load while
//! one is outstanding is rejected rather than issued, which closes the
//! duplicate-fetch race where two requests for the same cursor could land
//! in either order. Completions also carry a generation number so a result
//! that arrives after [`FeedController::reset`] is dropped instead of
//! resurrecting stale state.

use crate::feed::client::FetchError;
use crate::feed::model::{deduplicate, Article};

/// Outcome of asking the controller for the next page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadGate {
    /// Clear to fetch: request `page` and report back with `generation`.
    Dispatch { page: u32, generation: u64 },
    /// A fetch is already outstanding; the call is rejected.
    Busy,
    /// The source returned an empty page earlier; loading is over for good.
    Exhausted,
    /// A previous fetch failed; the error is sticky until the controller
    /// is torn down (no retry affordance by design).
    Failed,
}

/// All state for the headline feed.
///
/// `articles` is the full deduplicated fetch history in arrival order;
/// `visible` is a derived index projection of it under the active title
/// filter and is recomputed from the full sequence, never from itself.
pub struct FeedController {
    articles: Vec<Article>,
    visible: Vec<usize>,
    next_page: u32,
    query: String,
    in_flight: bool,
    failed: bool,
    end_of_data: bool,
    generation: u64,
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedController {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            visible: Vec::new(),
            next_page: 1,
            query: String::new(),
            in_flight: false,
            failed: false,
            end_of_data: false,
            generation: 0,
        }
    }

    /// Request permission to load the next page.
    ///
    /// On `Dispatch` the in-flight flag is set and the caller must
    /// eventually call [`complete_load`](Self::complete_load) with the
    /// returned generation. Every other outcome leaves state untouched, so
    /// calling this repeatedly once the feed is exhausted or failed is a
    /// no-op.
    pub fn begin_load(&mut self) -> LoadGate {
        if self.end_of_data {
            return LoadGate::Exhausted;
        }
        if self.failed {
            return LoadGate::Failed;
        }
        if self.in_flight {
            return LoadGate::Busy;
        }
        self.in_flight = true;
        LoadGate::Dispatch {
            page: self.next_page,
            generation: self.generation,
        }
    }

    /// Apply the result of a dispatched fetch.
    ///
    /// A non-empty page is merged through [`deduplicate`] and advances the
    /// cursor; an empty page marks the feed exhausted without merging; an
    /// error sets the sticky failure flag and leaves everything else as it
    /// was. The in-flight flag clears in all three cases.
    ///
    /// Completions whose generation does not match are from a fetch that
    /// outlived a [`reset`](Self::reset); they are discarded entirely,
    /// including the in-flight flag they would otherwise clear.
    pub fn complete_load(&mut self, generation: u64, result: Result<Vec<Article>, FetchError>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Dropping fetch completion from a torn-down controller state"
            );
            return;
        }
        self.in_flight = false;

        match result {
            Ok(incoming) if incoming.is_empty() => {
                tracing::info!(page = self.next_page, "Empty page, feed exhausted");
                self.end_of_data = true;
            }
            Ok(incoming) => {
                let received = incoming.len();
                self.articles = deduplicate(std::mem::take(&mut self.articles), incoming);
                tracing::debug!(
                    page = self.next_page,
                    received = received,
                    total = self.articles.len(),
                    "Merged headlines page"
                );
                self.next_page += 1;
                self.reproject();
            }
            Err(e) => {
                // All fetch errors collapse into one sticky flag; the
                // detail survives only in the log.
                tracing::warn!(page = self.next_page, error = %e, "Headline fetch failed");
                self.failed = true;
            }
        }
    }

    /// Set the active title filter and re-derive the visible projection.
    ///
    /// Matching is a case-insensitive substring test against each article's
    /// title, always computed from the full fetched sequence. An empty
    /// query shows everything; the underlying sequence is never mutated or
    /// discarded, so clearing the query restores the full list exactly.
    pub fn apply_filter(&mut self, query: &str) {
        self.query = query.to_string();
        self.reproject();
    }

    /// Tear down to the empty initial state.
    ///
    /// Bumps the generation so any fetch still in flight completes into
    /// the void instead of mutating the fresh state.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    fn reproject(&mut self) {
        if self.query.is_empty() {
            self.visible = (0..self.articles.len()).collect();
            return;
        }
        let needle = self.query.to_lowercase();
        self.visible = self
            .articles
            .iter()
            .enumerate()
            .filter(|(_, a)| a.title.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
    }

    // ------------------------------------------------------------------
    // Read-only view for the presentation layer
    // ------------------------------------------------------------------

    /// Articles currently visible under the active filter, in fetch order.
    pub fn visible_articles(&self) -> impl Iterator<Item = &Article> {
        self.visible.iter().map(|&i| &self.articles[i])
    }

    pub fn visible_get(&self, index: usize) -> Option<&Article> {
        self.visible.get(index).map(|&i| &self.articles[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Total deduplicated articles fetched so far, ignoring the filter.
    pub fn total_len(&self) -> usize {
        self.articles.len()
    }

    pub fn active_query(&self) -> &str {
        &self.query
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn is_exhausted(&self) -> bool {
        self.end_of_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::ArticleSource;
    use pretty_assertions::assert_eq;

    fn article(title: &str) -> Article {
        Article {
            source: ArticleSource {
                name: Some("Test Wire".to_string()),
            },
            title: title.to_string(),
            content: Some(format!("{} body", title)),
            url: format!("https://example.com/{}", title.to_lowercase()),
            url_to_image: None,
            published_at: None,
        }
    }

    /// Drive one full load through the gate, panicking if it is rejected.
    fn load(feed: &mut FeedController, result: Result<Vec<Article>, FetchError>) {
        match feed.begin_load() {
            LoadGate::Dispatch { generation, .. } => feed.complete_load(generation, result),
            gate => panic!("Expected Dispatch, got {:?}", gate),
        }
    }

    fn visible_titles(feed: &FeedController) -> Vec<&str> {
        feed.visible_articles().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_nonempty_page_merges_and_advances_cursor() {
        let mut feed = FeedController::new();
        assert_eq!(feed.next_page(), 1);

        load(&mut feed, Ok(vec![article("A"), article("B")]));

        assert_eq!(feed.next_page(), 2);
        assert_eq!(visible_titles(&feed), vec!["A", "B"]);
        assert!(!feed.is_loading());
        assert!(!feed.has_failed());
        assert!(!feed.is_exhausted());
    }

    #[test]
    fn test_pagination_terminates_on_empty_page() {
        let mut feed = FeedController::new();
        let pages = [
            vec![article("A")],
            vec![article("B")],
            vec![article("C")],
            Vec::new(),
        ];
        for page in pages {
            load(&mut feed, Ok(page));
        }

        // Cursor advanced exactly three times, then the empty page ended it
        assert_eq!(feed.next_page(), 4);
        assert!(feed.is_exhausted());

        // Further calls are a complete no-op
        assert_eq!(feed.begin_load(), LoadGate::Exhausted);
        assert_eq!(feed.next_page(), 4);
        assert_eq!(feed.total_len(), 3);
    }

    #[test]
    fn test_in_flight_gate_rejects_reentrant_load() {
        let mut feed = FeedController::new();
        let first = feed.begin_load();
        assert!(matches!(
            first,
            LoadGate::Dispatch { page: 1, generation: 0 }
        ));

        // Second call while outstanding is rejected and does not disturb
        // the cursor or dispatch a duplicate fetch
        assert_eq!(feed.begin_load(), LoadGate::Busy);
        assert_eq!(feed.next_page(), 1);
    }

    #[test]
    fn test_failure_sets_only_the_error_flag() {
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("A"), article("B")]));

        load(&mut feed, Err(FetchError::HttpStatus(500)));

        assert!(feed.has_failed());
        assert!(!feed.is_loading());
        assert!(!feed.is_exhausted());
        // Existing sequence and cursor unchanged
        assert_eq!(visible_titles(&feed), vec!["A", "B"]);
        assert_eq!(feed.next_page(), 2);

        // The error is sticky: no further loads are dispatched
        assert_eq!(feed.begin_load(), LoadGate::Failed);
    }

    #[test]
    fn test_filter_selects_case_insensitive_title_substring() {
        let mut feed = FeedController::new();
        load(
            &mut feed,
            Ok(vec![
                article("Rust 1.80 released"),
                article("Local elections"),
                article("Rustacean meetup"),
            ]),
        );

        feed.apply_filter("rust");
        assert_eq!(
            visible_titles(&feed),
            vec!["Rust 1.80 released", "Rustacean meetup"]
        );

        feed.apply_filter("RUST");
        assert_eq!(feed.visible_len(), 2);

        feed.apply_filter("no such headline");
        assert_eq!(feed.visible_len(), 0);
    }

    #[test]
    fn test_filter_is_nondestructive_across_page_loads() {
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("Alpha"), article("Beta")]));

        feed.apply_filter("alpha");
        assert_eq!(visible_titles(&feed), vec!["Alpha"]);

        // A page arriving while filtered is merged into the full sequence
        // and the active query re-applied to the result
        load(&mut feed, Ok(vec![article("Alphabet soup"), article("Gamma")]));
        assert_eq!(visible_titles(&feed), vec!["Alpha", "Alphabet soup"]);

        // Clearing the query restores everything, including the articles
        // fetched while the filter was active
        feed.apply_filter("");
        assert_eq!(
            visible_titles(&feed),
            vec!["Alpha", "Beta", "Alphabet soup", "Gamma"]
        );
    }

    #[test]
    fn test_filter_applied_while_load_outstanding() {
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("Rust ships"), article("Weather")]));

        let gate = feed.begin_load();
        let LoadGate::Dispatch { generation, .. } = gate else {
            panic!("Expected Dispatch, got {:?}", gate);
        };

        // Query changes while the fetch is still in flight
        feed.apply_filter("rust");
        assert!(feed.is_loading());
        assert_eq!(visible_titles(&feed), vec!["Rust ships"]);

        // The completion merges into the full sequence and projects the
        // result under the query stored mid-flight
        feed.complete_load(
            generation,
            Ok(vec![article("Rustacean meetup"), article("Sports")]),
        );
        assert_eq!(visible_titles(&feed), vec!["Rust ships", "Rustacean meetup"]);
        assert_eq!(feed.total_len(), 4);
    }

    #[test]
    fn test_empty_title_never_matches_nonempty_query() {
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article(""), article("Real headline")]));

        feed.apply_filter("head");
        assert_eq!(visible_titles(&feed), vec!["Real headline"]);

        // But the empty query still shows it
        feed.apply_filter("");
        assert_eq!(feed.visible_len(), 2);
    }

    #[test]
    fn test_duplicate_across_pages_is_dropped() {
        // page 1 = [A, B], page 2 = [B, C], page 3 = []
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("A"), article("B")]));
        load(&mut feed, Ok(vec![article("B"), article("C")]));
        load(&mut feed, Ok(Vec::new()));

        assert_eq!(visible_titles(&feed), vec!["A", "B", "C"]);
        assert_eq!(feed.next_page(), 3);
        assert!(feed.is_exhausted());
    }

    #[test]
    fn test_stale_completion_after_reset_is_dropped() {
        let mut feed = FeedController::new();
        let gate = feed.begin_load();
        let LoadGate::Dispatch { generation, .. } = gate else {
            panic!("Expected Dispatch, got {:?}", gate);
        };

        // Controller is torn down while the fetch is still in flight
        feed.reset();

        // The late completion must not touch the fresh state
        feed.complete_load(generation, Ok(vec![article("Ghost")]));
        assert_eq!(feed.total_len(), 0);
        assert_eq!(feed.next_page(), 1);
        assert!(!feed.is_exhausted());

        // And the fresh controller is still free to load normally
        assert!(matches!(feed.begin_load(), LoadGate::Dispatch { page: 1, .. }));
    }

    #[test]
    fn test_reset_clears_filter_and_flags() {
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("A")]));
        feed.apply_filter("a");
        load(&mut feed, Err(FetchError::Timeout));
        assert!(feed.has_failed());

        feed.reset();

        assert_eq!(feed.total_len(), 0);
        assert_eq!(feed.active_query(), "");
        assert!(!feed.has_failed());
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_all_duplicate_page_still_advances_cursor() {
        // A non-empty page of already-seen records is not end-of-data:
        // emptiness is judged on the raw response, not on surviving records
        let mut feed = FeedController::new();
        load(&mut feed, Ok(vec![article("A")]));
        load(&mut feed, Ok(vec![article("A")]));

        assert_eq!(feed.total_len(), 1);
        assert_eq!(feed.next_page(), 3);
        assert!(!feed.is_exhausted());
    }
}
