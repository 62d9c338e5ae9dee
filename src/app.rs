//! Central application state.
//!
//! `App` owns the feed controller, the HTTP client, and the UI cursor.
//! Background fetches report back through [`AppEvent`] on a tokio mpsc
//! channel; the event loop is the only mutator of this struct, so the
//! presentation layer always reads a consistent snapshot per frame.

use crate::feed::{Article, FeedController, FetchError, HeadlinesClient};
use std::borrow::Cow;
use tokio::time::Instant;

/// Selection rows from the list end at which the next page is requested,
/// mirroring an end-reached threshold in a scrolling list.
const LOAD_MORE_THRESHOLD: usize = 3;

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse, // Scrollable headline list
    Detail, // Single article: source, timestamp, content, link
}

/// Events from background tasks
pub enum AppEvent {
    /// A dispatched page fetch finished (success or failure).
    ///
    /// `generation` is the controller generation at dispatch time; the
    /// controller drops completions whose generation no longer matches.
    PageLoaded {
        generation: u64,
        result: Result<Vec<Article>, FetchError>,
    },
}

/// Central application state
pub struct App {
    pub feed: FeedController,
    pub client: HeadlinesClient,

    // UI state
    pub view: View,
    pub selected: usize,

    // Filter entry
    pub filter_mode: bool,
    pub filter_input: String,

    /// Status message with expiry - Cow avoids allocation for static literals
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,
}

impl App {
    pub fn new(client: HeadlinesClient) -> Self {
        Self {
            feed: FeedController::new(),
            client,
            view: View::Browse,
            selected: 0,
            filter_mode: false,
            filter_input: String::new(),
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Currently selected article under the active filter (bounds-checked)
    pub fn selected_article(&self) -> Option<&Article> {
        self.feed.visible_get(self.selected)
    }

    /// Clamp the selection after the visible list changed size.
    pub fn clamp_selection(&mut self) {
        self.selected = if self.feed.visible_len() == 0 {
            0
        } else {
            self.selected.min(self.feed.visible_len() - 1)
        };
    }

    /// Navigate up in the headline list
    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Navigate down in the headline list.
    ///
    /// Returns true when the selection has moved into the trailing rows of
    /// the visible list, which is the cue to request the next page.
    pub fn nav_down(&mut self) -> bool {
        let len = self.feed.visible_len();
        if len > 0 {
            self.selected = self.selected.saturating_add(1).min(len - 1);
        }
        self.near_list_end()
    }

    fn near_list_end(&self) -> bool {
        let len = self.feed.visible_len();
        len == 0 || len - self.selected.min(len - 1) <= LOAD_MORE_THRESHOLD
    }

    /// Enter the detail view for the selected article.
    pub fn enter_detail(&mut self) {
        if self.selected_article().is_some() {
            self.view = View::Detail;
        }
    }

    /// Exit detail back to the list.
    pub fn exit_detail(&mut self) {
        self.view = View::Browse;
    }

    /// Set status message (auto-expires after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Article, ArticleSource};
    use secrecy::SecretString;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        let client =
            HeadlinesClient::new("https://newsapi.org", "us", SecretString::from("k")).unwrap();
        App::new(client)
    }

    fn article(title: &str) -> Article {
        Article {
            source: ArticleSource::default(),
            title: title.to_string(),
            content: None,
            url: format!("https://example.com/{}", title),
            url_to_image: None,
            published_at: None,
        }
    }

    fn app_with_articles(titles: &[&str]) -> App {
        let mut app = test_app();
        let gate = app.feed.begin_load();
        let crate::feed::LoadGate::Dispatch { generation, .. } = gate else {
            panic!("gate rejected initial load");
        };
        app.feed
            .complete_load(generation, Ok(titles.iter().map(|t| article(t)).collect()));
        app
    }

    #[test]
    fn test_nav_empty_list() {
        let mut app = test_app();
        app.nav_up();
        assert!(app.nav_down()); // Empty list always reads as near the end
        assert_eq!(app.selected, 0);
        assert!(app.selected_article().is_none());
    }

    #[test]
    fn test_nav_down_clamps_at_end() {
        let mut app = app_with_articles(&["A", "B"]);
        app.nav_down();
        app.nav_down();
        app.nav_down();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_nav_down_signals_near_end() {
        let mut app = app_with_articles(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        assert!(!app.nav_down()); // Row 1 of 8, far from the end
        app.selected = 4;
        assert!(app.nav_down()); // Row 5 of 8 is within the threshold
    }

    #[test]
    fn test_clamp_selection_after_filter_shrinks_list() {
        let mut app = app_with_articles(&["Alpha", "Beta", "Gamma"]);
        app.selected = 2;
        app.feed.apply_filter("alpha");
        app.clamp_selection();
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_article().unwrap().title, "Alpha");
    }

    #[test]
    fn test_enter_detail_requires_selection() {
        let mut app = test_app();
        app.enter_detail();
        assert_eq!(app.view, View::Browse);

        let mut app = app_with_articles(&["A"]);
        app.enter_detail();
        assert_eq!(app.view, View::Detail);
        app.exit_detail();
        assert_eq!(app.view, View::Browse);
    }

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // Still present at 2s

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none()); // Expired after 3s
    }
}
