//! Input handling for the TUI.
//!
//! Routes keyboard input to the list, filter-entry, or detail handler
//! based on current mode. Filter keystrokes re-apply the title filter
//! immediately; the projection is in-memory, so there is nothing to
//! debounce.

use crate::app::{App, AppEvent, View};
use crate::util::validate_url_for_open;
use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use super::helpers::dispatch_load;
use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if app.filter_mode {
        return handle_filter_input(app, code);
    }

    match app.view {
        View::Browse => handle_browse_input(app, code, event_tx),
        View::Detail => handle_detail_input(app, code),
    }
}

/// Handle input in the headline list.
fn handle_browse_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            // Scrolling into the tail of the list requests the next page,
            // like an end-reached callback in a scrolling list view
            if app.nav_down() {
                dispatch_load(app, event_tx);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected = app.feed.visible_len().saturating_sub(1);
        }
        KeyCode::Char('n') | KeyCode::Char(' ') => dispatch_load(app, event_tx),
        KeyCode::Char('/') => {
            app.filter_mode = true;
            app.filter_input = app.feed.active_query().to_string();
        }
        KeyCode::Char('o') => open_selected(app),
        KeyCode::Enter => app.enter_detail(),
        _ => {}
    }
    Action::Continue
}

/// Handle input while typing a filter query.
///
/// Every edit re-applies the filter so the list narrows live. ENTER keeps
/// the query active; ESC clears it and restores the full list.
fn handle_filter_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc => {
            app.filter_mode = false;
            app.filter_input.clear();
            app.feed.apply_filter("");
            app.clamp_selection();
        }
        KeyCode::Enter => {
            app.filter_mode = false;
        }
        KeyCode::Backspace => {
            app.filter_input.pop();
            app.feed.apply_filter(&app.filter_input);
            app.clamp_selection();
        }
        KeyCode::Char(c) => {
            app.filter_input.push(c);
            app.feed.apply_filter(&app.filter_input);
            app.clamp_selection();
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input in the single-article detail view.
fn handle_detail_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter => app.exit_detail(),
        KeyCode::Char('o') => open_selected(app),
        _ => {}
    }
    Action::Continue
}

/// Hand the selected article's URL to the platform browser.
///
/// URLs that fail validation are not user-visible failures: the handoff is
/// skipped and the reason goes to the debug log only.
fn open_selected(app: &mut App) {
    let Some(article) = app.selected_article() else {
        return;
    };
    let url = article.url.clone();

    if let Err(reason) = validate_url_for_open(&url) {
        tracing::debug!(url = %url, reason = %reason, "Don't know how to open URL");
        return;
    }
    if let Err(e) = open::that(&url) {
        app.set_status(format!("Failed to open browser: {}", e));
    } else {
        app.set_status("Opening in browser...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Article, ArticleSource, HeadlinesClient, LoadGate};
    use secrecy::SecretString;

    fn app_with_titles(titles: &[&str]) -> App {
        let client =
            HeadlinesClient::new("https://newsapi.org", "us", SecretString::from("k")).unwrap();
        let mut app = App::new(client);
        let LoadGate::Dispatch { generation, .. } = app.feed.begin_load() else {
            panic!("gate rejected initial load");
        };
        let page = titles
            .iter()
            .map(|t| Article {
                source: ArticleSource::default(),
                title: t.to_string(),
                content: None,
                url: format!("https://example.com/{}", t),
                url_to_image: None,
                published_at: None,
            })
            .collect();
        app.feed.complete_load(generation, Ok(page));
        app
    }

    #[tokio::test]
    async fn test_slash_enters_filter_mode() {
        let mut app = app_with_titles(&["A"]);
        let (tx, _rx) = mpsc::channel(1);
        handle_input(&mut app, KeyCode::Char('/'), &tx);
        assert!(app.filter_mode);
    }

    #[tokio::test]
    async fn test_filter_typing_narrows_list_live() {
        let mut app = app_with_titles(&["Rust news", "Other"]);
        app.filter_mode = true;
        let (tx, _rx) = mpsc::channel(1);

        for c in "rust".chars() {
            handle_input(&mut app, KeyCode::Char(c), &tx);
        }
        assert_eq!(app.feed.visible_len(), 1);

        // ENTER confirms and keeps the query active
        handle_input(&mut app, KeyCode::Enter, &tx);
        assert!(!app.filter_mode);
        assert_eq!(app.feed.active_query(), "rust");
    }

    #[tokio::test]
    async fn test_filter_escape_restores_full_list() {
        let mut app = app_with_titles(&["Rust news", "Other"]);
        app.filter_mode = true;
        app.filter_input = "rust".to_string();
        app.feed.apply_filter("rust");
        let (tx, _rx) = mpsc::channel(1);

        handle_input(&mut app, KeyCode::Esc, &tx);
        assert!(!app.filter_mode);
        assert_eq!(app.feed.visible_len(), 2);
        assert_eq!(app.feed.active_query(), "");
    }

    #[tokio::test]
    async fn test_enter_opens_detail_and_esc_returns() {
        let mut app = app_with_titles(&["A"]);
        let (tx, _rx) = mpsc::channel(1);

        handle_input(&mut app, KeyCode::Enter, &tx);
        assert_eq!(app.view, View::Detail);

        handle_input(&mut app, KeyCode::Esc, &tx);
        assert_eq!(app.view, View::Browse);
    }

    #[tokio::test]
    async fn test_quit_from_browse() {
        let mut app = app_with_titles(&[]);
        let (tx, _rx) = mpsc::channel(1);
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('q'), &tx),
            Action::Quit
        ));
    }
}
