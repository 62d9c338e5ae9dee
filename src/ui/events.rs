//! Background fetch completion processing.
//!
//! The fetch task itself never touches app state; its result arrives here
//! on the event loop and is applied through the controller, which drops
//! stale completions and collapses errors into the sticky failure flag.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::PageLoaded { generation, result } => {
            let before = app.feed.total_len();
            app.feed.complete_load(generation, result);

            if app.feed.has_failed() {
                app.set_status("Failed to load headlines");
            } else if app.feed.is_exhausted() {
                app.set_status("No more articles");
            } else {
                let added = app.feed.total_len().saturating_sub(before);
                tracing::debug!(added = added, "Applied headlines page");
            }

            // The visible list may have grown or (on reset races) shrunk
            app.clamp_selection();
        }
    }
}
