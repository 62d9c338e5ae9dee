//! Shared helpers for dispatching page fetches.

use crate::app::{App, AppEvent};
use crate::feed::LoadGate;
use tokio::sync::mpsc;

/// Ask the controller's gate for the next page and, if it dispatches,
/// spawn the fetch as a background task.
///
/// The gate guarantees at most one outstanding fetch, so calling this on
/// every scroll-near-end event is safe; rejected calls do nothing. The
/// completion is delivered back to the event loop as
/// [`AppEvent::PageLoaded`] together with the dispatch generation.
pub(super) fn dispatch_load(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    match app.feed.begin_load() {
        LoadGate::Dispatch { page, generation } => {
            let client = app.client.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_page(page).await;
                // Receiver gone means the app is shutting down
                let _ = tx.send(AppEvent::PageLoaded { generation, result }).await;
            });
        }
        LoadGate::Busy => {
            tracing::debug!("Load request rejected, fetch already in flight");
        }
        LoadGate::Exhausted | LoadGate::Failed => {}
    }
}
