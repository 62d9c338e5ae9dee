use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static hint strings
    let text: Cow<'_, str> = if app.feed.has_failed() {
        Cow::Borrowed("Headline fetch failed - restart to retry")
    } else if app.feed.is_loading() {
        Cow::Owned(format!("Loading page {}...", app.feed.next_page()))
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.feed.is_exhausted() {
        Cow::Borrowed("No more articles")
    } else if app.filter_mode {
        Cow::Borrowed("Type to filter | ESC clear | ENTER confirm")
    } else {
        Cow::Borrowed("[j/k]scroll [n]load more [/]filter [o]pen [Enter]detail [q]uit")
    };

    let style = if app.feed.has_failed() {
        Style::default().bg(Color::Red).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
