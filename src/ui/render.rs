//! Render functions for the TUI.
//!
//! Dispatches to the list or detail view and lays out the count header,
//! the article list, and the status bar.

use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{articles, detail, status};

/// Minimum terminal dimensions required for normal operation.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 6;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-size areas to prevent layout panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "Terminal too small (min {}x{})",
            MIN_WIDTH, MIN_HEIGHT
        ))
        .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    match app.view {
        View::Browse => render_browse(f, app),
        View::Detail => detail::render(f, app),
    }
}

/// Render the browse view: count header, headline list, status bar.
fn render_browse(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    articles::render(f, app, chunks[1]);
    status::render(f, app, chunks[2]);
}

/// Header row: article count plus the active filter, if any.
fn render_header(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled("Articles: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", app.feed.visible_len())),
    ];

    if !app.feed.active_query().is_empty() {
        spans.push(Span::raw(format!(" of {}", app.feed.total_len())));
        spans.push(Span::styled(
            format!("  filter: {}", app.feed.active_query()),
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
