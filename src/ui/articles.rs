//! Headline list widget.

use crate::app::App;
use crate::util::{display_width, truncate_to_width};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a publication timestamp as relative time ("5m", "3h", "2d"),
/// falling back to a date for anything older than a week.
pub fn format_relative_time(published: Option<DateTime<Utc>>) -> String {
    let Some(ts) = published else {
        return String::new();
    };

    let diff = Utc::now().signed_duration_since(ts).num_seconds();

    // Future dates (malformed records)
    if diff < 0 {
        return "now".to_string();
    }
    if diff < 3600 {
        return format!("{}m", diff / 60);
    }
    if diff < 86400 {
        return format!("{}h", diff / 3600);
    }
    if diff < 604800 {
        return format!("{}d", diff / 86400);
    }
    ts.format("%b %d").to_string()
}

/// Columns left for the title after reserving room for the source name and
/// timestamp on the right. Source names are measured in display columns,
/// not bytes, so wide-character outlets do not over-reserve.
fn title_budget(area_width: usize, source: &str, time_str: &str) -> usize {
    let reserved = display_width(source) + time_str.len() + 6;
    area_width.saturating_sub(reserved).max(10)
}

/// Render the headline list panel.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.feed.has_failed() && app.feed.total_len() == 0 {
        vec![ListItem::new(Span::styled(
            "Failed to load headlines - restart to retry",
            Style::default().fg(Color::Red),
        ))]
    } else if app.feed.is_loading() && app.feed.total_len() == 0 {
        vec![ListItem::new("Loading headlines...")]
    } else if app.feed.visible_len() == 0 {
        vec![ListItem::new("No articles")]
    } else {
        app.feed
            .visible_articles()
            .enumerate()
            .map(|(i, article)| {
                let time_str = format_relative_time(article.published_at);
                let source = article.source.name.as_deref().unwrap_or("");

                let title_style = if i == app.selected {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let max_title = title_budget(area.width as usize, source, &time_str);
                let title = truncate_to_width(&article.title, max_title).into_owned();

                let mut spans = vec![Span::styled(title, title_style)];
                if !source.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", source),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                if !time_str.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", time_str),
                        Style::default().fg(Color::DarkGray),
                    ));
                }

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let title = if app.filter_mode {
        format!("Filter: {}_", app.filter_input)
    } else {
        "Top Headlines".to_string()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}
