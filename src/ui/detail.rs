//! Single-article detail view: source, publication time, content excerpt,
//! and the external link.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::articles::format_relative_time;

pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let Some(article) = app.selected_article() else {
        // Selection vanished under us (filter change); fall back to a hint
        let msg = Paragraph::new("Article no longer available - press ESC");
        f.render_widget(msg, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Source ", Style::default().fg(Color::DarkGray)),
            Span::raw(article.source.name.clone().unwrap_or_default()),
            Span::styled("  Published ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_relative_time(article.published_at)),
        ]),
        Line::default(),
    ];

    match &article.content {
        Some(content) if !content.is_empty() => lines.push(Line::from(content.clone())),
        _ => lines.push(Line::from(Span::styled(
            "(no content excerpt)",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Link ", Style::default().fg(Color::DarkGray)),
        Span::styled(article.url.clone(), Style::default().fg(Color::Blue)),
    ]));

    let block = Block::default().borders(Borders::ALL).title("Article");
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);

    render_footer(f, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    if area.height < 2 {
        return;
    }
    let footer = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let hints = Paragraph::new(" [o]pen in browser [b/ESC]back [q]uit")
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(hints, footer);
}
