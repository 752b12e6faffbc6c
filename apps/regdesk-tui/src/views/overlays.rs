//! Modal overlays drawn over the board

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use regdesk_core::Tour;

use super::status_color;
use crate::app::{centered_rect, App};
use crate::keybindings::SHORTCUTS;

/// Ctrl+K search box with live results
pub struct SearchOverlay;

impl SearchOverlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let popup = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(popup);

        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(app.input.clone()),
        ]))
        .block(
            Block::default()
                .title(" Search regulations ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(input, chunks[0]);

        let hits = app.search_hits();
        let block = Block::default().borders(Borders::ALL);
        if hits.is_empty() {
            let hint = if app.input.trim().is_empty() {
                "Type to search titles, content and tags"
            } else {
                "No regulations found"
            };
            frame.render_widget(Paragraph::new(hint).block(block), chunks[1]);
            return;
        }

        let items: Vec<ListItem> = hits
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let style = if i == app.search_selected {
                    Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(r.title.clone(), style),
                    Span::styled(
                        format!("  {}", r.category.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("  {}", r.status.label()),
                        Style::default().fg(status_color(r.status)),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).block(block), chunks[1]);
    }
}

/// Keyboard shortcut reference (?)
pub struct ShortcutsOverlay;

impl ShortcutsOverlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = SHORTCUTS
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!("{:<20}", keys), key_style),
                    Span::raw(*description),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, popup);
    }
}

/// First-run walkthrough
pub struct TourOverlay;

impl TourOverlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tour: &Tour) {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup);

        let step = tour.current();
        let next_hint = if tour.is_last() { "Enter: finish" } else { "l/Enter: next" };
        let lines = vec![
            Line::from(Span::styled(
                step.title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(step.description),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}  h: back  Esc: skip", next_hint),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" Tour {}/{} ", tour.index() + 1, tour.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(paragraph, popup);
    }
}
