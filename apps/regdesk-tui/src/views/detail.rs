//! Detail panel for the highlighted regulation

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use regdesk_core::Regulation;

use super::status_color;

pub struct DetailView;

impl DetailView {
    pub fn render(&self, frame: &mut Frame, area: Rect, regulation: Option<&Regulation>) {
        let block = Block::default().title(" Details ").borders(Borders::ALL);

        let Some(r) = regulation else {
            let paragraph = Paragraph::new("No regulation in this column").block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                r.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Category: ", label),
                Span::raw(r.category.label()),
            ]),
            Line::from(vec![
                Span::styled("Status: ", label),
                Span::styled(r.status.label(), Style::default().fg(status_color(r.status))),
            ]),
            Line::from(vec![
                Span::styled("Pinned: ", label),
                Span::raw(if r.is_pinned { "yes" } else { "no" }),
                Span::styled("  Relevant: ", label),
                Span::raw(if r.is_relevant { "yes" } else { "no" }),
            ]),
            Line::from(vec![
                Span::styled("Tags: ", label),
                Span::raw(r.tags.join(", ")),
            ]),
            Line::from(vec![
                Span::styled("Updated: ", label),
                Span::raw(r.updated_at.format("%Y-%m-%d %H:%M").to_string()),
            ]),
        ];
        if let Some(note) = &r.move_notes {
            lines.push(Line::from(vec![
                Span::styled("Move note: ", label),
                Span::styled(note.clone(), Style::default().fg(Color::Yellow)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(r.content.clone()));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
