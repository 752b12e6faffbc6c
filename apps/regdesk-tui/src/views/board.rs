//! Three-column regulation board

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use regdesk_core::{Category, Regulation};

use super::status_color;
use crate::app::App;

/// Board view: one column per category
pub struct BoardView;

impl BoardView {
    pub fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for category in Category::ALL {
            self.render_column(frame, chunks[category.index()], app, category);
        }
    }

    fn render_column(&self, frame: &mut Frame, area: Rect, app: &App, category: Category) {
        let regulations = app.column(category);
        let focused = app.focused == category;
        let cursor = app.cursor(category);
        let dragged = app.drag.map(|d| d.id);

        let items: Vec<ListItem> = regulations
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let highlighted = focused && i == cursor;
                let lifted = dragged == Some(r.id);
                Self::item(r, app.store.is_selected(r.id), highlighted, lifted)
            })
            .collect();

        let mut title = format!(" {} ({}) ", category.label(), regulations.len());
        if let Some(status) = app.status_filters[category.index()] {
            title = format!(" {} ({}) [{}] ", category.label(), regulations.len(), status.label());
        }

        let is_drop_target = app.drag.is_some_and(|d| d.target == category);
        let border_style = if is_drop_target {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(list, area);
    }

    fn item(r: &Regulation, selected: bool, highlighted: bool, lifted: bool) -> ListItem<'static> {
        let checkbox = if selected { "[x] " } else { "[ ] " };
        let pin = if r.is_pinned { "^ " } else { "  " };

        let mut title_style = if r.is_relevant {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if lifted {
            title_style = title_style.fg(Color::Magenta).add_modifier(Modifier::ITALIC);
        }
        if highlighted {
            title_style = title_style.bg(Color::Blue).add_modifier(Modifier::BOLD);
        }

        let mut lines = vec![Line::from(vec![
            Span::styled(checkbox, Style::default().fg(Color::Yellow)),
            Span::styled(pin, Style::default().fg(Color::Yellow)),
            Span::styled(r.title.clone(), title_style),
        ])];
        lines.push(Line::from(vec![
            Span::raw("      "),
            Span::styled(r.status.label(), Style::default().fg(status_color(r.status))),
            Span::styled(
                if r.tags.is_empty() {
                    String::new()
                } else {
                    format!("  #{}", r.tags.join(" #"))
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        ListItem::new(lines)
    }
}
