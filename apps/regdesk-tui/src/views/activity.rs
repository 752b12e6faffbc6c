//! Activity log panel, newest first

use chrono::{Local, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use regdesk_core::{activity_on, ActivityAction, RegulationStore};

pub struct ActivityView;

impl ActivityView {
    pub fn render(&self, frame: &mut Frame, area: Rect, store: &RegulationStore) {
        let log = store.activity_log();
        let today = activity_on(log, Utc::now().date_naive());

        let items: Vec<ListItem> = log
            .iter()
            .map(|entry| {
                let title = store
                    .get(entry.regulation_id)
                    .map(|r| r.title.clone())
                    .unwrap_or_else(|| entry.regulation_id.to_string());
                let local = entry.timestamp.with_timezone(&Local);
                let summary_style = Style::default().fg(action_color(entry.action));

                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            local.format("%H:%M:%S ").to_string(),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(entry.summary(), summary_style),
                    ]),
                    Line::from(format!("  {}", title)),
                ];
                if let Some(note) = &entry.note {
                    lines.push(Line::from(Span::styled(
                        format!("  \"{}\"", note),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let block = Block::default()
            .title(format!(" Activity ({} today) ", today))
            .borders(Borders::ALL);

        if items.is_empty() {
            frame.render_widget(Paragraph::new("No activity yet").block(block), area);
            return;
        }
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn action_color(action: ActivityAction) -> Color {
    match action {
        ActivityAction::Moved => Color::Cyan,
        ActivityAction::Pinned => Color::Yellow,
        ActivityAction::Marked => Color::Magenta,
        ActivityAction::Tagged => Color::Green,
        ActivityAction::Created | ActivityAction::Updated => Color::White,
    }
}
