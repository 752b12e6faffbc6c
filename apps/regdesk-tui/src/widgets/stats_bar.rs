//! One-line summary of the board

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use regdesk_core::{
    top_tags, CategoryDistribution, Regulation, RegulationStatus, StatusCounts, DEFAULT_TOP_TAGS,
};

use crate::views::status_color;

/// Status counts, category split and most used tags
pub struct StatsBar {
    status: StatusCounts,
    distribution: CategoryDistribution,
    tags: Vec<(String, usize)>,
}

impl StatsBar {
    pub fn new(regulations: &[Regulation]) -> Self {
        Self {
            status: StatusCounts::from_regulations(regulations),
            distribution: CategoryDistribution::from_regulations(regulations),
            tags: top_tags(regulations, DEFAULT_TOP_TAGS),
        }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for status in RegulationStatus::ALL {
            spans.push(Span::styled(
                format!("{} {}  ", status.label(), self.status.get(status)),
                Style::default().fg(status_color(status)),
            ));
        }
        spans.push(Span::raw(format!(
            "| Personal {}% Relevant {}% ",
            self.distribution.personal_percentage(),
            self.distribution.relevant_percentage()
        )));
        if !self.tags.is_empty() {
            let tags: Vec<String> = self
                .tags
                .iter()
                .map(|(tag, count)| format!("#{}({})", tag, count))
                .collect();
            spans.push(Span::styled(
                format!("| {}", tags.join(" ")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for StatsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
