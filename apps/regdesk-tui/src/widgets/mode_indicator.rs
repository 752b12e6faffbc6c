//! Mode indicator widget for the status bar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// Displays the current interaction mode as a colored badge:
/// - Normal: Blue
/// - Command: Magenta
/// - Search: Green
/// - Drag / Note: Yellow
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Command => Color::Magenta,
            Mode::Search => Color::Green,
            Mode::Drag | Mode::Note => Color::Yellow,
        }
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.mode.short_code()),
            Style::default()
                .fg(Color::White)
                .bg(Self::mode_color(self.mode))
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors() {
        assert_eq!(ModeIndicator::mode_color(Mode::Normal), Color::Blue);
        assert_eq!(ModeIndicator::mode_color(Mode::Command), Color::Magenta);
        assert_eq!(ModeIndicator::mode_color(Mode::Drag), Color::Yellow);
    }

    #[test]
    fn test_span_text() {
        assert_eq!(ModeIndicator::new(Mode::Search).as_span().content, "[SRC]");
    }
}
