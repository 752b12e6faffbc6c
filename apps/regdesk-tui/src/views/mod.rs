//! TUI views

mod activity;
mod board;
mod detail;
mod overlays;

pub use activity::ActivityView;
pub use board::BoardView;
pub use detail::DetailView;
pub use overlays::{SearchOverlay, ShortcutsOverlay, TourOverlay};

use ratatui::style::Color;

use regdesk_core::RegulationStatus;

/// Display color for a regulation status
pub fn status_color(status: RegulationStatus) -> Color {
    match status {
        RegulationStatus::InEffect => Color::Green,
        RegulationStatus::InPlanning => Color::Yellow,
        RegulationStatus::PartiallyApplicable => Color::LightRed,
        RegulationStatus::OutOfEffect => Color::Red,
    }
}
