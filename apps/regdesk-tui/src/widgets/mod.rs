//! TUI widgets

mod mode_indicator;
mod stats_bar;

pub use mode_indicator::ModeIndicator;
pub use stats_bar::StatsBar;
