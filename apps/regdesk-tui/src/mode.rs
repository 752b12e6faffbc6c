//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Board navigation (default)
    #[default]
    Normal,
    /// Command entry (activated with :)
    Command,
    /// Global search input (Ctrl+K)
    Search,
    /// Carrying a regulation towards another column (activated with d)
    Drag,
    /// Typing the note for a pending move
    Note,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Command => write!(f, "COMMAND"),
            Mode::Search => write!(f, "SEARCH"),
            Mode::Drag => write!(f, "DRAG"),
            Mode::Note => write!(f, "NOTE"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Command => "CMD",
            Mode::Search => "SRC",
            Mode::Drag => "DRG",
            Mode::Note => "NTE",
        }
    }

    /// Whether keystrokes go into a text buffer.
    pub fn takes_text(&self) -> bool {
        matches!(self, Mode::Command | Mode::Search | Mode::Note)
    }
}
