//! Keybinding definitions

use crossterm::event::{KeyCode, KeyModifiers};

/// Shell-level action, recognized in any mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Open the global search (Ctrl+K / Cmd+K)
    OpenSearch,
    /// Show the shortcuts overlay (?)
    ShowShortcuts,
    /// Close whatever overlay is open (Esc)
    CloseOverlay,
}

/// Board action in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    EnterCommandMode,
    MoveUp,
    MoveDown,
    PrevColumn,
    NextColumn,
    /// Pick up the highlighted regulation to drop it on another column
    Grab,
    ToggleSelection,
    ClearSelection,
    TogglePin,
    ToggleRelevant,
    Undo,
    ToggleActivity,
    CycleStatusFilter,
    Export,
}

/// Get the shell-level action for a key, if any.
///
/// `?` only counts without Ctrl/Cmd held, so Ctrl+? stays free.
pub fn global_action(code: KeyCode, modifiers: KeyModifiers) -> Option<GlobalAction> {
    let command_key = modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    match code {
        KeyCode::Char('k') | KeyCode::Char('K') if command_key => Some(GlobalAction::OpenSearch),
        KeyCode::Char('?') if !command_key => Some(GlobalAction::ShowShortcuts),
        KeyCode::Esc => Some(GlobalAction::CloseOverlay),
        _ => None,
    }
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevColumn),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::NextColumn),
        KeyCode::Char('d') => Some(Action::Grab),
        KeyCode::Char(' ') => Some(Action::ToggleSelection),
        KeyCode::Char('c') => Some(Action::ClearSelection),
        KeyCode::Char('p') => Some(Action::TogglePin),
        KeyCode::Char('r') => Some(Action::ToggleRelevant),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('a') => Some(Action::ToggleActivity),
        KeyCode::Char('f') => Some(Action::CycleStatusFilter),
        KeyCode::Char('e') => Some(Action::Export),
        _ => None,
    }
}

/// Rows of the shortcuts overlay: (keys, description)
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+K / Cmd+K", "Open global search"),
    ("?", "Show keyboard shortcuts"),
    ("Esc", "Close dialogs"),
    ("h/l  j/k", "Change column / row"),
    ("d, h/l, Enter", "Drag regulation to another category"),
    ("Space", "Select for bulk move"),
    (":bulk <category>", "Move selected regulations, one note each"),
    ("p / r", "Toggle pin / relevance"),
    ("u", "Undo last action"),
    ("a", "Toggle activity log"),
    ("f", "Filter column by status"),
    ("e", "Export CSV"),
    ("q", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_opens_with_ctrl_or_cmd_k() {
        assert_eq!(
            global_action(KeyCode::Char('k'), KeyModifiers::CONTROL),
            Some(GlobalAction::OpenSearch)
        );
        assert_eq!(
            global_action(KeyCode::Char('k'), KeyModifiers::SUPER),
            Some(GlobalAction::OpenSearch)
        );
        assert_eq!(global_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    }

    #[test]
    fn question_mark_needs_no_command_modifier() {
        assert_eq!(
            global_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(GlobalAction::ShowShortcuts)
        );
        assert_eq!(global_action(KeyCode::Char('?'), KeyModifiers::CONTROL), None);
    }

    #[test]
    fn board_keys() {
        assert_eq!(normal_mode_action(KeyCode::Char('u')), Some(Action::Undo));
        assert_eq!(normal_mode_action(KeyCode::Char(' ')), Some(Action::ToggleSelection));
        assert_eq!(normal_mode_action(KeyCode::Right), Some(Action::NextColumn));
        assert_eq!(normal_mode_action(KeyCode::Char('z')), None);
    }
}
