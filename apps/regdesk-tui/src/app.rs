//! Application state and main render loop

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use regdesk_core::onboarding::should_show_tour;
use regdesk_core::{
    global_search, Category, FileFlagStore, NewRegulation, RegdeskConfig, Regulation,
    RegulationFilter, RegulationId, RegulationStatus, RegulationStore, Tour,
};

use crate::commands::{parse_command, Command};
use crate::keybindings::{global_action, normal_mode_action, Action, GlobalAction};
use crate::mode::Mode;
use crate::views::{
    ActivityView, BoardView, DetailView, SearchOverlay, ShortcutsOverlay, TourOverlay,
};
use crate::widgets::{ModeIndicator, StatsBar};

/// A regulation picked up for a drag-and-drop move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub id: RegulationId,
    pub origin: Category,
    pub target: Category,
}

/// A bulk move collecting one optional note per regulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMove {
    pub target: Category,
    /// Every selected id, in list order
    pub ids: Vec<RegulationId>,
    /// Ids that will actually move, prompted for in order
    pub prompts: Vec<RegulationId>,
    pub step: usize,
    pub notes: HashMap<RegulationId, String>,
}

impl BulkMove {
    /// The regulation whose note is being typed.
    pub fn current(&self) -> Option<RegulationId> {
        self.prompts.get(self.step).copied()
    }
}

/// Main application state
pub struct App {
    /// Current mode
    pub mode: Mode,
    /// The board state; every change goes through it
    pub store: RegulationStore,
    pub config: RegdeskConfig,
    /// Where the walkthrough flag is persisted
    flags: Option<FileFlagStore>,
    /// Walkthrough, while it is being shown
    pub tour: Option<Tour>,
    pub show_shortcuts: bool,
    /// Side panel shows the activity log instead of details
    pub show_activity: bool,
    pub focused: Category,
    /// Highlighted row per column
    pub cursors: [usize; 3],
    /// Status filter per column
    pub status_filters: [Option<RegulationStatus>; 3],
    /// Text buffer for command, search and note entry
    pub input: String,
    /// Highlighted search hit
    pub search_selected: usize,
    pub drag: Option<DragState>,
    pub bulk: Option<BulkMove>,
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        store: RegulationStore,
        config: RegdeskConfig,
        flags: Option<FileFlagStore>,
    ) -> Self {
        let tour = if config.show_tour {
            match flags.as_ref().map(|f| should_show_tour(f)) {
                Some(Ok(true)) => Some(Tour::new()),
                Some(Ok(false)) | None => None,
                Some(Err(e)) => {
                    tracing::warn!("Failed to read onboarding flag: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            mode: Mode::Normal,
            store,
            config,
            flags,
            tour,
            show_shortcuts: false,
            show_activity: false,
            focused: Category::Personal,
            cursors: [0; 3],
            status_filters: [None; 3],
            input: String::new(),
            search_selected: 0,
            drag: None,
            bulk: None,
            status_message: None,
        }
    }

    // ===== Derived view state =====

    /// A column's regulations in display order, after its status filter.
    pub fn column(&self, category: Category) -> Vec<&Regulation> {
        let mut filter = RegulationFilter::default().with_category(category);
        if let Some(status) = self.status_filters[category.index()] {
            filter = filter.with_status(status);
        }
        filter.apply(self.store.in_category(category))
    }

    pub fn cursor(&self, category: Category) -> usize {
        self.cursors[category.index()]
    }

    /// The regulation under the cursor in the focused column.
    pub fn highlighted(&self) -> Option<&Regulation> {
        self.column(self.focused)
            .get(self.cursor(self.focused))
            .copied()
    }

    /// Current global search hits.
    pub fn search_hits(&self) -> Vec<&Regulation> {
        global_search(self.store.regulations(), &self.input, self.config.search_limit)
    }

    fn highlighted_id(&self) -> Option<RegulationId> {
        self.highlighted().map(|r| r.id)
    }

    fn clamp_cursors(&mut self) {
        for category in Category::ALL {
            let len = self.column(category).len();
            let cursor = &mut self.cursors[category.index()];
            if *cursor >= len {
                *cursor = len.saturating_sub(1);
            }
        }
    }

    /// Focus the column holding `id` and put the cursor on it.
    fn focus_on(&mut self, id: RegulationId) {
        let Some(category) = self.store.get(id).map(|r| r.category) else {
            return;
        };
        if !self.column(category).iter().any(|r| r.id == id) {
            self.status_filters[category.index()] = None;
        }
        if let Some(pos) = self.column(category).iter().position(|r| r.id == id) {
            self.focused = category;
            self.cursors[category.index()] = pos;
        }
    }

    // ===== Rendering =====

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Stats
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Command line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);
        frame.render_widget(StatsBar::new(self.store.regulations()), chunks[1]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(chunks[2]);

        BoardView.render(frame, content_chunks[0], self);
        if self.show_activity {
            ActivityView.render(frame, content_chunks[1], &self.store);
        } else {
            DetailView.render(frame, content_chunks[1], self.highlighted());
        }

        self.render_command_line(frame, chunks[3]);

        if self.mode == Mode::Search {
            SearchOverlay.render(frame, size, self);
        }
        if self.show_shortcuts {
            ShortcutsOverlay.render(frame, size);
        }
        if let Some(tour) = &self.tour {
            TourOverlay.render(frame, size, tour);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let selected = self.store.selected_ids().len();
        let mut spans = vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::styled(" regdesk ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| "),
        ];
        if selected > 0 {
            spans.push(Span::styled(
                format!("{} selected | ", selected),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::raw(format!(
            "{} activity entries | Press ? for help",
            self.store.activity_log().len()
        )));

        let status_bar =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let line = match self.mode {
            Mode::Command => Line::from(format!(":{}", self.input)),
            Mode::Note => {
                let prompt = match &self.bulk {
                    Some(bulk) => {
                        let title = bulk
                            .current()
                            .and_then(|id| self.store.get(id))
                            .map(|r| r.title.as_str())
                            .unwrap_or_default();
                        format!("Note for {} ({}/{}): ", title, bulk.step + 1, bulk.prompts.len())
                    }
                    None => "Note for move: ".to_string(),
                };
                Line::from(vec![
                    Span::styled(prompt, Style::default().fg(Color::Cyan)),
                    Span::raw(self.input.clone()),
                ])
            }
            Mode::Drag => {
                let target = self
                    .drag
                    .map(|d| d.target.label())
                    .unwrap_or_default();
                Line::from(format!(
                    "Drop on {} (h/l to choose, Enter to drop, Esc to cancel)",
                    target
                ))
            }
            Mode::Normal | Mode::Search => {
                Line::from(self.status_message.clone().unwrap_or_default())
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    // ===== Input =====

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.tour.is_some() {
            self.handle_tour_key(code);
            return false;
        }

        match global_action(code, modifiers) {
            Some(GlobalAction::OpenSearch) => {
                self.show_shortcuts = false;
                self.drag = None;
                self.mode = Mode::Search;
                self.input.clear();
                self.search_selected = 0;
                return false;
            }
            Some(GlobalAction::ShowShortcuts) if !self.mode.takes_text() => {
                self.show_shortcuts = true;
                return false;
            }
            Some(GlobalAction::CloseOverlay) if self.show_shortcuts => {
                self.show_shortcuts = false;
                return false;
            }
            _ => {}
        }
        if self.show_shortcuts {
            return false;
        }

        let quit = match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Command => self.handle_command_key(code, modifiers),
            Mode::Search => {
                self.handle_search_key(code, modifiers);
                false
            }
            Mode::Drag => {
                self.handle_drag_key(code);
                false
            }
            Mode::Note => {
                self.handle_note_key(code, modifiers);
                false
            }
        };
        self.clamp_cursors();
        quit
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.input.clear();
            }
            Action::MoveDown => {
                let len = self.column(self.focused).len();
                if len > 0 {
                    let cursor = &mut self.cursors[self.focused.index()];
                    *cursor = (*cursor + 1) % len;
                }
            }
            Action::MoveUp => {
                let len = self.column(self.focused).len();
                if len > 0 {
                    let cursor = &mut self.cursors[self.focused.index()];
                    *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
                }
            }
            Action::PrevColumn => {
                self.focused = Category::ALL[(self.focused.index() + 2) % 3];
            }
            Action::NextColumn => {
                self.focused = Category::ALL[(self.focused.index() + 1) % 3];
            }
            Action::Grab => {
                if let Some(id) = self.highlighted_id() {
                    self.drag = Some(DragState {
                        id,
                        origin: self.focused,
                        target: self.focused,
                    });
                    self.mode = Mode::Drag;
                }
            }
            Action::ToggleSelection => {
                if let Some(id) = self.highlighted_id() {
                    self.store.toggle_selection(id);
                }
            }
            Action::ClearSelection => {
                self.store.clear_selection();
                self.status_message = Some("Selection cleared".to_string());
            }
            Action::TogglePin => {
                if let Some(id) = self.highlighted_id() {
                    self.store.toggle_pin(id);
                    self.focus_on(id);
                }
            }
            Action::ToggleRelevant => {
                if let Some(id) = self.highlighted_id() {
                    self.store.toggle_relevant(id);
                }
            }
            Action::Undo => {
                self.status_message = Some(if self.store.undo_last_action() {
                    "Undid last action".to_string()
                } else {
                    "Nothing to undo".to_string()
                });
            }
            Action::ToggleActivity => {
                self.show_activity = !self.show_activity;
            }
            Action::CycleStatusFilter => {
                let slot = &mut self.status_filters[self.focused.index()];
                *slot = next_status_filter(*slot);
                self.status_message = Some(match slot {
                    Some(status) => format!("Showing {} only", status.label()),
                    None => "Showing all statuses".to_string(),
                });
            }
            Action::Export => self.export(None),
        }
        false
    }

    fn handle_drag_key(&mut self, code: KeyCode) {
        let Some(drag) = self.drag.as_mut() else {
            self.mode = Mode::Normal;
            return;
        };
        match code {
            KeyCode::Char('h') | KeyCode::Left => {
                drag.target = Category::ALL[(drag.target.index() + 2) % 3];
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                drag.target = Category::ALL[(drag.target.index() + 1) % 3];
            }
            KeyCode::Enter => {
                if drag.target == drag.origin {
                    self.drag = None;
                    self.mode = Mode::Normal;
                    self.status_message = Some("Dropped on the same column".to_string());
                } else {
                    self.mode = Mode::Note;
                    self.input.clear();
                }
            }
            KeyCode::Esc => {
                self.drag = None;
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn handle_note_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                let what = if self.bulk.take().is_some() {
                    "Bulk move"
                } else {
                    "Move"
                };
                self.drag = None;
                self.input.clear();
                self.mode = Mode::Normal;
                self.status_message = Some(format!("{} cancelled", what));
            }
            KeyCode::Enter if self.bulk.is_some() => self.next_bulk_note(),
            KeyCode::Enter => {
                if let Some(drag) = self.drag.take() {
                    let note = self.input.trim();
                    let note = (!note.is_empty()).then(|| note.to_string());
                    if self.store.move_regulation(drag.id, drag.target, note) {
                        self.status_message = Some(format!("Moved to {}", drag.target.label()));
                    }
                }
                self.input.clear();
                self.mode = Mode::Normal;
            }
            _ => push_text(&mut self.input, code, modifiers),
        }
    }

    /// Keep the typed note for the current bulk prompt; after the last one,
    /// run the move.
    fn next_bulk_note(&mut self) {
        let Some(bulk) = self.bulk.as_mut() else {
            return;
        };
        let note = self.input.trim();
        if let (Some(id), false) = (bulk.current(), note.is_empty()) {
            bulk.notes.insert(id, note.to_string());
        }
        bulk.step += 1;
        self.input.clear();
        if bulk.current().is_some() {
            return;
        }

        if let Some(bulk) = self.bulk.take() {
            let moved = self.store.move_multiple(&bulk.ids, bulk.target, Some(&bulk.notes));
            self.status_message = Some(format!(
                "Moved {} of {} selected to {}",
                moved,
                bulk.ids.len(),
                bulk.target.label()
            ));
        }
        self.mode = Mode::Normal;
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.input.clear();
            }
            KeyCode::Down => {
                let len = self.search_hits().len();
                if len > 0 {
                    self.search_selected = (self.search_selected + 1) % len;
                }
            }
            KeyCode::Up => {
                let len = self.search_hits().len();
                if len > 0 {
                    self.search_selected = self.search_selected.checked_sub(1).unwrap_or(len - 1);
                }
            }
            KeyCode::Enter => {
                let hit = self.search_hits().get(self.search_selected).map(|r| r.id);
                if let Some(id) = hit {
                    self.focus_on(id);
                    self.show_activity = false;
                }
                self.mode = Mode::Normal;
                self.input.clear();
            }
            _ => {
                push_text(&mut self.input, code, modifiers);
                self.search_selected = 0;
            }
        }
    }

    fn handle_command_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.input.clear();
            }
            KeyCode::Enter => {
                // Commands may switch to another mode, e.g. bulk note entry
                let line = std::mem::take(&mut self.input);
                self.mode = Mode::Normal;
                return self.execute_command(&line);
            }
            _ => push_text(&mut self.input, code, modifiers),
        }
        false
    }

    fn handle_tour_key(&mut self, code: KeyCode) {
        let Some(tour) = self.tour.as_mut() else {
            return;
        };
        let skipped = match code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => {
                if tour.next() {
                    return;
                }
                false
            }
            KeyCode::Char('h') | KeyCode::Left => {
                tour.prev();
                return;
            }
            KeyCode::Esc | KeyCode::Char('q') => true,
            _ => return,
        };

        if let (Some(tour), Some(flags)) = (self.tour.take(), self.flags.as_mut()) {
            let result = if skipped {
                tour.skip(flags)
            } else {
                tour.finish(flags)
            };
            if let Err(e) = result {
                tracing::warn!("Failed to persist onboarding flag: {}", e);
            }
        }
    }

    // ===== Commands =====

    fn execute_command(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Ok(Some(command)) => self.apply_command(command),
            Ok(None) => false,
            Err(e) => {
                self.status_message = Some(e.to_string());
                false
            }
        }
    }

    fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return true,
            Command::Move { category, note } => match self.highlighted_id() {
                Some(id) => {
                    self.status_message = Some(if self.store.move_regulation(id, category, note) {
                        format!("Moved to {}", category.label())
                    } else {
                        format!("Already in {}", category.label())
                    });
                }
                None => self.status_message = Some("No regulation highlighted".to_string()),
            },
            Command::Bulk(category) => {
                let selected = self.store.selected_regulations();
                let ids: Vec<RegulationId> = selected.iter().map(|r| r.id).collect();
                let prompts: Vec<RegulationId> = selected
                    .iter()
                    .filter(|r| r.category != category)
                    .map(|r| r.id)
                    .collect();

                if prompts.is_empty() {
                    self.store.move_multiple(&ids, category, None);
                    self.status_message =
                        Some(format!("Nothing selected to move to {}", category.label()));
                } else {
                    self.bulk = Some(BulkMove {
                        target: category,
                        ids,
                        prompts,
                        step: 0,
                        notes: HashMap::new(),
                    });
                    self.input.clear();
                    self.mode = Mode::Note;
                }
            }
            Command::Tag(tag) => {
                if let Some(id) = self.highlighted_id() {
                    if !self.store.add_tag(id, &tag) {
                        self.status_message = Some(format!("Already tagged {}", tag));
                    }
                }
            }
            Command::Untag(tag) => {
                if let Some(id) = self.highlighted_id() {
                    self.store.remove_tag(id, &tag);
                }
            }
            Command::Status(status) => {
                if let Some(id) = self.highlighted_id() {
                    self.store.set_status(id, status);
                    self.focus_on(id);
                }
            }
            Command::New { category, title } => {
                let id = self
                    .store
                    .create_regulation(NewRegulation::new(title, category));
                self.focus_on(id);
            }
            Command::Export(path) => self.export(path),
            Command::Undo => {
                self.store.undo_last_action();
            }
            Command::ClearSelection => self.store.clear_selection(),
        }
        false
    }

    fn export(&mut self, path: Option<PathBuf>) {
        let date = Utc::now().date_naive();
        let result = self.config.export_board(self.store.regulations(), path, date);
        self.status_message = Some(match result {
            Ok((path, rows)) => format!("Exported {} regulations to {}", rows, path.display()),
            Err(e) => {
                tracing::error!("{}", e);
                format!("Export failed: {}", e)
            }
        });
    }
}

fn next_status_filter(current: Option<RegulationStatus>) -> Option<RegulationStatus> {
    let all = RegulationStatus::ALL;
    match current {
        None => Some(all[0]),
        Some(status) => all
            .iter()
            .position(|s| *s == status)
            .and_then(|i| all.get(i + 1))
            .copied(),
    }
}

fn push_text(buffer: &mut String, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
        _ => {}
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regdesk_core::ActivityAction;

    fn app() -> App {
        App::new(RegulationStore::seeded(), RegdeskConfig::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn drag_and_drop_moves_with_note() {
        let mut app = app();
        let id = app.highlighted().unwrap().id;

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::Drag);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Note);
        type_text(&mut app, "superseded");
        press(&mut app, KeyCode::Enter);

        let r = app.store.get(id).unwrap();
        assert_eq!(r.category, Category::Irrelevant);
        assert_eq!(r.move_notes.as_deref(), Some("superseded"));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn drop_on_origin_does_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.store.activity_log().is_empty());
    }

    /// Select the first two personal regulations and start `:bulk <target>`.
    fn start_bulk(app: &mut App, target: &str) -> Vec<RegulationId> {
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Char('j'));
        press(app, KeyCode::Char(' '));
        let order = app
            .store
            .selected_regulations()
            .iter()
            .map(|r| r.id)
            .collect();

        press(app, KeyCode::Char(':'));
        type_text(app, &format!("bulk {}", target));
        press(app, KeyCode::Enter);
        order
    }

    #[test]
    fn bulk_command_collects_a_note_per_regulation() {
        let mut app = app();
        let order = start_bulk(&mut app, "irrelevant");
        assert_eq!(order.len(), 2);
        assert_eq!(app.mode, Mode::Note);
        assert_eq!(app.bulk.as_ref().and_then(BulkMove::current), Some(order[0]));

        type_text(&mut app, "replaced by v2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Note);
        assert_eq!(app.store.in_category(Category::Irrelevant).len(), 5);

        type_text(&mut app, "out of scope");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.bulk.is_none());
        assert!(app.store.selected_ids().is_empty());

        for (id, note) in order.iter().zip(["replaced by v2", "out of scope"]) {
            let r = app.store.get(*id).unwrap();
            assert_eq!(r.category, Category::Irrelevant);
            assert_eq!(r.move_notes.as_deref(), Some(note));

            let entry = app
                .store
                .activity_log()
                .iter()
                .find(|e| e.regulation_id == *id)
                .unwrap();
            assert_eq!(entry.action, ActivityAction::Moved);
            assert_eq!(entry.note.as_deref(), Some(note));
        }
    }

    #[test]
    fn bulk_blank_note_means_none() {
        let mut app = app();
        let order = start_bulk(&mut app, "relevant");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "  ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.in_category(Category::Relevant).len(), 14);
        for id in &order {
            assert_eq!(app.store.get(*id).unwrap().move_notes, None);
        }
    }

    #[test]
    fn bulk_escape_cancels_whole_batch() {
        let mut app = app();
        start_bulk(&mut app, "irrelevant");
        type_text(&mut app, "first note");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.bulk.is_none());
        assert_eq!(app.store.selected_ids().len(), 2);
        assert!(app.store.activity_log().is_empty());
    }

    #[test]
    fn question_mark_is_text_in_command_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_shortcuts);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_shortcuts);

        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_shortcuts);
        assert_eq!(app.input, "?");
    }

    #[test]
    fn search_jumps_to_hit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, Mode::Search);
        type_text(&mut app, "quantum");
        assert_eq!(app.search_hits().len(), 1);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focused, Category::Relevant);
        assert!(app.highlighted().unwrap().title.starts_with("Quantum"));
    }

    #[test]
    fn pin_then_undo() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        let id = app.highlighted().unwrap().id;
        press(&mut app, KeyCode::Char('p'));
        assert!(app.store.get(id).unwrap().is_pinned);
        assert_eq!(app.highlighted().unwrap().id, id);

        press(&mut app, KeyCode::Char('u'));
        assert!(!app.store.get(id).unwrap().is_pinned);
        assert_eq!(
            app.store.last_activity().unwrap().action,
            ActivityAction::Pinned
        );
    }

    #[test]
    fn status_filter_cycles_back_to_all() {
        let mut current = None;
        for _ in 0..RegulationStatus::ALL.len() {
            current = next_status_filter(current);
            assert!(current.is_some());
        }
        assert_eq!(next_status_filter(current), None);
    }
}
