//! The regulation store: single owner of the board state.
//!
//! All mutation goes through `&mut self` methods. Calls naming an unknown
//! id, moving a regulation to the category it is already in, or adding a
//! tag that is already present are ignored without error; the returned
//! `bool` (or count) only tells the caller whether anything changed.

use chrono::Utc;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::activity::{ActivityAction, ActivityLogEntry};
use crate::query::sort_for_display;
use crate::regulation::{Category, NewRegulation, Regulation, RegulationId, RegulationStatus};
use crate::seed::sample_regulations;

/// Regulation list, activity log (newest first) and selection set.
#[derive(Debug, Clone, Default)]
pub struct RegulationStore {
    regulations: Vec<Regulation>,
    activity_log: VecDeque<ActivityLogEntry>,
    selected: HashSet<RegulationId>,
}

impl RegulationStore {
    /// Create a store over an initial regulation list with an empty log
    /// and no selection.
    pub fn new(regulations: Vec<Regulation>) -> Self {
        Self {
            regulations,
            activity_log: VecDeque::new(),
            selected: HashSet::new(),
        }
    }

    /// Create a store populated with the sample fixture set.
    pub fn seeded() -> Self {
        Self::new(sample_regulations(Utc::now()))
    }

    // ===== Read side =====

    /// All regulations in storage order.
    pub fn regulations(&self) -> &[Regulation] {
        &self.regulations
    }

    pub fn get(&self, id: RegulationId) -> Option<&Regulation> {
        self.regulations.iter().find(|r| r.id == id)
    }

    /// Activity entries, newest first.
    pub fn activity_log(&self) -> &VecDeque<ActivityLogEntry> {
        &self.activity_log
    }

    pub fn last_activity(&self) -> Option<&ActivityLogEntry> {
        self.activity_log.front()
    }

    pub fn selected_ids(&self) -> &HashSet<RegulationId> {
        &self.selected
    }

    pub fn is_selected(&self, id: RegulationId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected regulations in storage order.
    pub fn selected_regulations(&self) -> Vec<&Regulation> {
        self.regulations
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    /// The regulations of one category in display order: pinned first,
    /// then ascending `sort_order`.
    pub fn in_category(&self, category: Category) -> Vec<&Regulation> {
        let mut regs: Vec<&Regulation> = self
            .regulations
            .iter()
            .filter(|r| r.category == category)
            .collect();
        sort_for_display(&mut regs);
        regs
    }

    // ===== Moves =====

    /// Move one regulation to the top of `target`.
    ///
    /// Every other regulation already in `target` shifts down by one.
    pub fn move_regulation(
        &mut self,
        id: RegulationId,
        target: Category,
        note: Option<String>,
    ) -> bool {
        let Some(old_category) = self.get(id).map(|r| r.category) else {
            tracing::trace!(%id, "move ignored: unknown regulation");
            return false;
        };
        if old_category == target {
            tracing::trace!(%id, %target, "move ignored: already in category");
            return false;
        }

        let now = Utc::now();
        for r in self.regulations.iter_mut() {
            if r.id == id {
                r.category = target;
                r.sort_order = 0;
                r.updated_at = now;
                r.move_notes = note.clone();
            } else if r.category == target {
                r.sort_order += 1;
            }
        }

        self.record(
            id,
            ActivityAction::Moved,
            Some(old_category.to_string()),
            Some(target.to_string()),
            note,
        );
        true
    }

    /// Move a batch of regulations to the top of `target`, keeping the
    /// caller's order (first id on top).
    ///
    /// Ids that are unknown or already in `target` are skipped. A repeated
    /// id still counts towards the shift of existing `target` members, but
    /// the regulation moves and logs once, at its first position. Returns
    /// the number of regulations moved. When at least one moved, the
    /// selection is cleared.
    pub fn move_multiple(
        &mut self,
        ids: &[RegulationId],
        target: Category,
        notes: Option<&HashMap<RegulationId, String>>,
    ) -> usize {
        let valid_ids: Vec<RegulationId> = ids
            .iter()
            .copied()
            .filter(|&id| self.get(id).is_some_and(|r| r.category != target))
            .collect();

        if valid_ids.is_empty() {
            tracing::trace!(%target, requested = ids.len(), "bulk move ignored: nothing eligible");
            return 0;
        }

        let batch_len = valid_ids.len() as i64;
        for r in self.regulations.iter_mut() {
            if r.category == target {
                r.sort_order += batch_len;
            }
        }

        let now = Utc::now();
        let mut moved = 0;
        for (position, &id) in valid_ids.iter().enumerate() {
            if valid_ids[..position].contains(&id) {
                continue;
            }
            let note = notes.and_then(|n| n.get(&id)).cloned();
            let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
                continue;
            };
            let old_category = r.category;
            r.category = target;
            r.sort_order = position as i64;
            r.updated_at = now;
            r.move_notes = note.clone();

            self.record(
                id,
                ActivityAction::Moved,
                Some(old_category.to_string()),
                Some(target.to_string()),
                note,
            );
            moved += 1;
        }

        self.selected.clear();
        moved
    }

    // ===== Flags =====

    pub fn toggle_pin(&mut self, id: RegulationId) -> bool {
        let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
            tracing::trace!(%id, "pin ignored: unknown regulation");
            return false;
        };
        let was_pinned = r.is_pinned;
        r.is_pinned = !was_pinned;
        r.updated_at = Utc::now();

        self.record(
            id,
            ActivityAction::Pinned,
            Some(was_pinned.to_string()),
            Some((!was_pinned).to_string()),
            None,
        );
        true
    }

    pub fn toggle_relevant(&mut self, id: RegulationId) -> bool {
        let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
            tracing::trace!(%id, "relevance ignored: unknown regulation");
            return false;
        };
        let was_relevant = r.is_relevant;
        r.is_relevant = !was_relevant;
        r.updated_at = Utc::now();

        self.record(
            id,
            ActivityAction::Marked,
            Some(was_relevant.to_string()),
            Some((!was_relevant).to_string()),
            None,
        );
        true
    }

    // ===== Tags =====

    /// Append `tag` unless the regulation already carries it (exact,
    /// case-sensitive match).
    pub fn add_tag(&mut self, id: RegulationId, tag: &str) -> bool {
        let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
            tracing::trace!(%id, "tag ignored: unknown regulation");
            return false;
        };
        if r.has_tag(tag) {
            tracing::trace!(%id, tag, "tag ignored: already present");
            return false;
        }
        r.tags.push(tag.to_string());
        r.updated_at = Utc::now();

        self.record(
            id,
            ActivityAction::Tagged,
            Some(String::new()),
            Some(tag.to_string()),
            None,
        );
        true
    }

    /// Remove `tag` from the regulation.
    ///
    /// For a known regulation this always records a `tagged` entry, even
    /// when the tag was not present.
    pub fn remove_tag(&mut self, id: RegulationId, tag: &str) -> bool {
        let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
            tracing::trace!(%id, "untag ignored: unknown regulation");
            return false;
        };
        r.tags.retain(|t| t != tag);
        r.updated_at = Utc::now();

        self.record(
            id,
            ActivityAction::Tagged,
            Some(tag.to_string()),
            Some(String::new()),
            None,
        );
        true
    }

    // ===== Lifecycle =====

    /// Add a regulation at the top of its category.
    pub fn create_regulation(&mut self, new: NewRegulation) -> RegulationId {
        let now = Utc::now();
        let id = RegulationId::new_v4();
        let category = new.category;

        for r in self.regulations.iter_mut() {
            if r.category == category {
                r.sort_order += 1;
            }
        }
        self.regulations.push(Regulation {
            id,
            title: new.title,
            content: new.content,
            category,
            status: new.status,
            is_pinned: false,
            is_relevant: new.is_relevant,
            tags: new.tags,
            sort_order: 0,
            created_at: now,
            updated_at: now,
            move_notes: None,
        });

        self.record(
            id,
            ActivityAction::Created,
            None,
            Some(category.to_string()),
            None,
        );
        id
    }

    pub fn set_status(&mut self, id: RegulationId, status: RegulationStatus) -> bool {
        let Some(r) = self.regulations.iter_mut().find(|r| r.id == id) else {
            tracing::trace!(%id, "status ignored: unknown regulation");
            return false;
        };
        let old_status = r.status;
        if old_status == status {
            return false;
        }
        r.status = status;
        r.updated_at = Utc::now();

        self.record(
            id,
            ActivityAction::Updated,
            Some(old_status.to_string()),
            Some(status.to_string()),
            None,
        );
        true
    }

    // ===== Selection =====

    pub fn toggle_selection(&mut self, id: RegulationId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ===== Undo =====

    /// Reverse the newest activity entry, one level deep.
    ///
    /// Moves, pins and relevance marks are reversed by re-running the
    /// forward operation, which records a fresh entry of its own. Other
    /// action kinds change nothing. In every case the original head entry
    /// is then dropped from the log. Returns false only if the log was empty.
    pub fn undo_last_action(&mut self) -> bool {
        let Some(head) = self.activity_log.front().cloned() else {
            return false;
        };

        match head.action {
            ActivityAction::Moved => {
                let previous = head
                    .old_value
                    .as_deref()
                    .and_then(|v| v.parse::<Category>().ok());
                if let Some(previous) = previous {
                    self.move_regulation(head.regulation_id, previous, None);
                }
            }
            ActivityAction::Pinned => {
                self.toggle_pin(head.regulation_id);
            }
            ActivityAction::Marked => {
                self.toggle_relevant(head.regulation_id);
            }
            ActivityAction::Tagged | ActivityAction::Created | ActivityAction::Updated => {}
        }

        if let Some(pos) = self.activity_log.iter().position(|e| e.id == head.id) {
            self.activity_log.remove(pos);
        }
        tracing::debug!(regulation = %head.regulation_id, action = %head.action, "undo");
        true
    }

    fn record(
        &mut self,
        regulation_id: RegulationId,
        action: ActivityAction,
        old_value: Option<String>,
        new_value: Option<String>,
        note: Option<String>,
    ) {
        tracing::debug!(regulation = %regulation_id, %action, "activity recorded");
        self.activity_log.push_front(ActivityLogEntry::new(
            regulation_id,
            action,
            old_value,
            new_value,
            note,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulation::RegulationStatus;

    fn reg(title: &str, category: Category, sort_order: i64) -> Regulation {
        let now = Utc::now();
        Regulation {
            id: RegulationId::new_v4(),
            title: title.into(),
            content: String::new(),
            category,
            status: RegulationStatus::InEffect,
            is_pinned: false,
            is_relevant: true,
            tags: Vec::new(),
            sort_order,
            created_at: now,
            updated_at: now,
            move_notes: None,
        }
    }

    #[test]
    fn move_to_same_category_changes_nothing() {
        let r = reg("A", Category::Personal, 0);
        let id = r.id;
        let mut store = RegulationStore::new(vec![r]);
        store.toggle_selection(id);
        let before = store.regulations().to_vec();

        assert!(!store.move_regulation(id, Category::Personal, Some("x".into())));
        assert_eq!(store.regulations(), before.as_slice());
        assert!(store.activity_log().is_empty());
        assert!(store.is_selected(id));
    }

    #[test]
    fn move_unknown_id_is_ignored() {
        let mut store = RegulationStore::new(vec![reg("A", Category::Personal, 0)]);
        assert!(!store.move_regulation(RegulationId::new_v4(), Category::Relevant, None));
        assert!(store.activity_log().is_empty());
    }

    #[test]
    fn remove_missing_tag_still_logs() {
        let r = reg("A", Category::Personal, 0);
        let id = r.id;
        let mut store = RegulationStore::new(vec![r]);
        assert!(store.remove_tag(id, "nope"));
        assert_eq!(store.activity_log().len(), 1);
        let head = store.last_activity().unwrap();
        assert_eq!(head.old_value.as_deref(), Some("nope"));
        assert_eq!(head.new_value.as_deref(), Some(""));
    }

    #[test]
    fn create_inserts_at_top() {
        let existing = reg("A", Category::Relevant, 0);
        let existing_id = existing.id;
        let mut store = RegulationStore::new(vec![existing]);

        let id = store.create_regulation(NewRegulation::new("New", Category::Relevant));
        assert_eq!(store.get(id).unwrap().sort_order, 0);
        assert_eq!(store.get(existing_id).unwrap().sort_order, 1);

        let head = store.last_activity().unwrap();
        assert_eq!(head.action, ActivityAction::Created);
        assert_eq!(head.new_value.as_deref(), Some("relevant"));
    }

    #[test]
    fn set_status_logs_update_once() {
        let r = reg("A", Category::Personal, 0);
        let id = r.id;
        let mut store = RegulationStore::new(vec![r]);
        assert!(store.set_status(id, RegulationStatus::OutOfEffect));
        assert!(!store.set_status(id, RegulationStatus::OutOfEffect));
        assert_eq!(store.activity_log().len(), 1);
        let head = store.last_activity().unwrap();
        assert_eq!(head.action, ActivityAction::Updated);
        assert_eq!(head.old_value.as_deref(), Some("in-effect"));
        assert_eq!(head.new_value.as_deref(), Some("out-of-effect"));
    }

    #[test]
    fn undo_of_tag_only_drops_entry() {
        let r = reg("A", Category::Personal, 0);
        let id = r.id;
        let mut store = RegulationStore::new(vec![r]);
        store.add_tag(id, "x");
        assert!(store.undo_last_action());
        assert!(store.activity_log().is_empty());
        assert_eq!(store.get(id).unwrap().tags, vec!["x".to_string()]);
    }

    #[test]
    fn undo_on_empty_log_is_noop() {
        let mut store = RegulationStore::default();
        assert!(!store.undo_last_action());
    }

    #[test]
    fn in_category_orders_pinned_first() {
        let a = reg("A", Category::Personal, 0);
        let mut b = reg("B", Category::Personal, 1);
        b.is_pinned = true;
        let c = reg("C", Category::Personal, 2);
        let d = reg("D", Category::Relevant, 0);
        let store = RegulationStore::new(vec![a, b, c, d]);

        let titles: Vec<&str> = store
            .in_category(Category::Personal)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn bulk_move_repeated_id_moves_once_but_widens_shift() {
        let a = reg("A", Category::Personal, 0);
        let b = reg("B", Category::Personal, 1);
        let c = reg("C", Category::Irrelevant, 0);
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        let mut store = RegulationStore::new(vec![a, b, c]);

        let moved = store.move_multiple(&[b_id, a_id, b_id], Category::Irrelevant, None);
        assert_eq!(moved, 2);
        assert_eq!(store.get(b_id).unwrap().sort_order, 0);
        assert_eq!(store.get(a_id).unwrap().sort_order, 1);
        assert_eq!(store.get(c_id).unwrap().sort_order, 3);
        assert_eq!(store.activity_log().len(), 2);
    }
}
