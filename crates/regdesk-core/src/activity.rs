use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::regulation::RegulationId;

/// Activity entry identifier.
pub type ActivityId = Uuid;

/// The kind of change an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Moved,
    Marked,
    Pinned,
    Tagged,
    Created,
    Updated,
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityAction::Moved => write!(f, "moved"),
            ActivityAction::Marked => write!(f, "marked"),
            ActivityAction::Pinned => write!(f, "pinned"),
            ActivityAction::Tagged => write!(f, "tagged"),
            ActivityAction::Created => write!(f, "created"),
            ActivityAction::Updated => write!(f, "updated"),
        }
    }
}

/// One immutable record of a store mutation.
///
/// `regulation_id` is a plain id, not a handle: the entry stays meaningful
/// even if the regulation later disappears from the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: ActivityId,
    pub regulation_id: RegulationId,
    pub action: ActivityAction,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(
        regulation_id: RegulationId,
        action: ActivityAction,
        old_value: Option<String>,
        new_value: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            regulation_id,
            action,
            old_value,
            new_value,
            note,
            timestamp: Utc::now(),
        }
    }

    /// One-line human description, e.g. `moved: personal -> irrelevant`.
    pub fn summary(&self) -> String {
        match (self.old_value.as_deref(), self.new_value.as_deref()) {
            (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() => {
                format!("{}: {} -> {}", self.action, old, new)
            }
            (_, Some(new)) if !new.is_empty() => format!("{}: +{}", self.action, new),
            (Some(old), _) if !old.is_empty() => format!("{}: -{}", self.action, old),
            _ => self.action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serde_is_lowercase() {
        let json = serde_json::to_string(&ActivityAction::Pinned).unwrap();
        assert_eq!(json, "\"pinned\"");
        let back: ActivityAction = serde_json::from_str("\"moved\"").unwrap();
        assert_eq!(back, ActivityAction::Moved);
    }

    #[test]
    fn summary_formats() {
        let id = Uuid::new_v4();
        let moved = ActivityLogEntry::new(
            id,
            ActivityAction::Moved,
            Some("personal".into()),
            Some("irrelevant".into()),
            None,
        );
        assert_eq!(moved.summary(), "moved: personal -> irrelevant");

        let tagged = ActivityLogEntry::new(
            id,
            ActivityAction::Tagged,
            Some(String::new()),
            Some("privacy".into()),
            None,
        );
        assert_eq!(tagged.summary(), "tagged: +privacy");

        let untagged = ActivityLogEntry::new(
            id,
            ActivityAction::Tagged,
            Some("privacy".into()),
            Some(String::new()),
            None,
        );
        assert_eq!(untagged.summary(), "tagged: -privacy");
    }
}
