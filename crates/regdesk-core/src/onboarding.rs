//! First-run walkthrough and the persisted "seen" flag.
//!
//! The flag lives outside the store and survives restarts. It is read once
//! at startup and written when the walkthrough is finished or skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FlagStoreError;

/// Key under which the walkthrough flag is stored.
pub const TOUR_SEEN_KEY: &str = "hasSeenTour";

/// A small persistent key/value store for one-time flags.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}

/// Flags held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    flags: BTreeMap<String, String>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.flags.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.flags.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flags kept as a JSON object in a file.
///
/// A missing file reads as "no flags". The file and its parent directories
/// are created on the first write.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/regdesk/flags.json`, if the platform has a data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("regdesk").join("flags.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, FlagStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(FlagStoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| FlagStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut flags = self.load()?;
        flags.insert(key.to_string(), value.to_string());

        let io_err = |source| FlagStoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&flags).map_err(|source| FlagStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;
        tracing::debug!(path = ?self.path, key, "flag written");
        Ok(())
    }
}

/// Whether the walkthrough still needs to be shown.
pub fn should_show_tour(store: &dyn FlagStore) -> Result<bool, FlagStoreError> {
    Ok(store.get(TOUR_SEEN_KEY)?.is_none())
}

/// Record that the walkthrough has been seen. Permanent.
pub fn mark_tour_seen(store: &mut dyn FlagStore) -> Result<(), FlagStoreError> {
    store.set(TOUR_SEEN_KEY, "true")
}

/// One page of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// Pages of the first-run walkthrough, in order.
pub const TOUR_STEPS: &[TourStep] = &[
    TourStep {
        title: "Welcome to Regulation Management",
        description: "Organize and track regulatory compliance documents. Here is a short tour.",
    },
    TourStep {
        title: "Three Categories",
        description: "Regulations are filed as Personal (directly applicable), Relevant (indirectly applicable) or Irrelevant (archived or outdated).",
    },
    TourStep {
        title: "Drag and Drop",
        description: "Grab a regulation with d, pick a column with h/l and drop it with Enter. You will be asked for a note explaining the move.",
    },
    TourStep {
        title: "Status Tracking",
        description: "Each regulation shows whether it is In Effect, In Planning, Partially Applicable or Out of Effect. Press f to filter a column by status.",
    },
    TourStep {
        title: "Bulk Actions",
        description: "Select several regulations with Space, then run :bulk <category> to move them all at once.",
    },
    TourStep {
        title: "Global Search",
        description: "Press Ctrl+K anytime to search every regulation by title, content or tag.",
    },
    TourStep {
        title: "Activity Log",
        description: "Every move, pin or tag change is recorded with a timestamp and your note. Press u to undo the latest one.",
    },
    TourStep {
        title: "You're All Set",
        description: "Press ? anytime to see the keyboard shortcuts.",
    },
];

/// Walkthrough cursor.
#[derive(Debug, Clone, Default)]
pub struct Tour {
    step: usize,
}

impl Tour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static TourStep {
        &TOUR_STEPS[self.step]
    }

    pub fn index(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        TOUR_STEPS.len()
    }

    pub fn is_empty(&self) -> bool {
        TOUR_STEPS.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == TOUR_STEPS.len()
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Go back one page. Returns false on the first page.
    pub fn prev(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Complete the walkthrough and persist the flag.
    pub fn finish(self, store: &mut dyn FlagStore) -> Result<(), FlagStoreError> {
        mark_tour_seen(store)
    }

    /// Dismiss the walkthrough early. Persists the same flag as `finish`.
    pub fn skip(self, store: &mut dyn FlagStore) -> Result<(), FlagStoreError> {
        mark_tour_seen(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_tour_flag() {
        let mut store = MemoryFlagStore::new();
        assert!(should_show_tour(&store).unwrap());
        mark_tour_seen(&mut store).unwrap();
        assert!(!should_show_tour(&store).unwrap());
        assert_eq!(store.get(TOUR_SEEN_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn tour_navigation_bounds() {
        let mut tour = Tour::new();
        assert_eq!(tour.len(), 8);
        assert!(!tour.prev());
        while tour.next() {}
        assert!(tour.is_last());
        assert_eq!(tour.index(), 7);
        assert_eq!(tour.current().title, "You're All Set");
        assert!(tour.prev());
        assert_eq!(tour.index(), 6);
    }

    #[test]
    fn skip_marks_seen() {
        let mut store = MemoryFlagStore::new();
        Tour::new().skip(&mut store).unwrap();
        assert!(!should_show_tour(&store).unwrap());
    }
}
