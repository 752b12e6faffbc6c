use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Globally unique regulation identifier (UUID v4).
pub type RegulationId = Uuid;

/// The bucket a regulation is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Directly applicable to the user.
    Personal,
    /// Indirectly applicable.
    Relevant,
    /// Archived or outdated.
    Irrelevant,
}

impl Category {
    /// All categories in board order.
    pub const ALL: [Category; 3] = [Category::Personal, Category::Relevant, Category::Irrelevant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Relevant => "relevant",
            Category::Irrelevant => "irrelevant",
        }
    }

    /// Column heading for UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal Regulations",
            Category::Relevant => "Relevant Regulations",
            Category::Irrelevant => "Irrelevant Regulations",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Personal => 0,
            Category::Relevant => 1,
            Category::Irrelevant => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category or status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Category::Personal),
            "relevant" => Ok(Category::Relevant),
            "irrelevant" => Ok(Category::Irrelevant),
            _ => Err(ParseEnumError {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Legal standing of a regulation. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulationStatus {
    InEffect,
    InPlanning,
    PartiallyApplicable,
    OutOfEffect,
}

impl RegulationStatus {
    pub const ALL: [RegulationStatus; 4] = [
        RegulationStatus::InEffect,
        RegulationStatus::InPlanning,
        RegulationStatus::PartiallyApplicable,
        RegulationStatus::OutOfEffect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegulationStatus::InEffect => "in-effect",
            RegulationStatus::InPlanning => "in-planning",
            RegulationStatus::PartiallyApplicable => "partially-applicable",
            RegulationStatus::OutOfEffect => "out-of-effect",
        }
    }

    /// Badge text for UI.
    pub fn label(&self) -> &'static str {
        match self {
            RegulationStatus::InEffect => "In Effect",
            RegulationStatus::InPlanning => "In Planning",
            RegulationStatus::PartiallyApplicable => "Partially Applicable",
            RegulationStatus::OutOfEffect => "Out of Effect",
        }
    }
}

impl fmt::Display for RegulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegulationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-effect" => Ok(RegulationStatus::InEffect),
            "in-planning" => Ok(RegulationStatus::InPlanning),
            "partially-applicable" => Ok(RegulationStatus::PartiallyApplicable),
            "out-of-effect" => Ok(RegulationStatus::OutOfEffect),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// A compliance document tracked on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: RegulationId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub status: RegulationStatus,

    // Classification
    pub is_pinned: bool,
    pub is_relevant: bool,
    pub tags: Vec<String>,

    /// Position within the category; lower sorts first.
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Note attached by the most recent move.
    pub move_notes: Option<String>,
}

impl Regulation {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Fields supplied when creating a regulation through the store.
#[derive(Debug, Clone)]
pub struct NewRegulation {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub status: RegulationStatus,
    pub is_relevant: bool,
    pub tags: Vec<String>,
}

impl NewRegulation {
    /// A relevant, in-effect regulation with no content or tags.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            category,
            status: RegulationStatus::InEffect,
            is_relevant: true,
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
            assert_eq!(Category::ALL[category.index()], category);
        }
        assert_eq!(" Relevant ".parse::<Category>(), Ok(Category::Relevant));
        assert!("archive".parse::<Category>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&RegulationStatus::PartiallyApplicable).unwrap();
        assert_eq!(json, "\"partially-applicable\"");
        for status in RegulationStatus::ALL {
            assert_eq!(status.as_str().parse::<RegulationStatus>(), Ok(status));
        }
    }

    #[test]
    fn parse_error_names_kind() {
        let err = "bogus".parse::<RegulationStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown status: bogus");
    }

    #[test]
    fn regulation_serde_round_trip() {
        let now = Utc::now();
        let regulation = Regulation {
            id: Uuid::new_v4(),
            title: "GDPR".into(),
            content: "Data protection".into(),
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            is_pinned: true,
            is_relevant: true,
            tags: vec!["privacy".into(), "EU".into()],
            sort_order: 0,
            created_at: now,
            updated_at: now,
            move_notes: Some("moved in".into()),
        };
        let json = serde_json::to_string_pretty(&regulation).unwrap();
        let back: Regulation = serde_json::from_str(&json).unwrap();
        assert_eq!(regulation, back);
        assert!(back.has_tag("EU"));
        assert!(!back.has_tag("eu"));
    }
}
