//! Search and filtering over regulation snapshots.
//!
//! These helpers never touch the store; they take whatever slice a view
//! holds and return borrowed results.

use serde::{Deserialize, Serialize};

use crate::regulation::{Category, Regulation, RegulationStatus};

/// Default number of hits returned by [`global_search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Case-insensitive substring match on title, content or any tag.
///
/// A blank query matches everything.
pub fn matches_text(regulation: &Regulation, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    regulation.title.to_lowercase().contains(&needle)
        || regulation.content.to_lowercase().contains(&needle)
        || regulation
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// A combined text/status/category filter, as used by a board column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationFilter {
    pub text: String,
    pub status: Option<RegulationStatus>,
    pub category: Option<Category>,
}

impl RegulationFilter {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text: query.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: RegulationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matches(&self, regulation: &Regulation) -> bool {
        self.status.map_or(true, |s| regulation.status == s)
            && self.category.map_or(true, |c| regulation.category == c)
            && matches_text(regulation, &self.text)
    }

    /// Keep the matching regulations, preserving input order.
    pub fn apply<'a, I>(&self, regulations: I) -> Vec<&'a Regulation>
    where
        I: IntoIterator<Item = &'a Regulation>,
    {
        regulations.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Search across every category.
///
/// Returns nothing for a blank query; otherwise the first `limit` matches
/// in list order.
pub fn global_search<'a>(
    regulations: &'a [Regulation],
    query: &str,
    limit: usize,
) -> Vec<&'a Regulation> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    regulations
        .iter()
        .filter(|r| matches_text(r, query))
        .take(limit)
        .collect()
}

/// Sort into display order: pinned before unpinned, then ascending
/// `sort_order`. The sort is stable.
pub fn sort_for_display(regulations: &mut [&Regulation]) {
    regulations.sort_by_key(|r| (!r.is_pinned, r.sort_order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn reg(title: &str, content: &str, tags: &[&str]) -> Regulation {
        let now = Utc::now();
        Regulation {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            is_pinned: false,
            is_relevant: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            sort_order: 0,
            created_at: now,
            updated_at: now,
            move_notes: None,
        }
    }

    #[test]
    fn text_match_covers_title_content_tags() {
        let r = reg("HIPAA Privacy Rule", "health records", &["PHI"]);
        assert!(matches_text(&r, "hipaa"));
        assert!(matches_text(&r, "RECORDS"));
        assert!(matches_text(&r, "phi"));
        assert!(matches_text(&r, "   "));
        assert!(!matches_text(&r, "gdpr"));
    }

    #[test]
    fn global_search_limits_and_skips_blank() {
        let regs: Vec<Regulation> = (0..12)
            .map(|i| reg(&format!("Policy {i}"), "", &[]))
            .collect();
        assert!(global_search(&regs, "  ", 8).is_empty());
        let hits = global_search(&regs, "policy", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 8);
        assert_eq!(hits[0].title, "Policy 0");
    }

    #[test]
    fn filter_combines_status_and_text() {
        let mut planned = reg("AI Governance", "", &["AI"]);
        planned.status = RegulationStatus::InPlanning;
        let active = reg("AI Act", "", &["AI"]);
        let regs = vec![planned, active];

        let filter = RegulationFilter::text("ai").with_status(RegulationStatus::InPlanning);
        let hits = filter.apply(&regs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "AI Governance");

        let none = RegulationFilter::default().with_category(Category::Irrelevant);
        assert!(none.apply(&regs).is_empty());
    }
}
