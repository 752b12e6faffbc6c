//! Summary figures for the stats bar and analytics panel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::activity::ActivityLogEntry;
use crate::regulation::{Category, Regulation, RegulationStatus};

/// Default number of entries in [`top_tags`].
pub const DEFAULT_TOP_TAGS: usize = 5;

/// Regulation counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub in_effect: usize,
    pub in_planning: usize,
    pub partially_applicable: usize,
    pub out_of_effect: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn from_regulations<'a, I>(regulations: I) -> Self
    where
        I: IntoIterator<Item = &'a Regulation>,
    {
        let mut counts = Self::default();
        for r in regulations {
            match r.status {
                RegulationStatus::InEffect => counts.in_effect += 1,
                RegulationStatus::InPlanning => counts.in_planning += 1,
                RegulationStatus::PartiallyApplicable => counts.partially_applicable += 1,
                RegulationStatus::OutOfEffect => counts.out_of_effect += 1,
            }
            counts.total += 1;
        }
        counts
    }

    pub fn get(&self, status: RegulationStatus) -> usize {
        match status {
            RegulationStatus::InEffect => self.in_effect,
            RegulationStatus::InPlanning => self.in_planning,
            RegulationStatus::PartiallyApplicable => self.partially_applicable,
            RegulationStatus::OutOfEffect => self.out_of_effect,
        }
    }
}

/// Regulation counts per category.
///
/// Percentages are taken over the active total (personal + relevant);
/// irrelevant regulations do not count towards it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub personal: usize,
    pub relevant: usize,
    pub irrelevant: usize,
}

impl CategoryDistribution {
    pub fn from_regulations<'a, I>(regulations: I) -> Self
    where
        I: IntoIterator<Item = &'a Regulation>,
    {
        let mut dist = Self::default();
        for r in regulations {
            match r.category {
                Category::Personal => dist.personal += 1,
                Category::Relevant => dist.relevant += 1,
                Category::Irrelevant => dist.irrelevant += 1,
            }
        }
        dist
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Personal => self.personal,
            Category::Relevant => self.relevant,
            Category::Irrelevant => self.irrelevant,
        }
    }

    pub fn active_total(&self) -> usize {
        self.personal + self.relevant
    }

    pub fn personal_percentage(&self) -> u32 {
        percentage(self.personal, self.active_total())
    }

    pub fn relevant_percentage(&self) -> u32 {
        percentage(self.relevant, self.active_total())
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// The `n` most used tags with their counts.
///
/// Ordered by descending count; equal counts keep first-seen order.
pub fn top_tags<'a, I>(regulations: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Regulation>,
{
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in regulations {
        for tag in &r.tags {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(tag.as_str());
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|tag| (tag.to_string(), counts[tag]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Activity entries whose timestamp falls on `date` (UTC).
pub fn activity_on<'a, I>(log: I, date: NaiveDate) -> usize
where
    I: IntoIterator<Item = &'a ActivityLogEntry>,
{
    log.into_iter()
        .filter(|e| e.timestamp.date_naive() == date)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_regulations;
    use chrono::Utc;

    #[test]
    fn seeded_status_counts() {
        let regs = sample_regulations(Utc::now());
        let counts = StatusCounts::from_regulations(&regs);
        assert_eq!(counts.total, 27);
        let summed = counts.in_effect
            + counts.in_planning
            + counts.partially_applicable
            + counts.out_of_effect;
        assert_eq!(summed, counts.total);
        assert_eq!(counts.get(RegulationStatus::OutOfEffect), 5);
    }

    #[test]
    fn distribution_percentages() {
        let regs = sample_regulations(Utc::now());
        let dist = CategoryDistribution::from_regulations(&regs);
        assert_eq!(dist.active_total(), 22);
        // 10/22 and 12/22
        assert_eq!(dist.personal_percentage(), 45);
        assert_eq!(dist.relevant_percentage(), 55);
        assert_eq!(CategoryDistribution::default().personal_percentage(), 0);
    }

    #[test]
    fn top_tags_ranked() {
        let regs = sample_regulations(Utc::now());
        let top = top_tags(&regs, DEFAULT_TOP_TAGS);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].0, "security");
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
