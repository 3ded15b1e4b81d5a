//! Feed sort strategies and ranking.
//!
//! All three strategies produce a total order: every comparison chain ends
//! at the item id, so equal scores and equal timestamps still rank
//! identically from run to run and pagination never straddles a coin flip.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DecayConfig;
use crate::core::activity::ActivityItem;

/// How a feed is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Newest first.
    #[default]
    New,
    /// Time-decayed engagement first.
    Hot,
    /// Raw engagement first.
    Top,
}

impl SortStrategy {
    /// Wire tag for API parameters.
    pub fn tag(&self) -> &'static str {
        match self {
            SortStrategy::New => "new",
            SortStrategy::Hot => "hot",
            SortStrategy::Top => "top",
        }
    }

    /// Parse a wire tag; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(SortStrategy::New),
            "hot" => Some(SortStrategy::Hot),
            "top" => Some(SortStrategy::Top),
            _ => None,
        }
    }

    /// Parse a client-supplied tag, falling back to the default sort.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            log::debug!("Unknown sort strategy {:?}; using {:?}", raw, Self::default());
            Self::default()
        })
    }
}

/// Time-decayed engagement for the hot sort.
///
/// `engagement * base^age_hours` with fractional hours, so an item posted
/// forty minutes ago already ranks above an identical one from two hours
/// ago. At the default base of 0.95 engagement halves roughly every 13.5
/// hours. Zero engagement stays zero at any age.
pub fn hot_score(item: &ActivityItem, now: DateTime<Utc>, decay_base: f64) -> f64 {
    f64::from(item.engagement_score) * decay_base.powf(item.age_hours(now))
}

/// Order items under a sort strategy.
///
/// Hot scoring decorates each item once rather than recomputing inside the
/// comparator, so one ranking pass costs one `powf` per item.
pub fn rank_items(
    mut items: Vec<ActivityItem>,
    sort: SortStrategy,
    decay: &DecayConfig,
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    match sort {
        SortStrategy::New => {
            items.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            });
            items
        }
        SortStrategy::Top => {
            items.sort_by(|a, b| {
                b.engagement_score
                    .cmp(&a.engagement_score)
                    .then_with(|| b.created_at.cmp(&a.created_at))
                    .then_with(|| a.id.cmp(&b.id))
            });
            items
        }
        SortStrategy::Hot => {
            let mut decorated: Vec<(f64, ActivityItem)> = items
                .into_iter()
                .map(|item| (hot_score(&item, now, decay.hot_decay_base), item))
                .collect();
            decorated.sort_by(|(score_a, a), (score_b, b)| {
                score_b
                    .partial_cmp(score_a)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.created_at.cmp(&a.created_at))
                    .then_with(|| a.id.cmp(&b.id))
            });
            decorated.into_iter().map(|(_, item)| item).collect()
        }
    }
}
