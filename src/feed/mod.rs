//! Feed assembly: filter, rank, dedupe.
//!
//! [`generate_feed`] is the whole pipeline as one pure function. Given the
//! same items, criteria, preferences, and clock it returns the same feed,
//! which is what makes feeds cacheable and pagination stable.

pub mod filters;
pub mod rank;

pub use filters::{
    filter_items, in_following_scope, item_passes, matches_activity_types, matches_scope,
    matches_site, matches_tag, parse_activity_types, within_time_range, FeedFilters, FeedScope,
    FilterMetrics,
};
pub use rank::{hot_score, rank_items, SortStrategy};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::config::DecayConfig;
use crate::core::activity::ActivityItem;
use crate::prefs::UserPreferences;

/// A fully assembled feed.
///
/// Entries are an immutable vector: pages and prefixes are cheap to hand
/// out without cloning the items themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeed {
    pub entries: Vector<ActivityItem>,
    pub sort: SortStrategy,
    pub generated_at: DateTime<Utc>,
    pub metrics: FilterMetrics,
}

impl RankedFeed {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> Vector<ActivityItem> {
        self.entries.iter().take(n).cloned().collect()
    }

    /// One page of entries. Past-the-end pages are empty, not an error.
    pub fn page(&self, offset: usize, limit: usize) -> Vector<ActivityItem> {
        self.entries.iter().skip(offset).take(limit).cloned().collect()
    }
}

/// Drop repeated ids, keeping the first (highest-ranked) occurrence.
///
/// Runs after ranking so a duplicate row from the store can never push its
/// better-placed twin out of the feed.
fn dedupe_ranked(items: Vec<ActivityItem>, metrics: &mut FilterMetrics) -> Vec<ActivityItem> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            if seen.insert(item.id.clone()) {
                true
            } else {
                metrics.duplicates_removed += 1;
                false
            }
        })
        .collect()
}

/// Build a feed: filter, rank, dedupe.
///
/// Pure: the clock comes in as `now` and nothing here touches a store.
/// The returned metrics account for every input item exactly once.
pub fn generate_feed(
    items: Vec<ActivityItem>,
    sort: SortStrategy,
    feed_filters: &FeedFilters,
    prefs: &UserPreferences,
    decay: &DecayConfig,
    now: DateTime<Utc>,
) -> RankedFeed {
    let mut metrics = FilterMetrics {
        total_items: items.len(),
        ..Default::default()
    };

    let kept = filter_items(items, feed_filters, prefs, &mut metrics);
    let ranked = rank_items(kept, sort, decay, now);
    let deduped = dedupe_ranked(ranked, &mut metrics);
    metrics.included = deduped.len();

    log::debug!(
        "Feed built: {} of {} items included ({} duplicates removed)",
        metrics.included,
        metrics.total_items,
        metrics.duplicates_removed
    );

    RankedFeed {
        entries: deduped.into_iter().collect(),
        sort,
        generated_at: now,
        metrics,
    }
}
