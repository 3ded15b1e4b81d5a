//! Feed filtering.
//!
//! Filters are ANDed: an item must pass every active criterion to stay in
//! the feed. Each rejection is attributed to the first stage that failed
//! (scope, type, site, tag, time) so [`FilterMetrics`] can explain exactly
//! where a thin feed lost its items.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::activity::{ActivityItem, ActivityType};
use crate::prefs::UserPreferences;

/// Whose activity the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedScope {
    /// Everything in the network.
    #[default]
    All,
    /// Only activity from followed users or on followed sites.
    Following,
}

impl FeedScope {
    pub fn tag(&self) -> &'static str {
        match self {
            FeedScope::All => "all",
            FeedScope::Following => "following",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(FeedScope::All),
            "following" => Some(FeedScope::Following),
            _ => None,
        }
    }

    /// Parse a client-supplied tag, falling back to the full feed.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            log::debug!("Unknown feed scope {:?}; using {:?}", raw, Self::default());
            Self::default()
        })
    }
}

/// Active feed criteria. Every field at its default means "no filtering".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedFilters {
    pub scope: FeedScope,

    /// Keep only these activity types. Empty means all types.
    pub activity_types: BTreeSet<ActivityType>,

    /// Keep only activity on this site.
    pub site_id: Option<String>,

    /// Keep only items carrying this tag (case-insensitive).
    pub tag: Option<String>,

    /// Keep only items created at or after this instant.
    pub since: Option<DateTime<Utc>>,

    /// Keep only items created at or before this instant.
    pub until: Option<DateTime<Utc>>,
}

/// Parse client-supplied activity type tags.
///
/// Unknown tags are dropped, not errored: filter values arrive from query
/// strings and an outdated client must still get a feed.
pub fn parse_activity_types<'a, I>(raw: I) -> BTreeSet<ActivityType>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(|tag| match ActivityType::parse(tag) {
            Some(activity_type) => Some(activity_type),
            None => {
                log::debug!("Ignoring unknown activity type filter {:?}", tag);
                None
            }
        })
        .collect()
}

/// Following-scope membership: activity by a followed user, or on a
/// followed site. Either connection is enough.
pub fn in_following_scope(item: &ActivityItem, prefs: &UserPreferences) -> bool {
    prefs.follows_user(&item.actor_id)
        || item
            .site_id
            .as_deref()
            .is_some_and(|site_id| prefs.follows_site(site_id))
}

pub fn matches_scope(item: &ActivityItem, scope: FeedScope, prefs: &UserPreferences) -> bool {
    match scope {
        FeedScope::All => true,
        FeedScope::Following => in_following_scope(item, prefs),
    }
}

pub fn matches_activity_types(item: &ActivityItem, types: &BTreeSet<ActivityType>) -> bool {
    types.is_empty() || types.contains(&item.activity_type)
}

pub fn matches_site(item: &ActivityItem, site_id: Option<&str>) -> bool {
    match site_id {
        None => true,
        Some(wanted) => item.site_id.as_deref() == Some(wanted),
    }
}

/// Case-insensitive exact tag match. Item tags are already lowercased at
/// ingestion; the filter value is lowercased here.
pub fn matches_tag(item: &ActivityItem, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(wanted) => item.tags.contains(&wanted.trim().to_lowercase()),
    }
}

/// Inclusive on both ends: an item created exactly at `since` or exactly at
/// `until` passes.
pub fn within_time_range(
    item: &ActivityItem,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
) -> bool {
    since.map_or(true, |start| item.created_at >= start)
        && until.map_or(true, |end| item.created_at <= end)
}

/// Whether an item passes every active filter.
pub fn item_passes(item: &ActivityItem, filters: &FeedFilters, prefs: &UserPreferences) -> bool {
    matches_scope(item, filters.scope, prefs)
        && matches_activity_types(item, &filters.activity_types)
        && matches_site(item, filters.site_id.as_deref())
        && matches_tag(item, filters.tag.as_deref())
        && within_time_range(item, filters.since, filters.until)
}

/// Where every input item went during one feed build.
///
/// `total_items` always equals `included` plus every rejection bucket, so a
/// feed response can show its own bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterMetrics {
    pub total_items: usize,
    pub filtered_by_scope: usize,
    pub filtered_by_type: usize,
    pub filtered_by_site: usize,
    pub filtered_by_tag: usize,
    pub filtered_by_time: usize,
    pub duplicates_removed: usize,
    pub included: usize,
}

impl FilterMetrics {
    /// Sum of every rejection bucket.
    pub fn total_filtered(&self) -> usize {
        self.filtered_by_scope
            + self.filtered_by_type
            + self.filtered_by_site
            + self.filtered_by_tag
            + self.filtered_by_time
            + self.duplicates_removed
    }

    /// Every input item is accounted for exactly once.
    pub fn accounts_for_all_items(&self) -> bool {
        self.total_items == self.included + self.total_filtered()
    }
}

/// Apply every filter, attributing each rejection to its first failing
/// stage.
pub fn filter_items(
    items: Vec<ActivityItem>,
    filters: &FeedFilters,
    prefs: &UserPreferences,
    metrics: &mut FilterMetrics,
) -> Vec<ActivityItem> {
    items
        .into_iter()
        .filter(|item| {
            if !matches_scope(item, filters.scope, prefs) {
                metrics.filtered_by_scope += 1;
                return false;
            }
            if !matches_activity_types(item, &filters.activity_types) {
                metrics.filtered_by_type += 1;
                return false;
            }
            if !matches_site(item, filters.site_id.as_deref()) {
                metrics.filtered_by_site += 1;
                return false;
            }
            if !matches_tag(item, filters.tag.as_deref()) {
                metrics.filtered_by_tag += 1;
                return false;
            }
            if !within_time_range(item, filters.since, filters.until) {
                metrics.filtered_by_time += 1;
                return false;
            }
            true
        })
        .collect()
}
