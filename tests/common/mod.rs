// Shared fixtures for stratafeed integration tests
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Duration, TimeZone, Utc};

use stratafeed::heat::HeatFactors;
use stratafeed::importance::ImportanceActivityState;
use stratafeed::prefs::UserPreferences;
use stratafeed::{ActivityItem, ActivityStore, ActivityType, PreferenceSource, Score0To100, Target};

/// Route library log output through the test harness.
///
/// Only the first call installs the logger; the rest are no-ops, so every
/// test that exercises a logging path can call this unconditionally.
pub fn capture_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed clock shared by every test.
pub fn at_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

// Activity item builder with sensible defaults
pub struct ItemBuilder {
    item: ActivityItem,
}

impl ItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: ActivityItem {
                id: id.to_string(),
                activity_type: ActivityType::PostCreated,
                actor_id: "user-1".to_string(),
                target: None,
                site_id: None,
                tags: BTreeSet::new(),
                engagement_score: 0,
                created_at: at_noon(),
            },
        }
    }

    pub fn activity_type(mut self, activity_type: ActivityType) -> Self {
        self.item.activity_type = activity_type;
        self
    }

    pub fn actor(mut self, actor_id: &str) -> Self {
        self.item.actor_id = actor_id.to_string();
        self
    }

    pub fn site(mut self, site_id: &str) -> Self {
        self.item.site_id = Some(site_id.to_string());
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.item.target = Some(target);
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.item.tags.insert(tag.to_string());
        self
    }

    pub fn engagement(mut self, engagement: u32) -> Self {
        self.item.engagement_score = engagement;
        self
    }

    pub fn hours_ago(mut self, hours: i64) -> Self {
        self.item.created_at = at_noon() - Duration::hours(hours);
        self
    }

    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.item.created_at = at_noon() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> ActivityItem {
        self.item
    }
}

pub fn item(id: &str) -> ItemBuilder {
    ItemBuilder::new(id)
}

pub fn prefs(sites: &[&str], users: &[&str]) -> UserPreferences {
    UserPreferences {
        followed_sites: sites.iter().map(|s| s.to_string()).collect(),
        followed_users: users.iter().map(|u| u.to_string()).collect(),
    }
}

pub fn heat_factors(
    posts: u32,
    media: u32,
    velocity: f64,
    visitors: u32,
    comments: u32,
) -> HeatFactors {
    HeatFactors {
        recent_posts: posts,
        recent_media: media,
        vote_velocity: velocity,
        unique_visitors: visitors,
        comment_activity: comments,
    }
}

pub fn importance_state(
    importance: f64,
    activity: f64,
    updated_at: Option<DateTime<Utc>>,
) -> ImportanceActivityState {
    ImportanceActivityState {
        importance_score: Score0To100::new(importance),
        activity_score: activity,
        activity_updated_at: updated_at,
    }
}

/// In-memory activity store with call counters and a failure switch.
///
/// Counters are behind `Arc` so a test can keep handles after the store
/// moves into an engine.
pub struct InMemoryStore {
    pub items: Vec<ActivityItem>,
    pub factors: BTreeMap<String, HeatFactors>,
    pub states: BTreeMap<String, ImportanceActivityState>,
    pub activity_calls: Arc<AtomicUsize>,
    pub factor_calls: Arc<AtomicUsize>,
    pub state_calls: Arc<AtomicUsize>,
    pub failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            factors: BTreeMap::new(),
            states: BTreeMap::new(),
            activity_calls: Arc::new(AtomicUsize::new(0)),
            factor_calls: Arc::new(AtomicUsize::new(0)),
            state_calls: Arc::new(AtomicUsize::new(0)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_items(mut self, items: Vec<ActivityItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_factors(mut self, site_id: &str, factors: HeatFactors) -> Self {
        self.factors.insert(site_id.to_string(), factors);
        self
    }

    pub fn with_state(mut self, site_id: &str, state: ImportanceActivityState) -> Self {
        self.states.insert(site_id.to_string(), state);
        self
    }

    fn check_failure(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("store unavailable"))
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStore for InMemoryStore {
    fn recent_activity(&self) -> anyhow::Result<Vec<ActivityItem>> {
        self.activity_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.items.clone())
    }

    fn heat_factors(&self) -> anyhow::Result<BTreeMap<String, HeatFactors>> {
        self.factor_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.factors.clone())
    }

    fn importance_states(&self) -> anyhow::Result<BTreeMap<String, ImportanceActivityState>> {
        self.state_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.states.clone())
    }
}

/// Preference source backed by a map; unknown users get empty preferences.
pub struct StaticPrefs {
    by_user: BTreeMap<String, UserPreferences>,
}

impl StaticPrefs {
    pub fn new() -> Self {
        Self {
            by_user: BTreeMap::new(),
        }
    }

    pub fn with_user(mut self, user_id: &str, preferences: UserPreferences) -> Self {
        self.by_user.insert(user_id.to_string(), preferences);
        self
    }
}

impl Default for StaticPrefs {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSource for StaticPrefs {
    fn preferences(&self, user_id: &str) -> anyhow::Result<UserPreferences> {
        Ok(self.by_user.get(user_id).cloned().unwrap_or_default())
    }
}
