//! Collaborator trait definitions for clean module boundaries.
//!
//! The engine never talks to a database or an HTTP client directly; it pulls
//! everything through these two seams. Production wires them to the activity
//! store service, tests wire them to in-memory fakes.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::core::activity::ActivityItem;
use crate::heat::HeatFactors;
use crate::importance::ImportanceActivityState;
use crate::prefs::UserPreferences;

/// Source of activity records and per-site scoring inputs.
///
/// Implementations own the query window (how far back "recent" reaches) and
/// any persistence details. Returned data may be arbitrarily dirty; the
/// engine normalizes and sanitizes it before scoring.
pub trait ActivityStore: Send + Sync {
    /// Recent activity records, newest or oldest first (order is not relied
    /// upon; ranking re-sorts).
    fn recent_activity(&self) -> Result<Vec<ActivityItem>>;

    /// Raw heat factors keyed by site id.
    fn heat_factors(&self) -> Result<BTreeMap<String, HeatFactors>>;

    /// Importance and activity state keyed by site id.
    fn importance_states(&self) -> Result<BTreeMap<String, ImportanceActivityState>>;
}

/// Source of per-user personalization state.
pub trait PreferenceSource: Send + Sync {
    /// Preferences for `user_id`. Unknown users should come back as
    /// [`UserPreferences::default`], not as an error.
    fn preferences(&self, user_id: &str) -> Result<UserPreferences>;
}
