//! Importance and activity blending.
//!
//! A site has two scores with different lifetimes: an editorial importance
//! score (0-100, effectively static) and an accumulated activity score that
//! grows with engagement and decays exponentially once it stops. The blend
//! of the two, the effective score, is what surfaces currently-interesting
//! sites without letting a week-old burst outrank a landmark forever.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DecayConfig;
use crate::core::score_types::Score0To100;

/// Minimum effective score for the Landmark tier.
const LANDMARK_MIN: f64 = 80.0;
/// Minimum effective score for the Major tier.
const MAJOR_MIN: f64 = 60.0;
/// Minimum effective score for the Notable tier; below is Minor.
const NOTABLE_MIN: f64 = 40.0;

/// Persisted importance and activity state for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceActivityState {
    /// Editorial importance, 0-100. Changes only when curators re-assess
    /// the site.
    pub importance_score: Score0To100,

    /// Accumulated activity boosts. Unbounded above; decays from
    /// `activity_updated_at`.
    #[serde(default)]
    pub activity_score: f64,

    /// When the activity score was last bumped. `None` means the site has
    /// never had activity recorded.
    #[serde(default)]
    pub activity_updated_at: Option<DateTime<Utc>>,
}

/// Significance tier, derived from the effective score.
///
/// Because the effective score blends decayed activity in, a sustained
/// burst can lift a site a tier; the label falls back as the boost decays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceTier {
    Landmark,
    Major,
    Notable,
    Minor,
}

impl ImportanceTier {
    /// Every tier, most significant first.
    pub const ALL: [ImportanceTier; 4] = [
        ImportanceTier::Landmark,
        ImportanceTier::Major,
        ImportanceTier::Notable,
        ImportanceTier::Minor,
    ];

    /// Display label for site badges.
    pub fn label(&self) -> &'static str {
        match self {
            ImportanceTier::Landmark => "Landmark",
            ImportanceTier::Major => "Major",
            ImportanceTier::Notable => "Notable",
            ImportanceTier::Minor => "Minor",
        }
    }
}

/// Classify an effective score. Cutoffs are inclusive.
///
/// Total over all reals: effective scores range past 100 up to the
/// configured cap, and anything negative or non-finite lands in Minor.
pub fn importance_tier(effective: f64) -> ImportanceTier {
    if effective >= LANDMARK_MIN {
        ImportanceTier::Landmark
    } else if effective >= MAJOR_MIN {
        ImportanceTier::Major
    } else if effective >= NOTABLE_MIN {
        ImportanceTier::Notable
    } else {
        ImportanceTier::Minor
    }
}

/// Activity score decayed to `now`.
///
/// Exponential half-life decay: after `activity_half_life_days` the
/// contribution halves. A site with no recorded activity contributes zero,
/// as does a stored score that is negative or non-finite. A timestamp in
/// the future (collaborator clock skew) counts as zero elapsed time.
pub fn decayed_activity(
    state: &ImportanceActivityState,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> f64 {
    let Some(updated_at) = state.activity_updated_at else {
        return 0.0;
    };

    let activity = if state.activity_score.is_finite() {
        state.activity_score.max(0.0)
    } else {
        0.0
    };

    let elapsed_days = (now - updated_at).num_milliseconds().max(0) as f64 / 86_400_000.0;
    activity * (-(elapsed_days / config.activity_half_life_days)).exp2()
}

/// Blend importance with decayed activity into the effective score.
///
/// `effective = clamp(importance + decayed_activity, 0, cap)`. The cap sits
/// above 100 so a genuinely hot site can outrank a perfectly-scored quiet
/// one, but a runaway activity total cannot dominate the feed.
pub fn effective_score(
    state: &ImportanceActivityState,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> f64 {
    let blended = state.importance_score.value() + decayed_activity(state, config, now);
    blended.clamp(0.0, config.effective_score_cap)
}

/// Whether a site's recent activity currently outweighs its importance.
///
/// Three conditions, all required: the last activity falls inside the
/// trending window, the decayed activity is still positive, and it exceeds
/// the site's base importance. Minor sites trend on modest bursts; a
/// landmark must earn it.
pub fn is_trending(
    state: &ImportanceActivityState,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> bool {
    let Some(updated_at) = state.activity_updated_at else {
        return false;
    };

    let elapsed_hours = (now - updated_at).num_milliseconds().max(0) as f64 / 3_600_000.0;
    if elapsed_hours > config.trending_window_hours {
        return false;
    }

    let decayed = decayed_activity(state, config, now);
    decayed > 0.0 && decayed > state.importance_score.value()
}

/// Everything a feed card needs to know about a site's current standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveImportance {
    pub effective_score: f64,
    pub tier: ImportanceTier,
    pub is_trending: bool,
}

/// Evaluate one site's state at `now`.
pub fn evaluate(
    state: &ImportanceActivityState,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> EffectiveImportance {
    let effective = effective_score(state, config, now);
    EffectiveImportance {
        effective_score: effective,
        tier: importance_tier(effective),
        is_trending: is_trending(state, config, now),
    }
}

/// Evaluate every site's state at `now`, keyed by site id.
pub fn evaluate_sites(
    states: &std::collections::BTreeMap<String, ImportanceActivityState>,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> std::collections::BTreeMap<String, EffectiveImportance> {
    states
        .iter()
        .map(|(site_id, state)| (site_id.clone(), evaluate(state, config, now)))
        .collect()
}
