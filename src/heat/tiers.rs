//! Heat tier classification.
//!
//! Tiers are assigned from percentile rank, not raw score, so the badge
//! distribution stays stable as overall network activity rises and falls:
//! the top 5% of sites are Hot this week and every week.

use serde::{Deserialize, Serialize};

use crate::config::HeatTierThresholds;
use crate::core::score_types::Score0To100;

/// Relative activity tier for a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatTier {
    Hot,
    Rising,
    Active,
    Normal,
    Low,
}

impl HeatTier {
    /// Every tier, hottest first.
    pub const ALL: [HeatTier; 5] = [
        HeatTier::Hot,
        HeatTier::Rising,
        HeatTier::Active,
        HeatTier::Normal,
        HeatTier::Low,
    ];

    /// Display label for feed badges.
    pub fn label(&self) -> &'static str {
        match self {
            HeatTier::Hot => "Hot",
            HeatTier::Rising => "Rising",
            HeatTier::Active => "Active",
            HeatTier::Normal => "Normal",
            HeatTier::Low => "Low",
        }
    }
}

/// Classify a percentile rank into a heat tier.
///
/// Cutoffs are inclusive: a rank exactly at a threshold lands in the higher
/// tier. Total over all inputs, including a zero rank.
pub fn heat_tier_for_rank(rank: Score0To100, thresholds: &HeatTierThresholds) -> HeatTier {
    let rank = rank.value();
    if rank >= thresholds.hot {
        HeatTier::Hot
    } else if rank >= thresholds.rising {
        HeatTier::Rising
    } else if rank >= thresholds.active {
        HeatTier::Active
    } else if rank >= thresholds.normal {
        HeatTier::Normal
    } else {
        HeatTier::Low
    }
}
