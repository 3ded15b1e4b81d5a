//! Site heat scoring.
//!
//! Takes windowed activity factors for every site and produces a
//! [`SiteHeatScore`] per site: the weighted 0-100 score, a percentile-based
//! tier, and a human-readable trend reason. Pure from end to end; the
//! clock and all tunables come in as arguments.

pub mod factors;
pub mod percentile;
pub mod score;
pub mod tiers;
pub mod trend;

pub use factors::HeatFactors;
pub use percentile::rank_percentile;
pub use score::{calculate_heat_score, normalize_factor};
pub use tiers::{heat_tier_for_rank, HeatTier};
pub use trend::trend_reason;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{HeatConfig, HeatTierThresholds};
use crate::core::score_types::Score0To100;

/// Computed heat state for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteHeatScore {
    pub site_id: String,
    pub heat_score: Score0To100,
    pub heat_tier: HeatTier,
    pub trend_reason: String,
    pub last_calculated: DateTime<Utc>,
}

/// Score every site and classify it against the rest of the population.
///
/// Tier assignment needs all raw scores first (it ranks each site within
/// the full population), so this runs in two passes. Output order follows
/// the map's key order and is fully deterministic.
pub fn score_sites(
    factors_by_site: &BTreeMap<String, HeatFactors>,
    config: &HeatConfig,
    thresholds: &HeatTierThresholds,
    now: DateTime<Utc>,
) -> Vec<SiteHeatScore> {
    let scored: Vec<(&String, &HeatFactors, Score0To100)> = factors_by_site
        .iter()
        .map(|(site_id, factors)| (site_id, factors, calculate_heat_score(factors, config)))
        .collect();

    let population: Vec<f64> = scored.iter().map(|(_, _, score)| score.value()).collect();

    scored
        .into_iter()
        .map(|(site_id, factors, heat_score)| {
            let rank = rank_percentile(heat_score.value(), &population);
            SiteHeatScore {
                site_id: site_id.clone(),
                heat_score,
                heat_tier: heat_tier_for_rank(rank, thresholds),
                trend_reason: trend_reason(factors),
                last_calculated: now,
            }
        })
        .collect()
}
