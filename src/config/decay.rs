//! Time-decay parameters for hot ranking and importance blending.

use serde::{Deserialize, Serialize};

/// Decay constants shared by the hot sort and the importance blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Per-hour multiplier for hot-sort engagement. At 0.95 an item loses
    /// half its rank weight roughly every 13.5 hours.
    #[serde(default = "default_hot_decay_base")]
    pub hot_decay_base: f64,

    /// Days for a site's activity contribution to halve.
    #[serde(default = "default_activity_half_life_days")]
    pub activity_half_life_days: f64,

    /// How far back activity still counts as "trending".
    #[serde(default = "default_trending_window_hours")]
    pub trending_window_hours: f64,

    /// Upper bound on the blended effective score. Above 100 so a burst of
    /// activity can lift a site past a perfect importance score.
    #[serde(default = "default_effective_score_cap")]
    pub effective_score_cap: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hot_decay_base: default_hot_decay_base(),
            activity_half_life_days: default_activity_half_life_days(),
            trending_window_hours: default_trending_window_hours(),
            effective_score_cap: default_effective_score_cap(),
        }
    }
}

impl DecayConfig {
    /// Validate that every constant is in its workable range.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.hot_decay_base > 0.0 && self.hot_decay_base < 1.0) {
            return Err(format!(
                "hot_decay_base must be strictly between 0.0 and 1.0, got {}",
                self.hot_decay_base
            ));
        }
        if !(self.activity_half_life_days.is_finite() && self.activity_half_life_days > 0.0) {
            return Err(format!(
                "activity_half_life_days must be positive, got {}",
                self.activity_half_life_days
            ));
        }
        if !(self.trending_window_hours.is_finite() && self.trending_window_hours > 0.0) {
            return Err(format!(
                "trending_window_hours must be positive, got {}",
                self.trending_window_hours
            ));
        }
        if !(self.effective_score_cap.is_finite() && self.effective_score_cap >= 100.0) {
            return Err(format!(
                "effective_score_cap must be at least 100.0, got {}",
                self.effective_score_cap
            ));
        }
        Ok(())
    }
}

fn default_hot_decay_base() -> f64 {
    0.95
}

fn default_activity_half_life_days() -> f64 {
    7.0
}

fn default_trending_window_hours() -> f64 {
    72.0
}

fn default_effective_score_cap() -> f64 {
    150.0
}
