//! Percentile cutoffs for heat tier classification.

use serde::{Deserialize, Serialize};

/// Percentile-rank floor for each heat tier.
///
/// A site whose rank meets or beats `hot` is Hot, and so on down; anything
/// below `normal` is Low. Thresholds are percentile ranks, so shifting them
/// reshapes tier populations without touching raw scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatTierThresholds {
    /// Minimum percentile rank for the Hot tier (top 5% by default).
    #[serde(default = "default_hot_threshold")]
    pub hot: f64,

    /// Minimum percentile rank for the Rising tier.
    #[serde(default = "default_rising_threshold")]
    pub rising: f64,

    /// Minimum percentile rank for the Active tier.
    #[serde(default = "default_active_threshold")]
    pub active: f64,

    /// Minimum percentile rank for the Normal tier; below this is Low.
    #[serde(default = "default_normal_threshold")]
    pub normal: f64,
}

impl Default for HeatTierThresholds {
    fn default() -> Self {
        Self {
            hot: default_hot_threshold(),
            rising: default_rising_threshold(),
            active: default_active_threshold(),
            normal: default_normal_threshold(),
        }
    }
}

impl HeatTierThresholds {
    /// Validate that cutoffs are in range and strictly descending.
    pub fn validate(&self) -> Result<(), String> {
        for (value, name) in [
            (self.hot, "hot"),
            (self.rising, "rising"),
            (self.active, "active"),
            (self.normal, "normal"),
        ] {
            if !(value.is_finite() && (0.0..=100.0).contains(&value)) {
                return Err(format!(
                    "{} threshold must be between 0.0 and 100.0, got {}",
                    name, value
                ));
            }
        }
        if !(self.hot > self.rising && self.rising > self.active && self.active > self.normal) {
            return Err(format!(
                "tier thresholds must be strictly descending, got {} > {} > {} > {}",
                self.hot, self.rising, self.active, self.normal
            ));
        }
        Ok(())
    }
}

fn default_hot_threshold() -> f64 {
    95.0
}

fn default_rising_threshold() -> f64 {
    85.0
}

fn default_active_threshold() -> f64 {
    70.0
}

fn default_normal_threshold() -> f64 {
    30.0
}
