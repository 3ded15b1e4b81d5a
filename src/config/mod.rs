//! Engine configuration: scoring weights, calibration, decay constants,
//! tier cutoffs, and cache policy.
//!
//! Every tunable lives here so the scoring modules stay pure functions of
//! `(input, config, now)`. Defaults reproduce production behavior; a TOML
//! file can override any subset of fields.

mod decay;
mod heat;
mod loader;
mod tiers;

pub use decay::DecayConfig;
pub use heat::{HeatCalibration, HeatConfig, HeatWeights};
pub use loader::{from_toml_path, from_toml_str, load_config};
pub use tiers::HeatTierThresholds;

use serde::{Deserialize, Serialize};

/// Cache policy for derived per-site scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Minutes a cached score set stays fresh before recomputation.
    #[serde(default = "default_refresh_interval_minutes")]
    pub refresh_interval_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_interval_minutes: default_refresh_interval_minutes(),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_interval_minutes == 0 {
            return Err("refresh_interval_minutes must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_refresh_interval_minutes() -> u64 {
    5
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub heat: HeatConfig,
    pub decay: DecayConfig,
    pub tiers: HeatTierThresholds,
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Validate every section. The first problem found is returned.
    pub fn validate(&self) -> Result<(), String> {
        self.heat.validate()?;
        self.decay.validate()?;
        self.tiers.validate()?;
        self.cache.validate()
    }
}
