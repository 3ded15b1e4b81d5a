// Export modules for library usage
pub mod cache;
pub mod config;
pub mod core;
pub mod engine;
pub mod feed;
pub mod heat;
pub mod importance;
pub mod prefs;

// Re-export commonly used types
pub use crate::core::{
    items_from_json, ActivityItem, ActivityStore, ActivityType, Error, PreferenceSource, Result,
    Score0To100, Target, TargetType,
};

pub use crate::config::{
    from_toml_path, from_toml_str, load_config, CacheConfig, DecayConfig, EngineConfig,
    HeatCalibration, HeatConfig, HeatTierThresholds, HeatWeights,
};

pub use crate::feed::{
    generate_feed, hot_score, parse_activity_types, rank_items, FeedFilters, FeedScope,
    FilterMetrics, RankedFeed, SortStrategy,
};

pub use crate::heat::{
    calculate_heat_score, rank_percentile, score_sites, trend_reason, HeatFactors, HeatTier,
    SiteHeatScore,
};

pub use crate::importance::{
    decayed_activity, effective_score, evaluate, evaluate_sites, importance_tier, is_trending,
    EffectiveImportance, ImportanceActivityState, ImportanceTier,
};

pub use crate::cache::ScoreCache;
pub use crate::engine::FeedEngine;
pub use crate::prefs::UserPreferences;
