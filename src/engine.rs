//! The feed engine: an imperative shell around the pure scoring core.
//!
//! [`FeedEngine`] owns the collaborators (activity store, preference
//! source), the validated configuration, and the score caches. Every
//! scoring decision is delegated to the pure functions in [`heat`],
//! [`importance`], and [`feed`]; this module only fetches, normalizes,
//! caches, and hands back results.
//!
//! [`heat`]: crate::heat
//! [`importance`]: crate::importance
//! [`feed`]: crate::feed

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::cache::ScoreCache;
use crate::config::EngineConfig;
use crate::core::activity::ActivityItem;
use crate::core::errors::{Error, Result};
use crate::core::traits::{ActivityStore, PreferenceSource};
use crate::feed::{generate_feed, FeedFilters, RankedFeed, SortStrategy};
use crate::heat::{score_sites, SiteHeatScore};
use crate::importance::{evaluate_sites, EffectiveImportance};
use crate::prefs::UserPreferences;

/// Orchestrates feed generation and per-site scoring.
///
/// Holds mutable cache state, so callers drive it through `&mut self`; the
/// engine itself never spawns threads or takes locks.
pub struct FeedEngine<S, P> {
    config: EngineConfig,
    store: S,
    preferences: P,
    fallback_preferences: UserPreferences,
    heat_cache: ScoreCache<Vec<SiteHeatScore>>,
    importance_cache: ScoreCache<BTreeMap<String, EffectiveImportance>>,
}

impl<S: ActivityStore, P: PreferenceSource> FeedEngine<S, P> {
    /// Build an engine, rejecting invalid configuration up front.
    pub fn new(config: EngineConfig, store: S, preferences: P) -> Result<Self> {
        config.validate().map_err(Error::Config)?;
        let ttl = Duration::minutes(config.cache.refresh_interval_minutes as i64);
        Ok(Self {
            config,
            store,
            preferences,
            fallback_preferences: UserPreferences::default(),
            heat_cache: ScoreCache::new(ttl),
            importance_cache: ScoreCache::new(ttl),
        })
    }

    /// Preferences applied field-by-field when a user has expressed none.
    ///
    /// Typically an editorial starter set so a brand-new user's following
    /// feed is not empty.
    pub fn with_fallback_preferences(mut self, fallback: UserPreferences) -> Self {
        self.fallback_preferences = fallback;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a personalized feed for `user_id` at `now`.
    ///
    /// Activity comes from the store on every call (feeds must reflect new
    /// items immediately); only the derived site scores are cached.
    pub fn feed(
        &mut self,
        user_id: &str,
        sort: SortStrategy,
        filters: &FeedFilters,
        now: DateTime<Utc>,
    ) -> Result<RankedFeed> {
        let prefs = self.effective_preferences(user_id)?;
        let items: Vec<ActivityItem> = self
            .store
            .recent_activity()?
            .into_iter()
            .map(ActivityItem::normalized)
            .collect();
        Ok(generate_feed(
            items,
            sort,
            filters,
            &prefs,
            &self.config.decay,
            now,
        ))
    }

    /// Current heat scores for every site, recomputed when stale.
    pub fn site_heat(&mut self, now: DateTime<Utc>) -> Result<&[SiteHeatScore]> {
        let store = &self.store;
        let config = &self.config;
        let scores = self.heat_cache.get_or_refresh(now, || {
            let factors = store.heat_factors()?;
            let scores = score_sites(&factors, &config.heat, &config.tiers, now);
            log::debug!("Recomputed heat scores for {} sites", scores.len());
            Ok::<_, Error>(scores)
        })?;
        Ok(scores)
    }

    /// Current effective importance for every site, recomputed when stale.
    pub fn site_importance(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<&BTreeMap<String, EffectiveImportance>> {
        let store = &self.store;
        let config = &self.config;
        let evaluated = self.importance_cache.get_or_refresh(now, || {
            let states = store.importance_states()?;
            let evaluated = evaluate_sites(&states, &config.decay, now);
            log::debug!("Re-evaluated importance for {} sites", evaluated.len());
            Ok::<_, Error>(evaluated)
        })?;
        Ok(evaluated)
    }

    /// The preferences actually used for `user_id`: their own, with empty
    /// fields filled from the fallback set.
    pub fn effective_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        let own = self.preferences.preferences(user_id)?;
        Ok(own.or_fallback(&self.fallback_preferences))
    }

    /// Drop both score caches; the next access recomputes.
    pub fn invalidate_caches(&mut self) {
        self.heat_cache.invalidate();
        self.importance_cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct EmptyStore;

    impl ActivityStore for EmptyStore {
        fn recent_activity(&self) -> anyhow::Result<Vec<ActivityItem>> {
            Ok(Vec::new())
        }

        fn heat_factors(&self) -> anyhow::Result<BTreeMap<String, crate::heat::HeatFactors>> {
            Ok(BTreeMap::new())
        }

        fn importance_states(
            &self,
        ) -> anyhow::Result<BTreeMap<String, crate::importance::ImportanceActivityState>> {
            Ok(BTreeMap::new())
        }
    }

    struct NoPrefs;

    impl PreferenceSource for NoPrefs {
        fn preferences(&self, _user_id: &str) -> anyhow::Result<UserPreferences> {
            Ok(UserPreferences::default())
        }
    }

    struct FailingPrefs;

    impl PreferenceSource for FailingPrefs {
        fn preferences(&self, _user_id: &str) -> anyhow::Result<UserPreferences> {
            Err(anyhow!("preference service unavailable"))
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.decay.hot_decay_base = 2.0;

        let result = FeedEngine::new(config, EmptyStore, NoPrefs);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn fallback_preferences_fill_empty_fields() {
        let fallback = UserPreferences {
            followed_sites: ["site-1".to_string()].into_iter().collect(),
            followed_users: Default::default(),
        };
        let engine = FeedEngine::new(EngineConfig::default(), EmptyStore, NoPrefs)
            .unwrap()
            .with_fallback_preferences(fallback);

        let effective = engine.effective_preferences("someone").unwrap();
        assert!(effective.follows_site("site-1"));
    }

    #[test]
    fn preference_source_failures_surface_as_external_errors() {
        let engine = FeedEngine::new(EngineConfig::default(), EmptyStore, FailingPrefs).unwrap();
        let result = engine.effective_preferences("someone");
        assert!(matches!(result, Err(Error::External(_))));
    }
}
