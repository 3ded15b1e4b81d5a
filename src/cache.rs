//! Time-based caching of derived scores.
//!
//! Heat and importance are recomputed over the whole site population, which
//! is too much work to repeat on every feed request. [`ScoreCache`] holds
//! one computed value and recomputes it through a caller-supplied closure
//! once it goes stale. The clock is always injected, so staleness is
//! testable without sleeping.

use chrono::{DateTime, Duration, Utc};

/// Single-value cache with a time-to-live.
#[derive(Debug, Clone)]
pub struct ScoreCache<T> {
    ttl: Duration,
    value: T,
    computed_at: Option<DateTime<Utc>>,
}

impl<T: Default> ScoreCache<T> {
    /// An empty cache; the first [`get_or_refresh`](Self::get_or_refresh)
    /// always computes.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            value: T::default(),
            computed_at: None,
        }
    }
}

impl<T> ScoreCache<T> {
    /// Whether the cached value is still within its time-to-live.
    ///
    /// A value refreshed exactly `ttl` ago counts as stale. A refresh
    /// timestamp in the future (clock adjustment) counts as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.computed_at {
            Some(at) => now - at < self.ttl,
            None => false,
        }
    }

    /// When the value was last computed, if ever.
    pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.computed_at
    }

    /// Drop freshness so the next access recomputes.
    pub fn invalidate(&mut self) {
        self.computed_at = None;
    }

    /// Return the cached value, recomputing it first if stale.
    ///
    /// A failed refresh leaves the cache as it was: the error propagates,
    /// the old value and timestamp stay put, and the next call retries.
    pub fn get_or_refresh<F, E>(&mut self, now: DateTime<Utc>, refresh: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if !self.is_fresh(now) {
            self.value = refresh()?;
            self.computed_at = Some(now);
        }
        Ok(&self.value)
    }
}
