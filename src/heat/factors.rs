//! Raw per-site activity factors.

use serde::{Deserialize, Serialize};

/// Rolling 7-day activity counts for one site, as reported by the activity
/// store.
///
/// The data model is non-negative throughout: counts are unsigned, and
/// `vote_velocity` sits at or above zero. A stray negative velocity from
/// the store contributes nothing once normalization clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatFactors {
    /// Posts created in the last 7 days.
    #[serde(default)]
    pub recent_posts: u32,

    /// Media uploaded in the last 7 days.
    #[serde(default)]
    pub recent_media: u32,

    /// Net votes per day over the last 7 days.
    #[serde(default)]
    pub vote_velocity: f64,

    /// Unique visitors in the last 7 days.
    #[serde(default)]
    pub unique_visitors: u32,

    /// Comments in the last 7 days.
    #[serde(default)]
    pub comment_activity: u32,
}

impl HeatFactors {
    /// Replace a non-finite vote velocity with zero.
    ///
    /// The store computes velocity as a ratio and has produced NaN for
    /// sites created moments ago; everything downstream assumes finite
    /// inputs.
    pub fn sanitized(mut self) -> Self {
        if !self.vote_velocity.is_finite() {
            self.vote_velocity = 0.0;
        }
        self
    }
}
