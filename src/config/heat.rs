//! Heat scoring weights and calibration.

use serde::{Deserialize, Serialize};

/// Relative weight of each heat factor (0.0-1.0, sum must be 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatWeights {
    /// Weight for posts created in the last 7 days.
    #[serde(default = "default_recent_posts_weight")]
    pub recent_posts: f64,

    /// Weight for media uploaded in the last 7 days.
    #[serde(default = "default_recent_media_weight")]
    pub recent_media: f64,

    /// Weight for net votes per day over the last 7 days.
    #[serde(default = "default_vote_velocity_weight")]
    pub vote_velocity: f64,

    /// Weight for unique visitors in the last 7 days.
    #[serde(default = "default_unique_visitors_weight")]
    pub unique_visitors: f64,

    /// Weight for comments in the last 7 days.
    #[serde(default = "default_comment_activity_weight")]
    pub comment_activity: f64,
}

impl Default for HeatWeights {
    fn default() -> Self {
        Self {
            recent_posts: default_recent_posts_weight(),
            recent_media: default_recent_media_weight(),
            vote_velocity: default_vote_velocity_weight(),
            unique_visitors: default_unique_visitors_weight(),
            comment_activity: default_comment_activity_weight(),
        }
    }
}

impl HeatWeights {
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    fn sum(&self) -> f64 {
        self.recent_posts
            + self.recent_media
            + self.vote_velocity
            + self.unique_visitors
            + self.comment_activity
    }

    /// Validate that all weights are in range and sum to 1.0 (within 1e-3).
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.recent_posts, "recent_posts")?;
        Self::validate_weight(self.recent_media, "recent_media")?;
        Self::validate_weight(self.vote_velocity, "vote_velocity")?;
        Self::validate_weight(self.unique_visitors, "unique_visitors")?;
        Self::validate_weight(self.comment_activity, "comment_activity")?;

        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(format!("heat weights must sum to 1.0, got {:.4}", sum));
        }
        Ok(())
    }

    /// Rescale weights so they sum to exactly 1.0.
    ///
    /// Call after a successful [`validate`](Self::validate); the small drift
    /// the tolerance admits would otherwise leak into every heat score.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.recent_posts /= sum;
            self.recent_media /= sum;
            self.vote_velocity /= sum;
            self.unique_visitors /= sum;
            self.comment_activity /= sum;
        }
    }
}

fn default_recent_posts_weight() -> f64 {
    0.25
}

fn default_recent_media_weight() -> f64 {
    0.20
}

fn default_vote_velocity_weight() -> f64 {
    0.25
}

fn default_unique_visitors_weight() -> f64 {
    0.15
}

fn default_comment_activity_weight() -> f64 {
    0.15
}

/// Saturation point for each raw heat factor.
///
/// A factor at or above its maximum contributes a full 100 to the weighted
/// sum; the calibration is what maps raw counts onto the 0-100 scale. Values
/// reflect a very active week on a popular site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCalibration {
    /// Posts per week at which the posts factor saturates.
    #[serde(default = "default_max_recent_posts")]
    pub max_recent_posts: f64,

    /// Media uploads per week at which the media factor saturates.
    #[serde(default = "default_max_recent_media")]
    pub max_recent_media: f64,

    /// Net votes per day at which the velocity factor saturates.
    #[serde(default = "default_max_vote_velocity")]
    pub max_vote_velocity: f64,

    /// Unique visitors per week at which the visitors factor saturates.
    #[serde(default = "default_max_unique_visitors")]
    pub max_unique_visitors: f64,

    /// Comments per week at which the comments factor saturates.
    #[serde(default = "default_max_comment_activity")]
    pub max_comment_activity: f64,
}

impl Default for HeatCalibration {
    fn default() -> Self {
        Self {
            max_recent_posts: default_max_recent_posts(),
            max_recent_media: default_max_recent_media(),
            max_vote_velocity: default_max_vote_velocity(),
            max_unique_visitors: default_max_unique_visitors(),
            max_comment_activity: default_max_comment_activity(),
        }
    }
}

impl HeatCalibration {
    fn validate_maximum(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a positive number", name))
        }
    }

    /// Validate that every saturation point is positive and finite.
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_maximum(self.max_recent_posts, "max_recent_posts")?;
        Self::validate_maximum(self.max_recent_media, "max_recent_media")?;
        Self::validate_maximum(self.max_vote_velocity, "max_vote_velocity")?;
        Self::validate_maximum(self.max_unique_visitors, "max_unique_visitors")?;
        Self::validate_maximum(self.max_comment_activity, "max_comment_activity")?;
        Ok(())
    }
}

fn default_max_recent_posts() -> f64 {
    20.0
}

fn default_max_recent_media() -> f64 {
    50.0
}

fn default_max_vote_velocity() -> f64 {
    10.0
}

fn default_max_unique_visitors() -> f64 {
    500.0
}

fn default_max_comment_activity() -> f64 {
    30.0
}

/// Everything heat scoring needs: factor weights plus calibration maxima.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
    pub weights: HeatWeights,
    pub calibration: HeatCalibration,
}

impl HeatConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.calibration.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = HeatWeights::default();
        assert!(weights.validate().is_ok());
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let mut weights = HeatWeights::default();
        weights.recent_posts = 0.5;
        let err = weights.validate().unwrap_err();
        assert!(err.contains("sum to 1.0"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut weights = HeatWeights::default();
        weights.vote_velocity = 1.5;
        let err = weights.validate().unwrap_err();
        assert!(err.contains("vote_velocity"), "unexpected message: {err}");
    }

    #[test]
    fn normalize_restores_exact_unit_sum() {
        let mut weights = HeatWeights {
            recent_posts: 0.2501,
            recent_media: 0.2,
            vote_velocity: 0.25,
            unique_visitors: 0.15,
            comment_activity: 0.15,
        };
        assert!(weights.validate().is_ok());
        weights.normalize();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn calibration_rejects_non_positive_maximum() {
        let mut calibration = HeatCalibration::default();
        calibration.max_recent_media = 0.0;
        assert!(calibration.validate().is_err());

        calibration.max_recent_media = f64::NAN;
        assert!(calibration.validate().is_err());
    }
}
