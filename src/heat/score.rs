//! Weighted heat score computation.

use crate::config::HeatConfig;
use crate::core::score_types::Score0To100;
use crate::heat::factors::HeatFactors;

/// Normalize one raw factor onto the 0-100 scale.
///
/// `max` is the calibrated saturation point: values at or above it map to
/// 100, values at or below zero map to 0. A non-positive or non-finite
/// `max` disables the factor rather than dividing by it.
pub fn normalize_factor(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Compute the 0-100 heat score for one site.
///
/// Each factor is normalized against its calibration maximum, weighted, and
/// summed. With valid weights (sum 1.0) the result cannot leave 0-100; the
/// final score is rounded to a whole number so downstream tier cutoffs and
/// percentile ties behave predictably.
pub fn calculate_heat_score(factors: &HeatFactors, config: &HeatConfig) -> Score0To100 {
    let factors = factors.sanitized();
    let calibration = &config.calibration;
    let weights = &config.weights;

    let weighted = normalize_factor(f64::from(factors.recent_posts), calibration.max_recent_posts)
        * weights.recent_posts
        + normalize_factor(f64::from(factors.recent_media), calibration.max_recent_media)
            * weights.recent_media
        + normalize_factor(factors.vote_velocity, calibration.max_vote_velocity)
            * weights.vote_velocity
        + normalize_factor(
            f64::from(factors.unique_visitors),
            calibration.max_unique_visitors,
        ) * weights.unique_visitors
        + normalize_factor(
            f64::from(factors.comment_activity),
            calibration.max_comment_activity,
        ) * weights.comment_activity;

    Score0To100::rounded(weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeatWeights;

    #[test]
    fn normalize_scales_linearly_up_to_max() {
        assert_eq!(normalize_factor(0.0, 20.0), 0.0);
        assert_eq!(normalize_factor(10.0, 20.0), 50.0);
        assert_eq!(normalize_factor(20.0, 20.0), 100.0);
    }

    #[test]
    fn normalize_saturates_above_max() {
        assert_eq!(normalize_factor(75.0, 20.0), 100.0);
    }

    #[test]
    fn normalize_clamps_negative_values_to_zero() {
        assert_eq!(normalize_factor(-4.0, 10.0), 0.0);
    }

    #[test]
    fn normalize_disables_factor_on_bad_max() {
        assert_eq!(normalize_factor(5.0, 0.0), 0.0);
        assert_eq!(normalize_factor(5.0, -1.0), 0.0);
        assert_eq!(normalize_factor(5.0, f64::NAN), 0.0);
    }

    #[test]
    fn zero_activity_scores_zero() {
        let score = calculate_heat_score(&HeatFactors::default(), &HeatConfig::default());
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn saturated_factors_score_one_hundred() {
        let factors = HeatFactors {
            recent_posts: 100,
            recent_media: 200,
            vote_velocity: 50.0,
            unique_visitors: 10_000,
            comment_activity: 500,
        };
        let score = calculate_heat_score(&factors, &HeatConfig::default());
        assert_eq!(score.value(), 100.0);
    }

    #[test]
    fn half_saturated_factors_score_fifty() {
        let factors = HeatFactors {
            recent_posts: 10,
            recent_media: 25,
            vote_velocity: 5.0,
            unique_visitors: 250,
            comment_activity: 15,
        };
        let score = calculate_heat_score(&factors, &HeatConfig::default());
        assert_eq!(score.value(), 50.0);
    }

    #[test]
    fn nan_velocity_contributes_nothing() {
        let factors = HeatFactors {
            vote_velocity: f64::NAN,
            ..Default::default()
        };
        let score = calculate_heat_score(&factors, &HeatConfig::default());
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn single_factor_is_bounded_by_its_weight() {
        let factors = HeatFactors {
            recent_posts: 1_000,
            ..Default::default()
        };
        let config = HeatConfig::default();
        let score = calculate_heat_score(&factors, &config);
        let expected = (HeatWeights::default().recent_posts * 100.0).round();
        assert_eq!(score.value(), expected);
    }
}
