//! Human-readable trend reasons.
//!
//! Each site's heat badge carries a short phrase explaining what is driving
//! it. Reasons are checked in a fixed priority order (media, posts,
//! comments, votes) and the top two matches are joined, so the most
//! visible kinds of activity lead the phrase.

use crate::heat::factors::HeatFactors;

/// Minimum media uploads before they headline the reason.
const MEDIA_REASON_MIN: u32 = 10;
/// Minimum posts before they are worth mentioning.
const POSTS_REASON_MIN: u32 = 5;
/// Minimum comments to call the discussion active.
const COMMENTS_REASON_MIN: u32 = 20;
/// Minimum votes per day to call votes trending.
const VELOCITY_REASON_MIN: f64 = 5.0;

/// How many matched reasons make it into the phrase.
const MAX_REASONS: usize = 2;

/// Explain what is driving a site's activity.
///
/// Falls back to `"Recent activity"` when nothing clears its threshold, so
/// every scored site has a non-empty reason.
pub fn trend_reason(factors: &HeatFactors) -> String {
    let factors = factors.sanitized();
    let mut reasons: Vec<String> = Vec::new();

    if factors.recent_media >= MEDIA_REASON_MIN {
        reasons.push(format!("{} new photos", factors.recent_media));
    }
    if factors.recent_posts >= POSTS_REASON_MIN {
        reasons.push(format!("{} new posts", factors.recent_posts));
    }
    if factors.comment_activity >= COMMENTS_REASON_MIN {
        reasons.push("Active discussion".to_string());
    }
    if factors.vote_velocity >= VELOCITY_REASON_MIN {
        reasons.push("Trending votes".to_string());
    }

    if reasons.is_empty() {
        "Recent activity".to_string()
    } else {
        reasons.truncate(MAX_REASONS);
        reasons.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> HeatFactors {
        HeatFactors::default()
    }

    #[test]
    fn quiet_site_gets_fallback_reason() {
        assert_eq!(trend_reason(&quiet()), "Recent activity");
    }

    #[test]
    fn below_threshold_activity_gets_fallback() {
        let factors = HeatFactors {
            recent_media: 9,
            recent_posts: 4,
            comment_activity: 19,
            vote_velocity: 4.9,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "Recent activity");
    }

    #[test]
    fn media_reason_includes_count() {
        let factors = HeatFactors {
            recent_media: 14,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "14 new photos");
    }

    #[test]
    fn posts_reason_includes_count() {
        let factors = HeatFactors {
            recent_posts: 6,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "6 new posts");
    }

    #[test]
    fn only_the_top_two_reasons_are_joined() {
        let factors = HeatFactors {
            recent_media: 12,
            recent_posts: 8,
            comment_activity: 40,
            vote_velocity: 9.0,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "12 new photos, 8 new posts");
    }

    #[test]
    fn lower_priority_reasons_surface_when_higher_are_quiet() {
        let factors = HeatFactors {
            comment_activity: 25,
            vote_velocity: 6.0,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "Active discussion, Trending votes");
    }

    #[test]
    fn single_match_stands_alone() {
        let factors = HeatFactors {
            vote_velocity: 5.0,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "Trending votes");
    }

    #[test]
    fn nan_velocity_never_matches() {
        let factors = HeatFactors {
            vote_velocity: f64::NAN,
            ..quiet()
        };
        assert_eq!(trend_reason(&factors), "Recent activity");
    }
}
