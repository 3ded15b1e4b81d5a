//! Percentile ranking of heat scores across the site population.

use crate::core::score_types::Score0To100;

/// Midpoint percentile rank of `score` within `population`.
///
/// Rank is `100 * (below + 0.5 * equal) / n`, which hands every member of a
/// tied group the same rank and keeps a lone site at the 50th percentile
/// instead of the 0th or 100th. Non-finite population entries are skipped;
/// an empty population or a non-finite score ranks 0.
pub fn rank_percentile(score: f64, population: &[f64]) -> Score0To100 {
    if !score.is_finite() {
        return Score0To100::new(0.0);
    }

    let mut below = 0usize;
    let mut equal = 0usize;
    let mut counted = 0usize;
    for &value in population {
        if !value.is_finite() {
            continue;
        }
        counted += 1;
        if value < score {
            below += 1;
        } else if value == score {
            equal += 1;
        }
    }

    if counted == 0 {
        return Score0To100::new(0.0);
    }

    let rank = 100.0 * (below as f64 + 0.5 * equal as f64) / counted as f64;
    Score0To100::new(rank)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rank_stays_in_bounds(
            score in -1_000.0f64..1_000.0,
            population in proptest::collection::vec(-1_000.0f64..1_000.0, 0..64),
        ) {
            let rank = rank_percentile(score, &population);
            prop_assert!(rank.value() >= 0.0);
            prop_assert!(rank.value() <= 100.0);
        }

        #[test]
        fn rank_is_monotone_in_score(
            a in -1_000.0f64..1_000.0,
            b in -1_000.0f64..1_000.0,
            population in proptest::collection::vec(-1_000.0f64..1_000.0, 1..64),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                rank_percentile(low, &population) <= rank_percentile(high, &population)
            );
        }
    }
}
