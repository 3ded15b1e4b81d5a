//! Type-safe score scale for the feed scoring system.
//!
//! Heat scores, percentile ranks, and importance scores all live on the same
//! 0-100 scale. Encoding the scale in a newtype prevents bugs caused by
//! mixing raw factor values (unbounded counters) with normalized scores.
//!
//! # Examples
//!
//! ```rust
//! use stratafeed::core::score_types::Score0To100;
//!
//! // Create scores with automatic bounds enforcement
//! let score = Score0To100::new(85.0);
//! assert_eq!(score.value(), 85.0);
//!
//! // Out-of-bounds values are clamped
//! let clamped = Score0To100::new(150.0);
//! assert_eq!(clamped.value(), 100.0);
//! ```

use serde::{Deserialize, Serialize};

/// Score on 0-100 scale.
///
/// This is the standard scale for derived scores throughout the system:
/// heat scores, percentile ranks, and editorial importance scores all
/// use it. Values are automatically clamped to the [0.0, 100.0] range;
/// non-finite input clamps to 0.0 so NaN can never leak into ranking
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score0To100(f64);

impl From<f64> for Score0To100 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score0To100> for f64 {
    fn from(score: Score0To100) -> Self {
        score.0
    }
}

impl Score0To100 {
    /// Create a new score, clamping to [0.0, 100.0].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stratafeed::core::score_types::Score0To100;
    /// let score = Score0To100::new(85.0);
    /// assert_eq!(score.value(), 85.0);
    ///
    /// let clamped = Score0To100::new(-3.0);
    /// assert_eq!(clamped.value(), 0.0);
    /// ```
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self(0.0)
        }
    }

    /// Create a score rounded to the nearest whole point.
    ///
    /// Heat scores are reported as integers; this keeps the rounding rule
    /// in one place.
    pub fn rounded(value: f64) -> Self {
        Self::new(value).round()
    }

    /// Round to the nearest whole point.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score0To100 {
    fn default() -> Self {
        Self(0.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}
