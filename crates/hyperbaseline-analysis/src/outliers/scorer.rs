//! Maps a value and its bounds to a binary score.

use super::types::{Bounds, Score, ScoreResult};

/// `Inlier` when `lower <= value <= upper`, otherwise `Outlier`.
///
/// Discrete by construction: a value just past a fence scores the same as
/// one far beyond it.
pub fn map_score(value: f64, bounds: &Bounds) -> Score {
    if bounds.contains(value) {
        Score::Inlier
    } else {
        Score::Outlier
    }
}

/// Score without diagnostics.
pub fn score(value: f64, bounds: &Bounds) -> ScoreResult {
    ScoreResult {
        score: map_score(value, bounds),
        diagnostics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(4.0, 16.0);
        assert_eq!(map_score(4.0, &b), Score::Inlier);
        assert_eq!(map_score(16.0, &b), Score::Inlier);
        assert_eq!(map_score(10.0, &b), Score::Inlier);
        assert_eq!(map_score(17.0, &b), Score::Outlier);
        assert_eq!(map_score(3.999, &b), Score::Outlier);
    }

    #[test]
    fn nan_is_an_outlier() {
        assert_eq!(map_score(f64::NAN, &Bounds::new(0.0, 1.0)), Score::Outlier);
    }

    #[test]
    fn plain_score_has_no_diagnostics() {
        assert!(score(1.0, &Bounds::new(0.0, 2.0)).diagnostics.is_none());
    }
}
