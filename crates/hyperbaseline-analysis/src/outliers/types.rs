//! Bounds and score results.

use std::fmt;

use hyperbaseline_core::types::BaselineStat;
use serde::{Deserialize, Serialize};

/// Closed interval `[lower, upper]` of expected values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.lower, self.upper)
    }
}

/// Binary outlier score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// Within bounds.
    Inlier,
    /// Outside bounds.
    Outlier,
}

impl Score {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Inlier => 0,
            Self::Outlier => 1,
        }
    }

    pub fn is_outlier(self) -> bool {
        self == Self::Outlier
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Bounds and baseline behind a score, kept when diagnostics are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDiagnostics {
    pub bounds: Bounds,
    pub baseline: BaselineStat,
}

/// A score with optional diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: Score,
    pub diagnostics: Option<ScoreDiagnostics>,
}

impl ScoreResult {
    pub fn with_diagnostics(mut self, bounds: Bounds, baseline: BaselineStat) -> Self {
        self.diagnostics = Some(ScoreDiagnostics { bounds, baseline });
        self
    }
}
