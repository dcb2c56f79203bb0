//! Outlier bounds and scoring.
//!
//! Each method turns a stored baseline into a closed interval of expected
//! values; the scorer then checks a new value against that interval.
//!
//! - ESD (`esd`): mean ± t·stdev, default t = 3.
//! - Hampel (`hampel`): median ± t·MAD, default t = 3.
//! - SBR (`sbr`): quartiles ± c·IQD, default c = 1.5.
//! - ASBR (`asbr`): medcouple-adjusted quartile fences, default c = 1.5.

pub mod asbr;
pub mod esd;
pub mod hampel;
pub mod sbr;
pub mod scorer;
pub mod types;

use hyperbaseline_core::errors::ScoringError;
use hyperbaseline_core::types::{BaselineStat, OutlierMethod};

pub use scorer::{map_score, score};
pub use types::{Bounds, Score, ScoreDiagnostics, ScoreResult};

/// Bound computation shared by every [`OutlierMethod`].
pub trait BoundStrategy {
    /// Bounds for `stat`. A `threshold` of `None` or `0` uses the method default.
    fn compute_bounds(
        &self,
        stat: &BaselineStat,
        threshold: Option<f64>,
    ) -> Result<Bounds, ScoringError>;
}

impl BoundStrategy for OutlierMethod {
    fn compute_bounds(
        &self,
        stat: &BaselineStat,
        threshold: Option<f64>,
    ) -> Result<Bounds, ScoringError> {
        let t = threshold
            .filter(|t| *t != 0.0)
            .unwrap_or_else(|| self.default_threshold());
        match self {
            OutlierMethod::Esd => esd::bounds(stat, t),
            OutlierMethod::Hampel => Ok(hampel::bounds(stat, t)),
            OutlierMethod::Sbr => Ok(sbr::bounds(stat, t)),
            OutlierMethod::Asbr => Ok(asbr::bounds(stat, t)),
        }
    }
}
