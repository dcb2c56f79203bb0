//! Extreme studentized deviation: `mean ± t·stdev`.

use hyperbaseline_core::errors::ScoringError;
use hyperbaseline_core::types::BaselineStat;

use super::types::Bounds;

pub fn fences(mean: f64, stdev: f64, threshold: f64) -> Bounds {
    Bounds::new(mean - threshold * stdev, mean + threshold * stdev)
}

/// Fails when the baseline was built from a single value and has no stdev.
pub fn bounds(stat: &BaselineStat, threshold: f64) -> Result<Bounds, ScoringError> {
    let stdev = stat.stdev.ok_or_else(|| ScoringError::MissingStatistic {
        key: stat.key.clone(),
        statistic: "stdev",
    })?;
    Ok(fences(stat.mean, stdev, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_sigma_fences() {
        assert_eq!(fences(10.0, 2.0, 3.0), Bounds::new(4.0, 16.0));
    }

    #[test]
    fn zero_spread_collapses_to_mean() {
        assert_eq!(fences(7.0, 0.0, 3.0), Bounds::new(7.0, 7.0));
    }
}
