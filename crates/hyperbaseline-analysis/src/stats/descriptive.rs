//! Descriptive statistics over a finite sample.
//!
//! Percentiles use linear interpolation between closest ranks on an
//! ascending-sorted slice.

/// Arithmetic mean. `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation. `None` for fewer than two values.
pub fn pstdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Percentile `p` (in `[0, 100]`) of an ascending-sorted slice.
///
/// The interpolated value is clamped into its bracketing ranks so that
/// percentiles stay monotone in `p` under floating-point rounding.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let lo = sorted[lower];
    let hi = sorted[upper];
    if lower == upper {
        return Some(lo);
    }
    let frac = rank - lower as f64;
    Some((lo + (hi - lo) * frac).clamp(lo, hi))
}

/// Median of an ascending-sorted slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    percentile(sorted, 50.0)
}

/// Median absolute deviation from the median. Unscaled.
pub fn mad(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let center = median(&sorted)?;

    let mut deviations: Vec<f64> = sorted.iter().map(|v| (v - center).abs()).collect();
    deviations.sort_by(f64::total_cmp);
    median(&deviations)
}
