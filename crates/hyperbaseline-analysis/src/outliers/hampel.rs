//! Hampel identifier: `median ± t·MAD`.

use hyperbaseline_core::types::BaselineStat;

use super::types::Bounds;

pub fn fences(median: f64, mad: f64, threshold: f64) -> Bounds {
    Bounds::new(median - threshold * mad, median + threshold * mad)
}

pub fn bounds(stat: &BaselineStat, threshold: f64) -> Bounds {
    fences(stat.median, stat.mad, threshold)
}
