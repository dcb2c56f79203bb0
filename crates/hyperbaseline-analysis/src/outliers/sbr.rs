//! Standard boxplot rule: `[Q1 − c·IQD, Q3 + c·IQD]`.

use hyperbaseline_core::types::BaselineStat;

use super::types::Bounds;

pub fn fences(pct25: f64, pct75: f64, c: f64) -> Bounds {
    let iqd = pct75 - pct25;
    Bounds::new(pct25 - c * iqd, pct75 + c * iqd)
}

pub fn bounds(stat: &BaselineStat, c: f64) -> Bounds {
    fences(stat.pct25, stat.pct75, c)
}
