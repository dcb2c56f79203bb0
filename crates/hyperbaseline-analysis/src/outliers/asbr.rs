//! Asymmetric boxplot rule.
//!
//! Skews the boxplot fences by the medcouple `mc`:
//!
//! ```text
//! mc >= 0:  [Q1 − c·e^{a·mc}·IQD,  Q3 + c·e^{b·mc}·IQD]
//! mc <  0:  [Q1 − c·e^{−b·mc}·IQD, Q3 + c·e^{−a·mc}·IQD]
//! ```
//!
//! with `a = −4`, `b = 3` (Hubert & Vandervieren, 2008). At `mc = 0` the
//! fences equal the standard boxplot rule.

use hyperbaseline_core::types::BaselineStat;

use super::types::Bounds;

const A: f64 = -4.0;
const B: f64 = 3.0;

pub fn fences(pct25: f64, pct75: f64, medcouple: f64, c: f64) -> Bounds {
    let iqd = pct75 - pct25;
    let (lower_exp, upper_exp) = if medcouple >= 0.0 {
        (A * medcouple, B * medcouple)
    } else {
        (-B * medcouple, -A * medcouple)
    };
    let lower_factor = c * lower_exp.exp() * iqd;
    let upper_factor = c * upper_exp.exp() * iqd;
    Bounds::new(pct25 - lower_factor, pct75 + upper_factor)
}

pub fn bounds(stat: &BaselineStat, c: f64) -> Bounds {
    fences(stat.pct25, stat.pct75, stat.medcouple, c)
}
