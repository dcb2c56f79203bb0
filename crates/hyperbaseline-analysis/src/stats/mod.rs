//! Order statistics and robust estimators.

pub mod descriptive;
pub mod medcouple;
pub mod numeric;
pub mod weighted_median;

pub use descriptive::{mad, mean, median, percentile, pstdev};
pub use medcouple::{medcouple, medcouple_with, MedcoupleTolerance};
pub use numeric::parse_numeric;
pub use weighted_median::weighted_median;
