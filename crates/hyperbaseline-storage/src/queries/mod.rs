//! Typed queries over the baselines table.

pub mod baselines;
