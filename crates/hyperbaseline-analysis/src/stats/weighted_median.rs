//! Weighted median selection.

use std::cmp::Ordering;

/// Weighted median of `values` under integer `weights`.
///
/// Returns the largest `a` in `values` such that the weight strictly below
/// `a` is at most half the total. Weight tied with `a` counts on the upper
/// side, so the weight at or above `a` is at least half.
///
/// `None` when the input is empty or the lengths differ.
pub fn weighted_median(values: &[f64], weights: &[u64]) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }

    let mut pairs: Vec<(f64, u64)> = values.iter().copied().zip(weights.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    // prefix[r] = weight of pairs[..r]
    let mut prefix = Vec::with_capacity(pairs.len() + 1);
    prefix.push(0u64);
    let mut running = 0u64;
    for (_, w) in &pairs {
        running += w;
        prefix.push(running);
    }
    let total = running;

    // Weight strictly left of the value at rank r.
    let weight_below = |r: usize| -> u64 {
        let trial = pairs[r].0;
        let first = pairs.partition_point(|(a, _)| a.total_cmp(&trial) == Ordering::Less);
        prefix[first]
    };

    // weight_below is monotone in rank, so binary search for the last rank
    // that still has at most half the weight below it.
    let (mut beg, mut end) = (0usize, pairs.len() - 1);
    while beg < end {
        let mid = (beg + end + 1) / 2;
        if 2 * weight_below(mid) <= total {
            beg = mid;
        } else {
            end = mid - 1;
        }
    }

    Some(pairs[beg].0)
}
