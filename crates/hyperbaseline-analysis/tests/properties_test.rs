//! Property tests for the order statistics and the medcouple.

use hyperbaseline_analysis::baseline::BaselineSummary;
use hyperbaseline_analysis::stats::{medcouple, weighted_median};
use proptest::prelude::*;

/// Median of all kernel values, computed pairwise.
fn naive_medcouple(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return 0.0;
    }
    let mut z = values.to_vec();
    z.sort_by(|a, b| b.total_cmp(a));
    let med = if n % 2 == 1 {
        z[n / 2]
    } else {
        (z[n / 2 - 1] + z[n / 2]) / 2.0
    };
    if z[0] == med {
        return -1.0;
    }
    if z[n - 1] == med {
        return 1.0;
    }
    let plus: Vec<f64> = z.iter().copied().filter(|&v| v >= med).collect();
    let minus: Vec<f64> = z.iter().copied().filter(|&v| v <= med).collect();

    let mut kernel = Vec::with_capacity(plus.len() * minus.len());
    for (i, &a) in plus.iter().enumerate() {
        for (j, &b) in minus.iter().enumerate() {
            let h = if a == b {
                (plus.len() as i64 - 1 - i as i64 - j as i64).signum() as f64
            } else {
                ((a - med) + (b - med)) / (a - b)
            };
            kernel.push(h);
        }
    }
    kernel.sort_by(|a, b| b.total_cmp(a));
    kernel[kernel.len() / 2]
}

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000i32..1_000, 1..80)
        .prop_map(|v| v.into_iter().map(|x| x as f64 / 8.0).collect())
}

#[test]
fn symmetric_set_has_zero_medcouple() {
    assert_eq!(medcouple(&[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]), 0.0);
}

#[test]
fn weighted_median_examples() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(weighted_median(&values, &[1, 1, 1, 1, 1]), Some(3.0));
    assert_eq!(weighted_median(&values, &[10, 1, 1, 1, 1]), Some(1.0));
}

proptest! {
    #[test]
    fn quartiles_are_ordered(values in prop::collection::vec(-1e9f64..1e9, 1..200)) {
        let s = BaselineSummary::compute(&values).unwrap();
        prop_assert!(s.min <= s.pct25);
        prop_assert!(s.pct25 <= s.median);
        prop_assert!(s.median <= s.pct75);
        prop_assert!(s.pct75 <= s.max);
        prop_assert!(s.mad >= 0.0);
    }

    #[test]
    fn medcouple_is_bounded(values in sample()) {
        let mc = medcouple(&values);
        prop_assert!((-1.0..=1.0).contains(&mc));
    }

    #[test]
    fn medcouple_matches_pairwise_definition(values in sample()) {
        let fast = medcouple(&values);
        let naive = naive_medcouple(&values);
        prop_assert!((fast - naive).abs() < 1e-9, "fast {} naive {}", fast, naive);
    }

    #[test]
    fn medcouple_is_affine_invariant(
        values in sample(),
        scale in 0.01f64..100.0,
        shift in -1e3f64..1e3,
    ) {
        let transformed: Vec<f64> = values.iter().map(|v| scale * v + shift).collect();
        let a = medcouple(&values);
        let b = medcouple(&transformed);
        prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn medcouple_of_mirrored_set_is_zero(half in prop::collection::vec(1i32..500, 1..40)) {
        let mut values: Vec<f64> = half.iter().map(|&v| v as f64).collect();
        values.extend(half.iter().map(|&v| -(v as f64)));
        prop_assert!(medcouple(&values).abs() < 1e-12);
    }

    #[test]
    fn medcouple_is_zero_below_three_values(values in prop::collection::vec(-1e6f64..1e6, 0..3)) {
        prop_assert_eq!(medcouple(&values), 0.0);
    }

    #[test]
    fn weighted_median_splits_weight(
        pairs in prop::collection::vec((-100i32..100, 1u64..20), 1..50)
    ) {
        let values: Vec<f64> = pairs.iter().map(|(v, _)| *v as f64).collect();
        let weights: Vec<u64> = pairs.iter().map(|(_, w)| *w).collect();
        let m = weighted_median(&values, &weights).unwrap();
        let total: u64 = weights.iter().sum();
        let below: u64 = pairs.iter().filter(|(v, _)| (*v as f64) < m).map(|(_, w)| w).sum();
        let at_or_above: u64 = pairs.iter().filter(|(v, _)| (*v as f64) >= m).map(|(_, w)| w).sum();
        prop_assert!(values.contains(&m));
        prop_assert!(2 * below <= total);
        prop_assert!(2 * at_or_above >= total);
    }
}
