//! Medcouple: a robust measure of skewness.
//!
//! The medcouple is the median of the kernel
//!
//! ```text
//! h(x_i, x_j) = ((x_i - m) - (m - x_j)) / (x_i - x_j)
//! ```
//!
//! over all pairs with `x_i >= m >= x_j`, where `m` is the sample median.
//! It lies in `[-1, 1]`: positive for right-skewed data, negative for
//! left-skewed data, zero for symmetric data.
//!
//! The kernel matrix is never materialized. Rows (values above the median)
//! and columns (values below it) are both sorted descending, which makes the
//! matrix monotone along rows and columns, so the median entry can be found
//! with the Johnson–Mizoguchi selection in O(n log n).
//!
//! References: Brys, Hubert & Struyf, "A Robust Measure of Skewness",
//! JCGS 13(4), 2004. Johnson & Mizoguchi, "Selecting the Kth Element in
//! X + Y and X1 + X2 + ... + Xm", SIAM J. Comput. 7(2), 1978.

use super::weighted_median::weighted_median;

/// Numerical tolerances for the medcouple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedcoupleTolerance {
    /// Relative tolerance for comparisons against the median and the pivot.
    pub eps1: f64,
    /// Absolute tolerance under which two kernel arguments count as tied.
    pub eps2: f64,
}

impl Default for MedcoupleTolerance {
    fn default() -> Self {
        Self {
            // 2^-52
            eps1: f64::EPSILON,
            // 2^-1022
            eps2: f64::MIN_POSITIVE,
        }
    }
}

impl MedcoupleTolerance {
    /// `x` and `y` are equal up to a tolerance relative to `y`.
    fn close(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.relative(y)
    }

    fn relative(&self, y: f64) -> f64 {
        self.eps1 * (self.eps1 + y.abs())
    }
}

/// Medcouple of `values` with the default tolerances.
///
/// Returns 0 for fewer than three values, −1 when the maximum coincides with
/// the median and 1 when the minimum does.
pub fn medcouple(values: &[f64]) -> f64 {
    medcouple_with(values, MedcoupleTolerance::default())
}

/// Medcouple of `values` with explicit tolerances.
pub fn medcouple_with(values: &[f64], tol: MedcoupleTolerance) -> f64 {
    let n = values.len();
    if n < 3 {
        return 0.0;
    }

    let mut z = values.to_vec();
    z.sort_by(|a, b| b.total_cmp(a));

    let n2 = (n - 1) / 2;
    let zmed = if n % 2 == 1 {
        z[n2]
    } else {
        (z[n2] + z[n2 + 1]) / 2.0
    };

    if tol.close(z[0], zmed) {
        return -1.0;
    }
    if tol.close(z[n - 1], zmed) {
        return 1.0;
    }

    // Center on the median and scale into [-0.5, 0.5].
    for v in z.iter_mut() {
        *v -= zmed;
    }
    let zden = 2.0 * z[0].max(-z[n - 1]);
    for v in z.iter_mut() {
        *v /= zden;
    }
    let zeps = tol.relative(zmed / zden);

    // Values tied with the median land in both halves.
    let zplus: Vec<f64> = z.iter().copied().filter(|&v| v >= -zeps).collect();
    let zminus: Vec<f64> = z.iter().copied().filter(|&v| zeps >= v).collect();

    KernelMatrix {
        zplus: &zplus,
        zminus: &zminus,
        eps2: tol.eps2,
    }
    .median(tol)
}

/// The implicit `n_plus × n_minus` kernel matrix.
struct KernelMatrix<'a> {
    zplus: &'a [f64],
    zminus: &'a [f64],
    eps2: f64,
}

impl KernelMatrix<'_> {
    fn rows(&self) -> usize {
        self.zplus.len()
    }

    fn cols(&self) -> usize {
        self.zminus.len()
    }

    /// Kernel at row `i`, column `j`. Arguments tied at the median get the
    /// sign of their position relative to the anti-diagonal.
    fn h(&self, i: usize, j: usize) -> f64 {
        let a = self.zplus[i];
        let b = self.zminus[j];
        if (a - b).abs() <= 2.0 * self.eps2 {
            let pos = self.rows() as i64 - 1 - i as i64 - j as i64;
            pos.signum() as f64
        } else {
            (a + b) / (a - b)
        }
    }

    /// Entry of rank `⌊rows·cols / 2⌋` counting from the largest.
    fn median(&self, tol: MedcoupleTolerance) -> f64 {
        let n_plus = self.rows();
        let n_minus = self.cols();

        // Per-row candidate column window [left[i], right[i]]. A window is
        // empty when left[i] > right[i]; right can drop to -1.
        let mut left: Vec<i64> = vec![0; n_plus];
        let mut right: Vec<i64> = vec![n_minus as i64 - 1; n_plus];

        let mut left_total: i64 = 0;
        let mut right_total: i64 = (n_minus * n_plus) as i64;
        let target = right_total / 2;

        let mut row_values = Vec::with_capacity(n_plus);
        let mut row_weights = Vec::with_capacity(n_plus);

        while right_total - left_total > n_plus as i64 {
            row_values.clear();
            row_weights.clear();
            for i in 0..n_plus {
                if left[i] <= right[i] {
                    let mid = ((left[i] + right[i]) / 2) as usize;
                    row_values.push(self.h(i, mid));
                    row_weights.push((right[i] - left[i] + 1) as u64);
                }
            }
            let Some(pivot) = weighted_median(&row_values, &row_weights) else {
                break;
            };
            let pivot_eps = tol.relative(pivot);

            // p[i]: last column whose kernel is strictly above the pivot.
            let mut p = vec![0i64; n_plus];
            let mut j = 0usize;
            for i in (0..n_plus).rev() {
                while j < n_minus && self.h(i, j) - pivot > pivot_eps {
                    j += 1;
                }
                p[i] = j as i64 - 1;
            }

            // q[i]: first column whose kernel is not strictly below the pivot.
            let mut q = vec![0i64; n_plus];
            let mut j = n_minus as i64 - 1;
            for (i, slot) in q.iter_mut().enumerate() {
                while j >= 0 && self.h(i, j as usize) - pivot < -pivot_eps {
                    j -= 1;
                }
                *slot = j + 1;
            }

            let above = p.iter().sum::<i64>() + n_plus as i64;
            let not_below: i64 = q.iter().sum();

            if target <= above - 1 {
                right = p;
                right_total = above;
            } else if target > not_below - 1 {
                left = q;
                left_total = not_below;
            } else {
                return pivot;
            }
        }

        // At most n_plus candidates remain between the windows.
        let mut remaining = Vec::with_capacity((right_total - left_total).max(0) as usize);
        for i in 0..n_plus {
            for j in left[i]..=right[i] {
                remaining.push(self.h(i, j as usize));
            }
        }
        remaining.sort_by(|a, b| b.total_cmp(a));

        let rank = (target - left_total) as usize;
        debug_assert!(rank < remaining.len());
        remaining.get(rank).copied().unwrap_or(0.0)
    }
}
