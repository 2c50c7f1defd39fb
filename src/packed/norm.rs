use alloc::vec;
use alloc::vec::Vec;

use num_traits::Zero;

use crate::traits::{FloatScalar, PackedRef};

use super::{row_start, PackedSymmetric};

/// Absolute column sums `Σ_i |A[i,j]|` of a packed symmetric matrix.
///
/// One pass over the packed storage: element `(i, j)` with `j < i` feeds
/// both column `j` and column `i`.
pub(crate) fn col_abs_sums<T: FloatScalar>(data: &[T], n: usize) -> Vec<T> {
    let mut sums = vec![T::zero(); n];
    for i in 0..n {
        let start = row_start(i);
        for j in 0..i {
            let v = data[start + j].abs();
            sums[j] = sums[j] + v;
            sums[i] = sums[i] + v;
        }
        sums[i] = sums[i] + data[start + i].abs();
    }
    sums
}

impl<T: FloatScalar> PackedSymmetric<T> {
    /// Absolute column sums of the full symmetric matrix.
    pub fn col_abs_sums(&self) -> Vec<T> {
        col_abs_sums(self.packed(), self.dim())
    }

    /// Matrix 1-norm (maximum absolute column sum).
    ///
    /// Equal to the infinity norm since the matrix is symmetric.
    ///
    /// ```
    /// use spdpack::PackedSymmetric;
    /// let a = PackedSymmetric::from_rows(2, &[1.0_f64, -2.0, -2.0, 3.0]);
    /// assert!((a.norm_one() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T {
        self.col_abs_sums()
            .into_iter()
            .fold(<T as Zero>::zero(), |acc, s| if s > acc { s } else { acc })
    }
}
