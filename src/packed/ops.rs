use alloc::vec::Vec;

use crate::kernels;
use crate::traits::{PackedRef, Scalar};

use super::{row_start, PackedSymmetric};

/// Row `i` of a packed symmetric matrix dotted with `x`: `Σ_j A[i,j]·x[j]`.
///
/// Columns `0..i` are contiguous in the packed row; columns `i..n` are read
/// down column `i` through the symmetric addressing.
#[inline]
pub fn row_dot<T: Scalar, A: PackedRef<T> + ?Sized>(a: &A, i: usize, x: &[T]) -> T {
    let n = a.dim();
    let data = a.packed();
    let start = row_start(i);
    let mut sum = kernels::dot(&data[start..start + i], &x[..i]);
    for j in i..n {
        sum = sum + data[i + row_start(j)] * x[j];
    }
    sum
}

impl<T: Scalar> PackedSymmetric<T> {
    /// Matrix-vector product `A·x`.
    ///
    /// Panics if `x.len() < n`.
    ///
    /// ```
    /// use spdpack::PackedSymmetric;
    /// let a = PackedSymmetric::from_rows(2, &[2.0_f64, 1.0, 1.0, 3.0]);
    /// assert_eq!(a.mul_vec(&[1.0, 1.0]), vec![3.0, 4.0]);
    /// ```
    pub fn mul_vec(&self, x: &[T]) -> Vec<T> {
        let n = self.dim();
        assert!(x.len() >= n, "vector length {} shorter than dimension {}", x.len(), n);
        (0..n).map(|i| row_dot(self, i, x)).collect()
    }
}
