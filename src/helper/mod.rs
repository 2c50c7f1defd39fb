//! Vector-norm and residual helpers used to check solutions.
//!
//! [`SeqHelper`] is the sequential reference. With the `parallel` feature,
//! [`ParHelper`] computes the same quantities on rayon; results agree with
//! the sequential ones up to summation order.
//!
//! ```
//! use spdpack::{Helper, PackedCholesky, PackedSymmetric, SeqHelper};
//!
//! let a = PackedSymmetric::from_rows(2, &[4.0_f64, 2.0, 2.0, 3.0]);
//! let mut chol = PackedCholesky::new(a.clone());
//! chol.factorize().unwrap();
//!
//! let b = [8.0, 7.0];
//! let mut x = b;
//! chol.solve(&mut x).unwrap();
//!
//! let h = SeqHelper;
//! let r = h.residual(&a, &x, &b);
//! assert!(h.norm2(&r) / h.norm2(&b) < 1e-12);
//! ```

#[cfg(feature = "parallel")]
mod par;

#[cfg(feature = "parallel")]
pub use par::ParHelper;

use alloc::vec::Vec;

use crate::packed::row_dot;
use crate::traits::{FloatScalar, PackedRef};

/// Norm and residual computations over packed systems.
pub trait Helper<T: FloatScalar> {
    /// Euclidean norm `‖v‖₂`.
    fn norm2(&self, v: &[T]) -> T;

    /// Residual `b − A·x` of length `a.dim()`.
    ///
    /// `a` is any packed source: an owned
    /// [`PackedSymmetric`](crate::PackedSymmetric) or a
    /// [`PackedView`](crate::packed::PackedView) over caller-assembled data.
    /// Panics if `x` or `b` is shorter than `a.dim()`.
    fn residual<A>(&self, a: &A, x: &[T], b: &[T]) -> Vec<T>
    where
        A: PackedRef<T> + Sync + ?Sized;
}

/// Single-threaded helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqHelper;

impl<T: FloatScalar> Helper<T> for SeqHelper {
    fn norm2(&self, v: &[T]) -> T {
        v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
    }

    fn residual<A>(&self, a: &A, x: &[T], b: &[T]) -> Vec<T>
    where
        A: PackedRef<T> + Sync + ?Sized,
    {
        let n = a.dim();
        check_lengths(n, x, b);
        (0..n).map(|i| b[i] - row_dot(a, i, x)).collect()
    }
}

#[inline]
pub(crate) fn check_lengths<T>(n: usize, x: &[T], b: &[T]) {
    assert!(
        x.len() >= n && b.len() >= n,
        "vectors of length {} and {} shorter than dimension {}",
        x.len(),
        b.len(),
        n
    );
}
