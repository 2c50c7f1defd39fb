//! Slice kernels for the packed factorization, solves and rotations.
//!
//! Rows of a packed lower triangle are contiguous, so the inner loops of the
//! factorization and of both substitutions reduce to dot products and
//! axpy-style updates on plain slices.

use crate::traits::Scalar;

/// Dot product of two equal-length slices.
///
/// Four independent accumulators break the add dependency chain; the
/// remainder is folded in sequentially.
#[inline]
pub(crate) fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let full = n - n % 4;

    let (mut s0, mut s1, mut s2, mut s3) = (T::zero(), T::zero(), T::zero(), T::zero());
    let mut i = 0;
    while i < full {
        s0 = s0 + a[i] * b[i];
        s1 = s1 + a[i + 1] * b[i + 1];
        s2 = s2 + a[i + 2] * b[i + 2];
        s3 = s3 + a[i + 3] * b[i + 3];
        i += 4;
    }

    let mut sum = (s0 + s1) + (s2 + s3);
    for k in full..n {
        sum = sum + a[k] * b[k];
    }
    sum
}

/// `y[i] -= alpha * x[i]` for every `i`.
#[inline]
pub(crate) fn axpy_neg<T: Scalar>(y: &mut [T], alpha: T, x: &[T]) {
    debug_assert_eq!(y.len(), x.len());
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = *yi - alpha * xi;
    }
}

/// Apply the plane rotation `[c, s; -s, c]` to the pair `(x, y)` in place.
#[inline(always)]
pub(crate) fn rotate<T: Scalar>(c: T, s: T, x: &mut T, y: &mut T) {
    let (a, b) = (*x, *y);
    *x = c * a + s * b;
    *y = c * b - s * a;
}
