use alloc::vec;
use alloc::vec::Vec;

use crate::kernels;
use crate::packed::norm::col_abs_sums;
use crate::packed::{packed_len, row_start, PackedSymmetric};
use crate::traits::FloatScalar;

use super::{SpdError, SpdSolver, SpdUpdate};

// ---------------------------------------------------------------------------
// Packed substitution kernels (shared by solve, bordering and rcond)
// ---------------------------------------------------------------------------

/// Solve `L·y = x` in place by forward substitution.
///
/// `l` holds a packed lower-triangular factor of dimension `n`.
#[inline]
pub(crate) fn forward_substitute<T: FloatScalar>(l: &[T], n: usize, x: &mut [T]) {
    for i in 0..n {
        let start = row_start(i);
        let s = x[i] - kernels::dot(&l[start..start + i], &x[..i]);
        x[i] = s / l[start + i];
    }
}

/// Solve `Lᵀ·y = x` in place by back substitution.
///
/// Works row by row on the packed rows of `L`: once `y[i]` is known, its
/// contribution `L[i,j]·y[i]` is removed from every `j < i`.
#[inline]
pub(crate) fn back_substitute_lt<T: FloatScalar>(l: &[T], n: usize, x: &mut [T]) {
    for i in (0..n).rev() {
        let start = row_start(i);
        let yi = x[i] / l[start + i];
        x[i] = yi;
        kernels::axpy_neg(&mut x[..i], yi, &l[start..start + i]);
    }
}

// ---------------------------------------------------------------------------
// PackedCholesky
// ---------------------------------------------------------------------------

/// Cholesky solver for a symmetric positive-definite matrix in packed
/// storage, with in-place bordering updates and Givens downdates.
///
/// The solver owns the packed buffer it is built from. [`factorize`]
/// overwrites it with the lower-triangular factor `L` (`A = L·Lᵀ`); the
/// updates then edit `L` directly, so the original matrix is never needed
/// again. The absolute column sums of `A` are captured at construction and
/// kept current across updates for the condition estimate.
///
/// [`factorize`]: PackedCholesky::factorize
///
/// # Example
///
/// ```
/// use spdpack::{PackedCholesky, PackedSymmetric};
///
/// let a = PackedSymmetric::from_rows(3, &[
///     4.0_f64, 2.0, 1.0,
///     2.0, 10.0, 3.5,
///     1.0, 3.5, 4.5,
/// ]);
/// let mut chol = PackedCholesky::new(a);
/// chol.factorize().unwrap();
///
/// let mut b = [1.0, 2.0, 3.0];
/// chol.solve(&mut b).unwrap();
///
/// let rc = chol.rcond();
/// assert!(rc > 0.0 && rc <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PackedCholesky<T> {
    /// Packed `A` before factorization, packed `L` after. May be longer
    /// than `packed_len(n)`; the tail is scratch for bordering.
    pub(super) data: Vec<T>,
    pub(super) n: usize,
    pub(super) factorized: bool,
    /// Last stored reciprocal condition estimate (informational).
    pub(super) cond: T,
    /// Absolute column sums of the current `A`.
    pub(super) col_norms: Vec<T>,
}

impl<T: FloatScalar> PackedCholesky<T> {
    /// Take ownership of a packed symmetric matrix. Not yet factorized.
    pub fn new(a: PackedSymmetric<T>) -> Self {
        let (data, n) = a.into_parts();
        let col_norms = col_abs_sums(&data, n);
        Self {
            data,
            n,
            factorized: false,
            cond: T::zero(),
            col_norms,
        }
    }

    /// Take ownership of caller-assembled packed data of dimension `n`.
    ///
    /// Returns [`SpdError::BadParameter`] if `data` is shorter than
    /// `n(n+1)/2`.
    pub fn from_packed(data: Vec<T>, n: usize) -> Result<Self, SpdError> {
        Ok(Self::new(PackedSymmetric::from_vec(n, data)?))
    }

    /// Current matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_factorized(&self) -> bool {
        self.factorized
    }

    /// Packed contents for the current dimension: `A` before factorization,
    /// `L` after.
    #[inline]
    pub fn matrix(&self) -> &[T] {
        &self.data[..packed_len(self.n)]
    }

    /// Give the packed storage back, truncated to the current dimension.
    pub fn into_packed(self) -> PackedSymmetric<T> {
        let mut data = self.data;
        data.truncate(packed_len(self.n));
        PackedSymmetric::from_parts(data, self.n)
    }

    /// Factor `A = L·Lᵀ` in place.
    ///
    /// Returns immediately if already factorized. A diagonal remainder at
    /// or below machine epsilon aborts with
    /// [`SpdError::IllConditionedMatrix`]; the buffer is then partially
    /// overwritten and the solver stays un-factorized.
    pub fn factorize(&mut self) -> Result<(), SpdError> {
        if self.factorized {
            return Ok(());
        }

        let n = self.n;
        let m = &mut self.data;

        for i in 0..n {
            let ri = row_start(i);
            for k in 0..=i {
                let rk = row_start(k);
                // m[i][0..k] · m[k][0..k]
                let s = kernels::dot(&m[ri..ri + k], &m[rk..rk + k]);

                if k == i {
                    let d = m[ri + i] - s;
                    if d <= T::epsilon() {
                        log::debug!(
                            target: "spdpack",
                            "factorize: pivot {:?} at row {} is not positive",
                            d,
                            i
                        );
                        self.factorized = false;
                        return Err(SpdError::IllConditionedMatrix);
                    }
                    m[ri + i] = d.sqrt();
                } else {
                    m[ri + k] = (m[ri + k] - s) / m[rk + k];
                }
            }
        }

        self.factorized = true;
        Ok(())
    }

    /// Overwrite `b` with the solution of `A·x = b`.
    ///
    /// Errors with [`SpdError::Failure`] before factorization and with
    /// [`SpdError::BadParameter`] if `b.len() < dim()`. Entries past
    /// `dim()` are left untouched.
    pub fn solve(&self, b: &mut [T]) -> Result<(), SpdError> {
        if !self.factorized {
            return Err(SpdError::Failure);
        }
        let n = self.n;
        if b.len() < n {
            return Err(SpdError::BadParameter);
        }

        forward_substitute(&self.data, n, b);
        back_substitute_lt(&self.data, n, b);
        Ok(())
    }

    /// Determinant: `det(A) = (Π L[i,i])²`.
    pub fn det(&self) -> Result<T, SpdError> {
        if !self.factorized {
            return Err(SpdError::Failure);
        }
        let mut prod = T::one();
        for i in 0..self.n {
            prod = prod * self.data[row_start(i) + i];
        }
        Ok(prod * prod)
    }

    /// Log-determinant: `ln(det(A)) = 2 · Σ ln(L[i,i])`.
    ///
    /// Stays finite where [`det`](Self::det) under- or overflows.
    pub fn ln_det(&self) -> Result<T, SpdError> {
        if !self.factorized {
            return Err(SpdError::Failure);
        }
        let mut sum = T::zero();
        for i in 0..self.n {
            sum = sum + self.data[row_start(i) + i].ln();
        }
        Ok(sum + sum)
    }

    /// Inverse of `A` (symmetric, returned packed) from `n` solves.
    pub fn inverse(&self) -> Result<PackedSymmetric<T>, SpdError> {
        if !self.factorized {
            return Err(SpdError::Failure);
        }
        let n = self.n;
        let mut inv = PackedSymmetric::zeros(n);
        let mut e = vec![T::zero(); n];

        for col in 0..n {
            e.iter_mut().for_each(|v| *v = T::zero());
            e[col] = T::one();
            self.solve(&mut e)?;
            // column `col` of A⁻¹; keep the lower part
            for row in col..n {
                inv[(row, col)] = e[row];
            }
        }

        Ok(inv)
    }
}

impl<T: FloatScalar> SpdSolver<T> for PackedCholesky<T> {
    fn factorize(&mut self) -> Result<(), SpdError> {
        PackedCholesky::factorize(self)
    }

    fn solve(&self, b: &mut [T]) -> Result<(), SpdError> {
        PackedCholesky::solve(self, b)
    }

    fn rcond(&self) -> T {
        PackedCholesky::rcond(self)
    }

    fn dim(&self) -> usize {
        self.n
    }

    fn is_factorized(&self) -> bool {
        self.factorized
    }

    fn updater(&mut self) -> Option<&mut dyn SpdUpdate<T>> {
        Some(self)
    }
}

impl<T: FloatScalar> SpdUpdate<T> for PackedCholesky<T> {
    fn update_add(&mut self, d: &[T]) -> Result<(), SpdError> {
        PackedCholesky::update_add(self, d)
    }

    fn update_del(&mut self, ix: usize) -> Result<(), SpdError> {
        PackedCholesky::update_del(self, ix)
    }
}
