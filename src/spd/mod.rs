//! Symmetric positive-definite solvers over packed storage.
//!
//! [`SpdSolver`] is the mandatory capability: factorize, solve, observe.
//! [`SpdUpdate`] is the optional structural-edit capability (border a new
//! row/column in, delete one out). Callers probe for it through
//! [`SpdSolver::updater`] or use the `*_or_fail` shims, which report
//! [`SpdError::Failure`] when an implementation cannot edit its factor.
//!
//! # Example
//!
//! ```
//! use spdpack::{PackedCholesky, PackedSymmetric, SpdSolver, SpdUpdate};
//!
//! let a = PackedSymmetric::from_rows(2, &[4.0_f64, 2.0, 2.0, 3.0]);
//! let mut chol = PackedCholesky::new(a);
//! chol.factorize().unwrap();
//!
//! let mut b = [8.0, 7.0];
//! chol.solve(&mut b).unwrap();
//! assert!((4.0 * b[0] + 2.0 * b[1] - 8.0).abs() < 1e-12);
//!
//! // Border a third row/column [1, 1 | 5] in, then take it back out.
//! chol.update_add(&[1.0, 1.0, 5.0]).unwrap();
//! assert_eq!(chol.dim(), 3);
//! chol.update_del(2).unwrap();
//! assert_eq!(chol.dim(), 2);
//! ```

mod cholesky;
mod condition;
mod givens;
mod update;


pub use cholesky::PackedCholesky;
pub use givens::givens;

use crate::traits::FloatScalar;

/// Failure outcomes of the SPD solvers.
///
/// Success is `Ok(())`. The numeric codes from [`SpdError::code`] keep the
/// established status values (success is 0) for callers that log or
/// exchange them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpdError {
    /// A size or index argument is out of range (short vector, bad delete
    /// index). Detected before any mutation.
    BadParameter,
    /// A pivot fell to machine epsilon or below: the matrix is not
    /// numerically positive definite.
    IllConditionedMatrix,
    /// Iteration budget exhausted. Reserved; no current solver reports it.
    IterationLimit,
    /// Allocation failure. Reserved; no current solver reports it.
    OutOfMemory,
    /// Precondition not met (not factorized) or capability unsupported.
    Failure,
}

impl SpdError {
    /// Numeric status code.
    pub const fn code(self) -> u32 {
        match self {
            SpdError::BadParameter => 0x1,
            SpdError::IllConditionedMatrix => 0x3,
            SpdError::IterationLimit => 0x7,
            SpdError::OutOfMemory => 0xB,
            SpdError::Failure => 0xE,
        }
    }
}

impl core::fmt::Display for SpdError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpdError::BadParameter => write!(f, "bad parameter"),
            SpdError::IllConditionedMatrix => {
                write!(f, "matrix is not numerically positive definite")
            }
            SpdError::IterationLimit => write!(f, "iteration limit reached"),
            SpdError::OutOfMemory => write!(f, "out of memory"),
            SpdError::Failure => write!(f, "operation failed: solver not factorized or capability unsupported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpdError {}

/// Mandatory operations of a symmetric positive-definite solver.
pub trait SpdSolver<T: FloatScalar> {
    /// Compute the factorization. Idempotent once it has succeeded.
    fn factorize(&mut self) -> Result<(), SpdError>;

    /// Overwrite `b` (length ≥ `dim()`) with the solution of `A·x = b`.
    fn solve(&self, b: &mut [T]) -> Result<(), SpdError>;

    /// Reciprocal condition number estimate in `[0, 1]`; 0 when unavailable.
    fn rcond(&self) -> T {
        T::zero()
    }

    /// Current matrix dimension.
    fn dim(&self) -> usize;

    fn is_factorized(&self) -> bool;

    /// Structural-edit capability, if this solver has one.
    fn updater(&mut self) -> Option<&mut dyn SpdUpdate<T>> {
        None
    }

    /// [`SpdUpdate::update_add`] through [`updater`](Self::updater), or
    /// [`SpdError::Failure`] when unsupported.
    fn update_add_or_fail(&mut self, d: &[T]) -> Result<(), SpdError> {
        match self.updater() {
            Some(u) => u.update_add(d),
            None => Err(SpdError::Failure),
        }
    }

    /// [`SpdUpdate::update_del`] through [`updater`](Self::updater), or
    /// [`SpdError::Failure`] when unsupported.
    fn update_del_or_fail(&mut self, ix: usize) -> Result<(), SpdError> {
        match self.updater() {
            Some(u) => u.update_del(ix),
            None => Err(SpdError::Failure),
        }
    }
}

/// Structural edits of a factorized system without refactorizing.
pub trait SpdUpdate<T: FloatScalar>: SpdSolver<T> {
    /// Grow the system by one row/column.
    ///
    /// `d` holds the new column of `A` (length ≥ `dim() + 1`), with
    /// `d[dim()]` the new diagonal entry.
    fn update_add(&mut self, d: &[T]) -> Result<(), SpdError>;

    /// Remove row/column `ix` (`ix < dim()`).
    fn update_del(&mut self, ix: usize) -> Result<(), SpdError>;
}
