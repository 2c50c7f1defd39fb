//! # spdpack
//!
//! Cholesky factorization of symmetric positive-definite matrices kept in
//! packed lower-triangular storage, with in-place structural updates:
//! bordering a new row/column in, deleting one out by Givens rotations, and
//! a cheap 1-norm condition estimate. no-std compatible (with `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use spdpack::{PackedCholesky, PackedSymmetric};
//!
//! let a = PackedSymmetric::from_rows(3, &[
//!     4.0_f64, 2.0, 1.0,
//!     2.0, 10.0, 3.5,
//!     1.0, 3.5, 4.5,
//! ]);
//! let mut chol = PackedCholesky::new(a);
//! chol.factorize().unwrap();
//!
//! let mut x = [1.0, 2.0, 3.0];
//! chol.solve(&mut x).unwrap();
//!
//! // Grow by one row/column, then drop the middle one.
//! chol.update_add(&[0.5, 0.0, 0.0, 2.0]).unwrap();
//! chol.update_del(1).unwrap();
//! assert_eq!(chol.dim(), 3);
//! assert!(chol.rcond() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`packed`]: Packed addressing ([`packed::packed_index`],
//!   [`packed::packed_len`]) and the owned [`PackedSymmetric<T>`] container,
//!   with mat-vec product and 1-norm.
//!
//! - [`spd`]: The solver contract ([`SpdSolver`], optional [`SpdUpdate`]),
//!   the [`SpdError`] status model, and the [`PackedCholesky<T>`] engine:
//!   factorize, solve, update/downdate, `rcond`, `det`, `inverse`.
//!
//! - [`helper`]: [`Helper`] norm/residual collaborator with a sequential
//!   backend and a rayon backend (`parallel` feature).
//!
//! - [`traits`]: Element traits:
//!   - [`Scalar`]: stored elements (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by the solvers
//!   - [`PackedRef`] / [`PackedMut`]: packed read/write access
//!
//! ## Logging
//!
//! Rejected pivots are reported with `log::debug!` and the condition
//! estimator traces each round with `log::trace!`, all under the target
//! `"spdpack"`. Install any `log` backend to see them.
//!
//! ## Cargo features
//!
//! | Feature    | Default  | Description |
//! |------------|----------|-------------|
//! | `std`      | yes      | Hardware FPU via system libm, `std::error::Error` for `SpdError` |
//! | `libm`     | no       | Pure-Rust software float fallback for `no_std` |
//! | `parallel` | no       | `ParHelper` on rayon (implies `std`) |
//! | `all`      | no       | All features: `std` + `parallel` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod helper;
mod kernels;
pub mod packed;
pub mod spd;
pub mod traits;

#[cfg(feature = "parallel")]
pub use helper::ParHelper;
pub use helper::{Helper, SeqHelper};
pub use packed::PackedSymmetric;
pub use spd::{PackedCholesky, SpdError, SpdSolver, SpdUpdate};
pub use traits::{FloatScalar, PackedMut, PackedRef, Scalar};
