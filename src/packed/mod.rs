pub(crate) mod norm;
mod ops;

pub use ops::row_dot;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::spd::SpdError;
use crate::traits::{PackedMut, PackedRef, Scalar};

/// Storage offset of element `(i, j)` of a symmetric matrix in packed
/// lower-triangular, row-major layout.
///
/// Symmetric in its arguments: `packed_index(i, j) == packed_index(j, i)`.
/// No bounds checking; callers keep `i, j < n`.
///
/// ```
/// use spdpack::packed::packed_index;
/// // Row 2 starts at offset 3: (2,0) (2,1) (2,2)
/// assert_eq!(packed_index(2, 0), 3);
/// assert_eq!(packed_index(2, 2), 5);
/// assert_eq!(packed_index(1, 2), packed_index(2, 1));
/// ```
#[inline(always)]
pub const fn packed_index(i: usize, j: usize) -> usize {
    if i >= j {
        j + i * (i + 1) / 2
    } else {
        i + j * (j + 1) / 2
    }
}

/// Number of stored elements for an `n x n` symmetric matrix: `n(n+1)/2`.
#[inline(always)]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of the first element of row `i` (equivalently `packed_len(i)`).
#[inline(always)]
pub(crate) const fn row_start(i: usize) -> usize {
    i * (i + 1) / 2
}

/// Symmetric matrix with packed lower-triangular storage.
///
/// Only the `n(n+1)/2` elements on and below the diagonal are kept, row by
/// row. Indexing with `(i, j)` is symmetric, so `m[(0, 2)]` and `m[(2, 0)]`
/// refer to the same element.
///
/// # Examples
///
/// ```
/// use spdpack::PackedSymmetric;
///
/// let a = PackedSymmetric::from_rows(2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// assert_eq!(a[(1, 0)], 2.0);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.as_slice(), &[4.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSymmetric<T> {
    data: Vec<T>,
    n: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> PackedSymmetric<T> {
    /// Create an `n x n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); packed_len(n)],
            n,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use spdpack::PackedSymmetric;
    /// let id = PackedSymmetric::<f64>::eye(3);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// assert_eq!(id[(2, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from packed lower-triangular data.
    ///
    /// Extra trailing elements are kept (they act as spare capacity for
    /// bordering updates). Returns [`SpdError::BadParameter`] if `data` has
    /// fewer than `n(n+1)/2` elements.
    pub fn from_vec(n: usize, data: Vec<T>) -> Result<Self, SpdError> {
        if data.len() < packed_len(n) {
            return Err(SpdError::BadParameter);
        }
        Ok(Self { data, n })
    }

    /// Create a matrix from a dense row-major `n x n` slice.
    ///
    /// Only the lower triangle is read. Panics if `row_major.len() != n * n`.
    pub fn from_rows(n: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            n * n,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            n,
            n,
        );
        Self::from_fn(n, |i, j| row_major[i * n + j])
    }
}

impl<T> PackedSymmetric<T> {
    /// Create a matrix by calling `f(i, j)` for every `j <= i`.
    ///
    /// ```
    /// use spdpack::PackedSymmetric;
    /// let m = PackedSymmetric::from_fn(3, |i, j| (i * 10 + j) as f64);
    /// assert_eq!(m[(2, 1)], 21.0);
    /// assert_eq!(m[(1, 2)], 21.0);
    /// ```
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(packed_len(n));
        for i in 0..n {
            for j in 0..=i {
                data.push(f(i, j));
            }
        }
        Self { data, n }
    }

    /// Matrix dimension `n`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The `n(n+1)/2` packed elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..packed_len(self.n)]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = packed_len(self.n);
        &mut self.data[..len]
    }

    /// Consume the matrix and return its backing storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub(crate) fn from_parts(data: Vec<T>, n: usize) -> Self {
        debug_assert!(data.len() >= packed_len(n));
        Self { data, n }
    }

    /// Split into backing storage and dimension.
    #[inline]
    pub(crate) fn into_parts(self) -> (Vec<T>, usize) {
        (self.data, self.n)
    }
}

impl<T> Index<(usize, usize)> for PackedSymmetric<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.n && j < self.n, "index ({}, {}) out of range", i, j);
        &self.data[packed_index(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for PackedSymmetric<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.n && j < self.n, "index ({}, {}) out of range", i, j);
        &mut self.data[packed_index(i, j)]
    }
}

impl<T> PackedRef<T> for PackedSymmetric<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn packed(&self) -> &[T] {
        &self.data
    }
}

impl<T> PackedMut<T> for PackedSymmetric<T> {
    #[inline]
    fn packed_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// ── PackedView ──────────────────────────────────────────────────────

/// Borrowed view of caller-assembled packed data.
///
/// ```
/// use spdpack::packed::PackedView;
/// use spdpack::traits::PackedRef;
///
/// let raw = [2.0_f64, -1.0, 2.0];
/// let v = PackedView::new(&raw, 2).unwrap();
/// assert_eq!(*v.get(0, 1), -1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PackedView<'a, T> {
    data: &'a [T],
    n: usize,
}

impl<'a, T> PackedView<'a, T> {
    /// Returns [`SpdError::BadParameter`] if `data` is shorter than `n(n+1)/2`.
    pub fn new(data: &'a [T], n: usize) -> Result<Self, SpdError> {
        if data.len() < packed_len(n) {
            return Err(SpdError::BadParameter);
        }
        Ok(Self { data, n })
    }
}

impl<T> PackedRef<T> for PackedView<'_, T> {
    #[inline]
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn packed(&self) -> &[T] {
        self.data
    }
}
