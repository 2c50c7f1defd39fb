use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a packed matrix.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by everything that needs `sqrt`, `abs` or machine epsilon:
/// the factorization, the updates, the condition estimate and the norms.
pub trait FloatScalar: Scalar + Float {
    /// Promote a `usize` count (dimension, iteration index) into `Self`.
    #[inline]
    fn from_count(n: usize) -> Self {
        <Self as num_traits::NumCast>::from(n).unwrap_or_else(Self::max_value)
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a packed lower-triangular array.
///
/// Lets the helpers and the container share one addressing scheme whether
/// the storage is owned ([`PackedSymmetric`](crate::PackedSymmetric)) or
/// borrowed ([`PackedView`](crate::packed::PackedView)).
pub trait PackedRef<T> {
    /// Logical dimension `n` of the `n x n` matrix.
    fn dim(&self) -> usize;

    /// Packed storage; at least `n(n+1)/2` elements.
    fn packed(&self) -> &[T];

    /// Element `(i, j)` of the symmetric matrix (either triangle).
    #[inline]
    fn get(&self, i: usize, j: usize) -> &T {
        &self.packed()[crate::packed::packed_index(i, j)]
    }
}

/// Mutable access to a packed lower-triangular array.
pub trait PackedMut<T>: PackedRef<T> {
    fn packed_mut(&mut self) -> &mut [T];

    #[inline]
    fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.packed_mut()[crate::packed::packed_index(i, j)]
    }
}
