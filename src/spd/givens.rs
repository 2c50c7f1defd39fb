use crate::traits::FloatScalar;

/// Givens rotation: compute `(c, s)` such that `[c, s; -s, c] * [x; y] = [r; 0]`
/// with `r = hypot(x, y) >= 0`.
///
/// The radius is formed as `t·sqrt(1 + (u/t)²)` with `t = max(|x|,|y|)` and
/// `u = min(|x|,|y|)`, so neither operand is squared directly and large or
/// tiny inputs do not overflow or underflow. `x = y = 0` gives the identity
/// rotation `(1, 0)`.
///
/// ```
/// use spdpack::spd::givens;
/// let (c, s) = givens(3.0_f64, 4.0);
/// assert!((c - 0.6).abs() < 1e-15);
/// assert!((s - 0.8).abs() < 1e-15);
/// assert!((-s * 3.0 + c * 4.0).abs() < 1e-15);
/// ```
#[inline]
pub fn givens<T: FloatScalar>(x: T, y: T) -> (T, T) {
    let ax = x.abs();
    let ay = y.abs();
    let t = ax.max(ay);
    let u = ax.min(ay);

    if t == T::zero() {
        return (T::one(), T::zero());
    }

    let w = u / t;
    let r = t * (T::one() + w * w).sqrt();
    (x / r, y / r)
}
