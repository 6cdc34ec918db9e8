//! Sign utilities for bracketing root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite sign
//! - `select_half`   : which half of a split bracket keeps the sign change

/// Returns `true` if `x` and `y` are both nonzero and of opposite sign.
///
/// Equivalent to `x * y < 0.0` without the product, so tiny or huge values
/// cannot underflow to zero or overflow to infinity. Zero and NaN never count.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Half of a bracket `[a, b]` split at an interior point `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Half {
    /// `[a, c]`
    Left,
    /// `[c, b]`
    Right,
}

/// Picks the half that keeps the sign change, checking `[a, c]` first.
///
/// `None` if neither does: `f(c)` is an exact zero, or the signs at `a` and
/// `b` were never opposite.
#[inline]
pub(crate) fn select_half(fa: f64, fc: f64, fb: f64) -> Option<Half> {
    if opposite_sign(fa, fc) {
        Some(Half::Left)
    } else if opposite_sign(fc, fb) {
        Some(Half::Right)
    } else {
        None
    }
}
