//! linalg::tolerance — fixed closeness tolerances for structural checks.
//!
//! Closeness follows the xtensor `allclose` rule: with `d = |a − b|`, two
//! values are close when `d ≤ ALLCLOSE_ATOL` or
//! `d ≤ ALLCLOSE_RTOL · max(|a|, |b|)`. Unlike the numpy form
//! (`d ≤ atol + rtol · |b|`) the test is symmetric in `a` and `b`. The
//! tolerances are constants and are not exposed as parameters of the
//! rotation routines.

/// Relative tolerance used by [`is_close`].
pub const ALLCLOSE_RTOL: f64 = 1e-5;

/// Absolute tolerance used by [`is_close`].
pub const ALLCLOSE_ATOL: f64 = 1e-8;

/// Return true if `actual` is close to `expected`.
///
/// Symmetric in its arguments. NaN is never close to anything. Equal infinities are close.
#[inline]
pub fn is_close(actual: f64, expected: f64) -> bool {
    if actual == expected {
        return true;
    }
    if !actual.is_finite() || !expected.is_finite() {
        return false;
    }
    let diff = (actual - expected).abs();
    diff <= ALLCLOSE_ATOL || diff <= ALLCLOSE_RTOL * actual.abs().max(expected.abs())
}

/// Return true if every element of `actual` is close to the matching
/// element of `expected`. Slices of different lengths are never close.
pub fn all_close(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(&a, &e)| is_close(a, e))
}
