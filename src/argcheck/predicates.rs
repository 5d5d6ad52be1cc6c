//! argcheck::predicates — boolean argument checks on array views.
//!
//! Purpose
//! -------
//! Answer the structural and type questions numeric routines ask before they
//! touch data: does this array have the expected rank, the exact expected
//! shape, real floating-point elements, complex floating-point elements?
//!
//! Key behaviors
//! -------------
//! - [`has_rank`], [`has_shape`], [`has_floats`] and [`has_complex`] are
//!   pure functions of array metadata.
//! - None of them fail: a shape argument of the wrong length or an
//!   impossible rank simply yields `false`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only [`ArrayLike`] metadata is consulted; element data is never read,
//!   copied or mutated.
//! - Shapes are compared exactly: no broadcasting, no wildcard dimensions.
//! - [`has_floats`] and [`has_complex`] are mutually exclusive; both are
//!   false for integer and non-numeric element types.
//!
//! Downstream usage
//! ----------------
//! - `linalg::rotation` uses these as guards and turns a `false` into a
//!   `LinalgError::InvalidArgument`.
//! - External callers may use them for their own validation.

use crate::argcheck::view::ArrayLike;

/// Return true if `x` has exactly `rank` dimensions.
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::argcheck::has_rank;
/// let x = ndarray::Array2::<f64>::ones((3, 3));
/// assert!(!has_rank(&x, 1));
/// assert!(has_rank(&x, 2));
/// ```
#[inline]
pub fn has_rank<A: ArrayLike + ?Sized>(x: &A, rank: usize) -> bool {
    x.rank() == rank
}

/// Return true if `x` has exactly the given `shape`.
///
/// Parameters
/// ----------
/// - `x`: `&A`
///   Array to test.
/// - `shape`: `&[usize]`
///   Desired size of every dimension. Its length is the desired rank.
///
/// Returns
/// -------
/// `bool`
///   `true` iff `x.rank() == shape.len()` and every dimension matches.
///   A `(9,)` array does not have shape `(3, 3)` even though both hold nine
///   elements.
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::argcheck::has_shape;
/// let x = ndarray::Array2::<f64>::ones((3, 3));
/// assert!(has_shape(&x, &[3, 3]));
/// assert!(!has_shape(&x, &[3]));
/// assert!(!has_shape(&x, &[9]));
/// ```
#[inline]
pub fn has_shape<A: ArrayLike + ?Sized>(x: &A, shape: &[usize]) -> bool {
    x.rank() == shape.len() && *x.dims() == *shape
}

/// Return true if `x` holds real floating-point values (`f32`, `f64`, or an
/// extended-precision foreign type).
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::argcheck::has_floats;
/// # use num_complex::Complex;
/// assert!(has_floats(&[1.0_f32, 2.0]));
/// assert!(!has_floats(&[1_i32, 2]));
/// assert!(!has_floats(&[Complex::new(1.0_f64, 0.0)]));
/// ```
#[inline]
pub fn has_floats<A: ArrayLike + ?Sized>(x: &A) -> bool {
    x.element_kind().is_real_float()
}

/// Return true if `x` holds complex values over any floating precision.
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::argcheck::has_complex;
/// # use num_complex::Complex;
/// assert!(has_complex(&[Complex::new(1.0_f32, 0.0)]));
/// assert!(!has_complex(&[1.0_f64]));
/// assert!(!has_complex(&[1_u8]));
/// ```
#[inline]
pub fn has_complex<A: ArrayLike + ?Sized>(x: &A) -> bool {
    x.element_kind().is_complex_float()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, Vector3};
    use ndarray::{Array, Array1, Array2, ArrayD, IxDyn};
    use num_complex::Complex;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rank and exact-shape matching, including equal element counts with
    //   different ranks and zero-sized dimensions.
    // - Element category checks across integer, real and complex types for
    //   several array backends.
    //
    // They intentionally DO NOT cover:
    // - Foreign (numpy) dtype mapping; that lives with the Python bridge.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `has_rank` matches the number of dimensions only.
    //
    // Given
    // -----
    // - A 3×3 array, a length-9 vector and a rank-0 dynamic array.
    //
    // Expect
    // ------
    // - Exactly one rank matches for each input.
    fn has_rank_matches_dimensionality_exactly() {
        // Arrange
        let m = Array2::<f64>::ones((3, 3));
        let v = Array1::<f64>::ones(9);
        let s = ArrayD::<f64>::zeros(IxDyn(&[]));

        // Act / Assert
        assert!(has_rank(&m, 2));
        assert!(!has_rank(&m, 1));
        assert!(has_rank(&v, 1));
        assert!(!has_rank(&v, 2));
        assert!(has_rank(&s, 0));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `has_shape` rejects rank mismatches even when the total
    // element count agrees.
    //
    // Given
    // -----
    // - A (3, 3) matrix and a (9,) vector.
    //
    // Expect
    // ------
    // - Each only matches its own shape.
    fn has_shape_rejects_rank_mismatch_with_equal_size() {
        // Arrange
        let m = Array2::<f64>::ones((3, 3));
        let v = Array1::<f64>::ones(9);

        // Act / Assert
        assert!(has_shape(&m, &[3, 3]));
        assert!(!has_shape(&m, &[9]));
        assert!(!has_shape(&m, &[3, 3, 1]));
        assert!(has_shape(&v, &[9]));
        assert!(!has_shape(&v, &[3, 3]));
    }

    #[test]
    // Purpose
    // -------
    // Check per-dimension comparison, including transposes and empty
    // dimensions.
    //
    // Given
    // -----
    // - A (2, 3) matrix, its transpose and a (0, 3) matrix.
    //
    // Expect
    // ------
    // - Shapes match only in the right order; a zero-length dimension is
    //   compared like any other.
    fn has_shape_compares_each_dimension() {
        // Arrange
        let m = Array::<f32, _>::zeros((2, 3));
        let e = Array::<f32, _>::zeros((0, 3));

        // Act / Assert
        assert!(has_shape(&m, &[2, 3]));
        assert!(!has_shape(&m, &[3, 2]));
        assert!(has_shape(&m.t(), &[3, 2]));
        assert!(has_shape(&e, &[0, 3]));
        assert!(!has_shape(&e, &[3]));
        assert!(!has_shape(&e, &[]));
    }

    #[test]
    // Purpose
    // -------
    // Verify the float/complex predicates on ndarray element types.
    //
    // Given
    // -----
    // - 3×3 arrays of i32, f32, f64, Complex<f32> and Complex<f64>.
    //
    // Expect
    // ------
    // - `has_floats` only for f32/f64, `has_complex` only for complex
    //   types, and never both.
    fn float_and_complex_predicates_follow_element_type() {
        // Arrange
        let ints = Array2::<i32>::ones((3, 3));
        let f32s = Array2::<f32>::ones((3, 3));
        let f64s = Array2::<f64>::ones((3, 3));
        let c32s = Array2::<Complex<f32>>::from_elem((3, 3), Complex::new(1.0, 0.0));
        let c64s = Array2::<Complex<f64>>::from_elem((3, 3), Complex::new(1.0, 0.0));

        // Act / Assert
        assert!(!has_floats(&ints) && !has_complex(&ints));
        assert!(has_floats(&f32s) && !has_complex(&f32s));
        assert!(has_floats(&f64s) && !has_complex(&f64s));
        assert!(!has_floats(&c32s) && has_complex(&c32s));
        assert!(!has_floats(&c64s) && has_complex(&c64s));
    }

    #[test]
    // Purpose
    // -------
    // Confirm the predicates work unchanged on non-ndarray backends.
    //
    // Given
    // -----
    // - A nalgebra 3×3 `DMatrix<f64>`, a `Vector3<u16>`, a `Vec<f64>`.
    //
    // Expect
    // ------
    // - Ranks, shapes and kinds as for the equivalent ndarray inputs.
    fn predicates_accept_nalgebra_and_std_backends() {
        // Arrange
        let m = DMatrix::<f64>::identity(3, 3);
        let v = Vector3::<u16>::new(1, 2, 3);
        let w = vec![0.0_f64; 3];

        // Act / Assert
        assert!(has_rank(&m, 2) && has_shape(&m, &[3, 3]) && has_floats(&m));
        assert!(has_rank(&v, 1) && has_shape(&v, &[3]) && !has_floats(&v));
        assert!(has_shape(&w, &[3]) && has_floats(&w) && !has_complex(&w));
        assert!(has_shape(w.as_slice(), &[3]));
    }
}
