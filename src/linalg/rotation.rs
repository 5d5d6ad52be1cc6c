//! linalg::rotation — Z-rotation angle extraction and axis/angle rotations.
//!
//! Purpose
//! -------
//! Implement the two 3D rotation routines of this crate on top of the
//! `argcheck` predicates: recover the signed angle of a rotation about the
//! Z axis, and build the rotation matrix for an arbitrary axis and angle
//! with Rodrigues' formula.
//!
//! Key behaviors
//! -------------
//! - [`z_rot2angle`] validates element type, shape and the fixed Z-row /
//!   Z-column structure of its input before reading the in-plane block.
//! - [`rot`] validates element type, shape and non-nullity of the axis,
//!   normalizes it, and returns a freshly allocated `Array2<f64>`.
//! - Every rejected argument is reported as
//!   [`LinalgError::InvalidArgument`] and logged at `debug` level.
//!
//! Invariants & assumptions
//! ------------------------
//! - Preconditions are checked in a fixed order and the first failure wins:
//!   element type, then shape, then numeric structure.
//! - Structural checks use the fixed tolerances of
//!   [`crate::linalg::tolerance`].
//! - Inputs are borrowed read-only; only the output matrix of [`rot`] is
//!   allocated.
//!
//! Conventions
//! -----------
//! - Angles are in radians; positive angles rotate counter-clockwise when
//!   looking down the axis towards the origin (right-hand rule).
//! - Matrices act on column vectors: `v' = R · v`.
//! - `f32` inputs are widened to `f64`; outputs are always `f64`.

use ndarray::{Array1, Array2, array};
use tracing::{debug, trace};

use crate::{
    argcheck::{ArrayLike, Element, NdView, has_floats, has_shape},
    linalg::{
        errors::{LinalgError, LinalgResult},
        tolerance::{all_close, is_close},
    },
};

/// Cells of a Z-axis rotation that do not depend on the angle.
const Z_ROTATION_FIXED_CELLS: [[usize; 2]; 5] = [[0, 2], [1, 2], [2, 2], [2, 0], [2, 1]];

/// Required values of [`Z_ROTATION_FIXED_CELLS`], in the same order.
const Z_ROTATION_FIXED_VALUES: [f64; 5] = [0.0, 0.0, 1.0, 0.0, 0.0];

const REAL_VALUES: &str = "must contain real values";

/// Extract the signed rotation angle from a Z-axis rotation matrix.
///
/// Parameters
/// ----------
/// - `r`: `&V`
///   (3, 3) real matrix of a rotation around the Z axis, i.e.
///   `[[cos θ, -sin θ, 0], [sin θ, cos θ, 0], [0, 0, 1]]`.
///
/// Returns
/// -------
/// `LinalgResult<f64>`
///   Signed rotation angle θ in radians, in `(-π, π]`.
///
/// Errors
/// ------
/// - `LinalgError::InvalidArgument { param: "R", .. }`
///   - "must contain real values" if `r` holds integer or complex elements;
///   - "must have shape (3, 3)" otherwise if the shape is wrong;
///   - "is not a rotation matrix around the Z-axis" if any of
///     `R[0,2], R[1,2], R[2,2], R[2,0], R[2,1]` is not close to
///     `[0, 0, 1, 0, 0]`.
///
/// Notes
/// -----
/// - `R[0,0]` and `R[1,0]` are clamped to `[-1, 1]` before use so that
///   round-off never pushes them outside the domain of `acos`.
/// - The sign of θ comes from `R[1,0]`: `sin θ >= 0` selects `acos(cos θ)`,
///   anything negative selects `-acos(cos θ)`. θ = 0 and θ = π therefore
///   resolve to the non-negated branch.
/// - The upper-left 2×2 block is not checked for orthonormality.
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::linalg::z_rot2angle;
/// # use ndarray::array;
/// let r = array![[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
/// let angle = z_rot2angle(&r).unwrap();
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn z_rot2angle<V: NdView + ?Sized>(r: &V) -> LinalgResult<f64> {
    require_floats("R", r)?;
    require_shape("R", r, &[3, 3], "must have shape (3, 3)")?;

    let mut fixed = [0.0; 5];
    for (value, index) in fixed.iter_mut().zip(Z_ROTATION_FIXED_CELLS.iter()) {
        *value = read_real("R", r, index)?;
    }
    if !all_close(&fixed, &Z_ROTATION_FIXED_VALUES) {
        return Err(reject("R", "is not a rotation matrix around the Z-axis"));
    }

    let cos_angle = read_real("R", r, &[0, 0])?.clamp(-1.0, 1.0);
    let sin_angle = read_real("R", r, &[1, 0])?.clamp(-1.0, 1.0);

    let angle = if sin_angle >= 0.0 {
        // Quadrants I and II.
        cos_angle.acos()
    } else {
        // Quadrants III and IV.
        -cos_angle.acos()
    };

    trace!(angle, "extracted Z-rotation angle");
    Ok(angle)
}

/// Build the 3D rotation matrix for `angle` radians around `axis`.
///
/// Parameters
/// ----------
/// - `axis`: `&V`
///   (3,) real rotation axis. Need not be unit length; it is normalized
///   internally and never modified.
/// - `angle`: `f64`
///   Signed rotation angle in radians. Any finite value is accepted.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   Freshly allocated (3, 3) orthonormal matrix with determinant +1,
///   computed with Rodrigues' rotation formula from the unit axis
///   `(a, b, c)`:
///
///   ```text
///   | a²+(b²+c²)cos   ab(1-cos)-c·sin  ac(1-cos)+b·sin |
///   | ab(1-cos)+c·sin  b²+(a²+c²)cos   bc(1-cos)-a·sin |
///   | ac(1-cos)-b·sin  bc(1-cos)+a·sin  c²+(a²+b²)cos  |
///   ```
///
/// Errors
/// ------
/// - `LinalgError::InvalidArgument { param: "axis", .. }`
///   - "must contain real values" if `axis` holds integer or complex
///     elements;
///   - "must have shape (3,)" otherwise if the shape is wrong;
///   - "cannot rotate around null-vector" if every component is close to
///     zero.
///
/// Examples
/// --------
/// ```rust
/// # use rust_rotations::linalg::rot;
/// let r = rot(&[1.0, 1.0, 1.0], std::f64::consts::FRAC_PI_2).unwrap();
/// for row in r.rows() {
///     assert!((row.sum() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn rot<V: NdView + ?Sized>(axis: &V, angle: f64) -> LinalgResult<Array2<f64>> {
    require_floats("axis", axis)?;
    require_shape("axis", axis, &[3], "must have shape (3,)")?;

    let mut v = Array1::<f64>::zeros(3);
    for (i, value) in v.iter_mut().enumerate() {
        *value = read_real("axis", axis, &[i])?;
    }
    if v.iter().all(|&x| is_close(x, 0.0)) {
        return Err(reject("axis", "cannot rotate around null-vector"));
    }

    // Scale by the largest component first so squaring cannot overflow.
    let max_abs = v.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    let w = &v / max_abs;
    let norm = w.dot(&w).sqrt();
    let (a, b, c) = (w[0] / norm, w[1] / norm, w[2] / norm);
    let (sin_angle, cos_angle) = angle.sin_cos();
    let one_minus_cos = 1.0 - cos_angle;

    let p00 = (a * a) + ((b * b) + (c * c)) * cos_angle;
    let p11 = (b * b) + ((a * a) + (c * c)) * cos_angle;
    let p22 = (c * c) + ((a * a) + (b * b)) * cos_angle;
    let p01 = (a * b * one_minus_cos) - (c * sin_angle);
    let p10 = (a * b * one_minus_cos) + (c * sin_angle);
    let p12 = (b * c * one_minus_cos) - (a * sin_angle);
    let p21 = (b * c * one_minus_cos) + (a * sin_angle);
    let p20 = (a * c * one_minus_cos) - (b * sin_angle);
    let p02 = (a * c * one_minus_cos) + (b * sin_angle);

    trace!(a, b, c, angle, "built axis/angle rotation");
    Ok(array![[p00, p01, p02], [p10, p11, p12], [p20, p21, p22]])
}

// ---- Argument guards ----

/// Fail with "must contain real values" unless `x` holds real floats.
pub(crate) fn require_floats<A: ArrayLike + ?Sized>(
    param: &'static str, x: &A,
) -> LinalgResult<()> {
    if has_floats(x) { Ok(()) } else { Err(reject(param, REAL_VALUES)) }
}

/// Fail with `reason` unless `x` has exactly `shape`.
pub(crate) fn require_shape<A: ArrayLike + ?Sized>(
    param: &'static str, x: &A, shape: &[usize], reason: &'static str,
) -> LinalgResult<()> {
    if has_shape(x, shape) { Ok(()) } else { Err(reject(param, reason)) }
}

fn read_real<V: NdView + ?Sized>(
    param: &'static str, x: &V, index: &[usize],
) -> LinalgResult<f64> {
    x.element(index).and_then(Element::to_real).ok_or_else(|| reject(param, REAL_VALUES))
}

fn reject(param: &'static str, reason: &'static str) -> LinalgError {
    debug!(param, reason, "rejected rotation argument");
    LinalgError::InvalidArgument { param, reason }
}
