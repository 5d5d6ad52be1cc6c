//! rust_rotations — array argument checks and 3D rotation algebra.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the argument checks and rotation routines to Python via the
//! `_rust_rotations` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`argcheck`] (rank/shape/element-type
//!   predicates over any array view) and [`linalg`] (Z-rotation angle
//!   extraction and Rodrigues rotation matrices).
//! - When the `python-bindings` feature is enabled, define the
//!   `#[pymodule]` initializer and register the `argcheck` and `linalg`
//!   submodules under `rust_rotations` so dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, numpy conversion and error mapping.
//! - Python callers get the same checks, in the same order, with the same
//!   messages as Rust callers.
//!
//! Conventions
//! -----------
//! - Arrays are never owned by this crate. Rust callers pass ndarray,
//!   nalgebra, slice or `Vec` values by reference; Python callers pass
//!   `numpy.ndarray`s.
//! - Errors from core Rust code are [`linalg::LinalgError`] values and are
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on the inner modules and can ignore the PyO3
//!   items guarded by the `python-bindings` feature:
//!
//!   ```rust
//!   use rust_rotations::linalg::{rot, z_rot2angle};
//!
//!   let r = rot(&[0.0, 0.0, 1.0], 0.25).unwrap();
//!   assert!((z_rot2angle(&r).unwrap() - 0.25).abs() < 1e-12);
//!   ```
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules, by
//!   `tests/integration_rotation_pipeline.rs`, and by property tests in
//!   `tests/rotation_properties.rs`.
//! - The PyO3 glue is exercised from Python.

pub mod argcheck;
pub mod linalg;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    argcheck::{has_complex, has_floats, has_rank, has_shape},
    linalg::{rot, z_rot2angle},
    utils::{extract_array_meta, extract_real_array},
};

/// has_rank(x, rank) — true if `x` has exactly `rank` dimensions.
///
/// Negative ranks are never matched.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "has_rank", signature = (x, rank))]
fn py_has_rank(x: &Bound<'_, PyAny>, rank: i64) -> PyResult<bool> {
    let meta = extract_array_meta(x)?;
    Ok(usize::try_from(rank).is_ok_and(|rank| has_rank(&meta, rank)))
}

/// has_shape(x, shape) — true if `x` has exactly the given shape.
///
/// Shapes containing negative entries are never matched.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "has_shape", signature = (x, shape))]
fn py_has_shape(x: &Bound<'_, PyAny>, shape: Vec<i64>) -> PyResult<bool> {
    let meta = extract_array_meta(x)?;
    let shape: Result<Vec<usize>, _> = shape.into_iter().map(usize::try_from).collect();
    Ok(shape.is_ok_and(|shape| has_shape(&meta, &shape)))
}

/// has_floats(x) — true if `x` holds float32/float64/longdouble values.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "has_floats", signature = (x))]
fn py_has_floats(x: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(has_floats(&extract_array_meta(x)?))
}

/// has_complex(x) — true if `x` holds complex64/complex128/clongdouble
/// values.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "has_complex", signature = (x))]
fn py_has_complex(x: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(has_complex(&extract_array_meta(x)?))
}

/// z_rot2angle(R) — signed angle [rad] of a (3, 3) Z-axis rotation matrix.
///
/// Errors
/// ------
/// - `TypeError` if `R` is not a `numpy.ndarray`.
/// - `ValueError` for the argument failures documented on
///   [`linalg::z_rot2angle`].
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "z_rot2angle", signature = (r))]
fn py_z_rot2angle(r: &Bound<'_, PyAny>) -> PyResult<f64> {
    let arr = extract_real_array(r, "R")?;
    Ok(z_rot2angle(&arr.as_array())?)
}

/// rot(axis, angle) — (3, 3) rotation matrix for `angle` [rad] around
/// `axis`.
///
/// Errors
/// ------
/// - `TypeError` if `axis` is not a `numpy.ndarray`.
/// - `ValueError` for the argument failures documented on
///   [`linalg::rot`].
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "rot", signature = (axis, angle))]
fn py_rot<'py>(
    py: Python<'py>, axis: &Bound<'py, PyAny>, angle: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let arr = extract_real_array(axis, "axis")?;
    let r = rot(&arr.as_array(), angle)?;
    Ok(r.into_pyarray(py))
}

/// _rust_rotations — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_rotations` Python module and register its submodules
/// used by the public `rust_rotations` package.
///
/// Key behaviors
/// -------------
/// - Create `argcheck` and `linalg` submodules.
/// - Attach those submodules to the parent `_rust_rotations` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_rotations<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let argcheck_mod = PyModule::new(_py, "argcheck")?;
    let linalg_mod = PyModule::new(_py, "linalg")?;
    argcheck_module(_py, m, &argcheck_mod)?;
    linalg_module(_py, m, &linalg_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_rotations.argcheck", argcheck_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("rust_rotations.linalg", linalg_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn argcheck_module<'py>(
    _py: Python, rust_rotations: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_has_rank, m)?)?;
    m.add_function(wrap_pyfunction!(py_has_shape, m)?)?;
    m.add_function(wrap_pyfunction!(py_has_floats, m)?)?;
    m.add_function(wrap_pyfunction!(py_has_complex, m)?)?;
    rust_rotations.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn linalg_module<'py>(
    _py: Python, rust_rotations: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_z_rot2angle, m)?)?;
    m.add_function(wrap_pyfunction!(py_rot, m)?)?;
    rust_rotations.add_submodule(m)?;
    Ok(())
}
