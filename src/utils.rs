//! utils — numpy interop for the Python bindings.
//!
//! Maps numpy arrays onto the crate's [`ArrayLike`] metadata view and
//! converts real-valued arrays into `f64` arrays the rotation routines can
//! read. The dtype mapping itself is plain Rust so it can be tested without
//! an interpreter.

use crate::argcheck::{ElementKind, FloatPrecision};

#[cfg(feature = "python-bindings")]
use std::borrow::Cow;

#[cfg(feature = "python-bindings")]
use numpy::{
    PyArrayDescrMethods, // .kind(), .itemsize()
    PyArrayDyn,
    PyArrayMethods, // .readonly()
    PyReadonlyArrayDyn,
    PyUntypedArray,
    PyUntypedArrayMethods, // .dtype(), .shape()
};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{argcheck::ArrayLike, linalg::rotation::require_floats};

/// Map a numpy dtype (`kind` character code and item size in bytes) onto an
/// [`ElementKind`].
///
/// - `'i'`, `'u'` → `Integer`.
/// - `'f'` with 4/8 bytes → `Real(Single/Double)`; wider → `Real(Extended)`.
/// - `'c'` with 8/16 bytes → `Complex(Single/Double)`; wider →
///   `Complex(Extended)`.
/// - Anything else (bool, half precision, objects, strings, datetimes) →
///   `Other`.
pub fn element_kind_from_dtype(kind: u8, itemsize: usize) -> ElementKind {
    match (kind, itemsize) {
        (b'i' | b'u', _) => ElementKind::Integer,
        (b'f', 4) => ElementKind::Real(FloatPrecision::Single),
        (b'f', 8) => ElementKind::Real(FloatPrecision::Double),
        (b'f', n) if n > 8 => ElementKind::Real(FloatPrecision::Extended),
        (b'c', 8) => ElementKind::Complex(FloatPrecision::Single),
        (b'c', 16) => ElementKind::Complex(FloatPrecision::Double),
        (b'c', n) if n > 16 => ElementKind::Complex(FloatPrecision::Extended),
        _ => ElementKind::Other,
    }
}

/// Shape and element category of a numpy array, detached from its data.
#[cfg(feature = "python-bindings")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumpyArrayMeta {
    dims: Vec<usize>,
    kind: ElementKind,
}

#[cfg(feature = "python-bindings")]
impl ArrayLike for NumpyArrayMeta {
    fn rank(&self) -> usize {
        self.dims.len()
    }

    fn dims(&self) -> Cow<'_, [usize]> {
        Cow::Borrowed(&self.dims)
    }

    fn element_kind(&self) -> ElementKind {
        self.kind
    }
}

/// Read rank, shape and dtype category of `raw`, which must be a
/// `numpy.ndarray`.
#[cfg(feature = "python-bindings")]
pub fn extract_array_meta(raw: &Bound<'_, PyAny>) -> PyResult<NumpyArrayMeta> {
    let arr = raw
        .downcast::<PyUntypedArray>()
        .map_err(|_| PyTypeError::new_err("expected a numpy.ndarray"))?;
    let dtype = arr.dtype();
    Ok(NumpyArrayMeta {
        dims: arr.shape().to_vec(),
        kind: element_kind_from_dtype(dtype.kind(), dtype.itemsize()),
    })
}

/// Return `raw` as a read-only `float64` array.
///
/// `float64` arrays are borrowed as-is; other real dtypes (`float32`,
/// `longdouble`) are converted with `astype`. Non-real dtypes are rejected
/// with the same message as the Rust API, naming `param`.
#[cfg(feature = "python-bindings")]
pub fn extract_real_array<'py>(
    raw: &Bound<'py, PyAny>, param: &'static str,
) -> PyResult<PyReadonlyArrayDyn<'py, f64>> {
    let meta = extract_array_meta(raw)?;
    require_floats(param, &meta)?;

    if let Ok(arr) = raw.downcast::<PyArrayDyn<f64>>() {
        return Ok(arr.readonly());
    }
    let converted = raw.call_method1("astype", ("float64",))?;
    Ok(converted.downcast_into::<PyArrayDyn<f64>>()?.readonly())
}
