//! linalg::errors — error type for rotation routines and its Python bridge.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by the rotation algebra,
//! together with a conversion into Python exceptions for PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - [`LinalgError::InvalidArgument`] names the offending parameter and the
//!   violated contract (element type, shape, Z-rotation structure, null
//!   axis).
//! - `Display` renders `Parameter[<name>] <reason>.` so messages are
//!   readable without extra context.
//! - `From<LinalgError> for PyErr` raises `ValueError` with that message.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are small, `Clone` and comparable so tests can match on them.
//! - Validation failures are reported synchronously to the immediate caller;
//!   there is no partial state to recover.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LinalgResult<T> = Result<T, LinalgError>;

/// LinalgError — argument failures of the rotation routines.
///
/// Variants
/// --------
/// - `InvalidArgument { param, reason }`
///   `param` is the parameter name as documented on the failing routine
///   (`"R"`, `"axis"`); `reason` is a lower-case clause such as
///   `"must have shape (3, 3)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    InvalidArgument { param: &'static str, reason: &'static str },
}

impl LinalgError {
    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            LinalgError::InvalidArgument { param, .. } => param,
        }
    }

    /// Violated contract, without the parameter name.
    pub fn reason(&self) -> &'static str {
        match self {
            LinalgError::InvalidArgument { reason, .. } => reason,
        }
    }
}

impl std::error::Error for LinalgError {}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinalgError::InvalidArgument { param, reason } => {
                write!(f, "Parameter[{param}] {reason}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
