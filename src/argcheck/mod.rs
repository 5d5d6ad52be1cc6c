//! argcheck — rank, shape and element-type checks on array views.
//!
//! Purpose
//! -------
//! Provide the validation vocabulary used by numeric routines in this crate
//! (and available to callers): capability traits describing a foreign array,
//! element-type categories, and pure predicates over both.
//!
//! Key behaviors
//! -------------
//! - [`ArrayLike`] / [`NdView`] abstract over ndarray, nalgebra, slices and
//!   vectors without copying data.
//! - [`Element`] tags scalar types with an [`ElementKind`].
//! - [`has_rank`], [`has_shape`], [`has_floats`], [`has_complex`] answer
//!   structural and type questions and never fail.
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything here is side-effect free and holds no state.
//! - Predicates read metadata only; element data is untouched.
//!
//! Downstream usage
//! ----------------
//! - Rotation routines in [`crate::linalg`] call the predicates as guards and
//!   report failures as `LinalgError::InvalidArgument`.
//! - `use rust_rotations::argcheck::prelude::*;` imports the full surface.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`element`], [`view`] and [`predicates`] cover category
//!   tagging, backend metadata and every predicate branch.

pub mod element;
pub mod predicates;
pub mod view;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::element::{Element, ElementKind, FloatPrecision};
pub use self::predicates::{has_complex, has_floats, has_rank, has_shape};
pub use self::view::{ArrayLike, NdView};

pub mod prelude {
    pub use super::element::{Element, ElementKind, FloatPrecision};
    pub use super::predicates::{has_complex, has_floats, has_rank, has_shape};
    pub use super::view::{ArrayLike, NdView};
}
