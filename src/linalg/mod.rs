//! linalg — 3D rotation algebra on validated array views.
//!
//! Purpose
//! -------
//! Provide the two rotation routines of this crate: signed-angle extraction
//! from a Z-axis rotation matrix ([`z_rot2angle`]) and axis/angle rotation
//! matrices via Rodrigues' formula ([`rot`]).
//!
//! Key behaviors
//! -------------
//! - Inputs are any [`NdView`](crate::argcheck::NdView) with real elements;
//!   they are checked with the `argcheck` predicates before use.
//! - Failures are reported as [`LinalgError::InvalidArgument`] through
//!   [`LinalgResult`].
//! - Structural closeness uses the fixed tolerances in [`tolerance`].
//!
//! Invariants & assumptions
//! ------------------------
//! - No state, no I/O; [`rot`] allocates only its (3, 3) result.
//! - Both routines are safe to call concurrently.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`rotation`], [`tolerance`] and [`errors`] cover every
//!   error branch and the concrete reference matrices.
//! - `tests/rotation_properties.rs` checks round-trip, identity and
//!   orthonormality properties on random inputs.

pub mod errors;
pub mod rotation;
pub mod tolerance;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{LinalgError, LinalgResult};
pub use self::rotation::{rot, z_rot2angle};

pub mod prelude {
    pub use super::errors::{LinalgError, LinalgResult};
    pub use super::rotation::{rot, z_rot2angle};
}
