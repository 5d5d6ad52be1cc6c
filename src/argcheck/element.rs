//! argcheck::element — element-type categories for array views.
//!
//! Purpose
//! -------
//! Attach a coarse numeric category (integer, real floating-point, complex
//! floating-point) to every element type that can sit behind an array view,
//! so that the predicates in [`crate::argcheck::predicates`] can answer
//! "does this array hold real/complex values?" without inspecting data.
//!
//! Key behaviors
//! -------------
//! - [`ElementKind`] and [`FloatPrecision`] describe the category and, for
//!   floating types, the precision of the underlying real type.
//! - [`Element`] maps a Rust element type to its [`ElementKind`] at compile
//!   time and offers a by-value conversion to `f64` for real types only.
//!
//! Conventions
//! -----------
//! - `Extended` precision has no stable Rust type; it is only produced when
//!   describing foreign arrays (e.g. numpy `longdouble`).
//! - `Other` covers element types that are neither integer nor floating
//!   (booleans, objects, strings) and fails both float predicates.

use num_complex::Complex;

/// Precision of a real floating-point type, or of the real/imaginary parts
/// of a complex type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatPrecision {
    Single,
    Double,
    Extended,
}

/// Category of an array's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Integer,
    Real(FloatPrecision),
    Complex(FloatPrecision),
    Other,
}

impl ElementKind {
    /// True for real floating-point categories of any precision.
    #[inline]
    pub fn is_real_float(self) -> bool {
        matches!(self, ElementKind::Real(_))
    }

    /// True for complex categories built over any floating precision.
    #[inline]
    pub fn is_complex_float(self) -> bool {
        matches!(self, ElementKind::Complex(_))
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Real(p) => write!(f, "real ({p:?} precision)"),
            ElementKind::Complex(p) => write!(f, "complex ({p:?} precision)"),
            ElementKind::Other => write!(f, "non-numeric"),
        }
    }
}

/// Element — an element type that can be stored behind an array view.
///
/// Purpose
/// -------
/// Tag each supported scalar type with its [`ElementKind`] so that array
/// views can report their element category, and give real floating types a
/// lossless path into `f64` for the rotation routines.
///
/// Invariants
/// ----------
/// - `to_real` returns `Some` iff `KIND` is `ElementKind::Real(_)`.
/// - Implementations are plain `Copy` scalars; reading an element never
///   allocates.
pub trait Element: Copy + 'static {
    /// Category of this element type.
    const KIND: ElementKind;

    /// Widen a real floating-point element to `f64`.
    ///
    /// Returns `None` for integer and complex types so that callers cannot
    /// silently coerce them into real values.
    fn to_real(self) -> Option<f64>;
}

macro_rules! impl_element_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = ElementKind::Integer;

                #[inline]
                fn to_real(self) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($ty:ty, $precision:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::Real($precision);

            #[inline]
            fn to_real(self) -> Option<f64> {
                Some(self as f64)
            }
        }

        impl Element for Complex<$ty> {
            const KIND: ElementKind = ElementKind::Complex($precision);

            #[inline]
            fn to_real(self) -> Option<f64> {
                None
            }
        }
    };
}

impl_element_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_element_float!(f32, FloatPrecision::Single);
impl_element_float!(f64, FloatPrecision::Double);

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The compile-time category attached to integer, real and complex
    //   element types.
    // - The `to_real` conversion contract (Some only for real floats).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that every integer type is tagged `Integer` and refuses
    // conversion to a real value.
    //
    // Given
    // -----
    // - Sample values of signed and unsigned integer types.
    //
    // Expect
    // ------
    // - `KIND == Integer` and `to_real() == None`.
    fn integer_elements_are_tagged_integer_and_not_real() {
        assert_eq!(<i32 as Element>::KIND, ElementKind::Integer);
        assert_eq!(<u8 as Element>::KIND, ElementKind::Integer);
        assert_eq!(<usize as Element>::KIND, ElementKind::Integer);
        assert_eq!(7_i64.to_real(), None);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `f32`/`f64` carry the right precision and widen exactly.
    //
    // Given
    // -----
    // - `1.5_f32` and `-0.25_f64`.
    //
    // Expect
    // ------
    // - Real(Single)/Real(Double) kinds and exact `f64` values.
    fn float_elements_report_precision_and_widen() {
        assert_eq!(<f32 as Element>::KIND, ElementKind::Real(FloatPrecision::Single));
        assert_eq!(<f64 as Element>::KIND, ElementKind::Real(FloatPrecision::Double));
        assert_eq!(1.5_f32.to_real(), Some(1.5));
        assert_eq!((-0.25_f64).to_real(), Some(-0.25));
    }

    #[test]
    // Purpose
    // -------
    // Check that complex elements are tagged complex and never widen to a
    // real value, even with a zero imaginary part.
    //
    // Given
    // -----
    // - `Complex::new(1.0, 0.0)` for both precisions.
    //
    // Expect
    // ------
    // - Complex kinds, `to_real() == None`, and the kind helpers agree.
    fn complex_elements_are_not_real() {
        let z32 = Complex::new(1.0_f32, 0.0);
        let z64 = Complex::new(1.0_f64, 0.0);

        assert_eq!(<Complex<f32> as Element>::KIND, ElementKind::Complex(FloatPrecision::Single));
        assert_eq!(<Complex<f64> as Element>::KIND, ElementKind::Complex(FloatPrecision::Double));
        assert_eq!(z32.to_real(), None);
        assert_eq!(z64.to_real(), None);
        assert!(<Complex<f64> as Element>::KIND.is_complex_float());
        assert!(!<Complex<f64> as Element>::KIND.is_real_float());
    }
}
