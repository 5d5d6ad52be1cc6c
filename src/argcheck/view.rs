//! argcheck::view — read-only capability traits over foreign arrays.
//!
//! Purpose
//! -------
//! Describe the minimum an external array library must expose for this crate
//! to validate and read it: rank, shape, element category and by-value
//! element access. Argument checks and rotation routines are written against
//! these traits, never against a concrete array type.
//!
//! Key behaviors
//! -------------
//! - [`ArrayLike`] exposes metadata only (`rank`, `dims`, `element_kind`)
//!   and is enough for every predicate.
//! - [`NdView`] adds [`NdView::element`] for routines that must read values.
//! - Implementations are provided for `ndarray::ArrayBase` (owned arrays,
//!   views, shared arrays; any dimension), `nalgebra` dense matrices and
//!   vectors, slices, fixed-size arrays, `Vec` and references to all of
//!   these.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dims().len() == rank()` for every implementation.
//! - `element(index)` returns `None` (never panics) when `index.len()` does
//!   not match the rank or any coordinate is out of bounds.
//! - Nothing here copies or mutates element data. `dims` borrows the shape
//!   when the backing library stores one and otherwise builds a tiny owned
//!   vector.
//!
//! Conventions
//! -----------
//! - Indices are row-major coordinates `[i0, i1, ...]` regardless of the
//!   memory layout of the backing storage.
//! - `nalgebra` matrices are rank 2 (`nrows × ncols`); `nalgebra` vectors
//!   are rank 1, matching the shape a numpy user would expect.

use std::borrow::Cow;

use nalgebra::{DMatrix, DVector, Matrix3, Scalar, Vector3};
use ndarray::{ArrayBase, Data, Dimension, RawData};

use crate::argcheck::element::{Element, ElementKind};

/// Metadata capability of an array: rank, shape and element category.
pub trait ArrayLike {
    /// Number of dimensions.
    fn rank(&self) -> usize;

    /// Size of each dimension, outermost first.
    fn dims(&self) -> Cow<'_, [usize]>;

    /// Category of the stored elements.
    fn element_kind(&self) -> ElementKind;
}

/// NdView — an [`ArrayLike`] whose elements can be read by coordinate.
///
/// Purpose
/// -------
/// Give numeric routines uniform access to caller-owned data without
/// requiring contiguity, a particular memory order, or a copy.
///
/// Invariants
/// ----------
/// - `element_kind()` equals `<Self::Elem as Element>::KIND`.
/// - `element` is a pure read.
pub trait NdView: ArrayLike {
    type Elem: Element;

    /// Read the element at `index`, or `None` if `index` is not a valid
    /// coordinate for this view.
    fn element(&self, index: &[usize]) -> Option<Self::Elem>;
}

// ---- References ----

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    #[inline]
    fn rank(&self) -> usize {
        (**self).rank()
    }

    #[inline]
    fn dims(&self) -> Cow<'_, [usize]> {
        (**self).dims()
    }

    #[inline]
    fn element_kind(&self) -> ElementKind {
        (**self).element_kind()
    }
}

impl<V: NdView + ?Sized> NdView for &V {
    type Elem = V::Elem;

    #[inline]
    fn element(&self, index: &[usize]) -> Option<Self::Elem> {
        (**self).element(index)
    }
}

// ---- ndarray ----

impl<S, D> ArrayLike for ArrayBase<S, D>
where
    S: RawData,
    S::Elem: Element,
    D: Dimension,
{
    #[inline]
    fn rank(&self) -> usize {
        self.ndim()
    }

    #[inline]
    fn dims(&self) -> Cow<'_, [usize]> {
        Cow::Borrowed(self.shape())
    }

    #[inline]
    fn element_kind(&self) -> ElementKind {
        <S::Elem as Element>::KIND
    }
}

impl<S, D> NdView for ArrayBase<S, D>
where
    S: Data,
    S::Elem: Element,
    D: Dimension,
{
    type Elem = S::Elem;

    fn element(&self, index: &[usize]) -> Option<Self::Elem> {
        if index.len() != self.ndim() {
            return None;
        }
        self.view().into_dyn().get(index).copied()
    }
}

// ---- Slices, arrays, vectors ----

impl<T: Element> ArrayLike for [T] {
    #[inline]
    fn rank(&self) -> usize {
        1
    }

    #[inline]
    fn dims(&self) -> Cow<'_, [usize]> {
        Cow::Owned(vec![self.len()])
    }

    #[inline]
    fn element_kind(&self) -> ElementKind {
        T::KIND
    }
}

impl<T: Element> NdView for [T] {
    type Elem = T;

    #[inline]
    fn element(&self, index: &[usize]) -> Option<T> {
        match index {
            [i] => self.get(*i).copied(),
            _ => None,
        }
    }
}

impl<T: Element, const N: usize> ArrayLike for [T; N] {
    #[inline]
    fn rank(&self) -> usize {
        1
    }

    #[inline]
    fn dims(&self) -> Cow<'_, [usize]> {
        Cow::Owned(vec![N])
    }

    #[inline]
    fn element_kind(&self) -> ElementKind {
        T::KIND
    }
}

impl<T: Element, const N: usize> NdView for [T; N] {
    type Elem = T;

    #[inline]
    fn element(&self, index: &[usize]) -> Option<T> {
        self.as_slice().element(index)
    }
}

impl<T: Element> ArrayLike for Vec<T> {
    #[inline]
    fn rank(&self) -> usize {
        1
    }

    #[inline]
    fn dims(&self) -> Cow<'_, [usize]> {
        self.as_slice().dims()
    }

    #[inline]
    fn element_kind(&self) -> ElementKind {
        T::KIND
    }
}

impl<T: Element> NdView for Vec<T> {
    type Elem = T;

    #[inline]
    fn element(&self, index: &[usize]) -> Option<T> {
        self.as_slice().element(index)
    }
}

// ---- nalgebra ----

macro_rules! impl_nalgebra_matrix {
    ($ty:ident) => {
        impl<T: Element + Scalar> ArrayLike for $ty<T> {
            #[inline]
            fn rank(&self) -> usize {
                2
            }

            #[inline]
            fn dims(&self) -> Cow<'_, [usize]> {
                Cow::Owned(vec![self.nrows(), self.ncols()])
            }

            #[inline]
            fn element_kind(&self) -> ElementKind {
                T::KIND
            }
        }

        impl<T: Element + Scalar> NdView for $ty<T> {
            type Elem = T;

            #[inline]
            fn element(&self, index: &[usize]) -> Option<T> {
                match index {
                    [i, j] => self.get((*i, *j)).copied(),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! impl_nalgebra_vector {
    ($ty:ident) => {
        impl<T: Element + Scalar> ArrayLike for $ty<T> {
            #[inline]
            fn rank(&self) -> usize {
                1
            }

            #[inline]
            fn dims(&self) -> Cow<'_, [usize]> {
                Cow::Owned(vec![self.len()])
            }

            #[inline]
            fn element_kind(&self) -> ElementKind {
                T::KIND
            }
        }

        impl<T: Element + Scalar> NdView for $ty<T> {
            type Elem = T;

            #[inline]
            fn element(&self, index: &[usize]) -> Option<T> {
                match index {
                    [i] => self.get(*i).copied(),
                    _ => None,
                }
            }
        }
    };
}

impl_nalgebra_matrix!(DMatrix);
impl_nalgebra_matrix!(Matrix3);
impl_nalgebra_vector!(DVector);
impl_nalgebra_vector!(Vector3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argcheck::element::FloatPrecision;
    use ndarray::{Array2, Array3, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rank/shape/kind reporting for ndarray, nalgebra and slice backends.
    // - Row-major coordinate reads, including non-contiguous ndarray views.
    // - `None` on malformed or out-of-bounds coordinates.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify ndarray metadata is reported without copying the shape.
    //
    // Given
    // -----
    // - A 2×3×4 `f32` array of zeros.
    //
    // Expect
    // ------
    // - rank 3, dims [2, 3, 4], Real(Single), and a borrowed shape.
    fn ndarray_reports_rank_dims_and_kind() {
        // Arrange
        let x = Array3::<f32>::zeros((2, 3, 4));

        // Act
        let dims = ArrayLike::dims(&x);

        // Assert
        assert_eq!(ArrayLike::rank(&x), 3);
        assert_eq!(&*dims, &[2, 3, 4]);
        assert!(matches!(dims, Cow::Borrowed(_)));
        assert_eq!(x.element_kind(), ElementKind::Real(FloatPrecision::Single));
    }

    #[test]
    // Purpose
    // -------
    // Ensure reads through a transposed (non-contiguous) view follow the
    // view's logical coordinates.
    //
    // Given
    // -----
    // - A 2×3 matrix and its transpose view.
    //
    // Expect
    // ------
    // - `t.element([j, i]) == m[[i, j]]`; malformed indices give `None`.
    fn ndarray_element_follows_logical_coordinates() {
        // Arrange
        let m: Array2<f64> = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = m.t();

        // Act / Assert
        assert_eq!(t.element(&[2, 1]), Some(6.0));
        assert_eq!(t.element(&[0, 1]), Some(4.0));
        assert_eq!(t.element(&[3, 0]), None);
        assert_eq!(t.element(&[0]), None);
        assert_eq!(t.element(&[0, 0, 0]), None);
    }

    #[test]
    // Purpose
    // -------
    // Check that nalgebra matrices are rank 2 and vectors rank 1.
    //
    // Given
    // -----
    // - A 2×3 `DMatrix<i32>` and a `Vector3<f64>`.
    //
    // Expect
    // ------
    // - dims (2, 3) and (3,), matching kinds and coordinate reads.
    fn nalgebra_matrices_and_vectors_have_expected_rank() {
        // Arrange
        let m = DMatrix::<i32>::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]);
        let v = Vector3::new(0.5_f64, 1.5, 2.5);

        // Act / Assert
        assert_eq!(ArrayLike::rank(&m), 2);
        assert_eq!(&*ArrayLike::dims(&m), &[2, 3]);
        assert_eq!(m.element_kind(), ElementKind::Integer);
        assert_eq!(m.element(&[1, 0]), Some(4));
        assert_eq!(m.element(&[2, 0]), None);

        assert_eq!(ArrayLike::rank(&v), 1);
        assert_eq!(&*ArrayLike::dims(&v), &[3]);
        assert_eq!(v.element(&[2]), Some(2.5));
        assert_eq!(v.element(&[0, 0]), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify slices, fixed arrays and vectors behave as rank-1 views.
    //
    // Given
    // -----
    // - The same three values as a slice, an array and a `Vec`.
    //
    // Expect
    // ------
    // - dims [3] for all, identical reads, `None` past the end.
    fn slices_arrays_and_vecs_are_rank_one() {
        // Arrange
        let arr = [1.0_f64, 2.0, 3.0];
        let vec = arr.to_vec();
        let slice: &[f64] = &arr;

        // Act / Assert
        for view in [&arr as &dyn ArrayLike, &vec, &slice] {
            assert_eq!(view.rank(), 1);
            assert_eq!(&*view.dims(), &[3]);
        }
        assert_eq!(arr.element(&[1]), Some(2.0));
        assert_eq!(vec.element(&[2]), Some(3.0));
        assert_eq!(slice.element(&[3]), None);
    }
}
