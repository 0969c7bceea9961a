//! Defines the algebraic traits the decomposition is generic over.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example, the floating-point field [RR](type@float::RR) has elements of type [f64].
//!
//! In general, the ring elements do not implement operations such as addition or multiplication,
//! but rather the ring itself does. Polynomials, matrices and the decomposition pipeline
//! are all generic over the ring type.
//!
//! An extension of the ring trait is the [`Field`] trait, which adds the ability to divide and invert elements.
//! The [`OrderedField`] trait adds a comparison of magnitudes, which pivot selection needs.
pub mod float;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// A ring is a set with two binary operations, addition and multiplication.
pub trait Ring: Clone + PartialEq + Debug + Display {
    /// The element of a ring. For example, the elements of [RR](type@float::RR) are [f64].
    type Element: Clone + PartialEq + Debug + Display;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    /// Test whether `a` is zero. Inexact rings may answer this up to a tolerance.
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;
}

/// A field is a ring that supports division and inversion.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn inv(&self, a: &Self::Element) -> Self::Element;
}

/// A field whose elements can be compared by magnitude.
pub trait OrderedField: Field {
    /// Compare `|a|` with `|b|`.
    fn cmp_abs(&self, a: &Self::Element, b: &Self::Element) -> Ordering;
}
