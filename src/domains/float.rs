//! Double-precision floating-point numbers with a fixed zero tolerance.
//!
//! All equality tests in the decomposition go through [near_zero]: a value whose magnitude
//! is below [ZERO_TOLERANCE] counts as zero. Inputs are expected to have small integer or
//! rational coefficients; genuine coefficients smaller than `0.01` are indistinguishable from
//! rounding noise.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use super::{Field, OrderedField, Ring};

/// Magnitude below which a value is treated as exactly zero.
pub const ZERO_TOLERANCE: f64 = 0.01;

/// Returns `true` iff `|x| < ZERO_TOLERANCE`.
#[inline(always)]
pub fn near_zero(x: f64) -> bool {
    x.abs() < ZERO_TOLERANCE
}

/// Returns `true` iff `a` and `b` differ by less than [ZERO_TOLERANCE].
#[inline(always)]
pub fn near_eq(a: f64, b: f64) -> bool {
    near_zero(a - b)
}

/// The field of double-precision floats, with tolerance-based zero and one tests.
pub type RR = FloatField;
/// The field of double-precision floats, with tolerance-based zero and one tests.
pub const RR: FloatField = FloatField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatField;

impl FloatField {
    pub const fn new() -> FloatField {
        FloatField
    }
}

impl Display for FloatField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("RR")
    }
}

impl Ring for FloatField {
    type Element = f64;

    #[inline(always)]
    fn sub(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    #[inline(always)]
    fn mul(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    #[inline(always)]
    fn add_assign(&self, a: &mut f64, b: &f64) {
        *a += b;
    }

    #[inline(always)]
    fn mul_assign(&self, a: &mut f64, b: &f64) {
        *a *= b;
    }

    #[inline(always)]
    fn add_mul_assign(&self, a: &mut f64, b: &f64, c: &f64) {
        *a += b * c;
    }

    #[inline(always)]
    fn sub_mul_assign(&self, a: &mut f64, b: &f64, c: &f64) {
        *a -= b * c;
    }

    #[inline(always)]
    fn neg(&self, a: &f64) -> f64 {
        -a
    }

    #[inline(always)]
    fn zero(&self) -> f64 {
        0.
    }

    #[inline(always)]
    fn one(&self) -> f64 {
        1.
    }

    #[inline]
    fn pow(&self, b: &f64, e: u64) -> f64 {
        match i32::try_from(e) {
            Ok(e) => b.powi(e),
            Err(_) => b.powf(e as f64),
        }
    }

    #[inline(always)]
    fn is_zero(a: &f64) -> bool {
        near_zero(*a)
    }

    #[inline(always)]
    fn is_one(&self, a: &f64) -> bool {
        near_eq(*a, 1.)
    }
}

impl Field for FloatField {
    #[inline(always)]
    fn div(&self, a: &f64, b: &f64) -> f64 {
        a / b
    }

    #[inline(always)]
    fn inv(&self, a: &f64) -> f64 {
        1. / a
    }
}

impl OrderedField for FloatField {
    fn cmp_abs(&self, a: &f64, b: &f64) -> Ordering {
        a.abs().total_cmp(&b.abs())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tolerance_boundary() {
        assert!(near_zero(0.009999));
        assert!(near_zero(-0.009999));
        assert!(!near_zero(0.011));
        assert!(!near_zero(-0.011));
        assert!(FloatField::is_zero(&0.));
    }

    #[test]
    fn one_within_tolerance() {
        assert!(RR.is_one(&1.005));
        assert!(!RR.is_one(&1.02));
        assert!(near_eq(2.999, 3.));
    }

    #[test]
    fn power() {
        assert_eq!(RR.pow(&2., 10), 1024.);
        assert_eq!(RR.pow(&-1., 3), -1.);
        assert_eq!(RR.pow(&3., 0), 1.);

        // exponents beyond the range of `i32`
        let e = i32::MAX as u64 + 3;
        assert_eq!(RR.pow(&1., e), 1.);
        assert_eq!(RR.pow(&-1., e), 1.);
        assert_eq!(RR.pow(&0.5, e), 0.);
        assert_eq!(RR.pow(&2., e), f64::INFINITY);
    }

    #[test]
    fn magnitude_ordering() {
        assert_eq!(RR.cmp_abs(&-3., &2.), Ordering::Greater);
        assert_eq!(RR.cmp_abs(&0.5, &-0.5), Ordering::Equal);
        assert_eq!(RR.cmp_abs(&-0.25, &1.), Ordering::Less);
    }
}
