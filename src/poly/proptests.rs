//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::domains::float::{FloatField, RR};
use crate::poly::UnivariatePolynomial;

// Small integer coefficients keep every evaluation exact in f64.
fn small_coeff() -> impl Strategy<Value = f64> {
    (-20i32..=20i32).prop_map(f64::from)
}

// Polynomials with 0 to 5 stored coefficients, trailing zeros allowed.
fn small_poly() -> impl Strategy<Value = UnivariatePolynomial<FloatField>> {
    proptest::collection::vec(small_coeff(), 0..=5)
        .prop_map(|c| UnivariatePolynomial::from_coefficients(c, RR))
}

fn sample_point() -> impl Strategy<Value = f64> {
    prop_oneof![Just(-2.), Just(-0.5), Just(0.), Just(1.), Just(3.)]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.)
}

proptest! {
    #[test]
    fn mul_evaluates_to_product(a in small_poly(), b in small_poly(), x in sample_point()) {
        let p = &a * &b;
        prop_assert!(close(p.evaluate(&x), a.evaluate(&x) * b.evaluate(&x)));
    }

    #[test]
    fn add_evaluates_to_sum(a in small_poly(), b in small_poly(), x in sample_point()) {
        let p = &a + &b;
        prop_assert!(close(p.evaluate(&x), a.evaluate(&x) + b.evaluate(&x)));
    }

    #[test]
    fn shift_evaluates_to_power_multiple(a in small_poly(), k in 0usize..4, x in sample_point()) {
        let p = a.mul_exp(k);
        prop_assert_eq!(p.len(), a.len() + k);
        prop_assert!(close(p.evaluate(&x), a.evaluate(&x) * x.powi(k as i32)));
    }

    #[test]
    fn mul_length(a in small_poly(), b in small_poly()) {
        let p = &a * &b;
        let (n, m) = (a.effective_len(), b.effective_len());
        if n == 0 || m == 0 {
            prop_assert_eq!(p.len(), 0);
        } else {
            prop_assert_eq!(p.len(), n + m - 1);
        }
    }

    #[test]
    fn add_length(a in small_poly(), b in small_poly()) {
        prop_assert_eq!((&a + &b).len(), a.len().max(b.len()));
    }
}
