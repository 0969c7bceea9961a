use std::ops::{Add, Mul, Neg, Sub};

use crate::domains::Ring;

/// A dense univariate polynomial. Coefficient `i` belongs to `x^i`.
///
/// The coefficient vector is not trimmed after arithmetic: trailing coefficients
/// that are zero (up to the field's tolerance) are insignificant but kept in storage.
/// Use [UnivariatePolynomial::effective_len] to get the number of significant coefficients.
#[derive(Clone)]
pub struct UnivariatePolynomial<F: Ring> {
    pub coefficients: Vec<F::Element>,
    pub field: F,
}

impl<F: Ring> std::fmt::Debug for UnivariatePolynomial<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for c in self.coefficients.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", c)?;
        }
        write!(f, " ]")
    }
}

impl<F: Ring> UnivariatePolynomial<F> {
    /// Constructs a polynomial from its coefficients in ascending order of power.
    #[inline]
    pub fn from_coefficients(coefficients: Vec<F::Element>, field: F) -> Self {
        Self {
            coefficients,
            field,
        }
    }

    /// Constructs a zero polynomial, inheriting the field from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        Self {
            coefficients: vec![],
            field: self.field.clone(),
        }
    }

    /// Constructs a zero polynomial with the given capacity,
    /// inheriting the field from `self`.
    #[inline]
    pub fn zero_with_capacity(&self, cap: usize) -> Self {
        Self {
            coefficients: Vec::with_capacity(cap),
            field: self.field.clone(),
        }
    }

    /// Constructs a constant polynomial,
    /// inheriting the field from `self`.
    #[inline]
    pub fn constant(&self, coeff: F::Element) -> Self {
        Self {
            coefficients: vec![coeff],
            field: self.field.clone(),
        }
    }

    /// Constructs the constant polynomial `1`,
    /// inheriting the field from `self`.
    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.field.one())
    }

    /// The number of stored coefficients, including insignificant trailing ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// The number of coefficients up to and including the highest
    /// non-zero one. Returns 0 for an empty or all-zero polynomial.
    pub fn effective_len(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| !F::is_zero(c))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.effective_len() == 0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.effective_len() == 1 && self.field.is_one(&self.coefficients[0])
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.effective_len() <= 1
    }

    /// Get the constant term of the polynomial.
    #[inline]
    pub fn get_constant(&self) -> F::Element {
        self.coefficients
            .first()
            .cloned()
            .unwrap_or_else(|| self.field.zero())
    }

    /// The degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.effective_len().checked_sub(1)
    }

    /// Multiply by `x^exp`, i.e. prepend `exp` zero coefficients.
    pub fn mul_exp(&self, exp: usize) -> Self {
        if exp == 0 {
            return self.clone();
        }

        let mut a = self.zero_with_capacity(self.coefficients.len() + exp);
        a.coefficients.resize(exp, self.field.zero());
        a.coefficients.extend(self.coefficients.iter().cloned());
        a
    }

    /// Multiply every coefficient by `coeff`. The length is unchanged.
    pub fn mul_coeff(mut self, coeff: &F::Element) -> Self {
        for c in &mut self.coefficients {
            self.field.mul_assign(c, coeff);
        }

        self
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: &F::Element) -> F::Element {
        let mut res = self.field.zero();
        for c in self.coefficients.iter().rev() {
            self.field.mul_assign(&mut res, x);
            self.field.add_assign(&mut res, c);
        }
        res
    }
}

impl<F: Ring> PartialEq for UnivariatePolynomial<F> {
    /// Two polynomials are equal if they have the same number of stored
    /// coefficients and every pairwise difference is zero. There is no
    /// implicit padding.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coefficients.len() == other.coefficients.len()
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| F::is_zero(&self.field.sub(a, b)))
    }
}

impl<F: Ring> Add for UnivariatePolynomial<F> {
    type Output = Self;

    /// The result has as many coefficients as the longer operand; the tail
    /// of the longer operand is carried over unchanged.
    fn add(mut self, mut other: Self) -> Self::Output {
        assert_eq!(self.field, other.field);

        if self.coefficients.len() < other.coefficients.len() {
            std::mem::swap(&mut self, &mut other);
        }

        for (c, o) in self.coefficients.iter_mut().zip(&other.coefficients) {
            self.field.add_assign(c, o);
        }

        self
    }
}

impl<'a, 'b, F: Ring> Add<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn add(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone())
    }
}

impl<F: Ring> Sub for UnivariatePolynomial<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add(other.neg())
    }
}

impl<'a, 'b, F: Ring> Sub<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn sub(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone().neg())
    }
}

impl<F: Ring> Neg for UnivariatePolynomial<F> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for c in &mut self.coefficients {
            *c = self.field.neg(c);
        }
        self
    }
}

impl<'a, 'b, F: Ring> Mul<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    /// The product has `n + m - 1` coefficients, where `n` and `m` are the
    /// effective lengths of the operands. A zero operand gives an empty polynomial.
    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        let n = self.effective_len();
        let m = rhs.effective_len();

        if n == 0 || m == 0 {
            return self.zero();
        }

        let mut res = self.zero();
        res.coefficients = vec![self.field.zero(); n + m - 1];

        for (e1, c1) in self.coefficients[..n].iter().enumerate() {
            for (e2, c2) in rhs.coefficients[..m].iter().enumerate() {
                self.field
                    .add_mul_assign(&mut res.coefficients[e1 + e2], c1, c2);
            }
        }

        res
    }
}

impl<'a, F: Ring> Mul<&'a UnivariatePolynomial<F>> for UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        (&self) * rhs
    }
}

#[cfg(test)]
mod test {
    use super::UnivariatePolynomial;
    use crate::domains::float::{FloatField, RR};

    fn poly(c: &[f64]) -> UnivariatePolynomial<FloatField> {
        UnivariatePolynomial::from_coefficients(c.to_vec(), RR)
    }

    #[test]
    fn effective_len() {
        assert_eq!(poly(&[1., 2., 0., 0.]).effective_len(), 2);
        assert_eq!(poly(&[1., 2., 0.009999]).effective_len(), 2);
        assert_eq!(poly(&[1., 2., 0.011]).effective_len(), 3);
        assert_eq!(poly(&[0., 0.]).effective_len(), 0);
        assert_eq!(poly(&[]).effective_len(), 0);
        assert_eq!(poly(&[]).degree(), None);
        assert_eq!(poly(&[-5., 1.]).degree(), Some(1));
    }

    #[test]
    fn multiply() {
        // (x - 5)(x + 5) = x^2 - 25
        let r = &poly(&[-5., 1.]) * &poly(&[5., 1.]);
        assert_eq!(r.coefficients, vec![-25., 0., 1.]);

        // trailing zeros do not contribute to the length
        let r = &poly(&[0., 1., 0., 0.]) * &poly(&[2., 0.]);
        assert_eq!(r.coefficients, vec![0., 2.]);
    }

    #[test]
    fn multiply_by_zero() {
        let r = &poly(&[1., 2., 3.]) * &poly(&[0., 0.]);
        assert!(r.coefficients.is_empty());
        let r = &poly(&[]) * &poly(&[1., 2.]);
        assert!(r.coefficients.is_empty());
    }

    #[test]
    fn add() {
        let r = &poly(&[1., 2.]) + &poly(&[3., 4., 5., 0.]);
        assert_eq!(r.coefficients, vec![4., 6., 5., 0.]);

        let r = &poly(&[1., 2., 3.]) - &poly(&[1., 2., 3.]);
        assert!(r.is_zero());
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn scale_and_shift() {
        let p = poly(&[1., -2., 0.]);
        assert_eq!(p.clone().mul_coeff(&3.).coefficients, vec![3., -6., 0.]);
        assert_eq!(p.mul_exp(2).coefficients, vec![0., 0., 1., -2., 0.]);
        assert_eq!(p.mul_exp(0), p);
    }

    #[test]
    fn equality_requires_equal_length() {
        assert_eq!(poly(&[1., 2.]), poly(&[1.001, 2.]));
        assert_ne!(poly(&[1., 2.]), poly(&[1.1, 2.]));
        assert_ne!(poly(&[1., 2.]), poly(&[1., 2., 0.]));
    }

    #[test]
    fn evaluate() {
        let p = poly(&[375., -199., 36., -2.]);
        assert_eq!(p.evaluate(&0.), 375.);
        assert_eq!(p.evaluate(&1.), 210.);
        assert_eq!(poly(&[]).evaluate(&4.), 0.);
    }
}
