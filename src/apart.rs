//! Partial fraction decomposition of a numerator over a factored denominator.
//!
//! The decomposition is found by an ansatz: every combination of denominator factors,
//! optionally multiplied by a power of `x`, becomes one unknown of a linear system
//! whose right-hand side is the numerator. The system is solved with [Matrix::rref],
//! and every candidate with a non-zero solution contributes a term `m * x^p / C`,
//! where `C` is the product of the factors the candidate does not use.
//!
//! # Examples
//!
//! ```rust
//! use partfrac::apart::{DecompositionOptions, FactoredRationalFunction};
//! use partfrac::domains::float::RR;
//! use partfrac::poly::UnivariatePolynomial;
//!
//! let p = |c: &[f64]| UnivariatePolynomial::from_coefficients(c.to_vec(), RR);
//!
//! // (375 - 199x + 36x^2 - 2x^3) / (2 x (x - 5)^3)
//! let f = FactoredRationalFunction::new(
//!     p(&[375., -199., 36., -2.]),
//!     vec![p(&[0., 1.]), p(&[-5., 1.]), p(&[-5., 1.]), p(&[-5., 1.]), p(&[2.])],
//! );
//!
//! let r = f.apart(&DecompositionOptions::default()).unwrap();
//! assert_eq!(r.front_constant, 0.5);
//! assert_eq!(r.terms.len(), 4);
//! ```
//!
//! [Matrix::rref]: crate::tensors::matrix::Matrix::rref

pub mod candidates;
pub mod system;

use std::fmt::{Display, Formatter};

use tracing::{debug, instrument};

use crate::combinatorics::{self, CombinationError, FactorCombination, Slots, SubsetBound};
use crate::domains::{Field, OrderedField, Ring};
use crate::poly::UnivariatePolynomial;
use crate::tensors::matrix::MatrixError;

/// Settings of the decomposition ansatz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecompositionOptions {
    /// Also try every combination multiplied by `x^p` for small `p`, so that
    /// numerators of higher degree can be represented.
    pub allow_power_numerators: bool,
    /// Which factor combinations are enumerated.
    pub subset_bound: SubsetBound,
    /// Order the candidates so that denominators which are a power of a single
    /// factor are pivoted first.
    pub prefer_prime_powers: bool,
}

impl DecompositionOptions {
    pub const fn new() -> DecompositionOptions {
        DecompositionOptions {
            allow_power_numerators: true,
            subset_bound: SubsetBound::All,
            prefer_prime_powers: true,
        }
    }

    /// One candidate per combination, without powers of `x`.
    pub const fn flat() -> DecompositionOptions {
        DecompositionOptions {
            allow_power_numerators: false,
            ..DecompositionOptions::new()
        }
    }
}

impl Default for DecompositionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during a decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecompositionError {
    Combination(CombinationError),
    /// The factor at this slot of the denominator is zero.
    ZeroFactor { slot: usize },
    /// No linear combination of the candidate terms reproduces the numerator.
    Inconsistent,
    Matrix(MatrixError),
}

impl Display for DecompositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecompositionError::Combination(e) => write!(f, "{}", e),
            DecompositionError::ZeroFactor { slot } => {
                write!(f, "Denominator factor {} is zero", slot)
            }
            DecompositionError::Inconsistent => write!(
                f,
                "No partial fraction decomposition exists with the current candidate terms"
            ),
            DecompositionError::Matrix(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DecompositionError {}

impl From<CombinationError> for DecompositionError {
    fn from(e: CombinationError) -> Self {
        DecompositionError::Combination(e)
    }
}

impl From<MatrixError> for DecompositionError {
    fn from(e: MatrixError) -> Self {
        match e {
            MatrixError::Inconsistent => DecompositionError::Inconsistent,
            e => DecompositionError::Matrix(e),
        }
    }
}

/// A rational function `n(x) / (f_1(x) * ... * f_k(x))` with a factored denominator.
/// Repeated factors occupy separate slots.
#[derive(Clone, Debug, PartialEq)]
pub struct FactoredRationalFunction<F: Ring> {
    pub numerator: UnivariatePolynomial<F>,
    pub factors: Vec<UnivariatePolynomial<F>>,
}

/// One term `multiplier * x^power / denominator` of a decomposition.
#[derive(Clone, Debug, PartialEq)]
pub struct DecompositionTerm<F: Ring> {
    pub multiplier: F::Element,
    pub power: usize,
    /// The expanded product of `factors`, or `1` if there are none.
    pub denominator: UnivariatePolynomial<F>,
    /// The denominator factors this term is divided by.
    pub factors: FactorCombination<F>,
}

impl<F: Field> DecompositionTerm<F> {
    pub fn evaluate(&self, x: &F::Element) -> F::Element {
        let field = &self.denominator.field;
        let num = field.mul(&self.multiplier, &field.pow(x, self.power as u64));
        field.div(&num, &self.denominator.evaluate(x))
    }
}

/// The result of a decomposition. The multipliers of the terms already include
/// `front_constant`.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition<F: Ring> {
    /// The inverse of the product of the constant denominator factors.
    pub front_constant: F::Element,
    pub terms: Vec<DecompositionTerm<F>>,
}

impl<F: Field> Decomposition<F> {
    /// Evaluate the sum of all terms at `x`.
    pub fn evaluate(&self, field: &F, x: &F::Element) -> F::Element {
        let mut res = field.zero();
        for t in &self.terms {
            field.add_assign(&mut res, &t.evaluate(x));
        }
        res
    }
}

impl<F: Ring> FactoredRationalFunction<F> {
    pub fn new(
        numerator: UnivariatePolynomial<F>,
        factors: Vec<UnivariatePolynomial<F>>,
    ) -> FactoredRationalFunction<F> {
        FactoredRationalFunction { numerator, factors }
    }
}

impl<F: Field> FactoredRationalFunction<F> {
    /// Remove all constant factors from the denominator and return the inverse
    /// of their product. A zero factor is rejected and leaves `self` untouched.
    pub fn factor_out_constant(&mut self) -> Result<F::Element, DecompositionError> {
        if let Some(slot) = self.factors.iter().position(|f| f.is_zero()) {
            return Err(DecompositionError::ZeroFactor { slot });
        }

        let field = self.numerator.field.clone();
        let mut constant = field.one();
        self.factors.retain(|f| {
            if f.is_constant() {
                field.mul_assign(&mut constant, &f.get_constant());
                false
            } else {
                true
            }
        });

        Ok(field.inv(&constant))
    }

    /// Evaluate the rational function at `x`.
    pub fn evaluate(&self, x: &F::Element) -> F::Element {
        let field = &self.numerator.field;
        let mut den = field.one();
        for f in &self.factors {
            field.mul_assign(&mut den, &f.evaluate(x));
        }
        field.div(&self.numerator.evaluate(x), &den)
    }
}

impl<F: OrderedField> FactoredRationalFunction<F> {
    /// Compute the partial fraction decomposition.
    ///
    /// Returns [DecompositionError::Inconsistent] when the candidate terms allowed by
    /// `options` cannot represent the numerator, for example when the numerator
    /// degree is too high for [SubsetBound::Proper].
    #[instrument(level = "debug", skip_all)]
    pub fn apart(
        &self,
        options: &DecompositionOptions,
    ) -> Result<Decomposition<F>, DecompositionError> {
        let mut f = self.clone();
        let front_constant = f.factor_out_constant()?;
        let field = f.numerator.field.clone();

        if f.factors.is_empty() {
            debug!("Denominator is constant");
            return Ok(f.polynomial_terms(front_constant));
        }

        let combinations = combinatorics::factor_combinations(&f.factors, options.subset_bound);
        let expanded = combinatorics::expand_all(&combinations)?;
        let (combinations, expanded) = combinatorics::dedup(combinations, expanded)?;

        let mut terms = if options.allow_power_numerators {
            candidates::power_candidates(&expanded, f.numerator.len())
        } else {
            candidates::flat_candidates(&expanded)
        };

        let complements: Vec<_> = combinations
            .iter()
            .map(|c| c.complement(&f.factors))
            .collect();

        if options.prefer_prime_powers {
            candidates::rank_by_prime_powers(&mut terms, &complements);
        }
        let terms = candidates::dedup_candidates(terms);
        debug!("{} candidate terms", terms.len());

        let mut m = system::build_system(&terms, &f.numerator);
        m.rref();
        let values = m.leading_values()?;

        let mut res = vec![];
        for (c, v) in terms.iter().zip(values) {
            if F::is_zero(&v) {
                continue;
            }

            let complement = &complements[c.combination];
            let denominator = if complement.is_empty() {
                f.numerator.one()
            } else {
                complement.expand()?
            };

            res.push(DecompositionTerm {
                multiplier: field.mul(&v, &front_constant),
                power: c.power,
                denominator,
                factors: complement.clone(),
            });
        }

        debug!("Decomposed into {} terms", res.len());

        Ok(Decomposition {
            front_constant,
            terms: res,
        })
    }

    /// Write a function without non-constant denominator factors as a sum of monomials.
    fn polynomial_terms(&self, front_constant: F::Element) -> Decomposition<F> {
        let field = &self.numerator.field;
        let terms = self
            .numerator
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !F::is_zero(c))
            .map(|(power, c)| DecompositionTerm {
                multiplier: field.mul(c, &front_constant),
                power,
                denominator: self.numerator.one(),
                factors: FactorCombination::from_slots(&self.factors, Slots::new()),
            })
            .collect();

        Decomposition {
            front_constant,
            terms,
        }
    }
}
