//! Human-readable output of polynomials, factored rational functions and decompositions.
//!
//! Polynomials are printed from the highest power down, e.g. `-2x^3 + 36x^2 - 199x + 375`.

use std::fmt::{self, Write};

use smartstring::{LazyCompact, SmartString};

use crate::apart::{Decomposition, FactoredRationalFunction};
use crate::domains::float::{near_eq, near_zero, FloatField};
use crate::poly::UnivariatePolynomial;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// The name of the polynomial variable.
    pub variable: SmartString<LazyCompact>,
    pub num_exp_as_superscript: bool,
    /// The number of digits after the decimal point, or the shortest
    /// representation if `None`.
    pub precision: Option<usize>,
    /// Print the denominator of a decomposition term as its list of factors
    /// instead of the expanded polynomial.
    pub factored_denominators: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self {
            variable: "x".into(),
            num_exp_as_superscript: false,
            precision: None,
            factored_denominators: false,
        }
    }

    /// Print exponents as unicode superscripts, `x³`.
    pub fn unicode() -> Self {
        Self {
            num_exp_as_superscript: true,
            ..Self::new()
        }
    }

    /// Use `name` as the variable.
    pub fn with_variable(mut self, name: &str) -> Self {
        self.variable = name.into();
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_exponent(f: &mut fmt::Formatter, e: usize, opts: &PrintOptions) -> fmt::Result {
    if opts.num_exp_as_superscript {
        for d in e.to_string().bytes() {
            f.write_char(SUPERSCRIPT_DIGITS[(d - b'0') as usize])?;
        }
        Ok(())
    } else {
        write!(f, "^{}", e)
    }
}

fn fmt_coeff(f: &mut fmt::Formatter, c: f64, opts: &PrintOptions) -> fmt::Result {
    match opts.precision {
        Some(p) => write!(f, "{:.*}", p, c),
        None => write!(f, "{}", c),
    }
}

/// Print `c * x^e` with its sign as separator. Returns `false` if nothing was printed.
fn fmt_monomial(
    f: &mut fmt::Formatter,
    first: bool,
    c: f64,
    e: usize,
    opts: &PrintOptions,
) -> Result<bool, fmt::Error> {
    if near_zero(c) {
        return Ok(false);
    }

    match (first, c < 0.) {
        (true, true) => f.write_char('-')?,
        (true, false) => {}
        (false, true) => f.write_str(" - ")?,
        (false, false) => f.write_str(" + ")?,
    }

    let c = c.abs();
    if e == 0 || !near_eq(c, 1.) {
        fmt_coeff(f, c, opts)?;
    }

    if e > 0 {
        f.write_str(&opts.variable)?;
        if e > 1 {
            fmt_exponent(f, e, opts)?;
        }
    }

    Ok(true)
}

pub struct PolynomialPrinter<'a> {
    pub poly: &'a UnivariatePolynomial<FloatField>,
    pub opts: &'a PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(
        poly: &'a UnivariatePolynomial<FloatField>,
        opts: &'a PrintOptions,
    ) -> PolynomialPrinter<'a> {
        PolynomialPrinter { poly, opts }
    }
}

impl<'a> fmt::Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for e in (0..self.poly.effective_len()).rev() {
            if fmt_monomial(f, first, self.poly.coefficients[e], e, self.opts)? {
                first = false;
            }
        }

        if first {
            f.write_char('0')?;
        }
        Ok(())
    }
}

/// Prints a product of factors as `(x)(x - 5)`.
pub struct FactorsPrinter<'a> {
    pub factors: &'a [UnivariatePolynomial<FloatField>],
    pub opts: &'a PrintOptions,
}

impl<'a> FactorsPrinter<'a> {
    pub fn new(
        factors: &'a [UnivariatePolynomial<FloatField>],
        opts: &'a PrintOptions,
    ) -> FactorsPrinter<'a> {
        FactorsPrinter { factors, opts }
    }
}

impl<'a> fmt::Display for FactorsPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.factors.is_empty() {
            return f.write_char('1');
        }

        for p in self.factors {
            write!(f, "({})", PolynomialPrinter::new(p, self.opts))?;
        }
        Ok(())
    }
}

pub struct RationalFunctionPrinter<'a> {
    pub function: &'a FactoredRationalFunction<FloatField>,
    pub opts: &'a PrintOptions,
}

impl<'a> RationalFunctionPrinter<'a> {
    pub fn new(
        function: &'a FactoredRationalFunction<FloatField>,
        opts: &'a PrintOptions,
    ) -> RationalFunctionPrinter<'a> {
        RationalFunctionPrinter { function, opts }
    }
}

impl<'a> fmt::Display for RationalFunctionPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({})/{}",
            PolynomialPrinter::new(&self.function.numerator, self.opts),
            FactorsPrinter::new(&self.function.factors, self.opts)
        )
    }
}

/// Prints a decomposition as a sum of `m x^p/(d)` terms. Terms with denominator `1`
/// are printed without a fraction.
pub struct DecompositionPrinter<'a> {
    pub decomposition: &'a Decomposition<FloatField>,
    pub opts: &'a PrintOptions,
}

impl<'a> DecompositionPrinter<'a> {
    pub fn new(
        decomposition: &'a Decomposition<FloatField>,
        opts: &'a PrintOptions,
    ) -> DecompositionPrinter<'a> {
        DecompositionPrinter {
            decomposition,
            opts,
        }
    }
}

impl<'a> fmt::Display for DecompositionPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for t in &self.decomposition.terms {
            if !fmt_monomial(f, first, t.multiplier, t.power, self.opts)? {
                continue;
            }
            first = false;

            if t.denominator.is_one() {
                continue;
            }

            if self.opts.factored_denominators {
                write!(f, "/{}", FactorsPrinter::new(t.factors.factors(), self.opts))?;
            } else {
                write!(f, "/({})", PolynomialPrinter::new(&t.denominator, self.opts))?;
            }
        }

        if first {
            f.write_char('0')?;
        }
        Ok(())
    }
}
