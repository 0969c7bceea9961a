//! Partfrac computes partial fraction decompositions of rational functions
//! whose denominator is given as a list of polynomial factors.
//!
//! For example:
//!
//! ```
//! use partfrac::apart::{DecompositionOptions, FactoredRationalFunction};
//! use partfrac::domains::float::RR;
//! use partfrac::poly::UnivariatePolynomial;
//! use partfrac::printer::{DecompositionPrinter, PrintOptions};
//!
//! fn main() {
//!     let p = |c: &[f64]| UnivariatePolynomial::from_coefficients(c.to_vec(), RR);
//!
//!     // (x^2 + 1) / ((x - 1)(x + 1))
//!     let f = FactoredRationalFunction::new(
//!         p(&[1., 0., 1.]),
//!         vec![p(&[-1., 1.]), p(&[1., 1.])],
//!     );
//!
//!     let r = f.apart(&DecompositionOptions::default()).unwrap();
//!     let opts = PrintOptions::new();
//!     assert_eq!(
//!         DecompositionPrinter::new(&r, &opts).to_string(),
//!         "1 - 1/(x + 1) + 1/(x - 1)"
//!     );
//! }
//! ```
//!
//! All coefficients are `f64`. Values with a magnitude below
//! [ZERO_TOLERANCE](domains::float::ZERO_TOLERANCE) are treated as zero everywhere.

pub mod apart;
pub mod combinatorics;
pub mod domains;
pub mod poly;
pub mod printer;
pub mod tensors;
