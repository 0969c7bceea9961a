//! Dense single-variable polynomials.
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use univariate::UnivariatePolynomial;
