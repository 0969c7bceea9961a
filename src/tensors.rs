//! Methods for linear algebra.

pub mod matrix;
