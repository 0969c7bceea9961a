use tracing::debug;

use super::candidates::CandidateTerm;
use crate::domains::Ring;
use crate::poly::UnivariatePolynomial;
use crate::tensors::matrix::Matrix;

/// Build the augmented matrix of the ansatz `sum_i a_i * c_i(x) = n(x)`.
///
/// Column `i` holds the coefficients of candidate `i`, row `k` the coefficients of `x^k`,
/// and the last column the numerator. There is one row per stored numerator coefficient,
/// or more if a candidate has more significant coefficients; missing entries are zero.
pub fn build_system<F: Ring>(
    candidates: &[CandidateTerm<F>],
    numerator: &UnivariatePolynomial<F>,
) -> Matrix<F> {
    let nrows = candidates
        .iter()
        .map(|c| c.polynomial.effective_len())
        .fold(numerator.len(), usize::max);
    let rhs = candidates.len();

    let mut m = Matrix::new(nrows as u32, rhs as u32 + 1, numerator.field.clone());

    for (col, c) in candidates.iter().enumerate() {
        let n = c.polynomial.effective_len();
        for (row, v) in c.polynomial.coefficients[..n].iter().enumerate() {
            m[(row as u32, col as u32)] = v.clone();
        }
    }

    for (row, v) in numerator.coefficients.iter().enumerate() {
        m[(row as u32, rhs as u32)] = v.clone();
    }

    debug!("Built a {}x{} linear system", m.nrows(), m.ncols());

    m
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domains::float::{FloatField, RR};

    fn poly(c: &[f64]) -> UnivariatePolynomial<FloatField> {
        UnivariatePolynomial::from_coefficients(c.to_vec(), RR)
    }

    fn candidate(combination: usize, c: &[f64]) -> CandidateTerm<FloatField> {
        CandidateTerm {
            combination,
            power: 0,
            polynomial: poly(c),
        }
    }

    #[test]
    fn layout() {
        let c = vec![candidate(0, &[-5., 1.]), candidate(1, &[0., 1., 0.])];
        let m = build_system(&c, &poly(&[1., 2., 0.]));
        assert_eq!((m.nrows(), m.ncols()), (3, 3));
        assert_eq!(
            m.row_iter().map(|r| r.to_vec()).collect::<Vec<_>>(),
            vec![vec![-5., 0., 1.], vec![1., 1., 2.], vec![0., 0., 0.]]
        );
    }

    #[test]
    fn height_follows_numerator() {
        // stored trailing zeros of the numerator still count as equations, those of a
        // candidate do not
        let c = vec![
            candidate(0, &[-1., 1.]),
            candidate(1, &[0., -1., 1., 0., 0., 0., 0.]),
        ];
        let m = build_system(&c, &poly(&[4., 0., 3., 0., 0.]));
        assert_eq!((m.nrows(), m.ncols()), (5, 3));
        assert_eq!(
            m.row_iter().map(|r| r.to_vec()).collect::<Vec<_>>(),
            vec![
                vec![-1., 0., 4.],
                vec![1., -1., 0.],
                vec![0., 1., 3.],
                vec![0., 0., 0.],
                vec![0., 0., 0.]
            ]
        );
    }

    #[test]
    fn pad_numerator() {
        // (x - 5)^3 has more coefficients than the numerator
        let c = vec![candidate(0, &[-125., 75., -15., 1.])];
        let m = build_system(&c, &poly(&[2., 1.]));
        assert_eq!((m.nrows(), m.ncols()), (4, 2));
        assert_eq!(m[(3, 0)], 1.);
        assert_eq!(m[(1, 1)], 1.);
        assert_eq!(m[(3, 1)], 0.);
    }

    #[test]
    fn no_candidates() {
        let m = build_system(&[], &poly(&[1., 2.]));
        assert_eq!((m.nrows(), m.ncols()), (2, 1));
        assert_eq!(m[(1, 0)], 2.);
    }
}
