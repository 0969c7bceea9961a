//! Candidate terms: the unknowns of the decomposition ansatz.

use tracing::debug;

use crate::combinatorics::FactorCombination;
use crate::domains::Ring;
use crate::poly::UnivariatePolynomial;

/// The expanded polynomial of a factor combination, multiplied by `x^power`.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateTerm<F: Ring> {
    /// The index of the combination in the deduplicated combination list.
    pub combination: usize,
    pub power: usize,
    pub polynomial: UnivariatePolynomial<F>,
}

/// One power-0 candidate per combination.
pub fn flat_candidates<F: Ring>(expanded: &[UnivariatePolynomial<F>]) -> Vec<CandidateTerm<F>> {
    expanded
        .iter()
        .enumerate()
        .map(|(combination, p)| CandidateTerm {
            combination,
            power: 0,
            polynomial: p.clone(),
        })
        .collect()
}

/// The highest power of `x` that multiplies a combination polynomial with `len`
/// significant coefficients, for a numerator with `numerator_len` coefficients.
pub fn max_power(len: usize, numerator_len: usize) -> usize {
    len.saturating_sub(1).min(numerator_len.saturating_sub(len))
}

/// Candidates `x^p * c(x)` for every combination polynomial `c` and `p` from 0 up to
/// [max_power].
pub fn power_candidates<F: Ring>(
    expanded: &[UnivariatePolynomial<F>],
    numerator_len: usize,
) -> Vec<CandidateTerm<F>> {
    let mut res = vec![];
    for (combination, p) in expanded.iter().enumerate() {
        for power in 0..=max_power(p.effective_len(), numerator_len) {
            res.push(CandidateTerm {
                combination,
                power,
                polynomial: p.mul_exp(power),
            });
        }
    }

    debug!(
        "Expanded {} combinations into {} candidates",
        expanded.len(),
        res.len()
    );

    res
}

/// Stably sort the candidates by the number of distinct factors in the complement of
/// their combination, then by power. `complements` is indexed by
/// [CandidateTerm::combination].
pub fn rank_by_prime_powers<F: Ring>(
    candidates: &mut [CandidateTerm<F>],
    complements: &[FactorCombination<F>],
) {
    candidates.sort_by_cached_key(|c| {
        (
            complements[c.combination].distinct_factor_count(),
            c.power,
        )
    });
}

/// Keep the first candidate of every distinct polynomial.
pub fn dedup_candidates<F: Ring>(candidates: Vec<CandidateTerm<F>>) -> Vec<CandidateTerm<F>> {
    let mut res: Vec<CandidateTerm<F>> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if !res.iter().any(|r| r.polynomial == c.polynomial) {
            res.push(c);
        }
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::combinatorics::{self, SubsetBound};
    use crate::domains::float::{FloatField, RR};

    fn poly(c: &[f64]) -> UnivariatePolynomial<FloatField> {
        UnivariatePolynomial::from_coefficients(c.to_vec(), RR)
    }

    // x (x - 5)^3
    fn denominator() -> Vec<UnivariatePolynomial<FloatField>> {
        vec![poly(&[0., 1.]), poly(&[-5., 1.]), poly(&[-5., 1.]), poly(&[-5., 1.])]
    }

    fn combinations() -> (
        Vec<FactorCombination<FloatField>>,
        Vec<UnivariatePolynomial<FloatField>>,
    ) {
        let d = denominator();
        let c = combinatorics::factor_combinations(&d, SubsetBound::All);
        let p = combinatorics::expand_all(&c).unwrap();
        combinatorics::dedup(c, p).unwrap()
    }

    fn key(c: &[CandidateTerm<FloatField>]) -> Vec<(usize, usize)> {
        c.iter().map(|c| (c.combination, c.power)).collect()
    }

    #[test]
    fn power_bound() {
        assert_eq!(max_power(2, 4), 1);
        assert_eq!(max_power(3, 4), 1);
        assert_eq!(max_power(4, 4), 0);
        assert_eq!(max_power(5, 4), 0);
        assert_eq!(max_power(3, 10), 2);
        assert_eq!(max_power(0, 3), 0);
    }

    #[test]
    fn flat() {
        let (_, p) = combinations();
        let c = flat_candidates(&p);
        assert_eq!(c.len(), 7);
        assert!(c.iter().all(|c| c.power == 0));
        assert_eq!(c[4].polynomial, p[4]);
    }

    #[test]
    fn powers() {
        let (_, p) = combinations();
        let c = power_candidates(&p, 4);
        assert_eq!(
            key(&c),
            vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 0),
                (3, 0),
                (4, 0),
                (4, 1),
                (5, 0),
                (5, 1),
                (6, 0)
            ]
        );
        assert_eq!(c[1].polynomial.coefficients, vec![0., 0., 1.]);
    }

    #[test]
    fn rank_and_dedup() {
        let d = denominator();
        let (comb, p) = combinations();
        let complements: Vec<_> = comb.iter().map(|c| c.complement(&d)).collect();

        let mut c = power_candidates(&p, 4);
        rank_by_prime_powers(&mut c, &complements);
        assert_eq!(
            key(&c),
            vec![
                (3, 0),
                (0, 0),
                (1, 0),
                (2, 0),
                (6, 0),
                (0, 1),
                (1, 1),
                (4, 0),
                (5, 0),
                (4, 1),
                (5, 1)
            ]
        );

        // x (x - 5) and x (x - 5)^2 were already produced by earlier combinations
        let c = dedup_candidates(c);
        assert_eq!(c.len(), 9);
        assert!(!key(&c).contains(&(4, 1)));
        assert!(!key(&c).contains(&(5, 1)));
    }
}
