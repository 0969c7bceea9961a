//! Enumeration of factor combinations of a factored denominator.
//!
//! A denominator is a list of polynomial factors, where repeated factors occupy separate
//! slots. A [FactorCombination] is a non-empty selection of slots, in increasing slot order.
//!
//! # Examples
//!
//! Subsets of three slots, depth first:
//!
//! ```rust
//! use partfrac::combinatorics::{subsets, SubsetBound};
//!
//! let s: Vec<Vec<usize>> = subsets(3, SubsetBound::All)
//!     .into_iter()
//!     .map(|s| s.to_vec())
//!     .collect();
//!
//! let ans = vec![
//!     vec![0],
//!     vec![0, 1],
//!     vec![0, 1, 2],
//!     vec![0, 2],
//!     vec![1],
//!     vec![1, 2],
//!     vec![2],
//! ];
//!
//! assert_eq!(s, ans);
//! ```
use std::fmt::{Display, Formatter};

use ahash::HashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::domains::Ring;
use crate::poly::UnivariatePolynomial;

/// The slot indices of a combination, in increasing order.
pub type Slots = SmallVec<[usize; 8]>;

/// How deep the subset enumeration descends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubsetBound {
    /// Every non-empty subset: `2^n - 1` combinations.
    #[default]
    All,
    /// Stop descending one level before the full-length subset, so that the
    /// combination of all `n` slots is never produced when `n >= 2`.
    /// This yields `2^n - 2` combinations for `n >= 2` and one for `n = 1`.
    Proper,
}

impl SubsetBound {
    /// The length at which the enumeration stops extending a combination.
    fn max_len(self, n: usize) -> usize {
        match self {
            SubsetBound::All => n,
            SubsetBound::Proper => n.saturating_sub(1),
        }
    }
}

/// Errors from expanding and deduplicating combinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombinationError {
    /// A combination without factors has no product.
    EmptyFactorSet,
    /// The combination list and polynomial list do not line up.
    MismatchedListLength {
        combinations: usize,
        polynomials: usize,
    },
}

impl Display for CombinationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationError::EmptyFactorSet => write!(f, "Cannot expand an empty factor set"),
            CombinationError::MismatchedListLength {
                combinations,
                polynomials,
            } => write!(
                f,
                "Got {} combinations but {} expanded polynomials",
                combinations, polynomials
            ),
        }
    }
}

impl std::error::Error for CombinationError {}

/// Enumerate the subsets of `0..n` depth first, in increasing index order.
pub fn subsets(n: usize, bound: SubsetBound) -> Vec<Slots> {
    let mut out = vec![];
    let mut stack = Slots::new();
    subsets_impl(n, bound.max_len(n), &mut stack, &mut out);
    out
}

fn subsets_impl(n: usize, max_len: usize, stack: &mut Slots, out: &mut Vec<Slots>) {
    let start = stack.last().map(|s| s + 1).unwrap_or(0);
    for j in start..n {
        stack.push(j);
        out.push(stack.clone());
        if stack.len() < max_len {
            subsets_impl(n, max_len, stack, out);
        }
        stack.pop();
    }
}

/// A selection of denominator slots together with owned copies of their factors.
#[derive(Clone, Debug, PartialEq)]
pub struct FactorCombination<F: Ring> {
    slots: Slots,
    factors: Vec<UnivariatePolynomial<F>>,
}

impl<F: Ring> FactorCombination<F> {
    /// Create a combination by copying the factors at `slots` out of `source`.
    ///
    /// Panics when a slot is out of bounds.
    pub fn from_slots(source: &[UnivariatePolynomial<F>], slots: Slots) -> FactorCombination<F> {
        let factors = slots.iter().map(|&s| source[s].clone()).collect();
        FactorCombination { slots, factors }
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn factors(&self) -> &[UnivariatePolynomial<F>] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Multiply out the factors, left to right.
    pub fn expand(&self) -> Result<UnivariatePolynomial<F>, CombinationError> {
        match self.factors.as_slice() {
            [] => Err(CombinationError::EmptyFactorSet),
            [f] => Ok(f.clone()),
            [first, rest @ ..] => Ok(rest.iter().fold(first.clone(), |acc, f| acc * f)),
        }
    }

    /// The factors of `denominator` that are not used by this combination.
    ///
    /// Every slot of the combination is removed exactly once, so repeated
    /// factors that the combination does not use stay in the complement.
    pub fn complement(&self, denominator: &[UnivariatePolynomial<F>]) -> FactorCombination<F> {
        let used: HashSet<usize> = self.slots.iter().copied().collect();

        let (slots, factors) = denominator
            .iter()
            .enumerate()
            .filter(|(i, _)| !used.contains(i))
            .map(|(i, f)| (i, f.clone()))
            .unzip();

        FactorCombination { slots, factors }
    }

    /// The distinct factors with their multiplicities, in order of first appearance.
    pub fn multiplicities(&self) -> Vec<(&UnivariatePolynomial<F>, usize)> {
        let mut res: Vec<(&UnivariatePolynomial<F>, usize)> = vec![];
        for f in &self.factors {
            match res.iter_mut().find(|(g, _)| *g == f) {
                Some((_, m)) => *m += 1,
                None => res.push((f, 1)),
            }
        }
        res
    }

    /// The number of distinct factors.
    pub fn distinct_factor_count(&self) -> usize {
        self.multiplicities().len()
    }
}

/// Generate every combination of `factors` allowed by `bound`.
pub fn factor_combinations<F: Ring>(
    factors: &[UnivariatePolynomial<F>],
    bound: SubsetBound,
) -> Vec<FactorCombination<F>> {
    let combinations: Vec<_> = subsets(factors.len(), bound)
        .into_iter()
        .map(|s| FactorCombination::from_slots(factors, s))
        .collect();

    debug!(
        "Generated {} combinations of {} factors",
        combinations.len(),
        factors.len()
    );

    combinations
}

/// Expand every combination in `combinations`, keeping the order.
pub fn expand_all<F: Ring>(
    combinations: &[FactorCombination<F>],
) -> Result<Vec<UnivariatePolynomial<F>>, CombinationError> {
    combinations.iter().map(|c| c.expand()).collect()
}

/// Remove combinations whose expanded polynomial equals that of an earlier one.
///
/// `combinations` and `polynomials` are parallel lists; the first occurrence of
/// every distinct polynomial is kept together with its combination.
pub fn dedup<F: Ring>(
    combinations: Vec<FactorCombination<F>>,
    polynomials: Vec<UnivariatePolynomial<F>>,
) -> Result<(Vec<FactorCombination<F>>, Vec<UnivariatePolynomial<F>>), CombinationError> {
    if combinations.len() != polynomials.len() {
        return Err(CombinationError::MismatchedListLength {
            combinations: combinations.len(),
            polynomials: polynomials.len(),
        });
    }

    let mut kept_combinations = Vec::with_capacity(combinations.len());
    let mut kept_polynomials: Vec<UnivariatePolynomial<F>> =
        Vec::with_capacity(polynomials.len());
    for (c, p) in combinations.into_iter().zip(polynomials) {
        if !kept_polynomials.iter().any(|k| *k == p) {
            kept_combinations.push(c);
            kept_polynomials.push(p);
        }
    }

    debug!("{} combinations after removing duplicates", kept_combinations.len());

    Ok((kept_combinations, kept_polynomials))
}
