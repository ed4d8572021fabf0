//! Selection of a covering subset of prime implicants.

use crate::*;

use itertools::Itertools;
use log::debug;
use std::cmp::Reverse;
use std::fmt;
use std::slice::Iter;

/// How a prime implicant was selected in a cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Selection {
    /// The implicant is the only one covering at least one term
    Essential,
    /// The implicant was picked for covering the largest number of remaining terms
    Greedy,
}

/// Each prime implicant associated to the subset of target terms it covers.
#[derive(Clone, Debug, Default)]
pub struct CoverageTable {
    rows: Vec<(Implicant, TermSet)>,
}

impl CoverageTable {
    pub fn new(primes: &Primes, terms: &TermSet) -> Self {
        let rows = primes
            .iter()
            .map(|p| (*p, terms.iter().filter(|t| p.covers(*t)).collect()))
            .collect();
        Self { rows }
    }

    pub fn iter(&self) -> Iter<'_, (Implicant, TermSet)> {
        self.rows.iter()
    }

    /// The prime implicants covering a given term
    pub fn coverers(&self, term: usize) -> impl Iterator<Item = &Implicant> + '_ {
        self.rows
            .iter()
            .filter(move |(_, covered)| covered.contains(term))
            .map(|(p, _)| p)
    }
}

/// A subset of prime implicants covering all target terms of a function.
///
/// The implicants are kept in the deterministic [Implicant] order, along with
/// the reason of their selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    patterns: Vec<(Implicant, Selection)>,
}

impl Cover {
    /// Select prime implicants until all terms are covered.
    ///
    /// Essential prime implicants (sole coverer of a term) are selected first.
    /// The remaining terms are then covered greedily: at each step the prime implicant
    /// covering the largest number of uncovered terms is selected, ties are resolved
    /// by picking the lowest pattern (with ```0 < 1 < -```).
    ///
    /// Fails with [QmError::UncoverableTerm] if a term is not covered by any prime implicant.
    pub fn select(primes: &Primes, terms: &TermSet) -> Result<Self, QmError> {
        if let Some(t) = terms.iter().find(|t| *t >> primes.width() != 0) {
            return Err(QmError::UncoverableTerm(t));
        }
        let table = CoverageTable::new(primes, terms);
        let mut selected: Vec<(Implicant, Selection)> = vec![];
        let mut uncovered = terms.clone();

        for t in terms.iter() {
            let coverers: Vec<&Implicant> = table.coverers(t).collect();
            match coverers.as_slice() {
                [] => return Err(QmError::UncoverableTerm(t)),
                [p] => {
                    if !selected.iter().any(|(s, _)| s == *p) {
                        debug!("term {}: essential prime implicant {}", t, p);
                        selected.push((**p, Selection::Essential));
                    }
                }
                _ => (),
            }
        }
        for (p, covered) in table.iter() {
            if selected.iter().any(|(s, _)| s == p) {
                uncovered.difference_with(covered);
            }
        }

        loop {
            let first = match uncovered.iter().next() {
                None => break,
                Some(t) => t,
            };
            // Rows follow the pattern order: the first maximum is the lowest pattern
            let best = table
                .iter()
                .filter(|(p, _)| !selected.iter().any(|(s, _)| s == p))
                .min_by_key(|(_, covered)| Reverse(covered.count_shared(&uncovered)));
            let (p, covered) = match best {
                Some((p, covered)) if covered.count_shared(&uncovered) > 0 => (p, covered),
                _ => return Err(QmError::UncoverableTerm(first)),
            };
            debug!(
                "greedy pick {} covering {} remaining terms",
                p,
                covered.count_shared(&uncovered)
            );
            selected.push((*p, Selection::Greedy));
            uncovered.difference_with(covered);
        }

        selected.sort();
        Ok(Self { patterns: selected })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the selected implicants
    pub fn iter(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.patterns.iter().map(|(p, _)| p)
    }

    /// Iterate over the selected implicants and the reason of their selection
    pub fn iter_selections(&self) -> Iter<'_, (Implicant, Selection)> {
        self.patterns.iter()
    }

    /// The essential prime implicants of the cover
    pub fn essentials(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.patterns
            .iter()
            .filter(|(_, s)| *s == Selection::Essential)
            .map(|(p, _)| p)
    }

    pub fn contains(&self, p: &Implicant) -> bool {
        self.iter().any(|s| s == p)
    }

    /// Test if the cover is the constant true function
    pub fn is_universal(&self) -> bool {
        self.iter().any(|p| p.is_universal())
    }

    /// All terms covered by at least one selected implicant
    pub fn covered_terms(&self) -> TermSet {
        self.iter().flat_map(|p| p.terms()).collect()
    }
}

/// Select a cover of the terms among the prime implicants, see [Cover::select]
pub fn select_cover(primes: &Primes, terms: &TermSet) -> Result<Cover, QmError> {
    Cover::select(primes, terms)
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" ; "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn terms(t: &[usize]) -> TermSet {
        t.iter().copied().collect()
    }

    fn names(cover: &Cover) -> Vec<String> {
        cover.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn essentials_only() -> Result<(), QmError> {
        // maxterms of a & b
        let target = terms(&[0, 1, 2]);
        let primes = Primes::extract(&target, 2)?;
        let cover = Cover::select(&primes, &target)?;
        assert_eq!(names(&cover), vec!["0-", "-0"]);
        assert_eq!(cover.essentials().count(), 2);
        assert_eq!(cover.covered_terms(), target);
        Ok(())
    }

    #[test]
    fn greedy_tie_break() -> Result<(), QmError> {
        let target = terms(&[0, 1, 2, 5, 6, 7]);
        let primes = Primes::extract(&target, 3)?;
        let cover = Cover::select(&primes, &target)?;
        assert_eq!(names(&cover), vec!["00-", "0-0", "11-", "1-1"]);
        assert_eq!(cover.essentials().count(), 0);
        assert_eq!(cover.covered_terms(), target);

        // Same input, same output
        assert_eq!(Cover::select(&primes, &target)?, cover);
        Ok(())
    }

    #[test]
    fn redundant_prime() -> Result<(), QmError> {
        // Consensus example: a.b + !a.c, with the redundant prime b.c
        let target = terms(&[1, 3, 6, 7]);
        let primes = Primes::extract(&target, 3)?;
        assert_eq!(primes.len(), 3);
        let cover = Cover::select(&primes, &target)?;
        assert_eq!(names(&cover), vec!["0-1", "11-"]);
        assert!(!cover.contains(&"-11".parse()?));
        Ok(())
    }

    #[test]
    fn inconsistent_input() -> Result<(), QmError> {
        let primes = Primes::extract(&terms(&[0, 1]), 2)?;
        let result = Cover::select(&primes, &terms(&[0, 1, 3]));
        assert_eq!(result, Err(QmError::UncoverableTerm(3)));
        Ok(())
    }

    #[test]
    fn term_outside_of_table() -> Result<(), QmError> {
        let primes = Primes::extract(&terms(&[0]), 3)?;
        assert_eq!(
            Cover::select(&primes, &terms(&[0, 8])),
            Err(QmError::UncoverableTerm(8))
        );

        let table = CoverageTable::new(&primes, &terms(&[0, 8]));
        assert_eq!(table.coverers(8).count(), 0);
        assert_eq!(table.coverers(0).count(), 1);
        Ok(())
    }

    #[test]
    fn empty_and_full() -> Result<(), QmError> {
        let primes = Primes::extract(&TermSet::new(), 2)?;
        assert!(Cover::select(&primes, &TermSet::new())?.is_empty());

        let full = TermSet::full(2);
        let primes = Primes::extract(&full, 2)?;
        let cover = Cover::select(&primes, &full)?;
        assert!(cover.is_universal());
        assert_eq!(cover.len(), 1);
        Ok(())
    }
}
