//! Extraction of prime implicants by iterated merging of adjacent patterns.

use crate::*;

use itertools::Itertools;
use log::{debug, trace};
use std::collections::btree_set::{IntoIter, Iter};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Set of prime implicants of a Boolean function.
///
/// A prime implicant can not be merged with any other implicant of the function.
/// The set is ordered (see [Implicant] ordering) so that iteration and display are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes {
    width: usize,
    patterns: BTreeSet<Implicant>,
}

/// Patterns considered during one merge stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeStage {
    /// All candidate patterns of the stage, in the deterministic order
    pub candidates: Vec<Implicant>,
    /// Patterns obtained by merging pairs of candidates
    pub merged: Vec<Implicant>,
    /// Candidates which were not merged: they are prime
    pub primes: Vec<Implicant>,
}

/// Candidate patterns grouped by their number of ones
type Groups = BTreeMap<u32, BTreeSet<Implicant>>;

impl Primes {
    /// Compute all prime implicants covering exactly the given terms.
    ///
    /// An empty set of terms yields an empty set of prime implicants.
    /// Fails if the width exceeds [MAX_WIDTH] or if a term is outside of the truth table.
    pub fn extract(terms: &TermSet, width: usize) -> Result<Self, QmError> {
        Self::extract_traced(terms, width).map(|(primes, _)| primes)
    }

    /// Compute all prime implicants, keeping track of each merge stage
    pub fn extract_traced(terms: &TermSet, width: usize) -> Result<(Self, Vec<MergeStage>), QmError> {
        check_width(width)?;
        if let Some(t) = terms.iter().find(|t| *t >= 1 << width) {
            return Err(QmError::UncoverableTerm(t));
        }

        let mut groups = group(terms.iter().map(|t| Implicant::from_term(t, width)));
        let mut patterns = BTreeSet::new();
        let mut stages = vec![];

        while !groups.is_empty() {
            let stage = merge_stage(&groups);
            debug!(
                "stage {}: {} candidates, {} merged, {} primes",
                stages.len() + 1,
                stage.candidates.len(),
                stage.merged.len(),
                stage.primes.len()
            );
            patterns.extend(stage.primes.iter().copied());
            groups = group(stage.merged.iter().copied());
            stages.push(stage);
        }

        Ok((Self { width, patterns }, stages))
    }

    /// Get the number of patterns in this list of prime implicants
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return whether there are no prime implicant (the function is always false)
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of variables of the function
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.patterns.iter()
    }

    pub fn contains(&self, p: &Implicant) -> bool {
        self.patterns.contains(p)
    }

    /// All terms covered by at least one prime implicant
    pub fn covered_terms(&self) -> TermSet {
        self.patterns.iter().flat_map(|p| p.terms()).collect()
    }
}

/// Merge all pairs of candidates from adjacent groups.
///
/// Candidates involved in at least one merge are marked as used, the others are prime.
fn merge_stage(groups: &Groups) -> MergeStage {
    let mut merged = BTreeSet::new();
    let mut used = BTreeSet::new();

    for (ones, group) in groups {
        let next = match groups.get(&(ones + 1)) {
            None => continue,
            Some(next) => next,
        };
        for (p, t) in group.iter().cartesian_product(next.iter()) {
            if let Some(m) = p.merge(t) {
                trace!("merge {} + {} => {}", p, t, m);
                used.insert(*p);
                used.insert(*t);
                merged.insert(m);
            }
        }
    }

    let candidates: Vec<Implicant> = groups.values().flatten().copied().sorted().collect();
    let primes = candidates
        .iter()
        .filter(|p| !used.contains(*p))
        .copied()
        .collect();

    MergeStage {
        candidates,
        merged: merged.into_iter().collect(),
        primes,
    }
}

fn group(patterns: impl Iterator<Item = Implicant>) -> Groups {
    let mut groups = Groups::new();
    for p in patterns {
        groups.entry(p.count_ones()).or_default().insert(p);
    }
    groups
}

/// Compute the prime implicants of a set of terms, see [Primes::extract]
pub fn extract_primes(terms: &TermSet, width: usize) -> Result<Primes, QmError> {
    Primes::extract(terms, width)
}

/// Compute the prime implicants along with the merge stages, see [Primes::extract_traced]
pub fn extract_primes_traced(
    terms: &TermSet,
    width: usize,
) -> Result<(Primes, Vec<MergeStage>), QmError> {
    Primes::extract_traced(terms, width)
}

pub(crate) fn check_width(width: usize) -> Result<(), QmError> {
    if width > MAX_WIDTH {
        return Err(QmError::TooManyVariables {
            count: width,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.patterns.iter().join(" ; "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn terms(t: &[usize]) -> TermSet {
        t.iter().copied().collect()
    }

    fn names(primes: &Primes) -> Vec<String> {
        primes.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn single_minterm() -> Result<(), QmError> {
        let primes = Primes::extract(&terms(&[3]), 2)?;
        assert_eq!(names(&primes), vec!["11"]);
        Ok(())
    }

    #[test]
    fn constants() -> Result<(), QmError> {
        let primes = Primes::extract(&TermSet::new(), 3)?;
        assert!(primes.is_empty());

        let primes = Primes::extract(&TermSet::full(3), 3)?;
        assert_eq!(names(&primes), vec!["---"]);

        // No variable: a single term for the constant function
        let primes = Primes::extract(&terms(&[0]), 0)?;
        assert_eq!(primes.len(), 1);
        assert!(primes.iter().all(|p| p.is_universal()));
        Ok(())
    }

    #[test]
    fn cyclic_function() -> Result<(), QmError> {
        let primes = Primes::extract(&terms(&[0, 1, 2, 5, 6, 7]), 3)?;
        assert_eq!(
            names(&primes),
            vec!["00-", "0-0", "11-", "1-1", "-01", "-10"]
        );
        assert_eq!(primes.covered_terms(), terms(&[0, 1, 2, 5, 6, 7]));
        Ok(())
    }

    #[test]
    fn stages() -> Result<(), QmError> {
        let (primes, stages) = Primes::extract_traced(&terms(&[0, 1, 2, 3, 7]), 3)?;
        assert_eq!(names(&primes), vec!["0--", "-11"]);
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].candidates.len(), 5);
        assert!(stages[0].primes.is_empty());
        // 00- and 0-0 lead to the same merged pattern
        assert_eq!(stages[1].merged.len(), 1);
        assert_eq!(stages[2].merged.len(), 0);
        Ok(())
    }

    #[test]
    fn candidate_order() -> Result<(), QmError> {
        use super::{group, merge_stage};

        let patterns: Vec<Implicant> = [0, 1, 2, 5, 6, 7]
            .iter()
            .map(|t| Implicant::from_term(*t, 3))
            .collect();
        let reference = merge_stage(&group(patterns.iter().copied()));
        assert_eq!(reference.merged.len(), 6);

        let shuffled = [5, 0, 7, 2, 6, 1].iter().map(|i| patterns[*i]);
        assert_eq!(merge_stage(&group(shuffled)), reference);
        let reversed = patterns.iter().rev().copied();
        assert_eq!(merge_stage(&group(reversed)), reference);

        // Duplicated candidates collapse in their group
        let twice = patterns.iter().chain(patterns.iter()).copied();
        assert_eq!(merge_stage(&group(twice)), reference);

        let merged = reference.merged.iter().rev().copied();
        let second = merge_stage(&group(merged));
        assert!(second.merged.is_empty());
        assert_eq!(second.primes, reference.merged);
        Ok(())
    }

    #[test]
    fn bounds() {
        assert!(matches!(
            Primes::extract(&terms(&[8]), 3),
            Err(QmError::UncoverableTerm(8))
        ));
        assert!(matches!(
            Primes::extract(&terms(&[0]), 17),
            Err(QmError::TooManyVariables { count: 17, max: 16 })
        ));
    }
}
