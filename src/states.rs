use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use std::fmt;
use std::iter::FromIterator;

/// A total assignment of Boolean values to an ordered list of variables.
///
/// The assignment is stored as the index of the corresponding truth table row:
/// the value of the variable at position ```i``` is the bit ```(term >> (n-1-i)) & 1```,
/// so that the first declared variable is the most significant bit.
///
/// ```
/// use qmkit::Assignment;
///
/// let a = Assignment::new(0b110, 3);
/// assert!(a.value(0));
/// assert!(a.value(1));
/// assert!(!a.value(2));
/// assert_eq!(format!("{}", a), "110");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Assignment {
    term: usize,
    width: usize,
}

impl Assignment {
    pub fn new(term: usize, width: usize) -> Self {
        Self { term, width }
    }

    /// Build an assignment from explicit values, the first one being the most significant bit
    pub fn from_values(values: &[bool]) -> Self {
        let term = values.iter().fold(0, |t, b| (t << 1) | usize::from(*b));
        Self::new(term, values.len())
    }

    /// The index of the truth table row matching this assignment
    pub fn term(&self) -> usize {
        self.term
    }

    /// Number of assigned variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value of the variable at the given position.
    ///
    /// Variables outside of the assignment are considered inactive.
    pub fn value(&self, idx: usize) -> bool {
        idx < self.width && (self.term >> (self.width - 1 - idx)) & 1 == 1
    }

    /// Test if a specific variable is active in this assignment
    pub fn is_active(&self, var: Variable) -> bool {
        self.value(var.idx())
    }

    /// Iterate over the values, most significant variable first
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |i| self.value(i))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.values() {
            write!(f, "{}", u8::from(b))?;
        }
        Ok(())
    }
}

/// A set of term indices (truth table rows), backed by a [BitSet].
///
/// Iteration always yields the terms in increasing order.
#[derive(Clone, Default, Debug)]
pub struct TermSet {
    terms: BitSet,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    delegate! {
        to self.terms {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn contains(&self, term: usize) -> bool;
            pub fn insert(&mut self, term: usize) -> bool;
            pub fn remove(&mut self, term: usize) -> bool;
            pub fn clear(&mut self);
        }
    }

    /// The set of all terms of a truth table with the given number of variables
    pub fn full(width: usize) -> Self {
        (0..1usize << width).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.terms.iter()
    }

    /// Add all terms from another set
    pub fn union_with(&mut self, other: &Self) {
        self.terms.union_with(&other.terms);
    }

    /// Remove all terms contained in another set
    pub fn difference_with(&mut self, other: &Self) {
        self.terms.difference_with(&other.terms);
    }

    /// Count the terms shared with another set
    pub fn count_shared(&self, other: &Self) -> usize {
        self.terms.intersection(&other.terms).count()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.terms.is_subset(&other.terms)
    }

    /// The terms of a truth table of the given width which are not in this set
    pub fn complement(&self, width: usize) -> Self {
        let mut result = Self::full(width);
        result.difference_with(self);
        result
    }
}

impl PartialEq for TermSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for TermSet {}

impl FromIterator<usize> for TermSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            terms: BitSet::from_iter(iter),
        }
    }
}

impl Extend<usize> for TermSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for t in iter {
            self.terms.insert(t);
        }
    }
}

impl fmt::Display for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, "}}")
    }
}
