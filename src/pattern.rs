use crate::*;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Largest number of variables that a pattern can describe
pub const MAX_WIDTH: usize = 16;

/// An implicant: a pattern over ```{0, 1, -}``` for an ordered list of variables.
///
/// It is stored as a pair of bit masks: the values of the fixed positions and the
/// positions which were eliminated by merging (don't-care, displayed as ```-```).
/// Position 0 (the first variable) is the most significant bit of both masks.
/// Free positions always have a zero value bit, so that two patterns covering the
/// same terms are always equal.
///
/// An implicant covers all terms which match its fixed positions.
///
/// ```
/// use qmkit::Implicant;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let p: Implicant = "1-0".parse()?;
/// assert!(p.covers(0b100));
/// assert!(p.covers(0b110));
/// assert!(!p.covers(0b101));
///
/// let t: Implicant = "1-1".parse()?;
/// assert_eq!(p.merge(&t), Some("1--".parse()?));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Implicant {
    bits: u32,
    dashes: u32,
    width: u8,
}

impl Implicant {
    /// Create the pattern of a single term (truth table row).
    ///
    /// Only the ```width``` lowest bits of the term are kept: callers check that the
    /// term belongs to the truth table before building its pattern.
    pub fn from_term(term: usize, width: usize) -> Self {
        debug_assert!(width <= MAX_WIDTH);
        Self {
            bits: (term as u32) & full_mask(width),
            dashes: 0,
            width: width as u8,
        }
    }

    /// The pattern where all positions are free: it covers every term
    pub fn universal(width: usize) -> Self {
        Self {
            bits: 0,
            dashes: full_mask(width),
            width: width as u8,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Values of the fixed positions, zero for free positions
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Mask of the free positions
    pub fn dash_mask(&self) -> u32 {
        self.dashes
    }

    /// Number of positions fixed at ```1```
    pub fn count_ones(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Number of free positions
    pub fn count_dashes(&self) -> u32 {
        self.dashes.count_ones()
    }

    /// Test if all positions are free
    pub fn is_universal(&self) -> bool {
        self.dashes == full_mask(self.width())
    }

    /// Value at a position: ```Some(value)``` if it is fixed, ```None``` if it is free
    /// or outside of the pattern.
    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.width() {
            return None;
        }
        let bit = self.bit_of(idx);
        if self.dashes & bit != 0 {
            None
        } else {
            Some(self.bits & bit != 0)
        }
    }

    /// Iterate over all positions, most significant first
    pub fn positions(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.width()).map(move |i| self.get(i))
    }

    /// Iterate over the fixed positions and their values
    pub fn iter_fixed_values(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.positions()
            .enumerate()
            .filter_map(|(i, v)| v.map(|b| (Variable::new(i), b)))
    }

    /// Check if a term is contained in this pattern.
    ///
    /// Terms outside of the truth table (with bits above the width) are never covered.
    pub fn covers(&self, term: usize) -> bool {
        term >> self.width() == 0 && (term as u32) & !self.dashes == self.bits
    }

    /// Test if this pattern contains all terms of the given pattern.
    pub fn contains(&self, other: &Implicant) -> bool {
        self.width == other.width
            && other.dashes & self.dashes == other.dashes
            && other.bits & !self.dashes == self.bits
    }

    /// Merge two patterns which differ in a single fixed position.
    ///
    /// The merge only succeeds if both patterns have the same free positions and
    /// exactly one conflicting fixed position, which becomes free in the result.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.width != other.width || self.dashes != other.dashes {
            return None;
        }
        let diff = self.bits ^ other.bits;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Self {
            bits: self.bits & !diff,
            dashes: self.dashes | diff,
            width: self.width,
        })
    }

    /// All terms covered by this pattern, in increasing order
    pub fn terms(&self) -> impl Iterator<Item = usize> + '_ {
        (0..1usize << self.width()).filter(move |t| self.covers(*t))
    }

    /// Rank of a position for the deterministic order: ```0 < 1 < -```
    fn rank(&self, idx: usize) -> u8 {
        match self.get(idx) {
            Some(false) => 0,
            Some(true) => 1,
            None => 2,
        }
    }

    fn bit_of(&self, idx: usize) -> u32 {
        1 << (self.width() - 1 - idx)
    }
}

fn full_mask(width: usize) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Patterns are ordered by width, then lexicographically on their text where ```0 < 1 < -```.
impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width.cmp(&other.width).then_with(|| {
            (0..self.width())
                .map(|i| self.rank(i).cmp(&other.rank(i)))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Implicant {
    type Err = QmError;

    /// Parse a pattern. Spaces and single quotes are ignored to make long patterns readable.
    fn from_str(descr: &str) -> Result<Implicant, QmError> {
        let mut bits = 0u32;
        let mut dashes = 0u32;
        let mut width = 0;
        for c in descr.chars() {
            let (b, d) = match c {
                ' ' | '\t' | '\'' => continue,
                '0' => (0, 0),
                '1' => (1, 0),
                '-' => (0, 1),
                _ => return Err(QmError::InvalidPattern(descr.to_string())),
            };
            bits = (bits << 1) | b;
            dashes = (dashes << 1) | d;
            width += 1;
            if width > MAX_WIDTH {
                return Err(QmError::InvalidPattern(descr.to_string()));
            }
        }
        Ok(Implicant {
            bits,
            dashes,
            width: width as u8,
        })
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in self.positions() {
            let c = match v {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
