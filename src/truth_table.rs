//! Exhaustive evaluation of a Boolean function over all assignments of its variables.

use crate::efmt::{Form, FormatterConfig, UNICODE_FMT_CFG};
use crate::primes::check_width;
use crate::*;

use itertools::Itertools;
use log::debug;
use std::fmt;

/// Enumerate all assignments of a number of variables, in increasing term order.
///
/// ```
/// # use qmkit::generate;
/// let rows: Vec<String> = generate(2).map(|a| a.to_string()).collect();
/// assert_eq!(rows, vec!["00", "01", "10", "11"]);
/// ```
pub fn generate(width: usize) -> impl Iterator<Item = Assignment> {
    (0..1usize << width).map(move |t| Assignment::new(t, width))
}

/// The value of a Boolean function for each of the 2^n assignments of its variables.
///
/// Rows are enumerated in lexicographic order: the row index is the term whose binary
/// representation gives the value of each variable, the first variable being the most
/// significant bit.
///
/// ```
/// use qmkit::{parse_expression, Program, TruthTable, VarList};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let variables: VarList = "a b".parse()?;
/// let expr = parse_expression("a & b", &variables)?;
/// let table = TruthTable::build(&Program::compile(&expr, variables.len())?, &variables)?;
///
/// assert_eq!(table.minterms().iter().collect::<Vec<_>>(), vec![3]);
/// assert_eq!(table.maxterms().iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(table.index_form(), "0001");
/// assert_eq!(table.index_value(), Some(1));
/// assert_eq!(table.canonical_pos(), "(a ∨ b) ∧ (a ∨ ¬b) ∧ (¬a ∨ b)");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TruthTable {
    variables: VarList,
    values: Vec<bool>,
}

impl TruthTable {
    /// Evaluate a program on every row.
    ///
    /// Fails if there are too many variables for an exhaustive enumeration, or if the program
    /// is not well-formed.
    pub fn build(program: &Program, variables: &VarList) -> Result<Self, QmError> {
        let width = variables.len();
        check_width(width)?;
        if program.width() > width {
            return Err(QmError::TooManyVariables {
                count: program.width(),
                max: width,
            });
        }

        let values = generate(width)
            .map(|asg| program.evaluate(&asg))
            .collect::<Result<Vec<bool>, QmError>>()?;
        debug!(
            "truth table over {} variables: {} of {} rows are true",
            width,
            values.iter().filter(|v| **v).count(),
            values.len()
        );
        Ok(Self {
            variables: variables.clone(),
            values,
        })
    }

    /// Build the table of the function which is true exactly on the given terms
    pub fn from_minterms(minterms: &TermSet, variables: &VarList) -> Result<Self, QmError> {
        let width = variables.len();
        check_width(width)?;
        let size = 1usize << width;
        if let Some(t) = minterms.iter().find(|t| *t >= size) {
            return Err(QmError::UncoverableTerm(t));
        }
        Ok(Self {
            variables: variables.clone(),
            values: (0..size).map(|t| minterms.contains(t)).collect(),
        })
    }

    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows, 2^n
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A table always has at least one row, this is only true for malformed tables
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value of the function on a given row
    pub fn value(&self, term: usize) -> Option<bool> {
        self.values.get(term).copied()
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = (Assignment, bool)> + '_ {
        let width = self.width();
        self.values
            .iter()
            .enumerate()
            .map(move |(t, v)| (Assignment::new(t, width), *v))
    }

    /// The rows where the function is true
    pub fn minterms(&self) -> TermSet {
        self.terms_with_value(true)
    }

    /// The rows where the function is false
    pub fn maxterms(&self) -> TermSet {
        self.terms_with_value(false)
    }

    fn terms_with_value(&self, value: bool) -> TermSet {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == value)
            .map(|(t, _)| t)
            .collect()
    }

    /// The result column read as a binary word, first row first
    pub fn index_form(&self) -> String {
        self.values.iter().map(|v| if *v { '1' } else { '0' }).collect()
    }

    /// The integer value of the index form, if it fits in 64 bits (up to 6 variables)
    pub fn index_value(&self) -> Option<u64> {
        if self.values.len() > 64 {
            return None;
        }
        Some(
            self.values
                .iter()
                .fold(0, |acc, v| (acc << 1) | u64::from(*v)),
        )
    }

    /// Numeric form of the canonical SOP: the list of minterms followed by the OR symbol
    pub fn numeric_sop(&self) -> String {
        format!("({}) ∨", self.minterms().iter().join(", "))
    }

    /// Numeric form of the canonical POS: the list of maxterms followed by the AND symbol
    pub fn numeric_pos(&self) -> String {
        format!("({}) ∧", self.maxterms().iter().join(", "))
    }

    /// Canonical (perfect) normal form, with one full-width implicant per row
    pub fn canonical(&self, form: Form, cfg: &FormatterConfig) -> String {
        let terms = match form {
            Form::Sop => self.minterms(),
            Form::Pos => self.maxterms(),
        };
        let implicants: Vec<Implicant> = terms
            .iter()
            .map(|t| Implicant::from_term(t, self.width()))
            .collect();
        cfg.cover(&implicants, &self.variables, form).to_string()
    }

    pub fn canonical_sop(&self) -> String {
        self.canonical(Form::Sop, &UNICODE_FMT_CFG)
    }

    pub fn canonical_pos(&self) -> String {
        self.canonical(Form::Pos, &UNICODE_FMT_CFG)
    }
}

/// Plain text rendering, one column per variable and a final result column
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths: Vec<usize> = self
            .variables
            .names()
            .iter()
            .map(|n| n.chars().count())
            .chain(std::iter::once(1))
            .collect();

        let header = self
            .variables
            .names()
            .iter()
            .map(|n| n.as_str())
            .chain(std::iter::once("f"))
            .join(" | ");
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", widths.iter().map(|w| "-".repeat(*w)).join("-+-"))?;

        for (asg, v) in self.rows() {
            let row = asg
                .values()
                .chain(std::iter::once(v))
                .zip(&widths)
                .map(|(b, w)| format!("{:^w$}", u8::from(b), w = *w))
                .join(" | ");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
