//! Karnaugh map layout for functions of 2 to 4 variables.

use crate::tools::{gray_code, gray_labels};
use crate::*;

use itertools::Itertools;
use std::fmt;

/// Split of the variables between rows and columns: the first half labels the rows
fn split(count: usize) -> Result<(usize, usize), QmError> {
    match count {
        2..=4 => Ok((count / 2, count - count / 2)),
        _ => Err(QmError::UnsupportedVariableCount(count)),
    }
}

/// Gray-coded labels of the rows and columns of a Karnaugh map.
///
/// The first variables (most significant bits) label the rows: 2 variables are
/// split as 1/1, 3 as 1/2 and 4 as 2/2.
///
/// ```
/// use qmkit::{karnaugh_layout, VarList};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let (rows, cols) = karnaugh_layout(&"a b c".parse()?)?;
/// assert_eq!(rows, vec!["0", "1"]);
/// assert_eq!(cols, vec!["00", "01", "11", "10"]);
///
/// assert!(karnaugh_layout(&"a".parse()?).is_err());
/// # Ok(())
/// # }
/// ```
pub fn karnaugh_layout(variables: &VarList) -> Result<(Vec<String>, Vec<String>), QmError> {
    let (row_bits, col_bits) = split(variables.len())?;
    Ok((gray_labels(row_bits), gray_labels(col_bits)))
}

/// The values of a truth table arranged in a Karnaugh map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KarnaughMap {
    row_header: String,
    col_header: String,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Vec<bool>>,
}

impl KarnaughMap {
    pub fn new(table: &TruthTable) -> Result<Self, QmError> {
        let variables = table.variables();
        let (row_bits, col_bits) = split(variables.len())?;
        let (row_labels, col_labels) = karnaugh_layout(variables)?;

        let row_header = variables.slice(0, row_bits).names().concat();
        let col_header = variables.slice(row_bits, variables.len()).names().concat();

        let cols = gray_code(col_bits);
        let cells = gray_code(row_bits)
            .into_iter()
            .map(|r| {
                cols.iter()
                    .map(|c| table.value((r << col_bits) | c).unwrap_or(false))
                    .collect::<Vec<bool>>()
            })
            .collect();

        Ok(Self {
            row_header,
            col_header,
            row_labels,
            col_labels,
            cells,
        })
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Value of a cell, given its row and column in the Gray-coded layout
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let corner = format!("{}\\{}", self.row_header, self.col_header);
        let first = corner.chars().count().max(self.row_header.len());
        let widths: Vec<usize> = self.col_labels.iter().map(|l| l.len()).collect();

        writeln!(
            f,
            "{:<first$} | {}",
            corner,
            self.col_labels.iter().join(" | "),
            first = first
        )?;
        writeln!(
            f,
            "{}",
            std::iter::once(first)
                .chain(widths.iter().copied())
                .map(|w| "-".repeat(w))
                .join("-+-")
        )?;
        for (label, row) in self.row_labels.iter().zip(&self.cells) {
            let values = row
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:^w$}", u8::from(*v), w = *w))
                .join(" | ");
            writeln!(f, "{:<first$} | {}", label, values, first = first)?;
        }
        Ok(())
    }
}
