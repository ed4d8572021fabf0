//! Ordered lists of named variables

use crate::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

static RE_UID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z01-9_]*$").unwrap());

static NAME_SEPARATORS: [char; 4] = [' ', ',', ';', '\t'];

/// Words reserved by the expression grammar
static KEYWORDS: [&str; 5] = ["and", "or", "not", "true", "false"];

/// A Boolean variable, identified by its position in a [VarList].
///
/// Position 0 is the most significant bit of every term and implicant pattern.
#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Create a new variable with a specific position
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Return the position of this variable in its list
    pub fn idx(&self) -> usize {
        self.0
    }
}

impl From<usize> for Variable {
    fn from(idx: usize) -> Self {
        Self(idx)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}_", self.0)
    }
}

/// An ordered sequence of distinct variable names.
///
/// The order fixes the bit position of each variable: the first declared variable
/// is the most significant bit of a term index.
///
/// ```
/// use qmkit::VarList;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let variables: VarList = "a, b, c".parse()?;
/// assert_eq!(variables.len(), 3);
/// assert_eq!(variables.get("b").map(|v| v.idx()), Some(1));
/// assert!("a, a".parse::<VarList>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VarList {
    names: Vec<String>,
    name2idx: HashMap<String, Variable>,
}

impl VarList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a sequence of names, rejecting invalid or repeated names
    pub fn from_names<I, S>(names: I) -> Result<Self, QmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Self::default();
        for name in names {
            result.add(name.as_ref())?;
        }
        Ok(result)
    }

    /// Append a new variable at the least significant position.
    pub fn add(&mut self, name: &str) -> Result<Variable, QmError> {
        check_name(name)?;
        if self.name2idx.contains_key(name) {
            return Err(QmError::ConflictingName(name.to_string()));
        }
        let var = Variable(self.names.len());
        self.names.push(name.to_string());
        self.name2idx.insert(name.to_string(), var);
        Ok(var)
    }

    /// Search a variable with the given name
    pub fn get(&self, name: &str) -> Option<Variable> {
        self.name2idx.get(name).copied()
    }

    /// Search a variable with the given name
    pub fn get_or_err(&self, name: &str) -> Result<Variable, QmError> {
        self.get(name)
            .ok_or_else(|| ParseError::UndeclaredVariable(name.to_string()).into())
    }

    pub fn name(&self, var: Variable) -> Option<&str> {
        self.names.get(var.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, n)| (Variable(idx), n.as_str()))
    }

    /// Select a contiguous range of variables as a new list (used to split Karnaugh map axes)
    pub(crate) fn slice(&self, from: usize, to: usize) -> VarList {
        let mut result = VarList::default();
        for name in &self.names[from..to] {
            let var = Variable(result.names.len());
            result.names.push(name.clone());
            result.name2idx.insert(name.clone(), var);
        }
        result
    }
}

fn check_name(name: &str) -> Result<(), QmError> {
    let lower = name.to_ascii_lowercase();
    if !RE_UID.is_match(name) || KEYWORDS.contains(&lower.as_str()) {
        return Err(QmError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl Index<Variable> for VarList {
    type Output = str;

    fn index(&self, var: Variable) -> &str {
        &self.names[var.0]
    }
}

impl FromStr for VarList {
    type Err = QmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_names(s.split(&NAME_SEPARATORS[..]).filter(|n| !n.is_empty()))
    }
}

impl fmt::Display for VarList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
