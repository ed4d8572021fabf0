use thiserror::Error;

/// Errors raised while reading an expression or an instruction sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The grammar rejected the input
    #[error("Syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    /// A character which is not part of the expression language
    #[error("Invalid token '{found}' at position {position}")]
    InvalidToken { position: usize, found: char },

    /// The identifier is not part of the declared variables
    #[error("There is no variable named '{0}'")]
    UndeclaredVariable(String),

    /// An instruction sequence left several values on the stack
    #[error("The instruction sequence leaves {0} operands without an operator")]
    MalformedProgram(usize),
}

/// Errors of the minimization pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QmError {
    /// The expression is invalid
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An operator is missing at least one of its operands
    #[error("The operator '{operator}' is missing an operand")]
    Arity { operator: String },

    /// The function is defined on too many variables for an exhaustive search
    #[error("{count} variables exceed the supported maximum of {max}")]
    TooManyVariables { count: usize, max: usize },

    /// Karnaugh maps are only laid out for 2 to 4 variables
    #[error("Karnaugh maps need 2 to 4 variables, got {0}")]
    UnsupportedVariableCount(usize),

    /// A term is not covered by any prime implicant
    #[error("The term {0} is not covered by any prime implicant")]
    UncoverableTerm(usize),

    /// The name is invalid
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name conflicts with another variable
    #[error("The name '{0}' conflicts with an other variable")]
    ConflictingName(String),

    /// The text is not a valid implicant pattern
    #[error("'{0}' is not a valid implicant pattern")]
    InvalidPattern(String),
}
