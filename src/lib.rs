//! Minimize Boolean functions of a few variables with the Quine–McCluskey method.
//!
//! A Boolean function is given either as an [expression](Expr) over a [list of named variables](VarList)
//! or as the explicit [set of its minterms](TermSet). The [order of the variables](VarList) fixes the
//! position of each variable in all terms and patterns: the first variable is the most significant bit.
//! A term is the index of a row of the [truth table](TruthTable): minterms are the rows where the function
//! is true, maxterms the rows where it is false.
//!
//! ```
//! use qmkit::{minimize, parse_expression, VarList};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let variables: VarList = "a b".parse()?;
//! let expr = parse_expression("a & b", &variables)?;
//!
//! let result = minimize(expr, &variables)?;
//! assert_eq!(result.formatted_sop(), "(a ∧ b)");
//! assert_eq!(result.canonical_pos(), "(a ∨ b) ∧ (a ∨ ¬b) ∧ (¬a ∨ b)");
//! # Ok(())
//! # }
//! ```
//!
//! # Expressions and evaluation
//!
//! [Expressions](Expr) combine variables with the NOT, AND, OR operators as well as the derived
//! implication and equivalence. Before evaluation, an expression is compiled into a flat [postfix program](Program)
//! which only uses the core operators. Evaluating the program on every [assignment](Assignment) of the variables
//! gives the [truth table](TruthTable).
//!
//! ```
//! use qmkit::{Assignment, Variable};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let a = Variable::from(0);
//! let b = Variable::from(1);
//! let c = Variable::from(2);
//! let expr = a & (b | !c);
//!
//! assert!(expr.eval(&Assignment::new(0b100, 3))?);
//! assert!(!expr.eval(&Assignment::new(0b011, 3))?);
//! # Ok(())
//! # }
//! ```
//!
//! # Implicants
//!
//! An [implicant](Implicant) is a pattern over the variables, where each position is fixed (```0``` or ```1```)
//! or free (```-```). The [prime implicants](Primes) are obtained by merging patterns differing in a single
//! fixed position until no further merge is possible. A [cover](Cover) then selects essential prime implicants and
//! completes them greedily, in a deterministic way.
//!
//! ```
//! use qmkit::{Cover, Primes, TermSet};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let terms: TermSet = [0, 1, 2, 5, 6, 7].iter().copied().collect();
//! let primes = Primes::extract(&terms, 3)?;
//! assert_eq!(primes.len(), 6);
//!
//! let cover = Cover::select(&primes, &terms)?;
//! assert_eq!(format!("{}", cover), "00- ; 0-0 ; 11- ; 1-1");
//! assert_eq!(cover.covered_terms(), terms);
//! # Ok(())
//! # }
//! ```

mod efmt;
mod error;
mod expr;
mod implicants;
mod kmap;
mod minimize;
mod parse;
mod pattern;
mod primes;
mod program;
mod states;
pub mod tools;
mod truth_table;
mod variable;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use efmt::{
    format_cover, format_implicant, Form, FormattedCover, FormattedImplicant, FormatterConfig,
    ASCII_FMT_CFG, UNICODE_FMT_CFG,
};
pub use error::{ParseError, QmError};
pub use expr::{Expr, NamedExpr, Operator};
pub use implicants::{select_cover, Cover, CoverageTable, Selection};
pub use kmap::{karnaugh_layout, KarnaughMap};
pub use minimize::{minimize, Function, Minimized, Minimizer, MinimizerConfig, Solution};
pub use parse::{parse_expression, parse_with_inferred_variables, VariableParser};
pub use pattern::{Implicant, MAX_WIDTH};
pub use primes::{extract_primes, extract_primes_traced, MergeStage, Primes};
pub use program::{Instr, Program};
pub use states::{Assignment, TermSet};
pub use truth_table::{generate, TruthTable};
pub use variable::{VarList, Variable};
