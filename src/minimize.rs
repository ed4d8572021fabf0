//! Complete minimization pipeline, from an expression or a set of terms to minimal normal forms.

use crate::efmt::{Form, FormatterConfig, UNICODE_FMT_CFG};
use crate::*;

use log::debug;

/// Settings of a [Minimizer].
#[derive(Clone, Copy, Debug)]
pub struct MinimizerConfig {
    /// Largest accepted number of variables, never above [MAX_WIDTH]
    pub max_variables: usize,
    /// Symbols used in the formatted results
    pub formatter: &'static FormatterConfig<'static>,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_variables: 6,
            formatter: &UNICODE_FMT_CFG,
        }
    }
}

impl MinimizerConfig {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_formatter(mut self, formatter: &'static FormatterConfig<'static>) -> Self {
        self.formatter = formatter;
        self
    }

    fn limit(&self) -> usize {
        self.max_variables.min(MAX_WIDTH)
    }
}

/// The Boolean function to minimize
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    /// An expression over the declared variables
    Expr(Expr),
    /// The explicit set of minterms
    Terms(TermSet),
}

impl From<Expr> for Function {
    fn from(e: Expr) -> Self {
        Function::Expr(e)
    }
}

impl From<TermSet> for Function {
    fn from(terms: TermSet) -> Self {
        Function::Terms(terms)
    }
}

/// Prime implicants and selected cover for one side (minterms or maxterms) of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    terms: TermSet,
    primes: Primes,
    stages: Vec<MergeStage>,
    cover: Cover,
}

impl Solution {
    fn solve(terms: TermSet, width: usize) -> Result<Self, QmError> {
        let (primes, stages) = Primes::extract_traced(&terms, width)?;
        let cover = Cover::select(&primes, &terms)?;
        Ok(Self {
            terms,
            primes,
            stages,
            cover,
        })
    }

    /// The target terms
    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    pub fn primes(&self) -> &Primes {
        &self.primes
    }

    /// The successive merge stages leading to the prime implicants
    pub fn stages(&self) -> &[MergeStage] {
        &self.stages
    }

    pub fn cover(&self) -> &Cover {
        &self.cover
    }
}

/// Result of a minimization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimized {
    table: TruthTable,
    sop: Solution,
    pos: Solution,
    formatted_sop: String,
    formatted_pos: String,
    canonical_sop: String,
    canonical_pos: String,
}

impl Minimized {
    /// The truth table of the minimized function
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Minimization of the minterms
    pub fn sop(&self) -> &Solution {
        &self.sop
    }

    /// Minimization of the maxterms
    pub fn pos(&self) -> &Solution {
        &self.pos
    }

    /// Prime implicants of the minterms
    pub fn prime_implicants(&self) -> &Primes {
        self.sop.primes()
    }

    /// Cover of the minterms
    pub fn essential_cover(&self) -> &Cover {
        self.sop.cover()
    }

    /// Minimal sum of products
    pub fn formatted_sop(&self) -> &str {
        &self.formatted_sop
    }

    /// Minimal product of sums
    pub fn formatted_pos(&self) -> &str {
        &self.formatted_pos
    }

    /// Canonical sum of products, with one product per minterm
    pub fn canonical_sop(&self) -> &str {
        &self.canonical_sop
    }

    /// Canonical product of sums, with one sum per maxterm
    pub fn canonical_pos(&self) -> &str {
        &self.canonical_pos
    }
}

/// Minimize Boolean functions with the Quine–McCluskey method.
///
/// ```
/// use qmkit::{parse_expression, Minimizer, MinimizerConfig, VarList};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let variables: VarList = "a b".parse()?;
/// let expr = parse_expression("a & b | a & !b", &variables)?;
/// let result = Minimizer::new(MinimizerConfig::default()).minimize(expr, &variables)?;
///
/// assert_eq!(result.formatted_sop(), "(a)");
/// assert_eq!(result.formatted_pos(), "(a)");
/// assert_eq!(result.canonical_sop(), "(a ∧ ¬b) ∨ (a ∧ b)");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimizer {
    config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Compute the minimal SOP and POS forms of a function over the given variables.
    ///
    /// Fails with [QmError::TooManyVariables] above the configured limit, with a parse error
    /// if the expression uses an undeclared variable, and with [QmError::UncoverableTerm]
    /// if an explicit term is outside of the truth table.
    pub fn minimize(
        &self,
        function: impl Into<Function>,
        variables: &VarList,
    ) -> Result<Minimized, QmError> {
        let width = variables.len();
        if width > self.config.limit() {
            return Err(QmError::TooManyVariables {
                count: width,
                max: self.config.limit(),
            });
        }

        let table = match function.into() {
            Function::Expr(e) => TruthTable::build(&Program::compile(&e, width)?, variables)?,
            Function::Terms(terms) => TruthTable::from_minterms(&terms, variables)?,
        };
        let minterms = table.minterms();
        let maxterms = table.maxterms();
        debug!(
            "minimizing over {} variables: {} minterms, {} maxterms",
            width,
            minterms.len(),
            maxterms.len()
        );

        let sop = Solution::solve(minterms, width)?;
        let pos = Solution::solve(maxterms, width)?;

        let cfg = self.config.formatter;
        let formatted_sop = cfg.cover(sop.cover.iter(), variables, Form::Sop).to_string();
        let formatted_pos = cfg.cover(pos.cover.iter(), variables, Form::Pos).to_string();
        debug!("minimal forms: {} / {}", formatted_sop, formatted_pos);

        Ok(Minimized {
            canonical_sop: table.canonical(Form::Sop, cfg),
            canonical_pos: table.canonical(Form::Pos, cfg),
            table,
            sop,
            pos,
            formatted_sop,
            formatted_pos,
        })
    }
}

/// Minimize a function with the default settings
pub fn minimize(function: impl Into<Function>, variables: &VarList) -> Result<Minimized, QmError> {
    Minimizer::default().minimize(function, variables)
}
