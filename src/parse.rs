//! Read Boolean expressions over named variables.

use crate::*;

use itertools::Itertools;
use pest::error::InputLocation;
use pest::{iterators, Parser};

#[derive(Parser)]
#[grammar_inline = r####"
formula = _{ SOI ~ iff ~ EOI }
iff     =  { imp ~ ( iff_op ~ imp )* }
imp     =  { disj ~ ( imp_op ~ disj )* }
disj    =  { conj ~ ( or_op ~ conj )* }
conj    =  { term ~ ( and_op ~ term )* }
term    = _{ neg | bt | bf | lit | "(" ~ iff ~ ")" | "[" ~ iff ~ "]" }
neg     =  { not_op ~ term }
bt      = @{ ^"true" ~ !id_char | "1" }
bf      = @{ ^"false" ~ !id_char | "0" }
lit     = @{ (ASCII_ALPHA | "_") ~ id_char* }
id_char = _{ ASCII_ALPHANUMERIC | "_" }

iff_op  = _{ "<->" | "↔" | "~" | "==" }
imp_op  = _{ "->" | "→" | "=>" }
or_op   = _{ "|" | "∨" | kw_or }
and_op  = _{ "&" | "∧" | kw_and }
not_op  = _{ "!" | "¬" | kw_not }
kw_or   = @{ ^"or" ~ !id_char }
kw_and  = @{ ^"and" ~ !id_char }
kw_not  = @{ ^"not" ~ !id_char }

WHITESPACE = _{ " " | "\t" | "\n" | "\r" }
"####]
struct ExpressionParser;

/// Symbols of binary operators, longest first when they share a suffix
static BINARY_SYMBOLS: [(&str, Operator); 13] = [
    ("<->", Operator::Iff),
    ("↔", Operator::Iff),
    ("~", Operator::Iff),
    ("==", Operator::Iff),
    ("->", Operator::Implies),
    ("→", Operator::Implies),
    ("=>", Operator::Implies),
    ("|", Operator::Or),
    ("∨", Operator::Or),
    ("or", Operator::Or),
    ("&", Operator::And),
    ("∧", Operator::And),
    ("and", Operator::And),
];

static UNARY_SYMBOLS: [&str; 3] = ["!", "¬", "not"];

/// Resolve the identifiers of an expression into variables.
pub trait VariableParser {
    fn parse_variable(&self, name: &str) -> Result<Variable, QmError>;

    /// Parse an expression, resolving identifiers with [VariableParser::parse_variable]
    fn parse_expression(&self, s: &str) -> Result<Expr, QmError> {
        let formula = parse_formula(s)?;
        self._load_expr(formula)
    }

    fn _load_expr(&self, expr: iterators::Pair<Rule>) -> Result<Expr, QmError> {
        let rule = expr.as_rule();
        match rule {
            Rule::bt => return Ok(Expr::from(true)),
            Rule::bf => return Ok(Expr::from(false)),
            Rule::lit => return self.parse_variable(expr.as_str()).map(Expr::from),
            _ => (),
        }

        let mut operands = vec![];
        for pair in expr.into_inner().filter(|p| !is_keyword(p.as_rule())) {
            operands.push(self._load_expr(pair)?);
        }
        let mut operands = operands.into_iter();
        let first = operands.next().ok_or_else(|| missing_operand(rule))?;
        match rule {
            Rule::neg => Ok(!first),
            Rule::conj => Ok(operands.fold(first, |e, o| e & o)),
            Rule::disj => Ok(operands.fold(first, |e, o| e | o)),
            Rule::iff => Ok(operands.fold(first, |e, o| e.iff(o))),
            // Implications associate to the right
            Rule::imp => {
                let mut all: Vec<Expr> = std::iter::once(first).chain(operands).collect();
                let mut result = all.pop().ok_or_else(|| missing_operand(rule))?;
                while let Some(e) = all.pop() {
                    result = e.implies(result);
                }
                Ok(result)
            }
            _ => Err(ParseError::Syntax {
                position: 0,
                message: format!("unexpected rule {:?}", rule),
            }
            .into()),
        }
    }
}

impl VariableParser for VarList {
    fn parse_variable(&self, name: &str) -> Result<Variable, QmError> {
        self.get_or_err(name)
    }
}

/// Parse an expression over a list of declared variables.
///
/// ```
/// use qmkit::{parse_expression, VarList};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let variables: VarList = "a b c".parse()?;
/// let expr = parse_expression("a & (b | !c) -> c", &variables)?;
/// assert_eq!(format!("{}", expr.named(&variables)), "a & (b | !c) -> c");
///
/// assert!(parse_expression("a & d", &variables).is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse_expression(s: &str, variables: &VarList) -> Result<Expr, QmError> {
    variables.parse_expression(s)
}

/// Parse an expression and declare its variables in alphabetical order
pub fn parse_with_inferred_variables(s: &str) -> Result<(Expr, VarList), QmError> {
    let formula = parse_formula(s)?;
    let names = formula
        .clone()
        .into_inner()
        .flatten()
        .filter(|p| p.as_rule() == Rule::lit)
        .map(|p| p.as_str())
        .sorted()
        .dedup();
    let variables = VarList::from_names(names)?;
    let expr = variables._load_expr(formula)?;
    Ok((expr, variables))
}

fn parse_formula(s: &str) -> Result<iterators::Pair<'_, Rule>, QmError> {
    if let Some((position, found)) = s.char_indices().find(|(_, c)| !is_valid_char(*c)) {
        return Err(ParseError::InvalidToken { position, found }.into());
    }

    match ExpressionParser::parse(Rule::formula, s) {
        Ok(mut pairs) => pairs.next().ok_or_else(|| {
            ParseError::Syntax {
                position: 0,
                message: "empty expression".to_string(),
            }
            .into()
        }),
        Err(e) => {
            let position = match e.location {
                InputLocation::Pos(p) => p,
                InputLocation::Span((p, _)) => p,
            };
            if let Some(operator) = dangling_operator(s, position) {
                return Err(QmError::Arity {
                    operator: operator.to_string(),
                });
            }
            Err(ParseError::Syntax {
                position,
                message: e.variant.message().into_owned(),
            }
            .into())
        }
    }
}

/// Identify an operator next to the position of a parsing failure
fn dangling_operator(s: &str, position: usize) -> Option<&'static str> {
    let before = s[..position].trim_end().to_lowercase();
    let after = s[position..].trim_start().to_lowercase();

    for (symbol, op) in &BINARY_SYMBOLS {
        if ends_with_symbol(&before, symbol) || starts_with_symbol(&after, symbol) {
            return Some(op.name());
        }
    }
    for symbol in &UNARY_SYMBOLS {
        if ends_with_symbol(&before, symbol) {
            return Some("NOT");
        }
    }
    None
}

fn ends_with_symbol(text: &str, symbol: &str) -> bool {
    match text.strip_suffix(symbol) {
        None => false,
        Some(rest) => !is_word(symbol) || !rest.ends_with(is_id_char),
    }
}

fn starts_with_symbol(text: &str, symbol: &str) -> bool {
    match text.strip_prefix(symbol) {
        None => false,
        Some(rest) => !is_word(symbol) || !rest.starts_with(is_id_char),
    }
}

fn is_word(symbol: &str) -> bool {
    symbol.chars().all(is_id_char)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_valid_char(c: char) -> bool {
    is_id_char(c) || c.is_whitespace() || "()[]!¬~&|∧∨-<>=→↔".contains(c)
}

fn is_keyword(rule: Rule) -> bool {
    matches!(rule, Rule::kw_and | Rule::kw_or | Rule::kw_not)
}

fn missing_operand(rule: Rule) -> QmError {
    let operator = match rule {
        Rule::neg => "NOT",
        Rule::conj => Operator::And.name(),
        Rule::disj => Operator::Or.name(),
        Rule::imp => Operator::Implies.name(),
        _ => Operator::Iff.name(),
    };
    QmError::Arity {
        operator: operator.to_string(),
    }
}
