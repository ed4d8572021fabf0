//! Boolean rules defined as expression trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::Not;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::*;

/// A Boolean expression tree.
///
/// Represents a Boolean function as a tree where internal nodes are Boolean operations
/// and leaves are individual variables (or fixed Boolean values).
/// Expressions overload the ```&```, ```|```, and ```!``` operators to facilitate their definition
/// as readable rust statements.
///
/// Expressions can not be [copied](Copy) but they can be [cloned](Clone) in constant time.
///
/// ```
/// use qmkit::{Assignment, Expr, Variable};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let a = Variable::from(0);
/// let b = Variable::from(1);
/// let c = Variable::from(2);
///
/// let expr = a & (b | !c);
/// assert!(expr.eval(&Assignment::new(0b100, 3))?);
/// assert!(!expr.eval(&Assignment::new(0b101, 3))?);
/// # Ok(())
/// # }
/// ```
///
/// # Derived operators
///
/// The implication and the biconditional are kept in the tree as parsed, they are rewritten
/// with the core operators (AND, OR, NOT) by [Expr::desugar] before evaluation.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Const(bool),

    /// A single variable
    Var(Variable),

    /// Negation of a sub-expression
    Not(Arc<Expr>),

    /// Two expressions connected with a binary operator
    Operation(Operator, Arc<(Expr, Expr)>),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Binary operators available in expression trees.
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
    /// Implication: ```a -> b``` is ```!a | b```
    Implies,
    /// Biconditional: ```a <-> b``` is true when both children have the same value
    Iff,
}

impl Expr {
    /// Connect two expressions with a binary operator
    pub fn join(op: Operator, e1: impl Into<Expr>, e2: impl Into<Expr>) -> Expr {
        Expr::Operation(op, Arc::new((e1.into(), e2.into())))
    }

    pub fn implies(self, rhs: impl Into<Expr>) -> Expr {
        Self::join(Operator::Implies, self, rhs)
    }

    pub fn iff(self, rhs: impl Into<Expr>) -> Expr {
        Self::join(Operator::Iff, self, rhs)
    }

    /// Rewrite the derived operators (implication and biconditional) with AND, OR and NOT.
    ///
    /// * ```a -> b``` becomes ```!a | b```
    /// * ```a <-> b``` becomes ```(a & b) | (!a & !b)```
    ///
    /// Return a Cow object: borrow the existing expression if it only uses core operators.
    pub fn desugar(&self) -> Cow<Self> {
        match self {
            Expr::Const(_) | Expr::Var(_) => Cow::Borrowed(self),
            Expr::Not(e) => match e.desugar() {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(e) => Cow::Owned(!e),
            },
            Expr::Operation(op, children) => {
                let c0 = children.0.desugar();
                let c1 = children.1.desugar();
                match op {
                    Operator::Implies => Cow::Owned(!c0.into_owned() | c1.into_owned()),
                    Operator::Iff => {
                        let (c0, c1) = (c0.into_owned(), c1.into_owned());
                        Cow::Owned((&c0 & &c1) | (!c0 & !c1))
                    }
                    Operator::And | Operator::Or => {
                        if let (Cow::Borrowed(_), Cow::Borrowed(_)) = (&c0, &c1) {
                            return Cow::Borrowed(self);
                        }
                        Cow::Owned(Self::join(*op, c0.into_owned(), c1.into_owned()))
                    }
                }
            }
        }
    }

    /// Evaluate the expression for a total assignment of its variables.
    ///
    /// This compiles a [Program] on each call: compile it once to evaluate many assignments.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, QmError> {
        Program::compile(self, assignment.width())?.evaluate(assignment)
    }

    /// Add all variables used in this expression to the given list
    pub fn collect_variables(&self, variables: &mut Vec<Variable>) {
        match self {
            Expr::Const(_) => (),
            Expr::Var(v) => {
                if !variables.contains(v) {
                    variables.push(*v)
                }
            }
            Expr::Not(e) => e.collect_variables(variables),
            Expr::Operation(_, children) => {
                children.0.collect_variables(variables);
                children.1.collect_variables(variables);
            }
        }
    }

    /// Display this expression with the names of a list of variables
    pub fn named<'a>(&'a self, variables: &'a VarList) -> NamedExpr<'a> {
        NamedExpr {
            expr: self,
            variables: Some(variables),
        }
    }

    fn fmt_expr(
        &self,
        f: &mut fmt::Formatter,
        variables: Option<&VarList>,
        parent: Option<Operator>,
    ) -> fmt::Result {
        match self {
            Expr::Const(b) => write!(f, "{}", u8::from(*b)),
            Expr::Var(v) => match variables.and_then(|vs| vs.name(*v)) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "{}", v),
            },
            Expr::Not(e) => {
                write!(f, "!")?;
                match e.as_ref() {
                    Expr::Operation(_, _) => {
                        write!(f, "(")?;
                        e.fmt_expr(f, variables, None)?;
                        write!(f, ")")
                    }
                    _ => e.fmt_expr(f, variables, None),
                }
            }
            Expr::Operation(op, children) => {
                // Nested derived operators are always wrapped, AND and OR are associative
                let wrap = parent.map_or(false, |p| {
                    p.priority() > op.priority()
                        || (p == *op && matches!(op, Operator::Implies | Operator::Iff))
                });
                if wrap {
                    write!(f, "(")?;
                }
                children.0.fmt_expr(f, variables, Some(*op))?;
                write!(f, " {} ", op)?;
                children.1.fmt_expr(f, variables, Some(*op))?;
                if wrap {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl Operator {
    /// Define the priority of operators
    ///
    /// This priority controls the addition of necessary parenthesis when formatting expressions.
    pub fn priority(self) -> u8 {
        match self {
            Operator::And => 4,
            Operator::Or => 3,
            Operator::Implies => 2,
            Operator::Iff => 1,
        }
    }

    /// Name of the operator, used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Implies => "IMPLIES",
            Operator::Iff => "IFF",
        }
    }
}

/// Wrapper displaying an expression with named variables
pub struct NamedExpr<'a> {
    expr: &'a Expr,
    variables: Option<&'a VarList>,
}

impl fmt::Display for NamedExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.expr.fmt_expr(f, self.variables, None)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_expr(f, None, None)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operator::And => write!(f, "&"),
            Operator::Or => write!(f, "|"),
            Operator::Implies => write!(f, "->"),
            Operator::Iff => write!(f, "<->"),
        }
    }
}

impl FromStr for Expr {
    type Err = QmError;

    /// Parse an expression, the variables are collected in alphabetical order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with_inferred_variables(s).map(|(e, _)| e)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Const(b)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Var(var)
    }
}

impl From<&Variable> for Expr {
    fn from(var: &Variable) -> Self {
        Expr::Var(*var)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self))
    }
}

impl Not for &Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self.clone()))
    }
}

impl Not for Variable {
    type Output = Expr;
    fn not(self) -> Self::Output {
        !Expr::from(self)
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::join(Operator::And, self, rhs)
    }
}

impl<T: Into<Expr>> BitAnd<T> for &Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::join(Operator::And, self, rhs)
    }
}

impl<T: Into<Expr>> BitAnd<T> for Variable {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::join(Operator::And, self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Self;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::join(Operator::Or, self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for &Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::join(Operator::Or, self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Variable {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::join(Operator::Or, self, rhs)
    }
}
