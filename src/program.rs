//! Evaluation of Boolean functions as postfix instruction sequences.

use crate::*;

use std::fmt;

/// A single instruction of a postfix [Program].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instr {
    /// Push a fixed value
    Const(bool),
    /// Push the value of a variable
    Load(Variable),
    /// Replace the top value by its negation
    Not,
    /// Replace the two top values by their conjunction
    And,
    /// Replace the two top values by their disjunction
    Or,
}

/// A Boolean function compiled into a flat sequence of stack instructions.
///
/// Programs only use the core operators: derived operators of the expression tree
/// are rewritten during compilation. A program can also be assembled from instructions
/// produced by an external parser, in which case missing operands are only detected
/// during evaluation.
///
/// ```
/// use qmkit::{Assignment, Instr, Program, Variable};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// // a & !b
/// let program = Program::from_instructions(
///     vec![Instr::Load(Variable::new(0)), Instr::Load(Variable::new(1)), Instr::Not, Instr::And],
///     2,
/// )?;
/// assert!(program.evaluate(&Assignment::new(0b10, 2))?);
/// assert!(!program.evaluate(&Assignment::new(0b11, 2))?);
///
/// // A dangling operator is reported at evaluation time
/// let program = Program::from_instructions(vec![Instr::Load(Variable::new(0)), Instr::Or], 1)?;
/// assert!(program.evaluate(&Assignment::new(0, 1)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Program {
    instructions: Vec<Instr>,
    width: usize,
}

impl Program {
    /// Compile an expression over the given number of variables
    pub fn compile(expr: &Expr, width: usize) -> Result<Self, QmError> {
        let mut instructions = vec![];
        push_instructions(&expr.desugar(), &mut instructions);
        Self::from_instructions(instructions, width)
    }

    /// Wrap an existing instruction sequence.
    ///
    /// Fails if an instruction loads a variable outside of the declared width.
    pub fn from_instructions(instructions: Vec<Instr>, width: usize) -> Result<Self, QmError> {
        for instr in &instructions {
            if let Instr::Load(v) = instr {
                if v.idx() >= width {
                    return Err(ParseError::UndeclaredVariable(v.to_string()).into());
                }
            }
        }
        Ok(Self {
            instructions,
            width,
        })
    }

    /// Number of variables expected by this program
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn instructions(&self) -> &[Instr] {
        &self.instructions
    }

    /// Run the program on a total assignment of its variables.
    ///
    /// Fails with [QmError::Arity] if an operator lacks an operand and with
    /// [ParseError::MalformedProgram] if several values remain at the end.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, QmError> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.instructions.len());
        for instr in &self.instructions {
            match instr {
                Instr::Const(b) => stack.push(*b),
                Instr::Load(v) => stack.push(assignment.is_active(*v)),
                Instr::Not => {
                    let x = pop(&mut stack, "NOT")?;
                    stack.push(!x);
                }
                Instr::And | Instr::Or => {
                    let name = match instr {
                        Instr::And => Operator::And.name(),
                        _ => Operator::Or.name(),
                    };
                    let right = pop(&mut stack, name)?;
                    let left = pop(&mut stack, name)?;
                    stack.push(match instr {
                        Instr::And => left && right,
                        _ => left || right,
                    });
                }
            }
        }
        match stack.len() {
            1 => Ok(stack[0]),
            n => Err(ParseError::MalformedProgram(n).into()),
        }
    }
}

fn pop(stack: &mut Vec<bool>, operator: &str) -> Result<bool, QmError> {
    stack.pop().ok_or_else(|| QmError::Arity {
        operator: operator.to_string(),
    })
}

/// Post-order traversal, derived operators are desugared on the fly
fn push_instructions(expr: &Expr, instructions: &mut Vec<Instr>) {
    match expr {
        Expr::Const(b) => instructions.push(Instr::Const(*b)),
        Expr::Var(v) => instructions.push(Instr::Load(*v)),
        Expr::Not(e) => {
            push_instructions(e, instructions);
            instructions.push(Instr::Not);
        }
        Expr::Operation(op, children) => {
            let instr = match op {
                Operator::And => Instr::And,
                Operator::Or => Instr::Or,
                Operator::Implies | Operator::Iff => {
                    return push_instructions(&expr.desugar(), instructions);
                }
            };
            push_instructions(&children.0, instructions);
            push_instructions(&children.1, instructions);
            instructions.push(instr);
        }
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instr::Const(b) => write!(f, "{}", u8::from(*b)),
            Instr::Load(v) => write!(f, "{}", v),
            Instr::Not => write!(f, "!"),
            Instr::And => write!(f, "&"),
            Instr::Or => write!(f, "|"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", instr)?;
        }
        Ok(())
    }
}
