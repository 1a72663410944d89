//! The expression tree a rule compiles into.
//!
//! [`Expr`] is a closed sum type: either a single strict-inequality
//! comparison against one named signal, or a conjunction of
//! sub-expressions. Keeping the variant set closed means evaluation and
//! rendering stay exhaustively matchable; new operators (`>=`, `==`,
//! `||`, negation) extend the enum rather than adding string-matching
//! branches in the compiler.

use std::fmt;
use std::str::FromStr;

use klaxon_foundation::{CompileError, Snapshot};

/// A comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    /// Strict `>`: satisfied when the signal value exceeds the threshold.
    GreaterThan,
    /// Strict `<`: satisfied when the signal value is below the threshold.
    LessThan,
}

impl CompareOp {
    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }

    /// Applies the operator. Equality is false for both variants.
    #[must_use]
    pub fn check(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
        }
    }
}

impl FromStr for CompareOp {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::GreaterThan),
            "<" => Ok(Self::LessThan),
            _ => Err(CompileError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable, evaluable expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A single predicate over one named signal and a numeric threshold.
    Comparison {
        /// The signal name looked up in the snapshot. Never empty.
        key: String,
        /// The comparison operator.
        op: CompareOp,
        /// The threshold value. Always finite.
        threshold: f64,
    },
    /// Logical AND over an ordered, non-empty list of sub-expressions.
    Conjunction(Vec<Expr>),
}

impl Expr {
    /// Evaluates this expression against a snapshot.
    ///
    /// Total and pure: never fails, never mutates, never blocks.
    /// A comparison whose signal is absent from the snapshot is not
    /// satisfied, so one missing metric never spuriously triggers an
    /// alert and never aborts evaluation of sibling clauses. A
    /// conjunction evaluates operands in textual order and
    /// short-circuits on the first `false`.
    #[must_use]
    pub fn interpret(&self, snapshot: &Snapshot) -> bool {
        match self {
            Self::Comparison { key, op, threshold } => snapshot
                .get(key)
                .is_some_and(|value| op.check(value, *threshold)),
            Self::Conjunction(operands) => {
                operands.iter().all(|operand| operand.interpret(snapshot))
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison { key, op, threshold } => {
                write!(f, "{key} {op} {threshold}")
            }
            Self::Conjunction(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
        }
    }
}
