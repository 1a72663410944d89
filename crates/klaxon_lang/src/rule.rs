//! Compiled rules.
//!
//! A [`Rule`] is the immutable handle a caller holds between the two
//! phases of the engine: compile once, evaluate any number of times.

use std::fmt;
use std::str::FromStr;

use klaxon_foundation::{CompileError, Snapshot};

use crate::compiler;
use crate::expr::Expr;

/// A compiled alert rule owning exactly one root expression.
///
/// Immutable once returned by the compiler, so it may be evaluated
/// concurrently by any number of threads without synchronization. No
/// state survives between evaluations.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// The rule text the compiler was given, kept for diagnostics.
    source: String,
    /// The root of the expression tree. Always a conjunction for this
    /// grammar, since `&&` is the only top-level combinator.
    root: Expr,
}

impl Rule {
    pub(crate) fn new(source: impl Into<String>, root: Expr) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }

    /// Evaluates this rule against a snapshot.
    ///
    /// Total function with no error channel; see [`Expr::interpret`]
    /// for the missing-signal and short-circuit semantics.
    #[must_use]
    pub fn interpret(&self, snapshot: &Snapshot) -> bool {
        self.root.interpret(snapshot)
    }

    /// Returns the original rule text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the root expression.
    #[must_use]
    pub fn root(&self) -> &Expr {
        &self.root
    }
}

impl FromStr for Rule {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compiler::compile(s)
    }
}

impl fmt::Display for Rule {
    /// Renders the rule in canonical form: single spaces within
    /// clauses, ` && ` between them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
