//! Error types for rule compilation.
//!
//! Uses `thiserror` for ergonomic error definition. Every variant carries
//! the offending input text so a caller can report exactly which part of
//! the rule was rejected. Evaluation has no error channel at all: a
//! compiled rule is a total function over snapshots.

use thiserror::Error;

/// An error raised while compiling rule text.
///
/// Compilation is all-or-nothing: the first failing clause aborts the
/// whole compile, and no partially built rule escapes to the caller.
/// Retrying the same input cannot change the outcome; recovery means
/// supplying corrected rule text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// The input had zero non-empty clauses. Carries the full rule text.
    #[error("rule text has no clauses: {0:?}")]
    EmptyRuleText(String),

    /// A clause did not split into exactly three whitespace-separated
    /// tokens (`key operator number`). Carries the clause text.
    #[error("malformed clause (expected `key op number`): {0:?}")]
    MalformedClause(String),

    /// No supported comparison symbol was found in the clause, or the
    /// detected symbol did not match the operator token. Carries the
    /// clause text.
    #[error("unsupported operator in clause: {0:?}")]
    UnsupportedOperator(String),

    /// The threshold token could not be parsed as a finite number.
    #[error("invalid numeric literal {literal:?} in clause: {clause:?}")]
    InvalidNumericLiteral {
        /// The token that failed to parse.
        literal: String,
        /// The clause containing it.
        clause: String,
    },
}

impl CompileError {
    /// Returns the raw input text this error points at: the clause for
    /// clause-level errors, the full rule text for [`CompileError::EmptyRuleText`].
    #[must_use]
    pub fn offending_text(&self) -> &str {
        match self {
            Self::EmptyRuleText(text)
            | Self::MalformedClause(text)
            | Self::UnsupportedOperator(text) => text,
            Self::InvalidNumericLiteral { clause, .. } => clause,
        }
    }
}
