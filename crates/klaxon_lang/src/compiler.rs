//! Compiler for Klaxon rule text.
//!
//! The compiler splits rule text into clauses, validates each clause
//! against the `key operator number` grammar, and builds the expression
//! tree. Compilation is all-or-nothing: the first failing clause aborts
//! the whole compile.

use klaxon_foundation::CompileError;

use crate::expr::{CompareOp, Expr};
use crate::lexer::{Clause, Lexer};
use crate::rule::Rule;

/// Compiles rule text into an executable [`Rule`].
///
/// The grammar is a conjunction of threshold clauses:
///
/// ```text
/// rule    := clause ("&&" clause)*
/// clause  := key WS operator WS number
/// operator:= ">" | "<"
/// ```
///
/// # Errors
///
/// Returns [`CompileError::EmptyRuleText`] when the input has no
/// non-empty clauses, and a clause-level error for the first clause
/// that fails validation. An empty clause between delimiters (for
/// example a trailing `&&`) is malformed, not silently dropped.
pub fn compile(text: &str) -> Result<Rule, CompileError> {
    let clauses = Lexer::clauses(text);
    if clauses.iter().all(Clause::is_empty) {
        return Err(CompileError::EmptyRuleText(text.to_string()));
    }

    let mut operands = Vec::with_capacity(clauses.len());
    for clause in &clauses {
        operands.push(compile_clause(clause)?);
    }
    Ok(Rule::new(text, Expr::Conjunction(operands)))
}

/// Compiles one clause into a comparison node.
fn compile_clause(clause: &Clause<'_>) -> Result<Expr, CompileError> {
    let tokens = clause.tokens();
    let [key, op_token, literal] = tokens.as_slice() else {
        return Err(CompileError::MalformedClause(clause.text().to_string()));
    };

    let op = detect_operator(clause, op_token)?;
    let threshold = parse_threshold(clause, literal)?;

    Ok(Expr::Comparison {
        key: (*key).to_string(),
        op,
        threshold,
    })
}

/// Determines the operator by textual containment over the whole clause.
///
/// `>` anywhere in the clause means the operator token must be `">"`;
/// otherwise `<` anywhere means it must be `"<"`. When a malformed
/// clause contains both symbols, `>` wins deterministically. A clause
/// whose detected symbol does not match its operator token (such as
/// `a >> 1`) is rejected.
fn detect_operator(clause: &Clause<'_>, op_token: &str) -> Result<CompareOp, CompileError> {
    let detected = if clause.text().contains('>') {
        CompareOp::GreaterThan
    } else if clause.text().contains('<') {
        CompareOp::LessThan
    } else {
        return Err(CompileError::UnsupportedOperator(clause.text().to_string()));
    };

    if op_token != detected.symbol() {
        return Err(CompileError::UnsupportedOperator(clause.text().to_string()));
    }
    Ok(detected)
}

/// Parses the threshold token as a finite `f64`.
fn parse_threshold(clause: &Clause<'_>, literal: &str) -> Result<f64, CompileError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CompileError::InvalidNumericLiteral {
            literal: literal.to_string(),
            clause: clause.text().to_string(),
        }),
    }
}
