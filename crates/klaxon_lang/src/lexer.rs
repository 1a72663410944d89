//! Lexer for Klaxon rule text.
//!
//! The lexer splits rule text on the literal `&&` delimiter into an
//! ordered sequence of clauses, tracking byte spans so diagnostics can
//! point into the source. Empty segments are emitted as empty clauses
//! rather than silently dropped; the compiler decides whether an empty
//! clause means "empty rule" or "malformed clause".

use crate::span::Span;

/// The conjunction delimiter between clauses.
pub const AND_DELIMITER: &str = "&&";

/// One raw clause of rule text, trimmed of surrounding whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clause<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Clause<'src> {
    /// Returns the trimmed clause text.
    #[must_use]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the span of the trimmed text in the original source.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns true if the clause carries no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the clause on runs of whitespace.
    #[must_use]
    pub fn tokens(&self) -> Vec<&'src str> {
        self.text.split_whitespace().collect()
    }
}

/// Lexer for rule text.
///
/// Iterates through the source and produces clauses in textual order.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Byte offset of `rest` within the original source.
    position: usize,
    /// Set once the final clause has been emitted.
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            exhausted: false,
        }
    }

    /// Returns the next clause, or `None` once the source is exhausted.
    ///
    /// Every source yields at least one clause; `""` yields a single
    /// empty clause, and a trailing `&&` yields a trailing empty clause.
    pub fn next_clause(&mut self) -> Option<Clause<'src>> {
        if self.exhausted {
            return None;
        }

        let segment = match self.rest.find(AND_DELIMITER) {
            Some(at) => {
                let segment = &self.rest[..at];
                self.rest = &self.rest[at + AND_DELIMITER.len()..];
                segment
            }
            None => {
                self.exhausted = true;
                self.rest
            }
        };

        let leading = segment.len() - segment.trim_start().len();
        let text = segment.trim();
        let start = self.position + leading;
        let clause = Clause {
            text,
            span: Span::new(start, start + text.len()),
        };

        self.position += segment.len() + AND_DELIMITER.len();
        Some(clause)
    }

    /// Splits all of `source` and returns the clauses in order.
    #[must_use]
    pub fn clauses(source: &'src str) -> Vec<Clause<'src>> {
        let mut lexer = Lexer::new(source);
        let mut clauses = Vec::new();
        while let Some(clause) = lexer.next_clause() {
            clauses.push(clause);
        }
        clauses
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Clause<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_clause()
    }
}
