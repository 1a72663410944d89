//! The Klaxon threshold rule language.
//!
//! Rule text like `cpu > 90 && mem < 80` compiles into an immutable
//! predicate tree that can be evaluated any number of times against
//! [`Snapshot`](klaxon_foundation::Snapshot) values:
//!
//! ```
//! use klaxon_foundation::Snapshot;
//! use klaxon_lang::compile;
//!
//! let rule = compile("cpu > 90 && mem < 80").unwrap();
//! let snapshot: Snapshot = [("cpu", 95.0), ("mem", 60.0)].into_iter().collect();
//! assert!(rule.interpret(&snapshot));
//! ```
//!
//! Compilation and evaluation are independent phases. Compilation is
//! all-or-nothing and surfaces a
//! [`CompileError`](klaxon_foundation::CompileError); evaluation is a
//! total function with no error channel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod expr;
pub mod lexer;
pub mod rule;
pub mod span;


pub use compiler::compile;
pub use expr::{CompareOp, Expr};
pub use lexer::{Clause, Lexer};
pub use rule::Rule;
pub use span::Span;
