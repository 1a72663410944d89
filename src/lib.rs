//! Klaxon - Threshold alert rule language
//!
//! This crate re-exports both layers of the Klaxon system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: klaxon_lang       — Lexer, compiler, expression tree, evaluation
//! Layer 0: klaxon_foundation — Core types (Snapshot, CompileError)
//! ```
//!
//! # Example
//!
//! ```
//! use klaxon::foundation::Snapshot;
//! use klaxon::lang::compile;
//!
//! let rule = compile("cpu > 90 && mem < 80").unwrap();
//! let snapshot: Snapshot = [("cpu", 95.0), ("mem", 60.0)].into_iter().collect();
//! assert!(rule.interpret(&snapshot));
//! ```

pub use klaxon_foundation as foundation;
pub use klaxon_lang as lang;
