//! Core types shared by all Klaxon layers.
//!
//! This crate provides:
//! - [`Snapshot`] - A read-only view of named numeric signals for one evaluation
//! - [`CompileError`] - Errors raised while compiling rule text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod snapshot;

pub use error::CompileError;
pub use snapshot::Snapshot;
