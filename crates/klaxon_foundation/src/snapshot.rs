//! Metric snapshots: the named-signal values a rule is evaluated against.
//!
//! A [`Snapshot`] is owned and supplied by the caller per evaluation
//! cycle. The rule engine only reads it; nothing in Klaxon stores, ages,
//! or mutates snapshot data.

use std::collections::HashMap;

/// A read-only mapping from signal name to its current numeric value.
///
/// Each evaluation should receive an effectively frozen snapshot: the
/// caller must not mutate a `Snapshot` concurrently with an in-flight
/// evaluation against it. Building a fresh snapshot per cycle is the
/// intended usage.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    values: HashMap<String, f64>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a signal value, replacing any previous value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a signal by name.
    ///
    /// Returns `None` for signals absent from this snapshot; the
    /// evaluator treats an absent signal as "comparison not satisfied"
    /// rather than an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns the number of signals in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this snapshot carries no signals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<HashMap<String, f64>> for Snapshot {
    fn from(values: HashMap<String, f64>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Snapshot {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
