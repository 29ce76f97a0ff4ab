//! Errors raised while turning raw manifest entries into descriptors.

use std::fmt;

use thiserror::Error;

use crate::descriptor::ExampleKind;

/// Which flag column of an entry failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    Run,
    Valgrind,
}

impl FlagField {
    /// Zero-based column of this flag inside a raw entry tuple.
    pub fn column(self) -> usize {
        match self {
            FlagField::Run => 1,
            FlagField::Valgrind => 2,
        }
    }
}

impl fmt::Display for FlagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagField::Run => write!(f, "do_run"),
            FlagField::Valgrind => write!(f, "do_valgrind_run"),
        }
    }
}

/// A single malformed manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("{kind} entry has {found} field(s), expected {expected}")]
    Arity {
        kind: ExampleKind,
        expected: usize,
        found: usize,
    },

    #[error("{field} must be \"True\" or \"False\", found {value:?}")]
    InvalidFlag { field: FlagField, value: String },

    #[error("{kind} entry has an empty example name")]
    EmptyName { kind: ExampleKind },
}

impl EntryError {
    /// Zero-based column of the offending field, when the error is tied to one.
    pub fn column(&self) -> Option<usize> {
        match self {
            EntryError::InvalidFlag { field, .. } => Some(field.column()),
            EntryError::EmptyName { .. } => Some(0),
            EntryError::Arity { .. } => None,
        }
    }

    /// Attach the position of the entry inside its list.
    pub fn at(self, index: usize) -> LocatedEntryError {
        LocatedEntryError { index, error: self }
    }
}

/// An [`EntryError`] together with the index of the entry inside its list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry {index}: {error}")]
pub struct LocatedEntryError {
    pub index: usize,
    #[source]
    pub error: EntryError,
}
