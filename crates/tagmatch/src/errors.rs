//! Error types for pattern construction and dispatch.
//!
//! `MatchErrorKind` carries the structured category; `MatchError` wraps it
//! with the rendered message and optional notes. Factory functions
//! (e.g. `non_exhaustive_match()`) are the public way to build errors and
//! keep `kind` and `message` in sync.
//!
//! Errors raised by clause handlers are never wrapped in a `MatchError`;
//! they travel back to the caller untouched.

use std::fmt;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchErrorKind {
    // Construction
    #[error("tuple value needs at least 2 components, got {got}")]
    TupleTooShort { got: usize },

    #[error("tuple pattern needs at least 1 sub-pattern")]
    EmptyTuplePattern,

    #[error("record pattern declares field `{field}` more than once")]
    DuplicateRecordField { field: String },

    #[error("cons pattern of arity {arity} cannot name {slots} slots")]
    ConsSlotCount { arity: usize, slots: usize },

    // Dispatch
    #[error("non-exhaustive match: none of {clauses} clauses matched {subject}")]
    NonExhaustiveMatch { subject: String, clauses: usize },

    #[error("{}", arity_message(.expected, .got))]
    HandlerArityMismatch { expected: usize, got: usize },
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "called from the derived Display with field references"
)]
fn arity_message(expected: &usize, got: &usize) -> String {
    let word = if *expected == 1 { "binding" } else { "bindings" };
    format!("handler expects {expected} {word}, got {got}")
}

/// Error raised by the library.
#[derive(Clone, Debug)]
pub struct MatchError {
    /// Structured error category.
    pub kind: MatchErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
    /// Secondary hints, rendered after the message.
    pub notes: Vec<String>,
}

impl MatchError {
    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Whether this error was raised while building a pattern or value,
    /// before any matching took place.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self.kind,
            MatchErrorKind::TupleTooShort { .. }
                | MatchErrorKind::EmptyTuplePattern
                | MatchErrorKind::DuplicateRecordField { .. }
                | MatchErrorKind::ConsSlotCount { .. }
        )
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

// Factory functions

/// `make_tuple` received fewer than two components.
#[cold]
pub fn tuple_too_short(got: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::TupleTooShort { got })
}

/// `Pattern::tuple` received no sub-patterns.
#[cold]
pub fn empty_tuple_pattern() -> MatchError {
    MatchError::from_kind(MatchErrorKind::EmptyTuplePattern)
}

/// `Pattern::record` received the same field twice.
#[cold]
pub fn duplicate_record_field(field: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::DuplicateRecordField {
        field: field.to_string(),
    })
}

/// A named cons pattern's slot list disagrees with its arity.
#[cold]
pub fn cons_slot_count(arity: usize, slots: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::ConsSlotCount { arity, slots })
}

/// No clause matched the subject.
#[cold]
pub fn non_exhaustive_match(subject: &dyn fmt::Display, clauses: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::NonExhaustiveMatch {
        subject: subject.to_string(),
        clauses,
    })
    .with_note("add a trailing wildcard clause to make the match total")
}

/// A positional handler takes a different number of arguments than the
/// clause binds.
#[cold]
pub fn handler_arity_mismatch(expected: usize, got: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::HandlerArityMismatch { expected, got })
}
