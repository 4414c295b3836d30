//! Value classification.
//!
//! The matcher never inspects a value's variant directly; it asks
//! [`classify`] which strategy applies and gets back a borrowed view of the
//! data that strategy needs. Classification reads the discriminant only.

use std::fmt;

use crate::value::{Fields, Value};

/// Matching strategy for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Sequence,
    Tuple,
    Record,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Sequence => "sequence",
            ValueKind::Tuple => "tuple",
            ValueKind::Record => "record",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified value with the data its strategy inspects.
#[derive(Clone, Copy, Debug)]
pub enum Shape<'v> {
    /// Number, string or boolean; compared by equality.
    Scalar(&'v Value),
    /// List elements.
    Sequence(&'v [Value]),
    /// Tuple components.
    Tuple(&'v [Value]),
    /// Record fields.
    Record(&'v Fields),
}

impl Shape<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Shape::Scalar(_) => ValueKind::Scalar,
            Shape::Sequence(_) => ValueKind::Sequence,
            Shape::Tuple(_) => ValueKind::Tuple,
            Shape::Record(_) => ValueKind::Record,
        }
    }
}

/// Determine how `value` should be matched.
#[inline]
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Str(_) => Shape::Scalar(value),
        Value::List(items) => Shape::Sequence(items),
        Value::Tuple(items) => Shape::Tuple(items),
        Value::Record(fields) => Shape::Record(fields),
    }
}
