//! Runtime values that patterns are matched against.
//!
//! Scalars are stored inline. Composite payloads live behind [`Heap`], whose
//! constructor is private to this module:
//!
//! ```text
//! let nums = Value::list(vec![Value::int(1), Value::int(2)]);   // OK
//! let pair = Value::make_tuple(vec![nums.clone(), Value::Bool(true)])?;
//! let bad  = Value::List(Heap::new(vec![]));                     // ERROR: Heap::new is private
//! ```
//!
//! Tuples are a separate variant from lists so the classifier can tell a
//! fixed-size tuple from an ordinary sequence without inspecting contents.

mod heap;

use std::fmt;

use rustc_hash::FxHashMap;
use tagmatch_stack::ensure_sufficient_stack;

use crate::errors::{tuple_too_short, MatchError};
use crate::name::Name;

pub use heap::Heap;

/// Field map of a record value.
pub type Fields = FxHashMap<Name, Value>;

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    // Scalars
    /// Integer number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// String.
    Str(Heap<String>),

    // Composites
    /// Ordered sequence of any length.
    List(Heap<Vec<Value>>),
    /// Fixed-size tuple of at least two components.
    Tuple(Heap<Vec<Value>>),
    /// Record keyed by field name.
    Record(Heap<Fields>),
}

// Factory methods (the only way to build composite values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    ///
    /// ```text
    /// let empty = Value::list(vec![]);
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    ///
    /// A tuple needs at least two components; use a list or the value itself
    /// for anything smaller.
    pub fn make_tuple(components: Vec<Value>) -> Result<Self, MatchError> {
        if components.len() < 2 {
            return Err(tuple_too_short(components.len()));
        }
        Ok(Value::Tuple(Heap::new(components)))
    }

    /// Create a record value from `(field, value)` pairs.
    ///
    /// A repeated field keeps its last value.
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<Name>,
        I: IntoIterator<Item = (N, Value)>,
    {
        let fields: Fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Value::Record(Heap::new(fields))
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    #[allow(
        clippy::cast_precision_loss,
        reason = "numbers compare as a single numeric kind"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Fields> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a record field. `None` for non-records and missing fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|fields| fields.get(name))
    }

    /// Type name for logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Record(_) => "record",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                write_separated(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_separated(f, items)?;
                write!(f, ")")
            }
            Value::Record(fields) => {
                // Sorted so the rendering does not depend on hash order.
                let mut entries: Vec<_> = fields.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                write!(f, "{{")?;
                for (i, (name, value)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        })
    }
}
