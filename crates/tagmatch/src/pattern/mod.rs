//! Pattern descriptors.
//!
//! A [`Pattern`] describes the expected shape of a [`Value`]. Patterns are
//! plain immutable data; building one never matches anything. Factory methods
//! validate argument shape only:
//!
//! ```text
//! Pattern::constant("hello")                       // literal
//! Pattern::variable()                              // binds the whole value
//! Pattern::Wildcard                                // binds nothing
//! Pattern::cons(["h", "t"])                        // head + tail of a list
//! Pattern::tuple(vec![Pattern::variable(), WILDCARD])?
//! Pattern::record([("a", Pattern::constant(1))])?
//! ```

use std::fmt;

use rustc_hash::FxHashSet;
use tagmatch_stack::ensure_sufficient_stack;

use crate::errors::{cons_slot_count, duplicate_record_field, empty_tuple_pattern, MatchError};
use crate::name::Name;
use crate::value::Value;

/// Shared wildcard pattern.
pub const WILDCARD: Pattern = Pattern::Wildcard;

/// Literal payload of a constant pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Literal {
    /// Whether `value` is a scalar equal to this literal.
    ///
    /// Integers and floats are both numbers and compare exactly with each
    /// other: an integer equals a float only when the float is integral and
    /// holds that same integer. NaN equals nothing.
    #[allow(clippy::float_cmp, reason = "literal patterns test exact equality")]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Int(a), Value::Int(b)) => a == b,
            (Literal::Float(a), Value::Float(b)) => a == b,
            (Literal::Int(i), Value::Float(n)) | (Literal::Float(n), Value::Int(i)) => {
                int_equals_float(*i, *n)
            }
            (Literal::Bool(a), Value::Bool(b)) => a == b,
            (Literal::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

/// 2^63, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[allow(
    clippy::cast_possible_truncation,
    reason = "the float is integral and within i64 range"
)]
fn int_equals_float(i: i64, n: f64) -> bool {
    n.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&n) && n as i64 == i
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Int(i64::from(n))
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Sequence destructuring pattern.
///
/// `arity` is the number of slots: `arity - 1` head elements plus one tail
/// when `arity >= 2`, a single element when `arity == 1`, the empty sequence
/// when `arity == 0`. Slot names are labels only; bindings are positional.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsPattern {
    arity: usize,
    slots: Vec<Name>,
}

impl ConsPattern {
    /// Anonymous cons of the given arity.
    pub fn with_arity(arity: usize) -> Self {
        ConsPattern {
            arity,
            slots: Vec::new(),
        }
    }

    /// Cons with one name per slot.
    pub fn named<I>(arity: usize, slots: I) -> Result<Self, MatchError>
    where
        I: IntoIterator,
        I::Item: Into<Name>,
    {
        let slots: Vec<Name> = slots.into_iter().map(Into::into).collect();
        if slots.len() != arity {
            return Err(cons_slot_count(arity, slots.len()));
        }
        Ok(ConsPattern { arity, slots })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Slot names; empty for an anonymous cons.
    pub fn slots(&self) -> &[Name] {
        &self.slots
    }

    /// Label of the slot at `index`, if the cons is named.
    pub fn slot(&self, index: usize) -> Option<&Name> {
        self.slots.get(index)
    }

    /// Number of head elements bound individually.
    pub fn head_len(&self) -> usize {
        self.arity.saturating_sub(1)
    }
}

/// Record destructuring pattern: unique field names in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordPattern {
    fields: Vec<(Name, Pattern)>,
}

impl RecordPattern {
    pub fn fields(&self) -> &[(Name, Pattern)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Scalar equal to the literal. Binds nothing.
    Const(Literal),
    /// Anything. Binds the whole value; the label is informational.
    Variable(Option<Name>),
    /// Anything. Binds nothing.
    Wildcard,
    /// Sequence split into head elements and a tail.
    Cons(ConsPattern),
    /// Tuple with one sub-pattern per component.
    Tuple(Vec<Pattern>),
    /// Record containing the declared fields.
    Record(RecordPattern),
}

impl Pattern {
    pub fn constant(literal: impl Into<Literal>) -> Self {
        Pattern::Const(literal.into())
    }

    pub fn variable() -> Self {
        Pattern::Variable(None)
    }

    /// Variable carrying a display label.
    pub fn named(label: impl Into<Name>) -> Self {
        Pattern::Variable(Some(label.into()))
    }

    /// Cons with one slot per name; arity is the number of names.
    pub fn cons<I>(slots: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Name>,
    {
        let slots: Vec<Name> = slots.into_iter().map(Into::into).collect();
        Pattern::Cons(ConsPattern {
            arity: slots.len(),
            slots,
        })
    }

    /// Anonymous cons of arity `arity`. `cons_arity(0)` matches `[]`.
    pub fn cons_arity(arity: usize) -> Self {
        Pattern::Cons(ConsPattern::with_arity(arity))
    }

    /// Tuple pattern; at least one sub-pattern.
    pub fn tuple(subpatterns: Vec<Pattern>) -> Result<Self, MatchError> {
        if subpatterns.is_empty() {
            return Err(empty_tuple_pattern());
        }
        Ok(Pattern::Tuple(subpatterns))
    }

    /// Record pattern. Field order fixes binding order; names must be unique.
    pub fn record<N, I>(fields: I) -> Result<Self, MatchError>
    where
        N: Into<Name>,
        I: IntoIterator<Item = (N, Pattern)>,
    {
        let mut seen = FxHashSet::default();
        let mut declared = Vec::new();
        for (name, pattern) in fields {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(duplicate_record_field(&name));
            }
            declared.push((name, pattern));
        }
        Ok(Pattern::Record(RecordPattern { fields: declared }))
    }

    /// Short tag name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Const(_) => "const",
            Pattern::Variable(_) => "variable",
            Pattern::Wildcard => "wildcard",
            Pattern::Cons(_) => "cons",
            Pattern::Tuple(_) => "tuple",
            Pattern::Record(_) => "record",
        }
    }

    /// Number of bindings every successful match of this pattern produces.
    pub fn binding_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Pattern::Const(_) | Pattern::Wildcard => 0,
            Pattern::Variable(_) => 1,
            // A singleton cons binds one value under either policy.
            Pattern::Cons(cons) => cons.arity(),
            Pattern::Tuple(subs) => subs.iter().map(Pattern::binding_count).sum(),
            Pattern::Record(record) => record
                .fields()
                .iter()
                .map(|(_, pattern)| pattern.binding_count())
                .sum(),
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Pattern::Const(lit) => write!(f, "{lit}"),
            Pattern::Variable(Some(label)) => write!(f, "{label}"),
            Pattern::Variable(None) => write!(f, "<var>"),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Cons(cons) => {
                if cons.arity() == 0 {
                    return write!(f, "[]");
                }
                write!(f, "[")?;
                for i in 0..cons.arity() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if i + 1 == cons.arity() && cons.arity() > 1 {
                        write!(f, "..")?;
                    }
                    match cons.slot(i) {
                        Some(name) => write!(f, "{name}")?,
                        None => write!(f, "_")?,
                    }
                }
                write!(f, "]")
            }
            Pattern::Tuple(subs) => {
                write!(f, "(")?;
                for (i, sub) in subs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{sub}")?;
                }
                write!(f, ")")
            }
            Pattern::Record(record) => {
                write!(f, "{{")?;
                for (i, (name, sub)) in record.fields().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {sub}")?;
                }
                write!(f, "}}")
            }
        })
    }
}
