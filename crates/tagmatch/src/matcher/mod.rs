//! Structural matching of one value against one pattern.
//!
//! Matching walks the pattern tree depth-first, left to right, pushing
//! bindings into a single buffer. The first failing sub-pattern aborts the
//! whole match; there is no backtracking into alternative decompositions.

use tagmatch_stack::ensure_sufficient_stack;

use crate::bindings::Bindings;
use crate::classify::{classify, Shape};
use crate::config::{ConsSingleton, MatchConfig, RecordFields};
use crate::pattern::{ConsPattern, Pattern, RecordPattern};
use crate::value::{Fields, Value};

/// Match `value` against `pattern` with the default policy.
///
/// Returns the bindings on success, `None` when the value does not have the
/// pattern's shape.
pub fn match_one(value: &Value, pattern: &Pattern) -> Option<Bindings> {
    match_one_with(value, pattern, &MatchConfig::default())
}

/// Match `value` against `pattern` under `config`.
#[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern, value = %value))]
pub fn match_one_with(value: &Value, pattern: &Pattern, config: &MatchConfig) -> Option<Bindings> {
    let mut bindings = Bindings::with_capacity(pattern.binding_count());
    if bind(value, pattern, config, &mut bindings) {
        tracing::trace!(bindings = bindings.len(), "matched");
        Some(bindings)
    } else {
        tracing::trace!(kind = %classify(value).kind(), "no match");
        None
    }
}

/// Match one (sub-)pattern, appending its bindings to `out`.
///
/// On `false` the contents of `out` are unspecified; the caller discards
/// them.
fn bind(value: &Value, pattern: &Pattern, config: &MatchConfig, out: &mut Bindings) -> bool {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Wildcard => true,

        Pattern::Variable(label) => {
            out.push(label.as_ref(), value.clone());
            true
        }

        Pattern::Const(literal) => {
            matches!(classify(value), Shape::Scalar(scalar) if literal.matches(scalar))
        }

        Pattern::Cons(cons) => match classify(value) {
            Shape::Sequence(items) => bind_cons(value, items, cons, config, out),
            _ => false,
        },

        Pattern::Tuple(subpatterns) => match classify(value) {
            Shape::Tuple(components) if components.len() == subpatterns.len() => components
                .iter()
                .zip(subpatterns)
                .all(|(component, sub)| bind(component, sub, config, out)),
            _ => false,
        },

        Pattern::Record(record) => match classify(value) {
            Shape::Record(fields) => bind_record(fields, record, config, out),
            _ => false,
        },
    })
}

fn bind_cons(
    value: &Value,
    items: &[Value],
    cons: &ConsPattern,
    config: &MatchConfig,
    out: &mut Bindings,
) -> bool {
    match cons.arity() {
        0 => items.is_empty(),

        1 => match (config.cons_singleton, items) {
            (ConsSingleton::Exact, [only]) => {
                out.push(cons.slot(0), only.clone());
                true
            }
            (ConsSingleton::Exact, _) => false,
            // The whole sequence is the tail; share it instead of copying.
            (ConsSingleton::Tail, _) => {
                out.push(cons.slot(0), value.clone());
                true
            }
        },

        _ => {
            let head_len = cons.head_len();
            if items.len() < head_len {
                return false;
            }
            let (head, tail) = items.split_at(head_len);
            for (i, item) in head.iter().enumerate() {
                out.push(cons.slot(i), item.clone());
            }
            out.push(cons.slot(head_len), Value::list(tail.to_vec()));
            true
        }
    }
}

fn bind_record(
    fields: &Fields,
    record: &RecordPattern,
    config: &MatchConfig,
    out: &mut Bindings,
) -> bool {
    if config.record_fields == RecordFields::Exact && fields.len() != record.len() {
        return false;
    }
    record.fields().iter().all(|(name, sub)| {
        fields
            .get(name.as_str())
            .is_some_and(|field| bind(field, sub, config, out))
    })
}
