//! Property-based tests for the matcher and dispatcher.
//!
//! Values are generated recursively (scalars, lists, tuples and records up
//! to a few levels deep) and checked against the universal matching laws.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tagmatch::{match_on, match_one, Bindings, Clause, Literal, Pattern, Value, WILDCARD};

// -- Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::int),
        (-1.0e6f64..1.0e6).prop_map(Value::float),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(|s| Value::string(s)),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|items| Value::make_tuple(items).expect("at least two components")),
            prop::collection::vec(("[a-c]", inner), 0..3).prop_map(|fields| Value::record(fields)),
        ]
    })
}

fn literal_of(value: &Value) -> Option<Literal> {
    match value {
        Value::Int(n) => Some(Literal::Int(*n)),
        Value::Float(n) => Some(Literal::Float(*n)),
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::Str(s) => Some(Literal::Str(s.to_string())),
        _ => None,
    }
}

fn values(value: &Value, pattern: &Pattern) -> Option<Vec<Value>> {
    match_one(value, pattern).map(Bindings::into_values)
}

// -- Properties --

proptest! {
    #[test]
    fn wildcard_matches_anything(value in value_strategy()) {
        prop_assert_eq!(values(&value, &WILDCARD), Some(vec![]));
    }

    #[test]
    fn variable_binds_the_value(value in value_strategy()) {
        prop_assert_eq!(values(&value, &Pattern::variable()), Some(vec![value.clone()]));
    }

    #[test]
    fn scalar_matches_its_own_literal(value in scalar_strategy()) {
        let literal = literal_of(&value).expect("scalar");
        prop_assert_eq!(values(&value, &Pattern::Const(literal)), Some(vec![]));
    }

    #[test]
    fn distinct_ints_do_not_match(
        (a, b) in (any::<i64>(), any::<i64>()).prop_filter("distinct", |(a, b)| a != b)
    ) {
        prop_assert_eq!(values(&Value::int(a), &Pattern::constant(b)), None);
    }

    #[test]
    fn cons_splits_heads_and_tail(
        (items, arity) in prop::collection::vec(any::<i64>(), 1..8)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 2..=len + 1)
            })
    ) {
        let value = Value::list(items.iter().copied().map(Value::int).collect());
        let bound = values(&value, &Pattern::cons_arity(arity)).expect("long enough");
        let head_len = arity - 1;

        prop_assert_eq!(bound.len(), arity);
        for (i, item) in items[..head_len].iter().enumerate() {
            prop_assert_eq!(&bound[i], &Value::int(*item));
        }
        let tail = Value::list(items[head_len..].iter().copied().map(Value::int).collect());
        prop_assert_eq!(&bound[head_len], &tail);
    }

    #[test]
    fn cons_rejects_short_sequences(
        (items, arity) in prop::collection::vec(any::<i64>(), 0..6)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), len + 2..len + 5)
            })
    ) {
        let value = Value::list(items.into_iter().map(Value::int).collect());
        prop_assert_eq!(values(&value, &Pattern::cons_arity(arity)), None);
    }

    #[test]
    fn first_of_equal_clauses_wins(value in value_strategy(), count in 1usize..6) {
        let clauses: Vec<Clause<'_, usize>> = (0..count)
            .map(|i| Clause::new(WILDCARD, move || i))
            .collect();
        prop_assert_eq!(match_on(&value).with(clauses).ok(), Some(0));
    }
}
