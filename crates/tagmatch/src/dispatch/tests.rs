use super::*;
use crate::config::ConsSingleton;
use crate::errors::MatchErrorKind;
use crate::pattern::WILDCARD;
use pretty_assertions::assert_eq;
use std::cell::Cell;

fn list(items: &[i64]) -> Value {
    Value::list(items.iter().copied().map(Value::int).collect())
}

#[test]
fn first_matching_clause_wins() {
    let subject = Value::string("Hello world");
    let result = match_on(&subject).with([
        Clause::new(Pattern::constant("hello"), || "lowercase"),
        Clause::new(WILDCARD, || "wildcard"),
        Clause::new(Pattern::constant("Hello world"), || "exact"),
    ]);
    assert_eq!(result.ok(), Some("wildcard"));
}

#[test]
fn later_clauses_are_not_run() {
    let runs = Cell::new(0);
    let subject = Value::string("Hello world");
    let result = match_on(&subject).with([
        Clause::new(Pattern::constant("Hello"), || {
            runs.set(runs.get() + 1);
            1
        }),
        Clause::new(Pattern::constant("Hello world"), || {
            runs.set(runs.get() + 10);
            2
        }),
        Clause::wildcard(|| {
            runs.set(runs.get() + 100);
            3
        }),
    ]);
    assert_eq!(result.ok(), Some(2));
    assert_eq!(runs.get(), 10);
}

#[test]
fn bindings_arrive_as_positional_arguments() {
    let subject = list(&[1, 2, 3]);
    let result = match_on(&subject).with([
        Clause::new(Pattern::cons_arity(0), |_: Bindings| String::from("empty")),
        Clause::new(Pattern::cons(["h", "t"]), |h: Value, t: Value| format!("{h} :: {t}")),
    ]);
    assert_eq!(result.ok().as_deref(), Some("1 :: [2, 3]"));
}

#[test]
fn variable_handler_receives_subject() {
    let square = |x: i64| {
        match_on(&Value::int(x)).with([Clause::new(Pattern::named("y"), |y: Value| {
            y.as_int().map(|n| n * n)
        })])
    };
    assert_eq!(square(7).ok().flatten(), Some(49));
}

#[test]
fn bindings_handler_can_use_labels() {
    let subject = list(&[4, 5]);
    let result = match_on(&subject).with([Clause::new(
        Pattern::cons(["head", "tail"]),
        |b: Bindings| b.named("head").cloned(),
    )]);
    assert_eq!(result.ok().flatten(), Some(Value::int(4)));
}

#[test]
fn no_match_is_non_exhaustive() {
    let subject = Value::int(5);
    let Err(err) = match_on(&subject).with([Clause::new(Pattern::constant(1), || ())]) else {
        panic!("5 does not match 1");
    };
    assert_eq!(
        err.kind,
        MatchErrorKind::NonExhaustiveMatch {
            subject: "5".to_string(),
            clauses: 1
        }
    );
    assert_eq!(err.notes.len(), 1);
}

#[test]
fn deeply_nested_subject_without_match_reports_error() {
    let depth = 100_000;
    let mut subject = Value::int(0);
    for _ in 0..depth {
        subject = Value::list(vec![subject]);
    }

    let Err(err) = match_on(&subject).with([Clause::new(Pattern::constant(1), || ())]) else {
        panic!("a nested list does not match 1");
    };
    let MatchErrorKind::NonExhaustiveMatch { subject: rendered, clauses } = &err.kind else {
        panic!("expected a non-exhaustive match, got {err}");
    };
    assert_eq!(*clauses, 1);
    assert_eq!(rendered.len(), 2 * depth + 1);
    assert!(rendered.starts_with("[[[") && rendered.ends_with("0]]]"));

    // Dropping would recurse once per level on the test thread's stack.
    std::mem::forget(subject);
}

#[test]
fn empty_clause_list_is_non_exhaustive() {
    let subject = Value::Bool(true);
    let clauses: Vec<Clause<'_, ()>> = Vec::new();
    let Err(err) = match_on(&subject).with(clauses) else {
        panic!("nothing to match");
    };
    assert!(matches!(
        err.kind,
        MatchErrorKind::NonExhaustiveMatch { clauses: 0, .. }
    ));
}

#[test]
fn arity_mismatch_is_reported_before_matching() {
    let runs = Cell::new(0);
    let subject = list(&[1, 2]);
    let Err(err) = match_on(&subject).with([
        Clause::wildcard(|| runs.set(runs.get() + 1)),
        Clause::new(Pattern::cons(["h", "t"]), |_h: Value| runs.set(runs.get() + 1)),
    ]) else {
        panic!("second clause binds two values");
    };
    assert_eq!(
        err.kind,
        MatchErrorKind::HandlerArityMismatch {
            expected: 1,
            got: 2
        }
    );
    assert_eq!(err.notes, ["in clause 1 with pattern [h, ..t]"]);
    assert_eq!(runs.get(), 0);
}

#[test]
fn config_changes_singleton_cons() {
    let subject = list(&[1, 2, 3]);
    let clauses = || {
        [
            Clause::new(Pattern::cons(["only"]), |v: Value| v.to_string()),
            Clause::wildcard(|| "other".to_string()),
        ]
    };

    let strict = match_on(&subject).with(clauses());
    assert_eq!(strict.ok().as_deref(), Some("other"));

    let lenient = match_on(&subject)
        .config(MatchConfig::new().cons_singleton(ConsSingleton::Tail))
        .with(clauses());
    assert_eq!(lenient.ok().as_deref(), Some("[1, 2, 3]"));
}

#[derive(Debug, PartialEq)]
enum AppError {
    Match(String),
    Negative(i64),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        AppError::Match(err.message)
    }
}

fn checked_head(subject: &Value) -> Result<i64, AppError> {
    match_on(subject).try_with([
        Clause::new(Pattern::cons(["h", "_"]), |h: Value, _: Value| {
            match h.as_int() {
                Some(n) if n < 0 => Err(AppError::Negative(n)),
                Some(n) => Ok(n),
                None => Ok(0),
            }
        }),
    ])
}

#[test]
fn try_with_passes_handler_errors_through() {
    assert_eq!(checked_head(&list(&[3, 4])), Ok(3));
    assert_eq!(checked_head(&list(&[-3])), Err(AppError::Negative(-3)));
}

#[test]
fn try_with_converts_dispatch_errors() {
    let Err(AppError::Match(message)) = checked_head(&list(&[])) else {
        panic!("empty list has no head");
    };
    assert!(message.starts_with("non-exhaustive match"));
}

#[test]
fn clause_debug_shows_pattern() {
    let clause: Clause<'_, ()> = Clause::new(Pattern::cons(["h", "t"]), |_: Value, _: Value| ());
    let rendered = format!("{clause:?}");
    assert!(rendered.starts_with("Clause { pattern: Cons"));
    assert_eq!(clause.pattern(), &Pattern::cons(["h", "t"]));
}
