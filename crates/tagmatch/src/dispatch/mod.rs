//! Ordered clause dispatch.
//!
//! ```text
//! let total = match_on(&value).with([
//!     Clause::new(Pattern::cons_arity(0), || 0),
//!     Clause::new(Pattern::cons(["h", "t"]), |h: Value, _t: Value| h.as_int().unwrap_or(0)),
//! ])?;
//! ```
//!
//! Clauses are tried strictly in order and the first one whose pattern
//! matches wins; later clauses are never consulted, even if they would also
//! match. When nothing matches the dispatch fails with a non-exhaustive match
//! error. Callers wanting totality end the list with a wildcard clause.

mod handler;

use crate::bindings::Bindings;
use crate::config::MatchConfig;
use crate::errors::{handler_arity_mismatch, non_exhaustive_match, MatchError};
use crate::matcher::match_one_with;
use crate::pattern::Pattern;
use crate::value::Value;

pub use handler::Handler;

type BoxedHandler<'h, R> = Box<dyn FnOnce(Bindings) -> Result<R, MatchError> + 'h>;

/// A pattern and the handler run when it is the first to match.
pub struct Clause<'h, R> {
    pattern: Pattern,
    arity: Option<usize>,
    handler: BoxedHandler<'h, R>,
}

impl<'h, R> Clause<'h, R> {
    /// Pair a pattern with a handler.
    ///
    /// Positional handlers are closures taking one `Value` per binding the
    /// pattern produces. A closure taking `Bindings` receives them whole.
    pub fn new<Args, H>(pattern: Pattern, handler: H) -> Self
    where
        H: Handler<Args, R> + 'h,
    {
        Clause {
            pattern,
            arity: H::ARITY,
            handler: Box::new(move |bindings: Bindings| handler.call(bindings)),
        }
    }

    /// Catch-all clause.
    pub fn wildcard<H>(handler: H) -> Self
    where
        H: Handler<(), R> + 'h,
    {
        Clause::new(Pattern::Wildcard, handler)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Handler arity against the pattern's binding count.
    fn check_arity(&self, index: usize) -> Result<(), MatchError> {
        let Some(expected) = self.arity else {
            return Ok(());
        };
        let got = self.pattern.binding_count();
        if expected == got {
            Ok(())
        } else {
            Err(handler_arity_mismatch(expected, got)
                .with_note(format!("in clause {index} with pattern {}", self.pattern)))
        }
    }
}

impl<R> std::fmt::Debug for Clause<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause")
            .field("pattern", &self.pattern)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A value waiting for its clauses.
#[derive(Clone, Copy, Debug)]
pub struct Subject<'v> {
    value: &'v Value,
    config: MatchConfig,
}

/// Start a dispatch on `value`.
pub fn match_on(value: &Value) -> Subject<'_> {
    Subject {
        value,
        config: MatchConfig::default(),
    }
}

impl Subject<'_> {
    /// Use a non-default matching policy.
    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the first matching clause and return its handler's result.
    ///
    /// Every positional handler's arity is checked against its pattern before
    /// any clause is tried.
    #[tracing::instrument(level = "debug", skip_all, fields(subject = %self.value))]
    pub fn with<'h, R, I>(self, clauses: I) -> Result<R, MatchError>
    where
        I: IntoIterator<Item = Clause<'h, R>>,
    {
        let clauses: Vec<Clause<'h, R>> = clauses.into_iter().collect();
        for (index, clause) in clauses.iter().enumerate() {
            clause.check_arity(index)?;
        }

        let total = clauses.len();
        for (index, clause) in clauses.into_iter().enumerate() {
            if let Some(bindings) = match_one_with(self.value, &clause.pattern, &self.config) {
                tracing::debug!(clause = index, pattern = %clause.pattern, "clause selected");
                return (clause.handler)(bindings);
            }
            tracing::trace!(clause = index, pattern = %clause.pattern, "clause rejected");
        }

        tracing::debug!(clauses = total, "no clause matched");
        Err(non_exhaustive_match(self.value, total))
    }

    /// Like [`with`](Self::with) for fallible handlers.
    ///
    /// Handler errors come back unchanged; dispatch errors are converted
    /// into the handler error type.
    pub fn try_with<'h, T, E, I>(self, clauses: I) -> Result<T, E>
    where
        E: From<MatchError>,
        I: IntoIterator<Item = Clause<'h, Result<T, E>>>,
    {
        self.with(clauses)?
    }
}

#[cfg(test)]
mod tests;
