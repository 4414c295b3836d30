//! Calling handlers with bindings as positional arguments.

use crate::bindings::Bindings;
use crate::errors::{handler_arity_mismatch, MatchError};
use crate::value::Value;

/// A clause body.
///
/// Implemented for closures taking up to eight `Value`s (one per binding,
/// in binding order) and for closures taking the whole [`Bindings`]. `Args`
/// is a marker that keeps the implementations apart; it is inferred from
/// the closure's signature, so closure parameters need type annotations:
///
/// ```text
/// Clause::new(Pattern::cons(["h", "t"]), |h: Value, t: Value| ...)
/// Clause::new(Pattern::cons(["h", "t"]), |b: Bindings| b.named("h").cloned())
/// ```
pub trait Handler<Args, R> {
    /// Number of positional arguments, or `None` for a `Bindings` handler.
    const ARITY: Option<usize>;

    fn call(self, bindings: Bindings) -> Result<R, MatchError>;
}

impl<F, R> Handler<Bindings, R> for F
where
    F: FnOnce(Bindings) -> R,
{
    const ARITY: Option<usize> = None;

    fn call(self, bindings: Bindings) -> Result<R, MatchError> {
        Ok(self(bindings))
    }
}

macro_rules! impl_handler {
    (@value $arg:ident) => {
        Value
    };
    ($arity:literal => $($arg:ident),*) => {
        impl<F, R> Handler<($(impl_handler!(@value $arg),)*), R> for F
        where
            F: FnOnce($(impl_handler!(@value $arg)),*) -> R,
        {
            const ARITY: Option<usize> = Some($arity);

            fn call(self, bindings: Bindings) -> Result<R, MatchError> {
                let got = bindings.len();
                let [$($arg),*]: [Value; $arity] = bindings
                    .into_values()
                    .try_into()
                    .map_err(|_| handler_arity_mismatch($arity, got))?;
                Ok(self($($arg),*))
            }
        }
    };
}

impl_handler!(0 =>);
impl_handler!(1 => v0);
impl_handler!(2 => v0, v1);
impl_handler!(3 => v0, v1, v2);
impl_handler!(4 => v0, v1, v2, v3);
impl_handler!(5 => v0, v1, v2, v3, v4);
impl_handler!(6 => v0, v1, v2, v3, v4, v5);
impl_handler!(7 => v0, v1, v2, v3, v4, v5, v6);
impl_handler!(8 => v0, v1, v2, v3, v4, v5, v6, v7);
