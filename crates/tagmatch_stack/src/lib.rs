//! Stack growth for deeply nested matching.
//!
//! Structural matching recurses once per nesting level of the subject value,
//! so a list nested a hundred thousand levels deep would exhaust a normal
//! thread stack. Every recursive step in the matcher goes through
//! [`ensure_sufficient_stack`], which grows the stack when it runs low.
//!
//! On wasm32 the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::List(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
