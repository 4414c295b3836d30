//! Tagmatch - runtime structural pattern matching over dynamic values.
//!
//! This crate provides:
//! - Runtime values (`Value`) with distinct list, tuple and record variants
//! - Pattern descriptors (`Pattern`): literal, variable, wildcard, cons,
//!   tuple and record
//! - The value classifier (`classify`) and the structural matcher
//!   (`match_one`)
//! - Ordered first-match-wins dispatch (`match_on(..).with(..)`)
//!
//! # Example
//!
//! ```text
//! fn non_decreasing(list: &Value) -> Result<bool, MatchError> {
//!     match_on(list).try_with([
//!         Clause::new(Pattern::cons_arity(0), || Ok(true)),
//!         Clause::new(Pattern::cons(["_"]), |_: Value| Ok(true)),
//!         Clause::new(Pattern::cons(["h", "n", "t"]), |h: Value, n: Value, t: Value| {
//!             ...
//!         }),
//!     ])
//! }
//! ```
//!
//! # Logging
//!
//! Matching and dispatch emit `tracing` events at `debug` and `trace` level.
//! Binaries and tests can call [`init_tracing`] to print them; it reads the
//! filter from `RUST_LOG` (e.g. `RUST_LOG=tagmatch=trace`).

mod bindings;
mod classify;
mod config;
mod dispatch;
mod errors;
mod matcher;
mod name;
mod pattern;
mod value;

use std::sync::Once;

pub use bindings::{Binding, Bindings};
pub use classify::{classify, Shape, ValueKind};
pub use config::{ConsSingleton, MatchConfig, RecordFields};
pub use dispatch::{match_on, Clause, Handler, Subject};
pub use errors::{MatchError, MatchErrorKind};
pub use matcher::{match_one, match_one_with};
pub use name::Name;
pub use pattern::{ConsPattern, Literal, Pattern, RecordPattern, WILDCARD};
pub use value::{Fields, Heap, Value};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical `tracing` subscriber for this crate's events.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tree)
                .try_init();
        }
    });
}
