//! Matching policy.
//!
//! Two behaviors have more than one reasonable reading. The defaults are the
//! strict single-element cons and subset records; `MatchConfig` lets callers
//! opt into the alternatives.

/// How a cons pattern with exactly one slot treats a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConsSingleton {
    /// Match only sequences of length 1, binding that element.
    #[default]
    Exact,
    /// Match any sequence, binding the whole of it as the tail.
    Tail,
}

/// Which record values a record pattern accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordFields {
    /// The value may carry fields the pattern does not mention.
    #[default]
    Subset,
    /// The value must carry exactly the declared fields.
    Exact,
}

/// Policy knobs for the matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub cons_singleton: ConsSingleton,
    pub record_fields: RecordFields,
}

impl MatchConfig {
    pub const fn new() -> Self {
        MatchConfig {
            cons_singleton: ConsSingleton::Exact,
            record_fields: RecordFields::Subset,
        }
    }

    #[must_use]
    pub const fn cons_singleton(mut self, policy: ConsSingleton) -> Self {
        self.cons_singleton = policy;
        self
    }

    #[must_use]
    pub const fn record_fields(mut self, policy: RecordFields) -> Self {
        self.record_fields = policy;
        self
    }
}
