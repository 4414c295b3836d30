//! Values extracted by a successful match.
//!
//! Bindings are positional: their order is the depth-first, left-to-right
//! order of the pattern tree. Each binding also remembers the variable label
//! or cons slot name it was bound under, so handlers taking the whole
//! [`Bindings`] can look values up by name.

use smallvec::SmallVec;

use crate::name::Name;
use crate::value::Value;

/// One extracted value.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    /// Label of the pattern slot that produced the value. `None` for
    /// anonymous variables and slots and for the `_` placeholder.
    pub label: Option<Name>,
    pub value: Value,
}

/// Ordered bindings of one match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings(SmallVec<[Binding; 4]>);

impl Bindings {
    pub fn new() -> Self {
        Bindings(SmallVec::new())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Bindings(SmallVec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, label: Option<&Name>, value: Value) {
        let label = label.filter(|name| !name.is_placeholder()).cloned();
        self.0.push(Binding { label, value });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at position `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index).map(|binding| &binding.value)
    }

    /// First value bound under `label`.
    pub fn named(&self, label: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|binding| binding.label.as_deref() == Some(label))
            .map(|binding| &binding.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.0.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|binding| &binding.value)
    }

    /// Drop labels, keeping the positional values.
    pub fn into_values(self) -> Vec<Value> {
        self.0.into_iter().map(|binding| binding.value).collect()
    }
}

impl IntoIterator for Bindings {
    type Item = Binding;
    type IntoIter = smallvec::IntoIter<[Binding; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
