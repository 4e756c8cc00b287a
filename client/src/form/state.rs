//! Current input values of a single form.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::BTreeMap;

/// Field name to current input value.
///
/// Owned by one mounted page and dropped with it. Fields never typed into
/// read as the empty string, the same as an untouched `<input>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from `(name, value)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = Self::new();
        for (name, value) in pairs {
            state.set(name, value);
        }
        state
    }

    /// Value of `name`, or `""` when the field has not been set.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
