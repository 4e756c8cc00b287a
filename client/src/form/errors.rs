//! Per-field validation messages.

use std::collections::BTreeMap;

/// Field name to the message of its first failing rule.
///
/// Passing fields are absent, so an empty map means the form is valid. Keys
/// are always declared field names of the schema that produced the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, name: &str, message: String) {
        self.entries.insert(name.to_owned(), message);
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }
}
