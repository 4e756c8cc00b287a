//! Field declarations and rule evaluation.
//!
//! DESIGN
//! ======
//! A field fails on the first of: its required check, then each extra rule
//! in declaration order. Extra rules only see values that passed the
//! required check, so a blank confirmation reports "required" rather than
//! "mismatch". Rules receive the whole `FormState` at evaluation time, which
//! is how cross-field rules read the *current* value of another field.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::fmt;
use std::sync::Arc;

use super::errors::FieldErrors;
use super::state::FormState;

/// Predicate over a field value and the full form. `true` means valid.
pub type RulePredicate = Arc<dyn Fn(&str, &FormState) -> bool + Send + Sync>;

/// How the required check treats whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequiredPolicy {
    /// Only the empty string is missing; `"   "` counts as a value.
    #[default]
    KeepWhitespace,
    /// Values that are empty after trimming are missing.
    TrimWhitespace,
}

impl RequiredPolicy {
    pub fn is_missing(self, value: &str) -> bool {
        match self {
            Self::KeepWhitespace => value.is_empty(),
            Self::TrimWhitespace => value.trim().is_empty(),
        }
    }
}

/// A predicate plus the message shown when it fails.
#[derive(Clone)]
pub struct ValidationRule {
    predicate: RulePredicate,
    message: &'static str,
}

impl ValidationRule {
    pub fn new<F>(message: &'static str, predicate: F) -> Self
    where
        F: Fn(&str, &FormState) -> bool + Send + Sync + 'static,
    {
        Self { predicate: Arc::new(predicate), message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn check(&self, value: &str, values: &FormState) -> bool {
        (self.predicate)(value, values)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule").field("message", &self.message).finish_non_exhaustive()
    }
}

/// Declaration of one named form field.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    name: &'static str,
    required: Option<&'static str>,
    rules: Vec<ValidationRule>,
}

impl FieldSpec {
    pub fn new(name: &'static str) -> Self {
        Self { name, required: None, rules: Vec::new() }
    }

    /// Mark the field required, reporting `message` when it is missing.
    #[must_use]
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Attach an extra rule evaluated after the required check.
    #[must_use]
    pub fn rule<F>(mut self, message: &'static str, predicate: F) -> Self
    where
        F: Fn(&str, &FormState) -> bool + Send + Sync + 'static,
    {
        self.rules.push(ValidationRule::new(message, predicate));
        self
    }

    /// Require the value to equal field `other` as it reads at validation time.
    #[must_use]
    pub fn matches(self, other: &'static str, message: &'static str) -> Self {
        self.rule(message, move |value, values| value == values.get(other))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Message of the first failing check, if any.
    pub fn first_failure(&self, policy: RequiredPolicy, values: &FormState) -> Option<&'static str> {
        let value = values.get(self.name);
        if let Some(message) = self.required {
            if policy.is_missing(value) {
                return Some(message);
            }
        }
        self.rules.iter().find(|rule| !rule.check(value, values)).map(ValidationRule::message)
    }
}

/// The full set of field declarations for one form.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
    policy: RequiredPolicy,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields, policy: RequiredPolicy::default() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RequiredPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RequiredPolicy {
        self.policy
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldSpec::name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Evaluate every field. An empty result means the form is valid.
    pub fn validate(&self, values: &FormState) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Some(message) = field.first_failure(self.policy, values) {
                errors.insert(field.name, message.to_owned());
            }
        }
        errors
    }

    /// Evaluate a single field. Undeclared names always pass.
    pub fn validate_field(&self, name: &str, values: &FormState) -> Option<String> {
        self.field(name)
            .and_then(|field| field.first_failure(self.policy, values))
            .map(str::to_owned)
    }

    /// Validate, then hand `values` to `on_valid` only when nothing failed.
    ///
    /// Returns the errors that blocked submission, empty on success.
    pub fn submit<F>(&self, values: &FormState, on_valid: F) -> FieldErrors
    where
        F: FnOnce(&FormState),
    {
        let errors = self.validate(values);
        if errors.is_empty() {
            on_valid(values);
        }
        errors
    }
}
