//! Reactive binding of a `FormSchema` to Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_form` once on mount, `register` each input, and wire
//! `on_submit` to the `<form>`. The handle is `Copy`, so it moves freely into
//! event closures; its signals are owned by the page's reactive owner and
//! are dropped when the page unmounts.
//!
//! Validation runs on submit. After the first submit attempt, typing into a
//! field re-validates that field only; other fields keep their last result
//! until they are edited or the form is submitted again.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use leptos::prelude::*;

use super::errors::FieldErrors;
use super::schema::FormSchema;
use super::state::FormState;

/// What a registered input needs to render and report edits.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub name: &'static str,
    pub value: Signal<String>,
    pub error: Signal<Option<String>>,
    pub on_input: Callback<String>,
}

/// Live form: current values, last validation result, and the schema.
#[derive(Clone, Copy)]
pub struct FormHandle {
    schema: StoredValue<FormSchema>,
    values: RwSignal<FormState>,
    errors: RwSignal<FieldErrors>,
    submitted: RwSignal<bool>,
}

/// Create a form handle owned by the current reactive owner.
pub fn use_form(schema: FormSchema) -> FormHandle {
    FormHandle {
        schema: StoredValue::new(schema),
        values: RwSignal::new(FormState::new()),
        errors: RwSignal::new(FieldErrors::new()),
        submitted: RwSignal::new(false),
    }
}

impl FormHandle {
    /// Bind an input to field `name`.
    pub fn register(self, name: &'static str) -> FieldBinding {
        let values = self.values;
        FieldBinding {
            name,
            value: Signal::derive(move || values.with(|state| state.get(name).to_owned())),
            error: self.error(name),
            on_input: Callback::new(move |value: String| self.input(name, value)),
        }
    }

    /// Record a keystroke for `name`.
    pub fn input(self, name: &'static str, value: String) {
        self.values.update(|state| state.set(name, value));
        if self.submitted.get_untracked() {
            self.revalidate(name);
        }
    }

    pub fn error(self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(name).map(str::to_owned)))
    }

    pub fn values_untracked(self) -> FormState {
        self.values.get_untracked()
    }

    pub fn errors_untracked(self) -> FieldErrors {
        self.errors.get_untracked()
    }

    /// Validate the current values and call `on_valid` when they pass.
    ///
    /// Returns whether the submission was accepted.
    pub fn submit<F>(self, on_valid: F) -> bool
    where
        F: FnOnce(FormState),
    {
        self.submitted.set(true);
        let values = self.values.get_untracked();
        let errors = self
            .schema
            .with_value(|schema| schema.submit(&values, |accepted| on_valid(accepted.clone())));
        let accepted = errors.is_empty();
        self.errors.set(errors);
        accepted
    }

    /// `on:submit` handler that keeps the browser from navigating.
    pub fn on_submit<F>(self, on_valid: F) -> impl Fn(leptos::ev::SubmitEvent) + Clone + 'static
    where
        F: Fn(FormState) + Clone + 'static,
    {
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            self.submit(&on_valid);
        }
    }

    fn revalidate(self, name: &'static str) {
        let message = self
            .values
            .with_untracked(|state| self.schema.with_value(|schema| schema.validate_field(name, state)));
        self.errors.update(|errors| match message {
            Some(message) => errors.insert(name, message),
            None => errors.remove(name),
        });
    }
}
