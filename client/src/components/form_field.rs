//! Labelled input with its inline validation message.

use leptos::prelude::*;

use crate::form::FieldBinding;

#[component]
pub fn FormField(
    binding: FieldBinding,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let FieldBinding { name, value, error, on_input } = binding;

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name>{label}</label>
            <input
                id=name
                name=name
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
