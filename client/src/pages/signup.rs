//! Signup page: name, email, password and its confirmation.
//!
//! The confirmation rule compares against whatever `password` holds when the
//! rule runs; it never captures the password at the time it was typed.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use super::deliver;
use crate::components::auth_card::AuthCard;
use crate::components::form_field::FormField;
use crate::form::{FieldSpec, FormSchema, FormState, use_form};
use crate::payload::{SignupPayload, field};
use crate::routes::Page;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const PASSWORD_REQUIRED: &str = "Please choose a password";
pub const CONFIRM_REQUIRED: &str = "Confirm your password";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

pub fn signup_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new(field::FIRST_NAME).required(FIRST_NAME_REQUIRED),
        FieldSpec::new(field::LAST_NAME).required(LAST_NAME_REQUIRED),
        FieldSpec::new(field::EMAIL).required(EMAIL_REQUIRED),
        FieldSpec::new(field::PASSWORD).required(PASSWORD_REQUIRED),
        FieldSpec::new(field::CONFIRM_PASSWORD)
            .required(CONFIRM_REQUIRED)
            .matches(field::PASSWORD, PASSWORD_MISMATCH),
    ])
}

/// Submit continuation of the signup form: build the payload and deliver it.
pub fn accept_signup(on_valid: Option<Callback<SignupPayload>>) -> impl Fn(FormState) + Clone + 'static {
    move |values: FormState| deliver("Signup", on_valid, SignupPayload::from_state(&values))
}

/// Signup form. Without `on_valid`, accepted submissions are trace-logged.
#[component]
pub fn SignupPage(#[prop(optional, into)] on_valid: Option<Callback<SignupPayload>>) -> impl IntoView {
    let form = use_form(signup_schema());
    let first_name = form.register(field::FIRST_NAME);
    let last_name = form.register(field::LAST_NAME);
    let email = form.register(field::EMAIL);
    let password = form.register(field::PASSWORD);
    let confirm_password = form.register(field::CONFIRM_PASSWORD);

    let on_submit = form.on_submit(accept_signup(on_valid));

    view! {
        <AuthCard
            title="Create your account"
            subtitle="Start your learning journey with us."
            prompt="Already have an account?"
            link_label="Log in"
            link_href=Page::Login.path()
        >
            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__row">
                    <FormField binding=first_name label="First name" placeholder="Enter your first name"/>
                    <FormField binding=last_name label="Last name" placeholder="Enter your last name"/>
                </div>
                <FormField binding=email label="Email address" input_type="email" placeholder="Enter your email"/>
                <FormField
                    binding=password
                    label="Password"
                    input_type="password"
                    placeholder="Enter your password"
                />
                <FormField
                    binding=confirm_password
                    label="Confirm password"
                    input_type="password"
                    placeholder="Confirm your password"
                />
                <button class="auth-form__submit" type="submit">"Sign Up"</button>
            </form>
        </AuthCard>
    }
}
