//! Login page: email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use super::deliver;
use crate::components::auth_card::AuthCard;
use crate::components::form_field::FormField;
use crate::form::{FieldSpec, FormSchema, FormState, use_form};
use crate::payload::{LoginPayload, field};
use crate::routes::{Page, RESET_PASSWORD_PATH};

pub const EMAIL_REQUIRED: &str = "Please enter an email";
pub const PASSWORD_REQUIRED: &str = "Please enter a password";

pub fn login_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new(field::EMAIL).required(EMAIL_REQUIRED),
        FieldSpec::new(field::PASSWORD).required(PASSWORD_REQUIRED),
    ])
}

/// Submit continuation of the login form: build the payload and deliver it.
pub fn accept_login(on_valid: Option<Callback<LoginPayload>>) -> impl Fn(FormState) + Clone + 'static {
    move |values: FormState| deliver("Login", on_valid, LoginPayload::from_state(&values))
}

/// Login form. Without `on_valid`, accepted submissions are trace-logged.
#[component]
pub fn LoginPage(#[prop(optional, into)] on_valid: Option<Callback<LoginPayload>>) -> impl IntoView {
    let form = use_form(login_schema());
    let email = form.register(field::EMAIL);
    let password = form.register(field::PASSWORD);

    let on_submit = form.on_submit(accept_login(on_valid));

    view! {
        <AuthCard
            title="Welcome Back"
            subtitle="Sign in to continue your learning journey."
            prompt="Don't have an account?"
            link_label="Sign up"
            link_href=Page::Signup.path()
        >
            <form class="auth-form" on:submit=on_submit>
                <FormField
                    binding=email
                    label="Email"
                    input_type="email"
                    placeholder="e.g., student@email.com"
                />
                <FormField binding=password label="Password" input_type="password" placeholder="••••••••"/>
                <div class="auth-form__aside">
                    <a class="auth-page__link" href=RESET_PASSWORD_PATH>"Forgot your password?"</a>
                </div>
                <button class="auth-form__submit" type="submit">"Login"</button>
            </form>
        </AuthCard>
    }
}
