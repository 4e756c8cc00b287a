//! Page chrome shared by the login and signup screens.
//!
//! Heading, the card holding the form, and the "switch to the other page"
//! prompt underneath.

use leptos::prelude::*;

#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    prompt: &'static str,
    link_label: &'static str,
    link_href: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <header class="auth-page__header">
                    <h1 class="auth-page__title">{title}</h1>
                    <p class="auth-page__subtitle">{subtitle}</p>
                </header>
                <div class="auth-card">{children()}</div>
                <p class="auth-page__prompt">
                    {prompt}
                    " "
                    <a class="auth-page__link" href=link_href>{link_label}</a>
                </p>
            </div>
        </div>
    }
}
