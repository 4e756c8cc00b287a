//! Presentational footer fragment served at `/footer`.

use leptos::prelude::*;

use crate::routes::Page;

#[component]
pub fn FooterPage() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__brand">"Lurnity"</p>
            <nav class="site-footer__links">
                <a href=Page::Login.path()>"Log in"</a>
                <a href=Page::Signup.path()>"Sign up"</a>
            </nav>
            <p class="site-footer__copyright">"© Lurnity. All rights reserved."</p>
        </footer>
    }
}
