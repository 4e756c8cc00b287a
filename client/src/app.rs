//! Root application component with routing.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{footer::FooterPage, login::LoginPage, signup::SignupPage};
use crate::routes::Page;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// View mounted for a routed page.
pub fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Footer => view! { <FooterPage/> }.into_any(),
    }
}

/// Root application component.
///
/// Each page owns its form state, so nothing is provided through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Lurnity"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(Page::Login.segment()) view=|| page_view(Page::Login)/>
                <Route path=StaticSegment(Page::Signup.segment()) view=|| page_view(Page::Signup)/>
                <Route path=StaticSegment(Page::Footer.segment()) view=|| page_view(Page::Footer)/>
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;
