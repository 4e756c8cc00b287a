use super::*;
use leptos_router::location::RequestUrl;

/// Text only the given page (or the fallback) renders.
fn marker(page: Option<Page>) -> &'static str {
    match page {
        Some(Page::Login) => "Welcome Back",
        Some(Page::Signup) => "Create your account",
        Some(Page::Footer) => "site-footer",
        None => "Page not found.",
    }
}

fn render_app_at(url: &str) -> String {
    Owner::new().with(|| {
        provide_context(RequestUrl::new(url));
        view! { <App/> }.to_html()
    })
}

#[test]
fn each_page_renders_its_own_view() {
    Owner::new().with(|| {
        let login = page_view(Page::Login).to_html();
        let signup = page_view(Page::Signup).to_html();
        let footer = page_view(Page::Footer).to_html();

        assert!(login.contains("Welcome Back"));
        assert!(!login.contains("confirmPassword"));
        assert!(signup.contains("Create your account"));
        assert!(signup.contains("confirmPassword"));
        assert!(footer.contains("site-footer"));
    });
}

#[test]
fn root_url_renders_login_form() {
    let html = render_app_at("/");
    assert!(html.contains("Welcome Back"));
    assert!(!html.contains("Create your account"));
}

#[test]
fn signup_url_renders_signup_form() {
    let html = render_app_at("/signup");
    assert!(html.contains("Create your account"));
    assert!(html.contains("name=\"confirmPassword\""));
    assert!(!html.contains("Welcome Back"));
}

#[test]
fn router_agrees_with_route_table() {
    let urls = ["/", "/signup", "/signup/", "/footer", "/nope", "/login", "/reset-password"];
    for url in urls {
        let html = render_app_at(url);
        let expected = Page::from_path(url);
        assert!(
            html.contains(marker(expected)),
            "{url:?} should render {expected:?}, got: {html}"
        );
        for other in Page::ALL.into_iter().map(Some).chain([None]) {
            if other != expected {
                assert!(!html.contains(marker(other)), "{url:?} also rendered {other:?}");
            }
        }
    }
}
