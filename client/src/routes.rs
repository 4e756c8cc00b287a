//! Static route table.
//!
//! Three fixed paths, no parameters and no guards. `app::App` builds its
//! Leptos `<Routes>` from this table, so the two cannot drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Target of the "Forgot your password?" link. Not served by this client.
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Routed page identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    Footer,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Login, Page::Signup, Page::Footer];

    /// Absolute URL path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
            Self::Footer => "/footer",
        }
    }

    /// Path segment as written in the router (`""` for the root).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Resolve a URL path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}
