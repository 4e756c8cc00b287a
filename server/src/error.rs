//! Startup and serve failures of the host process.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// `[[workspace.metadata.leptos]]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
