mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(ServerError::Bind)?;

    tracing::info!(%addr, "lurnity listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
