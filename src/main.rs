mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in production.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "imago-site failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = SiteConfig::from_env()?;
    let app = routes::site_app(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr: addr.clone(), source })?;

    tracing::info!(
        %addr,
        base_path = %config.base_path,
        figures_dir = %config.figures_dir.display(),
        "imago-site listening"
    );
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
