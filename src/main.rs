#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "beautybook host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;

    tracing::info!(
        api_base_url = %config.client.api_base_url,
        provider_step = config.client.provider_step,
        default_provider_id = config.client.default_provider_id,
        "client config loaded"
    );

    let app = routes::app(leptos_options, config.client);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    let port = config.port;
    tracing::info!(%port, "beautybook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
