pub mod config;
pub mod routes;

mod cors;
mod json_body;

#[cfg(test)]
mod test_util;

use config::Config;
use profile_domain::{FetchProfile, LikeProfile, System, UpdateProfile};

use anyhow::Context;
use std::net::SocketAddr;

pub async fn serve<D>(config: &Config, deps: D) -> anyhow::Result<()>
where
    D: FetchProfile + UpdateProfile + LikeProfile + System + Clone + Send + Sync + 'static,
{
    let app = routes::api_router(deps)
        // Enables logging. Use `RUST_LOG=tower_http=debug`
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Profile backend running on {local_addr}");
    tracing::info!("Health check: http://{local_addr}/api/health");
    tracing::info!("Get profile: http://{local_addr}/api/profile");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running HTTP server")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutting down");
}
