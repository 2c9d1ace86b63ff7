//! Standalone predict proxy.
//!
//! Keeps clients on a single origin by relaying multipart submissions to the
//! inference backend. The desktop app does not need it; run it only for
//! deployments where direct backend access is not possible.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stresscheck::config::Config;
use stresscheck::proxy::{self, ProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to read configuration")?;

    let state = ProxyState::new(config.proxy_backend_url.clone());
    let app = proxy::router(state, config.max_request_body_bytes());

    let addr = config.proxy_bind_addr();
    tracing::info!(backend = %config.proxy_backend_url, "Starting predict proxy on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
