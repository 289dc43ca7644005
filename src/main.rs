use std::sync::Arc;

use anyhow::Context;
use langflow_chat::{config::RelayConfig, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("langflow_chat=info,tower_http=info")),
        )
        .init();

    let config = RelayConfig::from_env();
    let addr = config.bind_addr()?;
    if !config.is_configured() {
        tracing::warn!("LANGFLOW_URL or LANGFLOW_API_KEY not set, chat requests will fail");
    }

    let state = Arc::new(AppState::new(config));
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("langflow chat running at http://{addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
