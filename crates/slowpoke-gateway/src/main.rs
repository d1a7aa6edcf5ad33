//! slowpoke gateway
//!
//! Serves the demo handler with slow-call instrumentation attached:
//! - Config from `SLOWPOKE_CONFIG` (default `slowpoke.yaml`)
//! - Logging via `RUST_LOG`; slow records use target `slowpoke::slow`

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use slowpoke_core::error::{Result, SlowpokeError};
use slowpoke_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("SLOWPOKE_CONFIG").unwrap_or_else(|_| "slowpoke.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg.server.listen.parse().map_err(|e| {
        SlowpokeError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
    })?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "slowpoke-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SlowpokeError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| SlowpokeError::Internal(format!("server failed: {e}")))
}
