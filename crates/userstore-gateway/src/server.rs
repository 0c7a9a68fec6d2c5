//! Listener lifecycle: bind, serve, drain on signal.

use std::time::Duration;

use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::router;

pub async fn run(cfg: GatewayConfig) -> Result<()> {
    let listen = cfg.server.listen_addr()?;
    let grace = Duration::from_millis(cfg.server.shutdown_grace_ms);

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| GatewayError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "userstore-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(drain_on_signal(state, grace))
        .await
        .map_err(|e| GatewayError::Internal(format!("server failed: {e}")))?;

    tracing::info!("userstore-gateway stopped");
    Ok(())
}

/// Resolves once a shutdown signal arrived and the grace period passed.
/// Readiness reports draining for the whole grace period.
async fn drain_on_signal(state: AppState, grace: Duration) {
    shutdown_signal().await;
    state.set_draining();
    tracing::info!(grace_ms = grace.as_millis() as u64, "draining before shutdown");
    tokio::time::sleep(grace).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
