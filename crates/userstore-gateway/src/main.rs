//! userstore gateway
//!
//! - Config: `$USERSTORE_CONFIG` or `userstore.yaml` (strict parsing + validate)
//! - Logging: `RUST_LOG`, else `log.filter` from config
//! - HTTP: `/api/users`, `/healthz`, `/readyz`, `/metrics`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use userstore_gateway::{config, server};

#[tokio::main]
async fn main() -> ExitCode {
    let loaded = config::load_from_env();

    let fallback = loaded
        .as_ref()
        .map(|c| c.log.filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt().with_env_filter(filter).init();

    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server::run(cfg).await {
        tracing::error!(error = %e, "userstore-gateway exited with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
