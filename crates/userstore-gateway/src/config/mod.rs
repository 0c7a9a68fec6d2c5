//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{GatewayError, Result};

pub use schema::{GatewayConfig, LogSection, ServerSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "USERSTORE_CONFIG";
/// Config file used when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "userstore.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GatewayError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| GatewayError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config path from the environment and load it.
pub fn load_from_env() -> Result<GatewayConfig> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from_file(&path)
}
