pub mod config;
pub mod diff;
pub mod eval;
pub mod integrate;
pub mod sample;

use std::path::Path;

use anyhow::{Context, Result};
use greenint_core::config::IntegrationConfig;
use tracing::debug;

/// Config from `path`, or the defaults when no file was given.
pub fn load_config(path: Option<&Path>) -> Result<IntegrationConfig> {
    let config = match path {
        Some(path) => IntegrationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IntegrationConfig::default(),
    };
    debug!(step = config.step, decimals = config.decimals, "Integration config");
    Ok(config)
}
