//! HomeKit setup label generator: configuration and command surface.

pub mod commands;
pub mod config;
pub mod label;

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use config::defaults::{FONT, SCALE};
use config::{AppConfig, SettingsManager};

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve configuration: environment (after `.env`), then CLI overrides.
pub fn init_config(font: Option<&Path>, scale: Option<f32>) -> Result<AppConfig> {
    load_dotenv();

    let mut sm = SettingsManager::from_env();
    if let Some(font) = font {
        sm.set_setting(FONT, &font.to_string_lossy())?;
    }
    if let Some(scale) = scale {
        sm.set_setting(SCALE, &scale.to_string())?;
    }

    let config = AppConfig::load(&sm)?;
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
