//! Configuration file handling
//!
//! A button is configured by a `shutter.toml` with the fields of
//! [`ShutterConfig`]. Missing fields take their defaults.

use anyhow::{Context, Result};
use shutter_core::ShutterConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File looked up in the current directory when no path is given
pub const CONFIG_FILE: &str = "shutter.toml";

/// Load `path`, or `shutter.toml` if present, or the defaults
pub fn load(path: Option<&Path>) -> Result<ShutterConfig> {
    match path {
        Some(path) => load_file(path),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                load_file(default_path)
            } else {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(ShutterConfig::default())
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<ShutterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse and validate a configuration
pub fn parse(content: &str) -> Result<ShutterConfig> {
    let config: ShutterConfig = toml::from_str(content)?;
    Ok(config.validated()?)
}

pub fn to_toml(config: &ShutterConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
