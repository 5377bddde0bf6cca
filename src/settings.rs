//! Config file discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;

use cutover_domain::CutoverConfig;

pub const CONFIG_PATH_ENV: &str = "CUTOVER_CONFIG_PATH";

/// `CUTOVER_CONFIG_PATH`, then `$HOME/.cutover/config.yaml`, then `./cutover-config.yaml`.
pub fn config_path() -> PathBuf {
    config_path_from(|key| std::env::var(key).ok())
}

pub fn config_path_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Some(home) = lookup("HOME") {
        return Path::new(&home).join(".cutover").join("config.yaml");
    }

    PathBuf::from("cutover-config.yaml")
}

/// Load the config (defaults when the file is missing) and apply environment overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<CutoverConfig> {
    let path = explicit.map(Path::to_path_buf).unwrap_or_else(config_path);
    let mut config = CutoverConfig::load_or_default(&path)?;
    config.apply_env_overrides()?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
