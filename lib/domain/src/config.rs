//! File-backed configuration shared by the API service, the CLI and the dashboard.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{TelemetryError, TelemetryResult};

pub const MIN_REFRESH_INTERVAL_SECS: u64 = 2;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 30;
pub const MIN_DASHBOARD_LOG_COUNT: usize = 10;
pub const MAX_DASHBOARD_LOG_COUNT: usize = 100;
pub const DEFAULT_MAX_LOG_COUNT: usize = 1_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoverConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub simulation: SimulationConfig,
    pub cluster: ClusterConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            timeout_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixes the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub component_log_count: usize,
    pub aggregate_log_count: usize,
    /// Largest `count` a single log request may ask for.
    pub max_log_count: usize,
}

impl SimulationConfig {
    pub fn check_count(&self, count: usize) -> TelemetryResult<usize> {
        if count > self.max_log_count {
            return Err(TelemetryError::CountTooLarge {
                requested: count,
                max: self.max_log_count,
            });
        }
        Ok(count)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            component_log_count: 20,
            aggregate_log_count: 50,
            max_log_count: DEFAULT_MAX_LOG_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub namespace: String,
    pub kubectl: String,
    pub scripts_dir: PathBuf,
    /// Program and leading arguments; the script path is appended.
    pub script_runner: Vec<String>,
    pub migrate_script: String,
    pub rollback_script: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: "open5gs".to_string(),
            kubectl: "kubectl".to_string(),
            scripts_dir: PathBuf::from("../scripts"),
            script_runner: vec![
                "powershell.exe".to_string(),
                "-ExecutionPolicy".to_string(),
                "Bypass".to_string(),
                "-File".to_string(),
            ],
            migrate_script: "migrate.ps1".to_string(),
            rollback_script: "rollback_4g.ps1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub refresh_interval_secs: u64,
    pub log_count: usize,
    pub auto_refresh: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 5,
            log_count: 30,
            auto_refresh: true,
        }
    }
}

impl DashboardConfig {
    pub fn clamped_refresh_secs(&self) -> u64 {
        clamp_refresh_secs(self.refresh_interval_secs)
    }

    pub fn clamped_log_count(&self) -> usize {
        clamp_log_count(self.log_count)
    }
}

pub fn clamp_refresh_secs(secs: u64) -> u64 {
    secs.clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS)
}

pub fn clamp_log_count(count: usize) -> usize {
    count.clamp(MIN_DASHBOARD_LOG_COUNT, MAX_DASHBOARD_LOG_COUNT)
}

impl CutoverConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Missing files fall back to defaults; unreadable or malformed ones are errors.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply `CUTOVER_BIND`, `CUTOVER_API_URL` and `CUTOVER_SEED` when set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("CUTOVER_BIND") {
            self.server.bind = bind;
        }
        if let Some(url) = lookup("CUTOVER_API_URL") {
            self.client.api_url = url;
        }
        if let Some(seed) = lookup("CUTOVER_SEED") {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("CUTOVER_SEED must be an unsigned integer, got {seed}"))?;
            self.simulation.seed = Some(seed);
        }
        Ok(())
    }
}
