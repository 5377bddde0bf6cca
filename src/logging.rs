//! Tracing subscriber setup for the binaries.
//!
//! Filter priority, highest first:
//!
//! 1. `CUTOVER_LOG` (per-target directives, e.g. `cutover_adapter_http=debug,warn`)
//! 2. `RUST_LOG`
//! 3. `-v` / `-q` flags
//!
//! The API service and CLI log to stderr. The dashboard owns the terminal, so it
//! logs to `CUTOVER_LOG_FILE` (default `cutover-tui.log`) instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "CUTOVER_LOG";
pub const LOG_FILE_ENV: &str = "CUTOVER_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "cutover-tui.log";

/// Crate prefix used to raise our own targets above the global level.
const TARGET_PREFIX: &str = "cutover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are given.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }

    fn default_directives(self) -> String {
        match self {
            Self::Normal => format!("{},{TARGET_PREFIX}=info", self.default_level()),
            _ => self.default_level().to_string(),
        }
    }
}

/// Install the stderr subscriber. Errors if one is already installed.
pub fn init_stderr(verbosity: Verbosity) -> Result<()> {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(build_env_filter(verbosity));
    if verbosity == Verbosity::Verbose {
        registry
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .try_init()?;
    } else {
        registry
            .with(fmt_layer.without_time().compact())
            .try_init()?;
    }
    Ok(())
}

/// Install a subscriber that appends to `path`.
pub fn init_file(verbosity: Verbosity, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;
    Ok(())
}

pub fn dashboard_log_path() -> PathBuf {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    let directives = filter_directives(verbosity, |key| std::env::var(key).ok());
    EnvFilter::try_new(&directives)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}

/// Unparseable or empty variables fall through to the next source.
fn filter_directives<F>(verbosity: Verbosity, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    for key in [LOG_ENV, "RUST_LOG"] {
        if let Some(directives) = lookup(key)
            && !directives.trim().is_empty()
            && EnvFilter::try_new(&directives).is_ok()
        {
            return directives;
        }
    }
    verbosity.default_directives()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn default_levels() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn project_variable_beats_rust_log() {
        let directives = filter_directives(
            Verbosity::Normal,
            env(&[(LOG_ENV, "cutover_application=trace"), ("RUST_LOG", "error")]),
        );
        assert_eq!(directives, "cutover_application=trace");
    }

    #[test]
    fn rust_log_used_when_project_variable_empty() {
        let directives =
            filter_directives(Verbosity::Normal, env(&[(LOG_ENV, " "), ("RUST_LOG", "info")]));
        assert_eq!(directives, "info");
    }

    #[test]
    fn flags_apply_without_environment() {
        assert_eq!(filter_directives(Verbosity::Quiet, env(&[])), "ERROR");
        assert_eq!(filter_directives(Verbosity::Verbose, env(&[])), "DEBUG");
        assert_eq!(
            filter_directives(Verbosity::Normal, env(&[])),
            "WARN,cutover=info"
        );
    }

    #[test]
    fn default_directives_parse() {
        for verbosity in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose] {
            assert!(EnvFilter::try_new(verbosity.default_directives()).is_ok());
        }
    }
}
