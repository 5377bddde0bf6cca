use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core_id::{CoreFilter, CoreId};
use crate::error::TelemetryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "DEBUG" => Ok(LogLevel::Debug),
            other => Err(TelemetryError::InvalidLevel(other.to_string())),
        }
    }
}

/// A single simulated log line emitted by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "component")]
    pub component_id: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(rename = "core_type")]
    pub core_id: CoreId,
}

/// Parameters of a combined, multi-core log view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub core: CoreFilter,
    pub level: Option<LogLevel>,
    pub count: usize,
}

impl LogQuery {
    pub fn new(count: usize) -> Self {
        Self {
            core: CoreFilter::Both,
            level: None,
            count,
        }
    }

    pub fn with_core(mut self, core: CoreFilter) -> Self {
        self.core = core;
        self
    }

    pub fn with_level(mut self, level: Option<LogLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        self.level.is_none_or(|level| record.level == level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub info: usize,
    pub warn: usize,
    pub error: usize,
    pub debug: usize,
}

impl LevelCounts {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.level {
                LogLevel::Info => counts.info += 1,
                LogLevel::Warn => counts.warn += 1,
                LogLevel::Error => counts.error += 1,
                LogLevel::Debug => counts.debug += 1,
            }
        }
        counts
    }

    pub fn get(&self, level: LogLevel) -> usize {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
            LogLevel::Debug => self.debug,
        }
    }

    pub fn total(&self) -> usize {
        self.info + self.warn + self.error + self.debug
    }
}
