use thiserror::Error;

use crate::core_id::CoreId;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Component '{component}' not found in {core} core")]
    NotFound { core: CoreId, component: String },

    #[error("telemetry upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("unknown core '{0}' (expected 4g or 5g)")]
    InvalidCore(String),

    #[error("unknown log level '{0}' (expected INFO, WARN, ERROR or DEBUG)")]
    InvalidLevel(String),

    #[error("count {requested} exceeds the limit of {max} log records")]
    CountTooLarge { requested: usize, max: usize },
}

impl TelemetryError {
    pub fn not_found(core: CoreId, component: impl Into<String>) -> Self {
        TelemetryError::NotFound {
            core,
            component: component.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TelemetryError::NotFound { .. })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, TelemetryError::UpstreamUnavailable(_))
    }
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
