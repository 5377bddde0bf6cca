//! Domain models for the core-migration telemetry.

pub mod catalog;
pub mod config;
pub mod core_id;
pub mod error;
pub mod logs;
pub mod mapping;
pub mod migration;
pub mod palette;
pub mod status;

pub use catalog::{
    ComponentDescriptor, LEGACY_COMPONENTS, REPLACEMENT_COMPONENTS, find_component,
    list_components,
};
pub use config::{
    ClientConfig, ClusterConfig, CutoverConfig, DEFAULT_MAX_LOG_COUNT, DashboardConfig,
    MAX_DASHBOARD_LOG_COUNT, MAX_REFRESH_INTERVAL_SECS, MIN_DASHBOARD_LOG_COUNT,
    MIN_REFRESH_INTERVAL_SECS, ServerConfig, SimulationConfig, clamp_log_count,
    clamp_refresh_secs,
};
pub use core_id::{CoreFilter, CoreId};
pub use error::{TelemetryError, TelemetryResult};
pub use logs::{LevelCounts, LogLevel, LogQuery, LogRecord};
pub use mapping::{ComponentMappingEntry, ComponentMappings, list_mappings};
pub use migration::{MigrationPhase, MigrationSnapshot, TOTAL_SUBSCRIBERS};
pub use status::{ComponentState, ComponentStatus, ComponentView, ComponentViews};
