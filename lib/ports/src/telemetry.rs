use async_trait::async_trait;

use cutover_domain::{
    ComponentMappings, ComponentViews, CoreId, LogRecord, MigrationSnapshot, TelemetryResult,
};

/// Read side of the telemetry model, served locally or over HTTP.
#[async_trait]
pub trait TelemetryPort: Send + Sync {
    /// Every component of `core` with a freshly simulated status.
    async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews>;

    /// Logs of one component. Unknown components yield `NotFound`.
    async fn component_logs(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>>;

    /// Aggregated, time-descending logs across all components of `core`.
    async fn core_logs(&self, core: CoreId, count: usize) -> TelemetryResult<Vec<LogRecord>>;

    async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot>;

    async fn component_mappings(&self) -> TelemetryResult<ComponentMappings>;

    /// True when answers currently come from a local stand-in for the real source.
    fn is_standalone(&self) -> bool {
        false
    }
}
