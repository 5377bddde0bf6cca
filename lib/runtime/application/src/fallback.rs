//! Remote-first telemetry with a local re-derivation when the remote is down.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use cutover_domain::{
    ComponentMappings, ComponentViews, CoreId, LevelCounts, LogQuery, LogRecord,
    MigrationSnapshot, TelemetryResult,
};
use cutover_ports::TelemetryPort;

use crate::aggregator::finish;

/// Combined log view plus per-level counts of the filtered set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogStream {
    pub records: Vec<LogRecord>,
    pub counts: LevelCounts,
}

/// Fetch each selected core with `query.count`, then filter, order and truncate.
///
/// Level counts cover every filtered record, before truncation.
pub async fn combined_logs<P>(port: &P, query: &LogQuery) -> TelemetryResult<LogStream>
where
    P: TelemetryPort + ?Sized,
{
    let mut records = Vec::new();
    for core in query.core.cores() {
        records.extend(port.core_logs(core, query.count).await?);
    }
    records.retain(|record| query.matches(record));
    let counts = LevelCounts::tally(&records);
    Ok(LogStream {
        records: finish(records, query),
        counts,
    })
}

pub struct FallbackTelemetry<R, L> {
    remote: R,
    local: L,
    standalone: AtomicBool,
}

impl<R, L> FallbackTelemetry<R, L>
where
    R: TelemetryPort,
    L: TelemetryPort,
{
    pub fn new(remote: R, local: L) -> Self {
        Self {
            remote,
            local,
            standalone: AtomicBool::new(false),
        }
    }

    fn note_remote_ok(&self) {
        self.standalone.store(false, Ordering::Relaxed);
    }

    fn note_fallback(&self, operation: &str, reason: &str) {
        if !self.standalone.swap(true, Ordering::Relaxed) {
            tracing::warn!(operation, reason, "telemetry API unreachable, using local simulation");
        } else {
            tracing::debug!(operation, "serving from local simulation");
        }
    }
}

/// Run `$remote`; on an unavailable upstream, note it and run `$local` instead.
macro_rules! with_fallback {
    ($self:ident, $op:literal, $remote:expr, $local:expr) => {
        match $remote.await {
            Ok(value) => {
                $self.note_remote_ok();
                Ok(value)
            }
            Err(err) if err.is_unavailable() => {
                $self.note_fallback($op, &err.to_string());
                $local.await
            }
            Err(err) => Err(err),
        }
    };
}

#[async_trait]
impl<R, L> TelemetryPort for FallbackTelemetry<R, L>
where
    R: TelemetryPort,
    L: TelemetryPort,
{
    async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews> {
        with_fallback!(
            self,
            "components",
            self.remote.components(core),
            self.local.components(core)
        )
    }

    async fn component_logs(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>> {
        with_fallback!(
            self,
            "component_logs",
            self.remote.component_logs(core, component, count),
            self.local.component_logs(core, component, count)
        )
    }

    async fn core_logs(&self, core: CoreId, count: usize) -> TelemetryResult<Vec<LogRecord>> {
        with_fallback!(
            self,
            "core_logs",
            self.remote.core_logs(core, count),
            self.local.core_logs(core, count)
        )
    }

    async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
        with_fallback!(
            self,
            "migration_status",
            self.remote.migration_status(),
            self.local.migration_status()
        )
    }

    async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
        with_fallback!(
            self,
            "component_mappings",
            self.remote.component_mappings(),
            self.local.component_mappings()
        )
    }

    /// True when the most recent call had to be answered locally.
    fn is_standalone(&self) -> bool {
        self.standalone.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use chrono::Utc;
    use cutover_domain::{CoreFilter, LogLevel, TelemetryError};

    use super::*;
    use crate::service::TelemetryService;
    use crate::simulator::StatusPolicy;

    /// Remote double that fails every call with a fixed error kind.
    struct FailingRemote {
        not_found: bool,
        calls: AtomicUsize,
    }

    impl FailingRemote {
        fn unavailable() -> Self {
            Self {
                not_found: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn not_found() -> Self {
            Self {
                not_found: true,
                calls: AtomicUsize::new(0),
            }
        }

        fn fail<T>(&self, core: CoreId) -> TelemetryResult<T> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if self.not_found {
                Err(TelemetryError::not_found(core, "ghost"))
            } else {
                Err(TelemetryError::UpstreamUnavailable("connection refused".into()))
            }
        }
    }

    #[async_trait]
    impl TelemetryPort for FailingRemote {
        async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews> {
            self.fail(core)
        }

        async fn component_logs(
            &self,
            core: CoreId,
            _component: &str,
            _count: usize,
        ) -> TelemetryResult<Vec<LogRecord>> {
            self.fail(core)
        }

        async fn core_logs(&self, core: CoreId, _count: usize) -> TelemetryResult<Vec<LogRecord>> {
            self.fail(core)
        }

        async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
            self.fail(CoreId::Legacy)
        }

        async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
            self.fail(CoreId::Legacy)
        }
    }

    /// Serves a fixed set of records for every core.
    struct FixedLogs(Vec<LogRecord>);

    #[async_trait]
    impl TelemetryPort for FixedLogs {
        async fn components(&self, _core: CoreId) -> TelemetryResult<ComponentViews> {
            Ok(ComponentViews::default())
        }

        async fn component_logs(
            &self,
            core: CoreId,
            _component: &str,
            _count: usize,
        ) -> TelemetryResult<Vec<LogRecord>> {
            self.core_logs(core, 0).await
        }

        async fn core_logs(&self, core: CoreId, _count: usize) -> TelemetryResult<Vec<LogRecord>> {
            Ok(self.0.iter().filter(|r| r.core_id == core).cloned().collect())
        }

        async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
            Err(TelemetryError::UpstreamUnavailable("unused".into()))
        }

        async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
            Ok(ComponentMappings::default())
        }
    }

    fn local() -> TelemetryService {
        TelemetryService::seeded(7, StatusPolicy::Standalone)
    }

    fn record(core: CoreId, level: LogLevel, secs: i64) -> LogRecord {
        LogRecord {
            timestamp: Utc::now() + chrono::Duration::seconds(secs),
            component_id: "mme".into(),
            level,
            message: "Generic log entry".into(),
            core_id: core,
        }
    }

    #[tokio::test]
    async fn unavailable_remote_falls_back_to_local() {
        let telemetry = FallbackTelemetry::new(FailingRemote::unavailable(), local());
        assert!(!telemetry.is_standalone());
        let views = telemetry.components(CoreId::Legacy).await.unwrap();
        assert_eq!(views.len(), 8);
        assert!(telemetry.is_standalone());
        let mappings = telemetry.component_mappings().await.unwrap();
        assert_eq!(mappings.mappings.len(), 9);
        assert_eq!(telemetry.remote.calls.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn not_found_is_not_masked() {
        let telemetry = FallbackTelemetry::new(FailingRemote::not_found(), local());
        let err = telemetry
            .component_logs(CoreId::Legacy, "ghost", 5)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!telemetry.is_standalone());
    }

    #[tokio::test]
    async fn local_not_found_surfaces_after_fallback() {
        let telemetry = FallbackTelemetry::new(FailingRemote::unavailable(), local());
        let err = telemetry
            .component_logs(CoreId::Replacement, "mme", 5)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn counts_are_tallied_before_truncation() {
        let port = FixedLogs(vec![
            record(CoreId::Legacy, LogLevel::Info, 0),
            record(CoreId::Legacy, LogLevel::Warn, 1),
            record(CoreId::Replacement, LogLevel::Warn, 2),
            record(CoreId::Replacement, LogLevel::Error, 3),
        ]);
        let query = LogQuery::new(1).with_level(Some(LogLevel::Warn));
        let stream = combined_logs(&port, &query).await.unwrap();
        assert_eq!(stream.records.len(), 1);
        assert_eq!(stream.records[0].core_id, CoreId::Replacement);
        assert_eq!(stream.counts.warn, 2);
        assert_eq!(stream.counts.total(), 2);
    }

    #[tokio::test]
    async fn single_core_stream_skips_the_other_core() {
        let port = FixedLogs(vec![
            record(CoreId::Legacy, LogLevel::Info, 0),
            record(CoreId::Replacement, LogLevel::Info, 1),
        ]);
        let query = LogQuery::new(10).with_core(CoreFilter::Only(CoreId::Legacy));
        let stream = combined_logs(&port, &query).await.unwrap();
        assert_eq!(stream.records.len(), 1);
        assert_eq!(stream.records[0].core_id, CoreId::Legacy);
    }

    #[tokio::test]
    async fn fallback_stream_uses_local_data() {
        let telemetry = FallbackTelemetry::new(FailingRemote::unavailable(), local());
        let stream = combined_logs(&telemetry, &LogQuery::new(30)).await.unwrap();
        assert_eq!(stream.records.len(), 30);
        assert!(stream.counts.total() >= 30);
        assert!(telemetry.is_standalone());
    }

    fn assert_newest_first(records: &[LogRecord]) {
        assert!(records.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn level_filter_yields_only_matching_records() {
        let query = LogQuery::new(30).with_level(Some(LogLevel::Warn));
        let stream = combined_logs(&local(), &query).await.unwrap();
        assert!(stream.records.len() <= 30);
        assert!(stream.records.iter().all(|r| r.level == LogLevel::Warn));
        assert_eq!(stream.counts.total(), stream.counts.warn);
        assert_newest_first(&stream.records);
    }

    #[tokio::test]
    async fn simulated_core_filter_yields_only_that_core() {
        let query = LogQuery::new(45).with_core(CoreFilter::Only(CoreId::Replacement));
        let stream = combined_logs(&local(), &query).await.unwrap();
        assert_eq!(stream.records.len(), 45);
        assert!(stream.records.iter().all(|r| r.core_id == CoreId::Replacement));
    }

    #[tokio::test]
    async fn both_cores_are_merged_before_truncation() {
        let stream = combined_logs(&local(), &LogQuery::new(100)).await.unwrap();
        // 96 legacy (8 x 12) and 99 replacement (9 x 11) records compete for 100 slots.
        assert_eq!(stream.records.len(), 100);
        assert_eq!(stream.counts.total(), 195);
        assert_newest_first(&stream.records);
        assert!(stream.records.iter().any(|r| r.core_id == CoreId::Replacement));
    }
}
