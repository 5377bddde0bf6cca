use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use cutover_application::{StatusPolicy, TelemetryService};
use cutover_domain::{
    ComponentMappings, ComponentViews, CoreId, DashboardConfig, LogRecord, MigrationSnapshot,
    TelemetryResult,
};
use cutover_ports::{
    ClusterError, ClusterPort, ClusterResult, CommandOutput, PodSummary, PortSet, TelemetryPort,
};

use crate::app::{App, AppContext};

pub(crate) const POD_LISTING: &str = "NAME        READY   STATUS    RESTARTS   AGE\namf-0       1/1     Running   0          2m\n";

#[derive(Default)]
pub(crate) struct FakeCluster {
    pub calls: Mutex<Vec<&'static str>>,
    pub fail_scripts: bool,
}

impl FakeCluster {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls lock poisoned").push(call);
    }

    fn script(&self, call: &'static str) -> ClusterResult<CommandOutput> {
        self.record(call);
        if self.fail_scripts {
            return Err(ClusterError::ScriptNotFound(format!("/scripts/{call}.sh").into()));
        }
        Ok(CommandOutput {
            command: call.to_string(),
            stdout: format!("{call} done\n"),
            stderr: String::new(),
            exit_code: Some(0),
        })
    }
}

#[async_trait]
impl ClusterPort for FakeCluster {
    async fn list_pods(&self) -> ClusterResult<CommandOutput> {
        Ok(CommandOutput {
            command: "kubectl get pods".to_string(),
            stdout: POD_LISTING.to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        })
    }

    async fn pod_summary(&self) -> ClusterResult<PodSummary> {
        Ok(PodSummary {
            running: 2,
            total: 3,
        })
    }

    async fn migrate(&self) -> ClusterResult<CommandOutput> {
        self.script("migrate")
    }

    async fn rollback(&self) -> ClusterResult<CommandOutput> {
        self.script("rollback")
    }

    async fn purge(&self) -> ClusterResult<CommandOutput> {
        self.script("purge")
    }
}

pub(crate) fn service() -> TelemetryService {
    TelemetryService::seeded(7, StatusPolicy::Standalone)
}

/// Simulated telemetry whose core-log fetches of `slow_count` records lag by `delay`.
pub(crate) struct LaggingLogs {
    pub inner: TelemetryService,
    pub slow_count: usize,
    pub delay: Duration,
}

#[async_trait]
impl TelemetryPort for LaggingLogs {
    async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews> {
        self.inner.components(core).await
    }

    async fn component_logs(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>> {
        self.inner.component_logs(core, component, count).await
    }

    async fn core_logs(&self, core: CoreId, count: usize) -> TelemetryResult<Vec<LogRecord>> {
        if count == self.slow_count {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.core_logs(core, count).await
    }

    async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
        self.inner.migration_status().await
    }

    async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
        self.inner.component_mappings().await
    }

    fn is_standalone(&self) -> bool {
        self.inner.is_standalone()
    }
}

pub(crate) fn context_with(
    telemetry: Arc<dyn TelemetryPort>,
    cluster: Arc<FakeCluster>,
    dashboard: DashboardConfig,
) -> AppContext {
    AppContext {
        ports: PortSet::new(telemetry, cluster),
        dashboard,
        namespace: "core-lab".to_string(),
        api_url: "http://127.0.0.1:8000".to_string(),
    }
}

pub(crate) fn context(cluster: Arc<FakeCluster>) -> AppContext {
    context_with(Arc::new(service()), cluster, DashboardConfig::default())
}

/// Apply updates until no refresh or action is in flight.
pub(crate) async fn settle(app: &mut App) {
    while app.refreshing || app.action_running.is_some() {
        let update = tokio::time::timeout(Duration::from_secs(5), app.updates_rx.recv())
            .await
            .expect("dashboard update timed out")
            .expect("update channel closed");
        app.apply_update(update);
    }
}
