//! Background fetches and cluster actions; results return over an mpsc channel.

use chrono::{DateTime, Local};
use tokio::sync::mpsc::Sender;

use cutover_application::{LogStream, combined_logs};
use cutover_domain::{ComponentMappings, ComponentViews, CoreId, LogQuery, MigrationSnapshot};
use cutover_ports::{ClusterError, CommandOutput, PodSummary, PortSet};

use crate::app::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    Migrate,
    Rollback,
    Purge,
}

impl ClusterAction {
    pub fn label(self) -> &'static str {
        match self {
            ClusterAction::Migrate => "Migrate to 5G",
            ClusterAction::Rollback => "Rollback to 4G",
            ClusterAction::Purge => "Purge all resources",
        }
    }

    pub fn confirm_message(self, namespace: &str) -> String {
        match self {
            ClusterAction::Migrate => "Run the migration script now?".to_string(),
            ClusterAction::Rollback => "Roll the network back to the 4G core?".to_string(),
            ClusterAction::Purge => {
                format!("Delete ALL resources in namespace '{namespace}'?")
            }
        }
    }
}

/// Data produced by one refresh of the active view.
#[derive(Debug)]
pub enum RefreshUpdate {
    Components(CoreId, ComponentViews),
    Migration(MigrationSnapshot),
    Mappings(ComponentMappings),
    Logs(LogStream),
    Pods {
        summary: PodSummary,
        listing: CommandOutput,
    },
    Failed(String),
    Done {
        standalone: bool,
        at: DateTime<Local>,
    },
}

#[derive(Debug)]
pub enum DashboardUpdate {
    /// Output of the refresh started as number `generation`.
    Refresh {
        generation: u64,
        update: RefreshUpdate,
    },
    ActionFinished {
        action: ClusterAction,
        result: Result<CommandOutput, String>,
    },
}

async fn send(tx: &Sender<DashboardUpdate>, update: DashboardUpdate) {
    if tx.send(update).await.is_err() {
        tracing::debug!("dashboard closed before update was delivered");
    }
}

/// Tags every update of one refresh with its generation.
struct RefreshReporter {
    tx: Sender<DashboardUpdate>,
    generation: u64,
}

impl RefreshReporter {
    async fn send(&self, update: RefreshUpdate) {
        let generation = self.generation;
        send(&self.tx, DashboardUpdate::Refresh { generation, update }).await;
    }
}

/// Fetch what `view` shows, then report `Done`, all tagged with `generation`.
pub async fn refresh(
    ports: PortSet,
    view: View,
    query: LogQuery,
    generation: u64,
    tx: Sender<DashboardUpdate>,
) {
    let out = RefreshReporter { tx, generation };
    match view {
        View::MigrationCenter => {
            match ports.cluster.pod_summary().await {
                Ok(summary) => match ports.cluster.list_pods().await {
                    Ok(listing) => out.send(RefreshUpdate::Pods { summary, listing }).await,
                    Err(err) => out.send(failed("pod listing", &err)).await,
                },
                Err(err) => out.send(failed("pod summary", &err)).await,
            }
            match ports.telemetry.component_mappings().await {
                Ok(mappings) => out.send(RefreshUpdate::Mappings(mappings)).await,
                Err(err) => out.send(failed("component mapping", &err)).await,
            }
        }
        View::SystemLogs => match combined_logs(ports.telemetry.as_ref(), &query).await {
            Ok(stream) => out.send(RefreshUpdate::Logs(stream)).await,
            Err(err) => out.send(failed("logs", &err)).await,
        },
        View::NetworkOverview => {
            match ports.telemetry.migration_status().await {
                Ok(snapshot) => out.send(RefreshUpdate::Migration(snapshot)).await,
                Err(err) => out.send(failed("migration status", &err)).await,
            }
            for core in CoreId::ALL {
                match ports.telemetry.components(core).await {
                    Ok(views) => out.send(RefreshUpdate::Components(core, views)).await,
                    Err(err) => out.send(failed("components", &err)).await,
                }
            }
        }
    }
    let standalone = ports.telemetry.is_standalone();
    out.send(RefreshUpdate::Done {
        standalone,
        at: Local::now(),
    })
    .await;
}

pub async fn run_action(ports: PortSet, action: ClusterAction, tx: Sender<DashboardUpdate>) {
    tracing::info!(action = action.label(), "running cluster action");
    let result = match action {
        ClusterAction::Migrate => ports.cluster.migrate().await,
        ClusterAction::Rollback => ports.cluster.rollback().await,
        ClusterAction::Purge => ports.cluster.purge().await,
    };
    let result = result.map_err(|err: ClusterError| err.to_string());
    if let Err(err) = &result {
        tracing::warn!(action = action.label(), error = %err, "cluster action failed");
    }
    send(&tx, DashboardUpdate::ActionFinished { action, result }).await;
}

fn failed(what: &str, err: &dyn std::fmt::Display) -> RefreshUpdate {
    tracing::warn!(what, error = %err, "dashboard fetch failed");
    RefreshUpdate::Failed(format!("{what}: {err}"))
}
