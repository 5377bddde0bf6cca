//! Dashboard state and event handling.

mod keyboard;
mod lifecycle;

use std::time::Instant;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::Receiver;

use cutover_application::LogStream;
use cutover_domain::{
    ComponentMappings, ComponentViews, CoreFilter, DashboardConfig, LogLevel, LogQuery,
    MigrationSnapshot,
};
use cutover_ports::{CommandOutput, PodSummary, PortSet};

use crate::worker::{ClusterAction, DashboardUpdate, RefreshUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MigrationCenter,
    SystemLogs,
    NetworkOverview,
}

impl View {
    pub const ALL: [View; 3] = [View::MigrationCenter, View::SystemLogs, View::NetworkOverview];

    pub fn title(self) -> &'static str {
        match self {
            View::MigrationCenter => "Migration Center",
            View::SystemLogs => "System Logs",
            View::NetworkOverview => "Network Overview",
        }
    }

    pub fn index(self) -> usize {
        match self {
            View::MigrationCenter => 0,
            View::SystemLogs => 1,
            View::NetworkOverview => 2,
        }
    }

    pub fn next(self) -> Self {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> Self {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Everything needed to start the dashboard.
#[derive(Clone)]
pub struct AppContext {
    pub ports: PortSet,
    pub dashboard: DashboardConfig,
    pub namespace: String,
    pub api_url: String,
}

/// Pending confirmation for a cluster action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub action: ClusterAction,
    pub message: String,
}

/// Log view filters; count and interval bounds are enforced on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilters {
    pub core: CoreFilter,
    pub level: Option<LogLevel>,
    pub count: usize,
}

impl LogFilters {
    pub fn query(&self) -> LogQuery {
        LogQuery::new(self.count)
            .with_core(self.core)
            .with_level(self.level)
    }
}

/// None -> INFO -> WARN -> ERROR -> DEBUG -> None.
pub fn next_level(level: Option<LogLevel>) -> Option<LogLevel> {
    match level {
        None => Some(LogLevel::ALL[0]),
        Some(current) => LogLevel::ALL
            .iter()
            .position(|l| *l == current)
            .and_then(|i| LogLevel::ALL.get(i + 1).copied()),
    }
}

/// Most recent data for each panel; `None` until first fetched.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub legacy: Option<ComponentViews>,
    pub replacement: Option<ComponentViews>,
    pub migration: Option<MigrationSnapshot>,
    pub mappings: Option<ComponentMappings>,
    pub logs: Option<LogStream>,
    pub pods: Option<PodSummary>,
    pub pod_listing: Option<CommandOutput>,
    pub last_action: Option<(ClusterAction, Result<CommandOutput, String>)>,
    pub last_error: Option<String>,
    pub standalone: bool,
    pub last_updated: Option<DateTime<Local>>,
}

pub struct App {
    pub(crate) context: AppContext,
    pub(crate) view: View,
    pub(crate) filters: LogFilters,
    pub(crate) auto_refresh: bool,
    pub(crate) refresh_secs: u64,
    pub(crate) data: DashboardData,
    pub(crate) confirm: Option<ConfirmPrompt>,
    pub(crate) action_running: Option<ClusterAction>,
    pub(crate) refreshing: bool,
    /// Number of the most recently started refresh.
    pub(crate) generation: u64,
    pub(crate) last_refresh: Option<Instant>,
    pub(crate) updates_tx: tokio::sync::mpsc::Sender<DashboardUpdate>,
    pub(crate) updates_rx: Receiver<DashboardUpdate>,
    pub should_quit: bool,
}

impl App {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn filters(&self) -> LogFilters {
        self.filters
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn confirm(&self) -> Option<&ConfirmPrompt> {
        self.confirm.as_ref()
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn refresh_secs(&self) -> u64 {
        self.refresh_secs
    }

    pub fn action_running(&self) -> Option<ClusterAction> {
        self.action_running
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Refresh { generation, update } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale refresh"
                    );
                    return;
                }
                self.apply_refresh(update);
            }
            DashboardUpdate::ActionFinished { action, result } => {
                self.action_running = None;
                self.data.last_action = Some((action, result));
                self.request_refresh();
            }
        }
    }

    fn apply_refresh(&mut self, update: RefreshUpdate) {
        match update {
            RefreshUpdate::Components(core, views) => match core {
                cutover_domain::CoreId::Legacy => self.data.legacy = Some(views),
                cutover_domain::CoreId::Replacement => self.data.replacement = Some(views),
            },
            RefreshUpdate::Migration(snapshot) => self.data.migration = Some(snapshot),
            RefreshUpdate::Mappings(mappings) => self.data.mappings = Some(mappings),
            RefreshUpdate::Logs(stream) => self.data.logs = Some(stream),
            RefreshUpdate::Pods { summary, listing } => {
                self.data.pods = Some(summary);
                self.data.pod_listing = Some(listing);
            }
            RefreshUpdate::Failed(message) => self.data.last_error = Some(message),
            RefreshUpdate::Done { standalone, at } => {
                self.refreshing = false;
                self.data.standalone = standalone;
                self.data.last_updated = Some(at);
            }
        }
    }
}
