//! Application initialization, refresh scheduling and periodic tick behavior.

use std::time::{Duration, Instant};

use cutover_domain::{CoreFilter, clamp_log_count, clamp_refresh_secs};

use super::{App, AppContext, ConfirmPrompt, DashboardData, LogFilters, View};
use crate::worker::{self, ClusterAction};

const UPDATE_CHANNEL_CAPACITY: usize = 32;

impl App {
    /// Must be called inside a tokio runtime; fetches run as spawned tasks.
    pub fn new(context: AppContext) -> Self {
        let (updates_tx, updates_rx) = tokio::sync::mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        let filters = LogFilters {
            core: CoreFilter::Both,
            level: None,
            count: context.dashboard.clamped_log_count(),
        };
        let mut app = Self {
            refresh_secs: context.dashboard.clamped_refresh_secs(),
            auto_refresh: context.dashboard.auto_refresh,
            context,
            view: View::MigrationCenter,
            filters,
            data: DashboardData::default(),
            confirm: None,
            action_running: None,
            refreshing: false,
            generation: 0,
            last_refresh: None,
            updates_tx,
            updates_rx,
            should_quit: false,
        };
        app.request_refresh();
        app
    }

    /// Start a background fetch for the active view unless one is in flight.
    pub fn request_refresh(&mut self) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.generation += 1;
        self.data.last_error = None;
        self.last_refresh = Some(Instant::now());
        tokio::spawn(worker::refresh(
            self.context.ports.clone(),
            self.view,
            self.filters.query(),
            self.generation,
            self.updates_tx.clone(),
        ));
    }

    /// Refresh now even if an earlier fetch is still in flight; its late
    /// results are discarded.
    pub fn force_refresh(&mut self) {
        self.refreshing = false;
        self.request_refresh();
    }

    /// Ask for confirmation before any cluster action.
    pub fn request_action(&mut self, action: ClusterAction) {
        if self.action_running.is_some() {
            self.data.last_error = Some(format!(
                "{} is still running",
                self.action_running.map(ClusterAction::label).unwrap_or_default()
            ));
            return;
        }
        self.confirm = Some(ConfirmPrompt {
            action,
            message: action.confirm_message(&self.context.namespace),
        });
    }

    pub fn confirm_action(&mut self) {
        let Some(prompt) = self.confirm.take() else {
            return;
        };
        self.action_running = Some(prompt.action);
        tokio::spawn(worker::run_action(
            self.context.ports.clone(),
            prompt.action,
            self.updates_tx.clone(),
        ));
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.force_refresh();
        }
    }

    pub fn adjust_refresh_secs(&mut self, delta: i64) {
        let next = self.refresh_secs.saturating_add_signed(delta);
        self.refresh_secs = clamp_refresh_secs(next);
    }

    pub fn adjust_log_count(&mut self, delta: isize) {
        let next = self.filters.count.saturating_add_signed(delta);
        self.filters.count = clamp_log_count(next);
    }

    /// Apply every update that has arrived since the last tick.
    pub fn drain_updates(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            self.apply_update(update);
        }
    }

    pub fn refresh_due(&self) -> bool {
        self.auto_refresh
            && !self.refreshing
            && self
                .last_refresh
                .is_none_or(|at| at.elapsed() >= Duration::from_secs(self.refresh_secs))
    }

    pub fn on_tick(&mut self) {
        self.drain_updates();
        if self.refresh_due() {
            self.request_refresh();
        }
    }
}
