//! Keyboard-driven event handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, View, next_level};
use crate::worker::ClusterAction;

const LOG_COUNT_STEP: isize = 10;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.set_view(View::MigrationCenter),
            KeyCode::Char('2') => self.set_view(View::SystemLogs),
            KeyCode::Char('3') => self.set_view(View::NetworkOverview),
            KeyCode::Tab | KeyCode::Right => self.set_view(self.view.next()),
            KeyCode::BackTab | KeyCode::Left => self.set_view(self.view.prev()),
            KeyCode::Char('r') => self.force_refresh(),
            KeyCode::Char('a') => self.auto_refresh = !self.auto_refresh,
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_refresh_secs(1),
            KeyCode::Char('-') => self.adjust_refresh_secs(-1),
            _ => match self.view {
                View::MigrationCenter => self.handle_migration_key(key),
                View::SystemLogs => self.handle_logs_key(key),
                View::NetworkOverview => {}
            },
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_action(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_confirm(),
            _ => {}
        }
    }

    fn handle_migration_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('m') => self.request_action(ClusterAction::Migrate),
            KeyCode::Char('b') => self.request_action(ClusterAction::Rollback),
            KeyCode::Char('p') => self.request_action(ClusterAction::Purge),
            _ => {}
        }
    }

    fn handle_logs_key(&mut self, key: KeyEvent) {
        let before = self.filters;
        match key.code {
            KeyCode::Char('c') => self.filters.core = self.filters.core.next(),
            KeyCode::Char('l') => self.filters.level = next_level(self.filters.level),
            KeyCode::Char(']') | KeyCode::Up => self.adjust_log_count(LOG_COUNT_STEP),
            KeyCode::Char('[') | KeyCode::Down => self.adjust_log_count(-LOG_COUNT_STEP),
            _ => {}
        }
        if self.filters != before {
            self.force_refresh();
        }
    }
}
