//! Terminal setup and event loop wiring for the dashboard.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::{App, AppContext};
use crate::panels::render;

const TICK_RATE: Duration = Duration::from_millis(200);

/// Launch the dashboard and enter the event loop.
///
/// Must be called from inside a multi-threaded tokio runtime.
pub fn start(context: AppContext) -> Result<()> {
    let mut terminal_guard = TerminalGuard::new()?;
    let mut app = App::new(context);
    tracing::info!(api_url = %app.context().api_url, "dashboard started");
    run_app(terminal_guard.terminal_mut(), &mut app)
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;
        if app.should_quit {
            break;
        }
        if event::poll(TICK_RATE)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }
        app.on_tick();
    }
    tracing::info!("dashboard closed");
    Ok(())
}
