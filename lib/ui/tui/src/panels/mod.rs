mod logs;
mod migration;
mod overview;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use cutover_ui_presentation::formatting::Tone;

use crate::app::{App, View};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app);

    let block = Block::default()
        .title(Span::styled(
            app.view().title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    match app.view() {
        View::MigrationCenter => migration::render_migration_center(frame, inner, app),
        View::SystemLogs => logs::render_system_logs(frame, inner, app),
        View::NetworkOverview => overview::render_network_overview(frame, inner, app),
    }

    render_status_bar(frame, chunks[2], app);

    if let Some(prompt) = app.confirm() {
        render_confirm(frame, &prompt.message, prompt.action.label());
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view().index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📡 4G/5G Core Migration "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let data = app.data();
    let source = if data.standalone {
        Span::styled(" STANDALONE ", Style::default().fg(Color::Black).bg(Color::Yellow))
    } else {
        Span::styled(" API ", Style::default().fg(Color::Black).bg(Color::Green))
    };
    let refresh = if app.auto_refresh() {
        format!(" auto {}s", app.refresh_secs())
    } else {
        " auto off".to_string()
    };
    let updated = data
        .last_updated
        .map(|at| format!(" | updated {}", at.format("%H:%M:%S")))
        .unwrap_or_default();
    let mut spans = vec![source, Span::raw(refresh), Span::raw(updated)];
    if let Some(error) = &data.last_error {
        spans.push(Span::styled(
            format!(" | {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    spans.push(Span::styled(
        " | q quit  r refresh  a auto  +/- interval",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirm(frame: &mut Frame, message: &str, title: &str) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "y / Enter to confirm, n / Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
        area,
    );
}

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Bad => Color::Red,
        Tone::Accent => Color::Magenta,
        Tone::Muted => Color::Gray,
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub(crate) fn placeholder(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::test_support::{FakeCluster, context, settle};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("test terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn migration_center_shows_actions_pods_and_mapping() {
        let mut app = App::new(context(Arc::new(FakeCluster::default())));
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("Migrate to 5G"));
        assert!(screen.contains("Running pods: 2/3"));
        assert!(screen.contains("Pods (core-lab)"));
        assert!(screen.contains("amf-0"));
        assert!(screen.contains("Component Mapping"));
        assert!(screen.contains("auto 5s"));
    }

    #[tokio::test]
    async fn confirm_prompt_overlays_the_view() {
        let mut app = App::new(context(Arc::new(FakeCluster::default())));
        settle(&mut app).await;
        press(&mut app, KeyCode::Char('p'));

        let screen = draw(&app);
        assert!(screen.contains("Purge all resources"));
        assert!(screen.contains("core-lab"));
        assert!(screen.contains("y / Enter to confirm"));
    }

    #[tokio::test]
    async fn logs_view_shows_filters_and_counts() {
        let mut app = App::new(context(Arc::new(FakeCluster::default())));
        settle(&mut app).await;
        press(&mut app, KeyCode::Char('2'));
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("core All"));
        assert!(screen.contains("level ALL"));
        assert!(screen.contains("INFO "));
        assert!(screen.contains("DEBUG "));
    }

    #[tokio::test]
    async fn overview_shows_both_cores_and_progress() {
        let mut app = App::new(context(Arc::new(FakeCluster::default())));
        settle(&mut app).await;
        press(&mut app, KeyCode::Char('3'));
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("4G EPC Core"));
        assert!(screen.contains("5G Core (5GC)"));
        assert!(screen.contains("Phase:"));
        assert!(screen.contains("MME"));
        assert!(screen.contains("AMF"));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 25, area);
        assert!((49..=51).contains(&popup.width));
        assert!((9..=11).contains(&popup.height));
        assert!(popup.right() <= area.right() && popup.bottom() <= area.bottom());
        assert!(popup.x >= 20 && popup.y >= 10);
    }
}
