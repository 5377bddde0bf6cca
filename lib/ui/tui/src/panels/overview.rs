use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table},
};

use cutover_domain::{ComponentViews, CoreId, MigrationSnapshot};
use cutover_ui_presentation::formatting::{
    format_percent, format_thousands, status_icon, status_label, status_tone,
};

use super::{placeholder, tone_color};
use crate::app::App;

/// Components listed per core; the full set is available from the CLI.
const COMPONENTS_SHOWN: usize = 4;

pub fn render_network_overview(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_migration(frame, rows[0], app.data().migration.as_ref());
    render_core(frame, columns[0], CoreId::Legacy, app.data().legacy.as_ref());
    render_core(
        frame,
        columns[1],
        CoreId::Replacement,
        app.data().replacement.as_ref(),
    );
}

fn render_migration(frame: &mut Frame, area: Rect, snapshot: Option<&MigrationSnapshot>) {
    let block = Block::default()
        .title("Migration Status")
        .borders(Borders::ALL);
    let Some(snapshot) = snapshot else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        placeholder(frame, inner, "Loading migration status...");
        return;
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let header = Line::from(vec![
        Span::styled("Phase: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            snapshot.phase.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Subscribers: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{} / {}",
            format_thousands(snapshot.migrated_subscriber_count),
            format_thousands(snapshot.total_subscriber_count)
        )),
    ]);
    frame.render_widget(Paragraph::new(header), lines[0]);

    let ratio = (snapshot.progress_pct / 100.0).clamp(0.0, 1.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(ratio)
            .label(format_percent(snapshot.progress_pct)),
        lines[1],
    );
}

fn render_core(frame: &mut Frame, area: Rect, core: CoreId, views: Option<&ComponentViews>) {
    let block = Block::default().title(core.title()).borders(Borders::ALL);
    let Some(views) = views else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        placeholder(frame, inner, "Loading components...");
        return;
    };
    let rows = views.iter().take(COMPONENTS_SHOWN).map(|view| {
        let color = tone_color(status_tone(view.status));
        Row::new(vec![
            format!("{} {}", status_icon(view.status), view.id.to_uppercase()),
            status_label(view.status),
            view.pod_count.to_string(),
            format_percent(view.cpu_usage),
            format_percent(view.memory_usage),
        ])
        .style(Style::default().fg(color))
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["Component", "Status", "Pods", "CPU", "Memory"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block);
    frame.render_widget(table, area);
}
