use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use cutover_ui_presentation::formatting::mapping_rows;

use super::placeholder;
use crate::app::App;
use crate::worker::ClusterAction;

const ACTIONS: [(char, ClusterAction); 3] = [
    ('m', ClusterAction::Migrate),
    ('b', ClusterAction::Rollback),
    ('p', ClusterAction::Purge),
];

pub fn render_migration_center(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    render_actions(frame, left[0], app);
    render_action_output(frame, left[1], app);
    render_pods(frame, right[0], app);
    render_mapping(frame, right[1], app);
}

fn render_actions(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = ACTIONS
        .iter()
        .map(|(key, action)| {
            let style = if matches!(action, ClusterAction::Purge) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("[{key}] "), Style::default().fg(Color::Cyan)),
                Span::styled(action.label(), style),
            ])
        })
        .collect();
    let summary = match app.data().pods {
        Some(summary) => format!("Running pods: {}/{}", summary.running, summary.total),
        None => "Running pods: -".to_string(),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        summary,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Actions").borders(Borders::ALL)),
        area,
    );
}

fn render_action_output(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Output").borders(Borders::ALL);
    if let Some(action) = app.action_running() {
        frame.render_widget(
            Paragraph::new(format!("{}...", action.label())).block(block),
            area,
        );
        return;
    }
    let Some((action, result)) = &app.data().last_action else {
        frame.render_widget(block, area);
        return;
    };
    let (status, body, color) = match result {
        Ok(output) if output.success() => {
            ("completed".to_string(), output.stdout.clone(), Color::Green)
        }
        Ok(output) => {
            let status = match output.exit_code {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            (status, format!("{}{}", output.stdout, output.stderr), Color::Red)
        }
        Err(err) => ("failed".to_string(), err.clone(), Color::Red),
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("{}: {status}", action.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(body.lines().map(|line| Line::from(line.to_string())));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn render_pods(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("Pods ({})", app.context().namespace);
    let block = Block::default().title(title).borders(Borders::ALL);
    match &app.data().pod_listing {
        Some(listing) if listing.success() => {
            frame.render_widget(Paragraph::new(listing.stdout.clone()).block(block), area);
        }
        Some(listing) => {
            frame.render_widget(
                Paragraph::new(listing.stderr.clone())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true })
                    .block(block),
                area,
            );
        }
        None => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            placeholder(frame, inner, "No pod listing yet");
        }
    }
}

fn render_mapping(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title("Component Mapping")
        .borders(Borders::ALL);
    let Some(mappings) = &app.data().mappings else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        placeholder(frame, inner, "Loading mapping...");
        return;
    };
    let rows = mapping_rows(mappings)
        .into_iter()
        .map(|row| Row::new(vec![row.legacy, row.replacement, row.description]));
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["4G", "5G", "Notes"]).style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block);
    frame.render_widget(table, area);
}
