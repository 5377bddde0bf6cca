use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use cutover_domain::LogLevel;
use cutover_ui_presentation::formatting::{format_timestamp, level_label, level_tone};

use super::{placeholder, tone_color};
use crate::app::App;

pub fn render_system_logs(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let filters = app.filters();
    let level = filters.level.map(LogLevel::as_str).unwrap_or("ALL");
    let filter_line = Line::from(vec![
        Span::styled("[c] core ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}  ", filters.core.label())),
        Span::styled("[l] level ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{level}  ")),
        Span::styled("[ [ / ] ] count ", Style::default().fg(Color::Cyan)),
        Span::raw(filters.count.to_string()),
    ]);
    frame.render_widget(Paragraph::new(filter_line), chunks[0]);

    let Some(stream) = &app.data().logs else {
        placeholder(frame, chunks[2], "Loading logs...");
        return;
    };

    let counts: Vec<Span> = LogLevel::ALL
        .iter()
        .flat_map(|level| {
            [
                Span::styled(
                    format!("{} {}", level.as_str(), stream.counts.get(*level)),
                    Style::default()
                        .fg(tone_color(level_tone(*level)))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(counts)), chunks[1]);

    if stream.records.is_empty() {
        placeholder(frame, chunks[2], "No log entries match the current filters");
        return;
    }

    let items: Vec<ListItem> = stream
        .records
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", format_timestamp(&record.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", level_label(record.level)),
                    Style::default().fg(tone_color(level_tone(record.level))),
                ),
                Span::styled(
                    format!(
                        "[{}:{}] ",
                        record.core_id.label(),
                        record.component_id.to_uppercase()
                    ),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(record.message.clone()),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );
}
