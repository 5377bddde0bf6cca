//! Plain-text rendering of telemetry for one-shot terminal output.

use std::fmt::Write as _;

use cutover_domain::{ComponentViews, CoreId, LevelCounts, LogLevel, LogRecord, MigrationSnapshot};
use cutover_ports::{CommandOutput, PodSummary};
use cutover_ui_presentation::formatting::{
    self, MappingRow, format_percent, format_thousands, status_icon, status_label,
};

pub fn render_components(core: CoreId, views: &ComponentViews) -> String {
    let mut out = format!("{}\n", core.title());
    for view in views {
        let _ = writeln!(
            out,
            "{} {:<6} {:<10} pods {}  cpu {:>6}  mem {:>6}  {}",
            status_icon(view.status),
            view.id.to_uppercase(),
            status_label(view.status),
            view.pod_count,
            format_percent(view.cpu_usage),
            format_percent(view.memory_usage),
            view.full_name,
        );
    }
    out
}

pub fn render_logs(records: &[LogRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&formatting::log_line(record));
        out.push('\n');
    }
    out
}

pub fn render_level_counts(counts: &LevelCounts) -> String {
    LogLevel::ALL
        .iter()
        .map(|level| format!("{} {}", level.as_str(), counts.get(*level)))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_migration(snapshot: &MigrationSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Phase:        {}", snapshot.phase);
    let _ = writeln!(out, "Progress:     {}", format_percent(snapshot.progress_pct));
    let _ = writeln!(
        out,
        "Subscribers:  {} / {} migrated",
        format_thousands(snapshot.migrated_subscriber_count),
        format_thousands(snapshot.total_subscriber_count),
    );
    if let Some(eta) = &snapshot.estimated_completion {
        let _ = writeln!(out, "ETA:          {}", formatting::format_timestamp(eta));
    }
    out
}

pub fn render_mappings(rows: &[MappingRow]) -> String {
    let mut out = format!("{:<6} -> {:<16} {}\n", "4G", "5G", "NOTES");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<6} -> {:<16} {}",
            row.legacy, row.replacement, row.description
        );
    }
    out
}

pub fn render_pod_summary(summary: &PodSummary) -> String {
    format!("Running pods: {}/{}", summary.running, summary.total)
}

pub fn render_command_output(output: &CommandOutput) -> String {
    let mut out = format!("$ {}\n", output.command);
    if !output.stdout.is_empty() {
        out.push_str(&output.stdout);
        if !output.stdout.ends_with('\n') {
            out.push('\n');
        }
    }
    if !output.stderr.is_empty() {
        out.push_str(&output.stderr);
        if !output.stderr.ends_with('\n') {
            out.push('\n');
        }
    }
    match output.exit_code {
        Some(code) => {
            let _ = writeln!(out, "exit code {code}");
        }
        None => out.push_str("terminated by signal\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use cutover_domain::{ComponentState, ComponentView, MigrationPhase};

    use super::*;

    fn view(id: &str, status: ComponentState) -> ComponentView {
        ComponentView {
            id: id.to_string(),
            full_name: "Access and Mobility Management Function".to_string(),
            description: String::new(),
            status,
            pod_count: 2,
            cpu_usage: 12.34,
            memory_usage: 56.78,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn component_lines_carry_status_and_usage() {
        let views = ComponentViews(vec![view("amf", ComponentState::Migrating)]);
        let text = render_components(CoreId::Replacement, &views);
        let line = text.lines().nth(1).unwrap();
        assert!(line.contains("AMF"));
        assert!(line.contains("MIGRATING"));
        assert!(line.contains("12.3%"));
        assert!(line.contains("56.8%"));
    }

    #[test]
    fn migration_uses_thousands_separators() {
        let now = Utc::now();
        let snapshot = MigrationSnapshot {
            phase: MigrationPhase::DataSync,
            progress_pct: 41.26,
            started_at: Some(now),
            estimated_completion: Some(now),
            migrated_subscriber_count: 12_345,
            total_subscriber_count: 50_000,
        };
        let text = render_migration(&snapshot);
        assert!(text.contains("Data Sync"));
        assert!(text.contains("41.3%"));
        assert!(text.contains("12,345 / 50,000"));
    }

    #[test]
    fn command_output_is_verbatim_with_exit_code() {
        let output = CommandOutput {
            command: "kubectl get pods -n open5gs -o wide".to_string(),
            stdout: "NAME READY".to_string(),
            stderr: "warning: x\n".to_string(),
            exit_code: Some(1),
        };
        assert_eq!(
            render_command_output(&output),
            "$ kubectl get pods -n open5gs -o wide\nNAME READY\nwarning: x\nexit code 1\n"
        );
    }

    #[test]
    fn level_counts_follow_level_order() {
        let counts = LevelCounts {
            info: 3,
            warn: 1,
            error: 0,
            debug: 2,
        };
        assert_eq!(render_level_counts(&counts), "INFO 3 | WARN 1 | ERROR 0 | DEBUG 2");
    }
}
