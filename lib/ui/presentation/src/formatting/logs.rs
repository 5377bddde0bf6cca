use chrono::{DateTime, Utc};

use cutover_domain::{LogLevel, LogRecord};

use super::Tone;

/// ISO-8601 to the second, without zone.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn level_label(level: LogLevel) -> String {
    format!("[{}]", level.as_str())
}

pub fn level_tone(level: LogLevel) -> Tone {
    match level {
        LogLevel::Info => Tone::Good,
        LogLevel::Warn => Tone::Caution,
        LogLevel::Error => Tone::Bad,
        LogLevel::Debug => Tone::Muted,
    }
}

/// `[2024-05-01T12:00:00] [INFO] [4G:MME] message`
pub fn log_line(record: &LogRecord) -> String {
    format!(
        "[{}] {} [{}:{}] {}",
        format_timestamp(&record.timestamp),
        level_label(record.level),
        record.core_id.label(),
        record.component_id.to_uppercase(),
        record.message
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use cutover_domain::CoreId;

    use super::*;

    #[test]
    fn log_line_truncates_to_seconds() {
        let timestamp = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 45)
            .unwrap()
            + chrono::Duration::milliseconds(789);
        let record = LogRecord {
            timestamp,
            component_id: "mme".into(),
            level: LogLevel::Warn,
            message: "Paging timeout for UE".into(),
            core_id: CoreId::Legacy,
        };
        assert_eq!(
            log_line(&record),
            "[2024-05-01T12:30:45] [WARN] [4G:MME] Paging timeout for UE"
        );
    }

    #[test]
    fn debug_is_muted() {
        assert_eq!(level_tone(LogLevel::Debug), Tone::Muted);
        assert_eq!(level_label(LogLevel::Error), "[ERROR]");
    }
}
