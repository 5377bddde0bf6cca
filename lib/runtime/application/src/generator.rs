//! Plausible log lines drawn from per-component message palettes.

use chrono::{DateTime, Utc};
use rand::Rng;

use cutover_domain::palette::messages_for;
use cutover_domain::{CoreId, LogLevel, LogRecord};

/// INFO is three times as likely as each of the other levels.
const LEVEL_WEIGHTS: [LogLevel; 6] = [
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Debug,
    LogLevel::Error,
];

/// Generate `count` records for one component, all stamped with the call time.
///
/// The component id is not validated against the catalog; callers reject
/// unknown ids before reaching this point.
pub fn generate_logs<R: Rng + ?Sized>(
    rng: &mut R,
    component_id: &str,
    core: CoreId,
    count: usize,
) -> Vec<LogRecord> {
    generate_logs_at(rng, component_id, core, count, Utc::now())
}

pub fn generate_logs_at<R: Rng + ?Sized>(
    rng: &mut R,
    component_id: &str,
    core: CoreId,
    count: usize,
    timestamp: DateTime<Utc>,
) -> Vec<LogRecord> {
    let palette = messages_for(core, component_id);
    tracing::debug!(core = %core, component = component_id, count, "generating log batch");
    (0..count)
        .map(|_| LogRecord {
            timestamp,
            component_id: component_id.to_string(),
            level: LEVEL_WEIGHTS[rng.random_range(0..LEVEL_WEIGHTS.len())],
            message: palette[rng.random_range(0..palette.len())].to_string(),
            core_id: core,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use cutover_domain::palette::GENERIC_MESSAGE;

    use super::*;

    #[test]
    fn generates_exact_count_for_component() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate_logs(&mut rng, "mme", CoreId::Legacy, 5);
        assert_eq!(records.len(), 5);
        let palette = messages_for(CoreId::Legacy, "mme");
        for record in &records {
            assert_eq!(record.component_id, "mme");
            assert_eq!(record.core_id, CoreId::Legacy);
            assert!(palette.contains(&record.message.as_str()));
        }
    }

    #[test]
    fn zero_count_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_logs(&mut rng, "amf", CoreId::Replacement, 0).is_empty());
    }

    #[test]
    fn batch_shares_one_timestamp() {
        let mut rng = StdRng::seed_from_u64(9);
        let records = generate_logs(&mut rng, "upf", CoreId::Replacement, 20);
        let first = records[0].timestamp;
        assert!(records.iter().all(|r| r.timestamp == first));
    }

    #[test]
    fn unknown_component_falls_back_to_generic_message() {
        let mut rng = StdRng::seed_from_u64(2);
        let records = generate_logs(&mut rng, "mme", CoreId::Replacement, 3);
        assert!(records.iter().all(|r| r.message == GENERIC_MESSAGE));
        assert!(records.iter().all(|r| r.core_id == CoreId::Replacement));
    }

    #[test]
    fn info_dominates_large_batches() {
        let mut rng = StdRng::seed_from_u64(4);
        let records = generate_logs(&mut rng, "hss", CoreId::Legacy, 3_000);
        let info = records.iter().filter(|r| r.level == LogLevel::Info).count();
        let warn = records.iter().filter(|r| r.level == LogLevel::Warn).count();
        assert!(info > warn * 2, "info={info} warn={warn}");
        for level in LogLevel::ALL {
            assert!(records.iter().any(|r| r.level == level));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let at = Utc::now();
        let a = generate_logs_at(&mut StdRng::seed_from_u64(8), "smf", CoreId::Replacement, 10, at);
        let b = generate_logs_at(&mut StdRng::seed_from_u64(8), "smf", CoreId::Replacement, 10, at);
        assert_eq!(a, b);
    }
}
