//! Merging, filtering, ordering and truncation of multi-component log streams.

use rand::Rng;

use cutover_domain::{CoreId, LogQuery, LogRecord, list_components};

use crate::generator::generate_logs;

/// Records each component contributes to a core-wide aggregate of `total`.
pub fn per_component_share(total: usize, components: usize) -> usize {
    (total / components.max(1)).max(1)
}

/// Stable newest-first ordering; equal timestamps keep insertion order.
pub fn sort_newest_first(records: &mut [LogRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Logs across every component of `core`, newest first, at most `total_count` long.
pub fn aggregate<R: Rng + ?Sized>(
    rng: &mut R,
    core: CoreId,
    total_count: usize,
) -> Vec<LogRecord> {
    let components = list_components(core);
    let share = per_component_share(total_count, components.len());
    let mut records = Vec::new();
    for component in components {
        records.extend(generate_logs(rng, component.id, core, share));
    }
    sort_newest_first(&mut records);
    records.truncate(total_count);
    records
}

/// Apply the level filter, order newest first and truncate to `query.count`.
pub(crate) fn finish(mut records: Vec<LogRecord>, query: &LogQuery) -> Vec<LogRecord> {
    records.retain(|record| query.matches(record));
    sort_newest_first(&mut records);
    records.truncate(query.count);
    records
}
