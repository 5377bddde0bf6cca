use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscriber population of this deployment.
pub const TOTAL_SUBSCRIBERS: u64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MigrationPhase {
    Preparation,
    #[serde(rename = "Data Sync")]
    DataSync,
    Testing,
    Cutover,
    Validation,
}

impl MigrationPhase {
    /// Phases in execution order.
    pub const ALL: [MigrationPhase; 5] = [
        MigrationPhase::Preparation,
        MigrationPhase::DataSync,
        MigrationPhase::Testing,
        MigrationPhase::Cutover,
        MigrationPhase::Validation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MigrationPhase::Preparation => "Preparation",
            MigrationPhase::DataSync => "Data Sync",
            MigrationPhase::Testing => "Testing",
            MigrationPhase::Cutover => "Cutover",
            MigrationPhase::Validation => "Validation",
        }
    }
}

impl fmt::Display for MigrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationSnapshot {
    pub phase: MigrationPhase,
    #[serde(rename = "progress")]
    pub progress_pct: f64,
    pub started_at: Option<DateTime<Utc>>,
    pub estimated_completion: Option<DateTime<Utc>>,
    #[serde(rename = "active_subscribers_migrated")]
    pub migrated_subscriber_count: u64,
    #[serde(rename = "total_subscribers")]
    pub total_subscriber_count: u64,
}

impl MigrationSnapshot {
    /// Migrated share of the subscriber base, in `[0, 1]` when the counts are consistent.
    pub fn subscriber_ratio(&self) -> f64 {
        if self.total_subscriber_count == 0 {
            return 0.0;
        }
        self.migrated_subscriber_count as f64 / self.total_subscriber_count as f64
    }

    pub fn counts_consistent(&self) -> bool {
        self.migrated_subscriber_count <= self.total_subscriber_count
    }
}
