//! Simulated point-in-time component health.

use chrono::Utc;
use rand::Rng;

use cutover_domain::{ComponentState, ComponentStatus, CoreId};

/// Which status distribution a caller draws from.
///
/// The API service and the standalone fallback path weight outcomes differently:
/// the service reports components as migrating, the fallback reports them in error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    #[default]
    Primary,
    Standalone,
}

const PRIMARY_OUTCOMES: [ComponentState; 5] = [
    ComponentState::Running,
    ComponentState::Running,
    ComponentState::Running,
    ComponentState::Pending,
    ComponentState::Migrating,
];

const STANDALONE_OUTCOMES: [ComponentState; 5] = [
    ComponentState::Running,
    ComponentState::Running,
    ComponentState::Running,
    ComponentState::Pending,
    ComponentState::Error,
];

impl StatusPolicy {
    pub fn outcomes(self) -> &'static [ComponentState; 5] {
        match self {
            StatusPolicy::Primary => &PRIMARY_OUTCOMES,
            StatusPolicy::Standalone => &STANDALONE_OUTCOMES,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn simulate_status<R: Rng + ?Sized>(
    rng: &mut R,
    component_id: &str,
    core: CoreId,
    policy: StatusPolicy,
) -> ComponentStatus {
    let outcomes = policy.outcomes();
    ComponentStatus {
        component_id: component_id.to_string(),
        core_id: core,
        status: outcomes[rng.random_range(0..outcomes.len())],
        pod_count: rng.random_range(1..=3),
        cpu_usage_pct: round2(rng.random_range(5.0..=85.0)),
        memory_usage_pct: round2(rng.random_range(10.0..=70.0)),
        observed_at: Utc::now(),
    }
}
