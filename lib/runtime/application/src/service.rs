use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cutover_domain::{
    ComponentMappings, ComponentView, ComponentViews, CoreId, LogRecord,
    MigrationSnapshot, SimulationConfig, TelemetryError, TelemetryResult, find_component,
    list_components, list_mappings,
};
use cutover_ports::TelemetryPort;

use crate::aggregator::aggregate;
use crate::generator::generate_logs;
use crate::migration::current_snapshot;
use crate::simulator::{StatusPolicy, simulate_status};

/// Local telemetry source backed by the simulators.
///
/// Every call draws from the one random source; a fixed seed makes the whole
/// sequence of answers reproducible.
#[derive(Debug)]
pub struct TelemetryService {
    rng: Mutex<StdRng>,
    policy: StatusPolicy,
}

impl TelemetryService {
    pub fn new(policy: StatusPolicy) -> Self {
        Self::with_rng(StdRng::from_os_rng(), policy)
    }

    pub fn seeded(seed: u64, policy: StatusPolicy) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), policy)
    }

    pub fn from_config(config: &SimulationConfig, policy: StatusPolicy) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, policy),
            None => Self::new(policy),
        }
    }

    fn with_rng(rng: StdRng, policy: StatusPolicy) -> Self {
        Self {
            rng: Mutex::new(rng),
            policy,
        }
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// A panic inside `f` poisons the lock but leaves the generator usable,
    /// so later draws recover the guard instead of failing.
    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    pub fn component_views(&self, core: CoreId) -> ComponentViews {
        self.draw(|rng| {
            ComponentViews(
                list_components(core)
                    .iter()
                    .map(|descriptor| {
                        let status = simulate_status(rng, descriptor.id, core, self.policy);
                        ComponentView::new(descriptor, &status)
                    })
                    .collect(),
            )
        })
    }

    pub fn logs_for_component(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>> {
        let descriptor = find_component(core, component)
            .ok_or_else(|| TelemetryError::not_found(core, component))?;
        Ok(self.draw(|rng| generate_logs(rng, descriptor.id, core, count)))
    }

    pub fn logs_for_core(&self, core: CoreId, count: usize) -> Vec<LogRecord> {
        self.draw(|rng| aggregate(rng, core, count))
    }

    pub fn migration_snapshot(&self) -> MigrationSnapshot {
        self.draw(|rng| current_snapshot(rng))
    }

    pub fn mappings(&self) -> ComponentMappings {
        ComponentMappings {
            mappings: list_mappings(),
        }
    }
}

#[async_trait]
impl TelemetryPort for TelemetryService {
    async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews> {
        Ok(self.component_views(core))
    }

    async fn component_logs(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>> {
        self.logs_for_component(core, component, count)
    }

    async fn core_logs(&self, core: CoreId, count: usize) -> TelemetryResult<Vec<LogRecord>> {
        Ok(self.logs_for_core(core, count))
    }

    async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
        Ok(self.migration_snapshot())
    }

    async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
        Ok(self.mappings())
    }

    fn is_standalone(&self) -> bool {
        self.policy == StatusPolicy::Standalone
    }
}
