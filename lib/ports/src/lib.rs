//! Port traits between the telemetry core, its transports and the front ends.

mod cluster;
mod telemetry;

pub use cluster::{ClusterError, ClusterPort, ClusterResult, CommandOutput, PodSummary};
pub use telemetry::TelemetryPort;

use std::sync::Arc;

#[derive(Clone)]
pub struct PortSet {
    pub telemetry: Arc<dyn TelemetryPort>,
    pub cluster: Arc<dyn ClusterPort>,
}

impl PortSet {
    pub fn new(telemetry: Arc<dyn TelemetryPort>, cluster: Arc<dyn ClusterPort>) -> Self {
        Self { telemetry, cluster }
    }
}
