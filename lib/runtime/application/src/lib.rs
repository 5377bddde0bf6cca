pub mod aggregator;
pub mod fallback;
pub mod generator;
pub mod migration;
pub mod service;
pub mod simulator;

pub use aggregator::{aggregate, per_component_share, sort_newest_first};
pub use fallback::{FallbackTelemetry, LogStream, combined_logs};
pub use generator::{generate_logs, generate_logs_at};
pub use migration::current_snapshot;
pub use service::TelemetryService;
pub use simulator::{StatusPolicy, simulate_status};
