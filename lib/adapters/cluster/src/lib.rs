//! kubectl and script-runner backed cluster control.

pub mod controller;
pub mod pods;

pub use controller::ClusterController;
pub use pods::parse_pod_summary;
