//! HTTP transport for telemetry: the JSON API server and its client.

pub mod client;
pub mod router;

pub use client::ApiClient;
pub use router::{ALL_COMPONENTS, ApiError, AppState, HttpServer, router};
