use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use cutover_application::TelemetryService;
use cutover_domain::{
    ComponentMappings, ComponentViews, CoreId, LogRecord, MigrationSnapshot, SimulationConfig,
    TelemetryError,
};

/// Path segment that selects the core-wide aggregate instead of one component.
pub const ALL_COMPONENTS: &str = "all";

#[derive(Clone)]
pub struct AppState {
    service: Arc<TelemetryService>,
    simulation: SimulationConfig,
}

impl AppState {
    pub fn new(service: Arc<TelemetryService>, simulation: &SimulationConfig) -> Self {
        Self {
            service,
            simulation: simulation.clone(),
        }
    }
}

/// Telemetry failure rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError(TelemetryError);

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            TelemetryError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            // An unknown core is an unknown route.
            TelemetryError::InvalidCore(_) => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            TelemetryError::InvalidLevel(_) | TelemetryError::CountTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            TelemetryError::UpstreamUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct CountParams {
    count: Option<usize>,
}

fn parse_core(raw: &str) -> Result<CoreId, ApiError> {
    raw.parse::<CoreId>().map_err(ApiError::from)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "4G/5G Core Migration Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "4g_components": "/api/4g/components",
            "5g_components": "/api/5g/components",
            "4g_logs": "/api/4g/logs/{component}",
            "5g_logs": "/api/5g/logs/{component}",
            "4g_all_logs": "/api/4g/logs/all",
            "5g_all_logs": "/api/5g/logs/all",
            "migration_status": "/api/migration/status",
            "component_mapping": "/api/component-mapping",
        }
    }))
}

async fn components(
    Path(core): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ComponentViews>, ApiError> {
    let core = parse_core(&core)?;
    Ok(Json(state.service.component_views(core)))
}

async fn logs(
    Path((core, component)): Path<(String, String)>,
    Query(params): Query<CountParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LogRecord>>, ApiError> {
    let core = parse_core(&core)?;
    let limits = &state.simulation;
    let records = if component == ALL_COMPONENTS {
        let count = limits.check_count(params.count.unwrap_or(limits.aggregate_log_count))?;
        state.service.logs_for_core(core, count)
    } else {
        let count = limits.check_count(params.count.unwrap_or(limits.component_log_count))?;
        state.service.logs_for_component(core, &component, count)?
    };
    Ok(Json(records))
}

async fn migration_status(State(state): State<AppState>) -> Json<MigrationSnapshot> {
    Json(state.service.migration_snapshot())
}

async fn component_mapping(State(state): State<AppState>) -> Json<ComponentMappings> {
    Json(state.service.mappings())
}

async fn not_found() -> ApiError {
    ApiError(TelemetryError::InvalidCore(String::new()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/migration/status", get(migration_status))
        .route("/api/component-mapping", get(component_mapping))
        .route("/api/:core/components", get(components))
        .route("/api/:core/logs/:component", get(logs))
        .fallback(not_found)
        .with_state(state)
}

pub struct HttpServer;

impl HttpServer {
    /// Serve until ctrl-c.
    pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(%addr, "telemetry API listening");
        axum::serve(listener, router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("telemetry API server failed")
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("ctrl-c handler unavailable; server runs until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down telemetry API");
}
