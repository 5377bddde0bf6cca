use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use cutover_domain::{
    ClientConfig, ComponentMappings, ComponentViews, CoreId, LogRecord, MigrationSnapshot,
    TelemetryError, TelemetryResult,
};
use cutover_ports::TelemetryPort;

use crate::router::ALL_COMPONENTS;

/// Transport-level outcome before it is given telemetry meaning.
enum FetchError {
    NotFound,
    Unavailable(String),
}

/// Telemetry port backed by a remote telemetry API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        count: Option<usize>,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if let Some(count) = count {
            request = request.query(&[("count", count)]);
        }
        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Unavailable(format!("GET {url}: {err}")))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            status if !status.is_success() => {
                Err(FetchError::Unavailable(format!("GET {url}: HTTP {status}")))
            }
            _ => response
                .json::<T>()
                .await
                .map_err(|err| FetchError::Unavailable(format!("GET {url}: {err}"))),
        }
    }

    /// For routes where a 404 can only mean the API itself is wrong or absent.
    async fn fetch_route<T: DeserializeOwned>(
        &self,
        path: &str,
        count: Option<usize>,
    ) -> TelemetryResult<T> {
        self.fetch(path, count).await.map_err(|err| match err {
            FetchError::NotFound => {
                TelemetryError::UpstreamUnavailable(format!("{}{path}: HTTP 404", self.base_url))
            }
            FetchError::Unavailable(reason) => TelemetryError::UpstreamUnavailable(reason),
        })
    }
}

#[async_trait]
impl TelemetryPort for ApiClient {
    async fn components(&self, core: CoreId) -> TelemetryResult<ComponentViews> {
        self.fetch_route(&format!("/api/{}/components", core.path_segment()), None)
            .await
    }

    async fn component_logs(
        &self,
        core: CoreId,
        component: &str,
        count: usize,
    ) -> TelemetryResult<Vec<LogRecord>> {
        let path = format!("/api/{}/logs/{component}", core.path_segment());
        self.fetch(&path, Some(count))
            .await
            .map_err(|err| match err {
                FetchError::NotFound => TelemetryError::not_found(core, component),
                FetchError::Unavailable(reason) => TelemetryError::UpstreamUnavailable(reason),
            })
    }

    async fn core_logs(&self, core: CoreId, count: usize) -> TelemetryResult<Vec<LogRecord>> {
        let path = format!("/api/{}/logs/{ALL_COMPONENTS}", core.path_segment());
        self.fetch_route(&path, Some(count)).await
    }

    async fn migration_status(&self) -> TelemetryResult<MigrationSnapshot> {
        self.fetch_route("/api/migration/status", None).await
    }

    async fn component_mappings(&self) -> TelemetryResult<ComponentMappings> {
        self.fetch_route("/api/component-mapping", None).await
    }
}
