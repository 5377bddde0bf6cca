//! One-shot command line front end.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use cutover_adapter_cluster::ClusterController;
use cutover_adapter_http::ApiClient;
use cutover_application::{FallbackTelemetry, StatusPolicy, TelemetryService, combined_logs};
use cutover_domain::{CoreFilter, CoreId, CutoverConfig, LogLevel, LogQuery};
use cutover_ports::{ClusterPort, CommandOutput, TelemetryPort};
use cutover_ui_presentation::formatting::mapping_rows;

use crate::render;

#[derive(Debug, Parser)]
#[command(name = "cutover", version, about = "4G/5G core migration telemetry")]
pub struct Cli {
    /// Telemetry API base URL.
    #[arg(long, env = "CUTOVER_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout for the telemetry API.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Skip the API and simulate locally.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print raw JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, env = "CUTOVER_CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Component health for one core (4g or 5g).
    Components { core: CoreId },
    /// Logs of one component, or of the whole core.
    Logs {
        core: CoreId,
        #[arg(long)]
        component: Option<String>,
        #[arg(long)]
        count: Option<usize>,
    },
    /// Combined log stream across cores.
    Stream {
        #[arg(long, default_value = "all")]
        core: CoreFilter,
        #[arg(long)]
        level: Option<LogLevel>,
        #[arg(long, default_value_t = 30)]
        count: usize,
    },
    /// Migration phase and progress.
    Migration,
    /// Legacy to replacement component mapping.
    Mapping,
    /// Pod listing and running-pod summary.
    Pods,
    /// Run the migration script.
    Migrate,
    /// Run the 4G rollback script.
    Rollback,
    /// Delete every resource in the namespace.
    Purge {
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Flags win over file and environment configuration.
    pub fn apply_to(&self, config: &mut CutoverConfig) {
        if let Some(url) = &self.api_url {
            config.client.api_url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.client.timeout_ms = timeout_ms;
        }
    }
}

fn telemetry(cli: &Cli, config: &CutoverConfig) -> Result<Arc<dyn TelemetryPort>> {
    let local = TelemetryService::from_config(&config.simulation, StatusPolicy::Standalone);
    if cli.offline {
        return Ok(Arc::new(local));
    }
    let remote = ApiClient::from_config(&config.client)?;
    tracing::debug!(api_url = remote.base_url(), "using telemetry API");
    Ok(Arc::new(FallbackTelemetry::new(remote, local)))
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}

fn finish_command(output: &CommandOutput) -> Result<()> {
    print!("{}", render::render_command_output(output));
    if !output.success() {
        bail!("`{}` did not complete successfully", output.command);
    }
    Ok(())
}

pub async fn run(cli: Cli, config: CutoverConfig) -> Result<()> {
    let port = telemetry(&cli, &config)?;
    let cluster = ClusterController::new(config.cluster.clone());

    match &cli.command {
        Commands::Components { core } => {
            let views = port.components(*core).await?;
            emit(cli.json, &views, |views| render::render_components(*core, views))
        }
        Commands::Logs {
            core,
            component,
            count,
        } => {
            let limits = &config.simulation;
            let records = match component.as_deref() {
                Some(component) => {
                    let count = limits.check_count(count.unwrap_or(limits.component_log_count))?;
                    port.component_logs(*core, component, count).await?
                }
                None => {
                    let count = limits.check_count(count.unwrap_or(limits.aggregate_log_count))?;
                    port.core_logs(*core, count).await?
                }
            };
            emit(cli.json, &records, |records| render::render_logs(records))
        }
        Commands::Stream { core, level, count } => {
            let count = config.simulation.check_count(*count)?;
            let query = LogQuery::new(count).with_core(*core).with_level(*level);
            let stream = combined_logs(port.as_ref(), &query).await?;
            emit(cli.json, &stream.records, |records| {
                format!(
                    "{}\n{}",
                    render::render_level_counts(&stream.counts),
                    render::render_logs(records)
                )
            })
        }
        Commands::Migration => {
            let snapshot = port.migration_status().await?;
            emit(cli.json, &snapshot, render::render_migration)
        }
        Commands::Mapping => {
            let rows = mapping_rows(&port.component_mappings().await?);
            emit(cli.json, &rows, |rows| render::render_mappings(rows))
        }
        Commands::Pods => {
            let summary = cluster.pod_summary().await?;
            println!("{}", render::render_pod_summary(&summary));
            finish_command(&cluster.list_pods().await?)
        }
        Commands::Migrate => finish_command(&cluster.migrate().await?),
        Commands::Rollback => finish_command(&cluster.rollback().await?),
        Commands::Purge { yes } => {
            if !yes {
                bail!(
                    "refusing to delete all resources in namespace '{}' without --yes",
                    cluster.namespace()
                );
            }
            finish_command(&cluster.purge().await.context("purge failed")?)
        }
    }
}
