use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use cutover::logging::{self, Verbosity};
use cutover::settings::load_config;
use cutover_adapter_cluster::ClusterController;
use cutover_adapter_http::ApiClient;
use cutover_application::{FallbackTelemetry, StatusPolicy, TelemetryService};
use cutover_ports::{PortSet, TelemetryPort};
use cutover_ui_tui::{AppContext, start};

/// Interactive migration dashboard.
#[derive(Debug, Parser)]
#[command(name = "tui", version)]
struct Args {
    #[arg(long, env = "CUTOVER_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "CUTOVER_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Skip the API and simulate locally.
    #[arg(long)]
    offline: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init_file(
        Verbosity::from_flags(args.verbose, false),
        &logging::dashboard_log_path(),
    )?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = args.api_url {
        config.client.api_url = url;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let local = TelemetryService::from_config(&config.simulation, StatusPolicy::Standalone);
    let telemetry: Arc<dyn TelemetryPort> = if args.offline {
        Arc::new(local)
    } else {
        Arc::new(FallbackTelemetry::new(
            ApiClient::from_config(&config.client)?,
            local,
        ))
    };
    let cluster = Arc::new(ClusterController::new(config.cluster.clone()));

    start(AppContext {
        ports: PortSet::new(telemetry, cluster),
        dashboard: config.dashboard.clone(),
        namespace: config.cluster.namespace.clone(),
        api_url: config.client.api_url.clone(),
    })
}
