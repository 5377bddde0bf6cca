use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cutover::logging::{self, Verbosity};
use cutover::settings::load_config;
use cutover_adapter_http::{AppState, HttpServer};
use cutover_application::{StatusPolicy, TelemetryService};

/// Serve simulated 4G/5G core telemetry over HTTP.
#[derive(Debug, Parser)]
#[command(name = "api-service", version)]
struct Args {
    /// Listen address, e.g. 0.0.0.0:8000.
    #[arg(long)]
    bind: Option<String>,

    #[arg(long, env = "CUTOVER_CONFIG_PATH")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init_stderr(Verbosity::from_flags(args.verbose, args.quiet))?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind))?;

    let service = Arc::new(TelemetryService::from_config(
        &config.simulation,
        StatusPolicy::Primary,
    ));
    HttpServer::serve(addr, AppState::new(service, &config.simulation)).await
}
