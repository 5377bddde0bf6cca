use clap::Parser;

use cutover::logging::{self, Verbosity};
use cutover::settings::load_config;
use cutover_ui_terminal::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_stderr(Verbosity::from_flags(cli.verbose, cli.quiet))?;

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    run(cli, config).await
}
