//! Ebios CLI and REST API entry point.
//!
//! Binary name: `ebios`
//!
//! Parses CLI arguments, loads configuration, then either starts the REST
//! API server or runs one of the client commands against it.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use ebios_infra::config::{load_config, load_env_file};
use ebios_infra::filesystem::resolve_data_dir;
use ebios_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions need nothing else
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "ebios", &mut std::io::stdout());
        return Ok(());
    }

    load_env_file();
    init_tracing(cli.otel, cli::default_filter(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let mut config = load_config(&data_dir).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            cli::serve::run(&config).await
        }
        Commands::Chat { session } => {
            cli::chat::loop_runner::run_chat_loop(&config, &data_dir, session).await
        }
        Commands::Health => cli::status::health(&config, cli.json).await,
        Commands::Clear { yes } => cli::status::clear(&config, &data_dir, yes, cli.json).await,
        Commands::Completions { .. } => Ok(()),
    }
}
