use std::process;

mod cli;
mod exit_codes;
mod logging;

use anyhow::Context;
use cli::{Cli, Commands};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use todo_lists_common::Pretty;
use todo_lists_config::{load_configuration, ServerConfig};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    logging::configure_logging(cli.verbose, cli.debug, cli.quiet);

    let exit_code = match run(&cli).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_ERROR
        }
    };
    process::exit(exit_code);
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config =
        load_configuration(cli.config.clone()).context("Failed to load configuration")?;

    match cli.command() {
        Commands::Serve { host, port } => {
            apply_overrides(&mut config, host, port)?;
            tracing::debug!("Resolved configuration: {}", Pretty(&config));
            todo_lists_web::run(&config)
                .await
                .context("Todo Lists server stopped with an error")?;
        }
        Commands::Config => {
            let yaml = serde_yaml_ng::to_string(&config)
                .context("Failed to render configuration as YAML")?;
            print!("{yaml}");
        }
    }

    Ok(())
}

/// Apply `serve` flags, which take precedence over every configuration source
fn apply_overrides(
    config: &mut ServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
        .validate()
        .context("Invalid command-line override")?;
    Ok(())
}
