// file: src/main.rs
// version: 1.0.0
// guid: d92b60f4-3a85-4c17-9e0d-6b41f8a2c573

//! Spark ETL Runner - Main entry point

use clap::Parser;
use spark_etl_runner::{
    cli::{args::Cli, commands::*},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    let config = cli.config.as_deref();

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting");
    };

    let command_future = async {
        match cli.command {
            spark_etl_runner::cli::args::Commands::Up { build, dry_run } => {
                up_command(config, build, dry_run).await
            }
            spark_etl_runner::cli::args::Commands::Down { volumes, dry_run } => {
                down_command(config, volumes, dry_run).await
            }
            spark_etl_runner::cli::args::Commands::Status { json } => {
                status_command(config, json).await
            }
            spark_etl_runner::cli::args::Commands::Submit {
                script,
                args,
                no_build,
                dry_run,
            } => submit_command(config, &script, &args, no_build, dry_run).await,
            spark_etl_runner::cli::args::Commands::Test {
                pattern,
                no_setup,
                dry_run,
            } => test_command(config, pattern.as_deref(), no_setup, dry_run).await,
            spark_etl_runner::cli::args::Commands::CheckPrereqs => {
                check_prerequisites_command().await
            }
        }
    };

    // Run command with signal handling
    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
