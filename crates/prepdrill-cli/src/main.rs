//! Prepdrill CLI
//!
//! Rehearse technical interviews against a job description.

use anyhow::Result;
use clap::Parser;
use prepdrill_core::Config;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let config = Config::load()?;
    config.validate()?;

    let result = match cli.command {
        Commands::Ingest(args) => commands::ingest::run(args, &config, cli.format),
        Commands::Search(args) => commands::search::run(args, &config, cli.format),
        Commands::Questions(args) => {
            commands::questions::run(args, &config, cli.format).await
        }
        Commands::Feedback(args) => commands::feedback::run(args, &config, cli.format).await,
    };

    if let Err(err) = &result {
        if let Some(core_err) = err.downcast_ref::<prepdrill_core::PrepdrillError>() {
            eprintln!("error: {}", core_err);
            std::process::exit(core_err.exit_code());
        }
    }

    result
}
