use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Community analytics aggregation engine
#[derive(Parser)]
#[command(name = "community-stats")]
#[command(about = "Time-bucketed statistics for community groups, members, events and attendees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create the entity store schema
    InitDb(commands::database::InitDbCommand),
    /// Import a JSON dataset into the entity store
    Import(commands::database::ImportCommand),
    /// Build the statistics report for a community
    Stats(commands::stats::StatsCommand),
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let app_config = AppConfig::load()?;

    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (falls back to logging.filter from config)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Commands::InitDb(command) => command.run(&app_config),
        Commands::Import(command) => command.run(&app_config),
        Commands::Stats(command) => command.run(&app_config),
    }
}
