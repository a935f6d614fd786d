use super::{resolve_database_path, write_output_to_file};
use crate::analysis::{parse_community_id, OutputFormat, ReportFormatter, StatsEngine};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::types::facts::AttendeeTimeBasis;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct StatsCommand {
    /// Community identifier (UUID)
    #[arg(long)]
    community_id: String,

    /// Database path (overrides config.toml and env vars)
    #[arg(long)]
    database_path: Option<PathBuf>,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Instant attendees are bucketed by: registration or event-start
    /// (overrides config.toml)
    #[arg(long)]
    attendee_time_basis: Option<AttendeeTimeBasis>,
}

impl StatsCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let community_id = parse_community_id(&self.community_id)?;
        let format: OutputFormat = self.format.parse().map_err(AppError::Config)?;
        let basis = self
            .attendee_time_basis
            .unwrap_or(app_config.stats.attendee_time_basis);

        let db_path = resolve_database_path(&self.database_path, app_config)?;
        let engine = StatsEngine::new(&db_path)?.with_attendee_time_basis(basis);

        info!("Building statistics for community {}", community_id);
        let stats = engine.community_stats(community_id)?;
        let output = ReportFormatter::format_community_stats(&stats, &format)?;

        if let Some(path) = &self.output {
            write_output_to_file(path, &output, "Community statistics")?;
        } else {
            print!("{}", output);
            if format == OutputFormat::Json {
                println!();
            }
        }
        Ok(())
    }
}
