use super::resolve_database_path;
use crate::analysis::{OutputFormat, ReportFormatter};
use crate::config::AppConfig;
use crate::database::{Database, DatasetOperations, StatisticsOperations};
use crate::errors::{AppError, AppResult};
use crate::types::dataset::Dataset;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct InitDbCommand {
    /// Database path (overrides config.toml and env vars)
    #[arg(long)]
    database_path: Option<PathBuf>,
}

impl InitDbCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let db_path = resolve_database_path(&self.database_path, app_config)?;
        Database::new(&db_path)?;
        println!("Schema ready: {}", db_path);
        Ok(())
    }
}

#[derive(Args)]
pub struct ImportCommand {
    /// JSON dataset to import
    #[arg(long)]
    file: PathBuf,

    /// Database path (overrides config.toml and env vars)
    #[arg(long)]
    database_path: Option<PathBuf>,

    /// Output format for the store summary (console or json)
    #[arg(long, default_value = "console")]
    format: String,
}

impl ImportCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let format: OutputFormat = self.format.parse().map_err(AppError::Config)?;

        let contents = std::fs::read_to_string(&self.file)?;
        let dataset = Dataset::from_json(&contents)?;
        info!(
            "Loaded dataset {} with {} rows",
            self.file.display(),
            dataset.row_count()
        );

        let db_path = resolve_database_path(&self.database_path, app_config)?;
        let mut db = Database::new(&db_path)?;
        let inserted = db.import_dataset(&dataset)?;

        let summary = ReportFormatter::format_store_stats(&db.get_store_stats()?, &format)?;
        if format == OutputFormat::Console {
            println!("Imported {} rows into {}\n", inserted, db_path);
        }
        print!("{}", summary);
        Ok(())
    }
}
