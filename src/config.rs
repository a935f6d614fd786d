use crate::types::facts::AttendeeTimeBasis;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default database location when nothing is configured
pub const DEFAULT_DATABASE_PATH: &str = "./data/community_stats.db";

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub default_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing EnvFilter directive used when RUST_LOG is unset
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    pub attendee_time_basis: AttendeeTimeBasis,
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.default_path", DEFAULT_DATABASE_PATH)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("stats.attendee_time_basis", "registration")?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // COMMUNITY_STATS_LOGGING__FILTER, COMMUNITY_STATS_STATS__ATTENDEE_TIME_BASIS, ...
            .add_source(
                config::Environment::with_prefix("COMMUNITY_STATS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(db_path) = env::var("COMMUNITY_STATS_DATABASE_PATH") {
            app_config.database.default_path = PathBuf::from(db_path);
        }

        Ok(app_config)
    }
}
