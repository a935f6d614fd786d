use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operations (store unavailable, query failure)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Identifier that is not a well-formed community/entity id
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
