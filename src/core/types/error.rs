use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ERROR executing \"{command}\": {detail}")]
    Command { command: String, detail: String },

    #[error("Query task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Custom(String),
}

pub type AppResult<T> = Result<T, AppError>;
