use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Board service returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Invalid due date: {0}")]
    DueFormat(String),

    #[error("No recurrence rule in description: {0:?}")]
    RuleFormat(String),

    #[error("Unknown recurrence unit: {0:?}")]
    UnknownUnit(String),

    #[error("Recurrence count must be positive")]
    ZeroCount,

    #[error("Date arithmetic overflow while advancing past {0}")]
    DateOverflow(chrono::DateTime<chrono::Utc>),

    #[error("Board has no list named {0}")]
    MissingList(String),
}

pub type Result<T> = std::result::Result<T, RotaError>;
