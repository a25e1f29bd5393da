use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Could not parse date: {0}")]
    DateParse(String),

    #[error("Record not found: {0}")]
    RecordNotFound(u64),

    #[error("Invalid range: from ({from}) is after to ({to})")]
    InvalidRange { from: i64, to: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Aborted")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
