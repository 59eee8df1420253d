use thiserror::Error;

/// Error type covering malformed forecast input and front-end I/O failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),
    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),
    #[error("Invalid month key: {0}")]
    InvalidMonth(String),
    #[error("Transaction {0} is not recurring")]
    NotRecurring(String),
    #[error("Transaction {0} has a negative amount")]
    NegativeAmount(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
