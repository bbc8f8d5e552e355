use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Settings error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),
    #[error("Invalid separators: {0}")]
    InvalidSeparators(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
