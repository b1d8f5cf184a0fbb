use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("No usable data: {0}")]
    NoUsableData(String),
}

/// Type alias for Result with FreqError
pub type Result<T> = std::result::Result<T, FreqError>;

impl FreqError {
    /// Create a new NoUsableData error
    pub fn no_usable_data(message: impl Into<String>) -> Self {
        FreqError::NoUsableData(message.into())
    }
}
