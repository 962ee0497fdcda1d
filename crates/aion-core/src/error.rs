//! Error types for AION

use thiserror::Error;

/// Core AION errors
#[derive(Error, Debug)]
pub enum AionError {
    #[error("age {years} outside supported domain [{min}, {max}]")]
    AgeOutOfRange { years: i64, min: u8, max: u8 },

    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Result type for AION operations
pub type AionResult<T> = Result<T, AionError>;
