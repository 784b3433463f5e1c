//! Error types for the analysis toolkit.
//!
//! The engines themselves never fail for normal data variation: short
//! history and degenerate inputs surface as `None` values, not errors.
//! These types cover the boundaries around the core, where data is loaded
//! and configuration is read.

use thiserror::Error;

/// Top-level application error.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Data ingestion errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available at {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Duplicate timestamp in series: {0}")]
    DuplicateTimestamp(i64),
}

/// Result type alias for toolkit operations.
pub type InsightResult<T> = Result<T, InsightError>;
