//! Error types for the porter2 crate.
//!
//! Stemming itself never fails. Errors come from the layers around it:
//! loading configuration, reading word lists, and the token filters whose
//! [`Filter`](crate::analysis::token_filter::Filter) contract returns a
//! [`Result`].
//!
//! # Examples
//!
//! ```
//! use porter2::error::{Result, StemError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for porter2 operations.
#[derive(Error, Debug)]
pub enum StemError {
    /// I/O errors (reading word lists, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller-supplied arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StemError.
pub type Result<T> = std::result::Result<T, StemError>;

impl StemError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StemError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemError::Other(msg.into())
    }
}
