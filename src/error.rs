//! Error types for the Stemma library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StemmaError`] enum. The stemming algorithm itself is total over
//! well-formed input, so in practice the errors fall into three groups:
//!
//! - caller contract violations ([`StemmaError::InvalidInput`]),
//! - buffer growth failures ([`StemmaError::Allocation`]), which are fatal,
//! - configuration and I/O problems raised by the config loader and the CLI.
//!
//! # Examples
//!
//! ```
//! use stemma::error::{Result, StemmaError};
//!
//! fn check(word: &str) -> Result<()> {
//!     if word.is_empty() {
//!         return Err(StemmaError::invalid_input("empty word"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! ```

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// The main error type for Stemma operations.
#[derive(Error, Debug)]
pub enum StemmaError {
    /// The caller passed a word the stemmer does not accept (empty, not
    /// lowercase ASCII letters, or a source range outside the buffer).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The working buffer could not grow.
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Configuration errors (bad irregular entries, unreadable config, etc.)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (config files, CLI input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with StemmaError.
pub type Result<T> = std::result::Result<T, StemmaError>;

impl StemmaError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        StemmaError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StemmaError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(msg.into())
    }

    /// Whether this error is a caller contract violation rather than a
    /// resource or environment failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StemmaError::InvalidInput(_))
    }
}
