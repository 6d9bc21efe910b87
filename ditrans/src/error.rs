//! Error types for the ditrans formatter.
//!
//! - [`LoadError`] - Reading and parsing the examples table
//! - [`LookupError`] - Resolving a requested example number
//! - [`ConfigError`] - Invalid command-line or environment settings
//! - [`AppError`] - Top-level errors returned by [`crate::run`]
//!
//! Conversion into [`AppError`] is automatic via `From` implementations,
//! so `?` works across module boundaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::RowId;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the examples table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read.
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row lacks a required column.
    #[error("Missing column '{0}' in header")]
    MissingColumn(&'static str),

    /// A data row could not be parsed.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Any other CSV failure (header unreadable, bad quoting, ...).
    #[error("Invalid table: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Lookup Errors
// =============================================================================

/// Errors while resolving an example number inside a language view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The number is not one of the view's rows.
    #[error("No example {number} for {language} (field '{field}')")]
    UnknownExample {
        number: RowId,
        language: String,
        field: &'static str,
    },
}

impl LookupError {
    /// The example number that could not be resolved.
    pub fn number(&self) -> RowId {
        match self {
            LookupError::UnknownExample { number, .. } => *number,
        }
    }

    /// Message shown to the user on stderr.
    pub fn user_message(&self) -> String {
        format!("Sorry, \"{}\" is not a valid example number.", self.number())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors in the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Delimiter must be a single ASCII character.
    #[error("Invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),

    /// Unknown log format.
    #[error("Unknown log format '{0}' (expected 'text' or 'json')")]
    InvalidLogFormat(String),
}

// =============================================================================
// Application Errors (top-level)
// =============================================================================

/// Top-level error returned by the driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Writing the formatted output failed.
    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for table loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for example lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for the driver.
pub type AppResult<T> = Result<T, AppError>;
