//! Error types for the roster.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use std::path::PathBuf;
use thiserror::Error;

/// Cross-record invariant violations raised by the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A record with the same identity already exists
    #[error("This {kind} already exists in the roster: {identity}")]
    DuplicateRecord { kind: &'static str, identity: String },

    /// Two tutorials would share a venue and timeslot
    #[error("Tutorial {tutorial} clashes with tutorial {existing}: both are held at {venue} during {timeslot}")]
    ScheduleClash {
        tutorial: String,
        existing: String,
        venue: String,
        timeslot: String,
    },

    /// The record to edit or remove is not in the roster
    #[error("No such {kind} in the roster: {identity}")]
    RecordNotFound { kind: &'static str, identity: String },
}

/// Errors that can occur while loading or saving the roster.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A required field is absent from a stored record
    #[error("{record}'s {field} field is missing!")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A stored field fails re-validation
    #[error("{message}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        message: &'static str,
    },

    /// The stored records violate a roster invariant
    #[error("Stored roster is inconsistent: {0}")]
    Conflict(#[from] RosterError),

    /// Reading or writing the data file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not well-formed JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
