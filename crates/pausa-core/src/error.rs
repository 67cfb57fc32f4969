//! Core error types for pausa-core.
//!
//! Nothing in the core is fatal: every failure path either surfaces a
//! typed error to the caller or degrades to a safe default (malformed
//! persisted JSON reads back as the default value).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pausa-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Work window must end after it starts
    #[error("Invalid work schedule: end time ({end}) must be after start time ({start})")]
    InvalidTimeRange { start: String, end: String },

    /// Work window shorter than the supported minimum
    #[error("Work window too short: {minutes} minutes (minimum {min_minutes})")]
    WindowTooShort { minutes: u32, min_minutes: u32 },

    /// Session count outside the supported set
    #[error("Unsupported session count: {0} (allowed: 6, 8, 12)")]
    UnsupportedSessionCount(u32),

    /// Custom exercise form failed validation; one message per problem
    #[error("Invalid exercise: {}", .0.join("; "))]
    InvalidExercise(Vec<String>),

    /// Custom exercise limit reached
    #[error("Cannot add more than {0} custom exercises")]
    TooManyExercises(usize),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Import errors. Import never partially mutates existing state: any of
/// these means nothing was written.
#[derive(Error, Debug)]
pub enum ImportError {
    /// File could not be read
    #[error("Could not read import file: {0}")]
    Unreadable(String),

    /// File is not valid Pausa JSON
    #[error("Not a valid Pausa export file: {0}")]
    InvalidFormat(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
