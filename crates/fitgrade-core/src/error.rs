//! Core error types for fitgrade-core.
//!
//! This module defines the error hierarchy using thiserror. Aggregation
//! failures (`MalformedInputError`) and fetch failures (`FetchError`) are
//! both recoverable; the dashboard layer maps them to a "no data" state.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fitgrade-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Raw session data had the wrong shape
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),

    /// No user identity in the session
    #[error("No user id configured; set one with `config set session.user_id <id>`")]
    MissingIdentity,

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while talking to the stats backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured base URL could not be joined with an endpoint path
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Raised by the aggregation primitives when input cannot be partitioned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInputError {
    /// Sequence length does not fit the required partition
    #[error("expected {expected}, got {actual} elements")]
    LengthMismatch { expected: String, actual: usize },

    /// Chunk size of zero
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// Nothing to aggregate
    #[error("input sequence is empty")]
    Empty,

    /// Window boundaries are not a strictly ascending list of at least two finite values
    #[error("invalid window boundaries: {0}")]
    InvalidBoundaries(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the config directory
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the config tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Date key was not `YYYY-MM-DD`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Exercise kind not recognized
    #[error("Unknown exercise kind '{0}' (expected pushup, run or situp)")]
    UnknownKind(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
