//! Error types for the storage crate.
//!
//! Covers configuration files, design files, the user store, and the
//! furniture catalog file.

use std::io;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// No design file exists under this name.
    #[error("Design '{0}' not found")]
    DesignNotFound(String),

    /// The design name cannot be used as a file name.
    #[error("Invalid design name '{0}'")]
    InvalidName(String),

    /// `save` was called before any `save as`.
    #[error("No previous file name exists; save the design under a name first")]
    NoPreviousFileName,

    /// A configuration value is invalid or the file format is unsupported.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
