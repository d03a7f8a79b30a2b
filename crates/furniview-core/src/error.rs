//! Error handling for FurniView
//!
//! Errors raised by model validation and controller operations. I/O and file
//! format errors live in the storage crate.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// User input failed validation before reaching the model
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An operation needed a current design but none is loaded
    #[error("No design is loaded")]
    NoDesign,

    /// Furniture id not present in the design or catalog
    #[error("Furniture {0} not found")]
    FurnitureNotFound(Uuid),

    /// Room shape name not recognised
    #[error("Invalid room shape: {0}")]
    UnknownRoomShape(String),

    /// Color scheme preset name not recognised
    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an `InvalidInput` error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an `Other` error from any message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
