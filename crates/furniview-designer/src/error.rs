//! Error types for the designer crate.

use furniview_core::Error as ModelError;
use furniview_storage::StorageError;
use thiserror::Error;

/// Errors raised by the design, room, and catalog controllers.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Invalid input or missing design.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Saving or loading failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for designer operations.
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
