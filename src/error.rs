//! Errors surfaced by the application context.

use std::io;

use furniview_designer::DesignerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A design operation was attempted without a logged-in user.
    #[error("You must be logged in to work with designs")]
    NotLoggedIn,

    #[error(transparent)]
    Designer(#[from] DesignerError),

    #[error("Scene engine failed to start: {0}")]
    Engine(#[from] io::Error),
}

impl From<furniview_core::Error> for AppError {
    fn from(err: furniview_core::Error) -> Self {
        Self::Designer(err.into())
    }
}

impl From<furniview_storage::StorageError> for AppError {
    fn from(err: furniview_storage::StorageError) -> Self {
        Self::Designer(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
