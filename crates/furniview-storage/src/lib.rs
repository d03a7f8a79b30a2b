//! FurniView Storage Crate
//!
//! Handles application configuration, design files, user accounts, and the
//! furniture catalog file.

pub mod catalog_store;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod record;
pub mod user_store;

pub use catalog_store::CatalogStore;
pub use config::{AppConfig, StorageSettings, ViewSettings};
pub use error::{StorageError, StorageResult};
pub use file_manager::{FileManager, DESIGN_EXTENSION};
pub use record::DesignRecord;
pub use user_store::{hash_password, UserStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};
