//! Furniture template catalog file.

use furniview_core::Furniture;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StorageResult;

/// Reads and writes the serialized catalog list.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored catalog. `None` if the file is missing or unreadable,
    /// in which case callers seed their defaults.
    pub fn load(&self) -> Option<Vec<Furniture>> {
        if !self.path.exists() {
            return None;
        }
        let result: StorageResult<Vec<Furniture>> = fs::read_to_string(&self.path)
            .map_err(Into::into)
            .and_then(|content| serde_json::from_str(&content).map_err(Into::into));
        match result {
            Ok(items) => {
                debug!("Loaded {} catalog items from {}", items.len(), self.path.display());
                Some(items)
            }
            Err(e) => {
                warn!("Error loading furniture catalog: {}", e);
                None
            }
        }
    }

    pub fn save(&self, items: &[Furniture]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
