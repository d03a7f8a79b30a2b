//! Application configuration
//!
//! Settings are grouped into sections:
//! - Storage locations (design directory, user store, furniture catalog)
//! - View defaults (canvas size, grid and label visibility)
//!
//! Files may be JSON or TOML; the format follows the file extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Where design, user, and catalog files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding `.fvd` design files.
    pub designs_dir: PathBuf,
    /// File mapping usernames to password hashes.
    pub users_file: PathBuf,
    /// File holding the furniture template catalog.
    pub catalog_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            designs_dir: PathBuf::from("designs"),
            users_file: PathBuf::from("users.dat"),
            catalog_file: PathBuf::from("furniture_catalog.dat"),
        }
    }
}

impl StorageSettings {
    /// Resolve every relative path against `base`.
    pub fn rooted_at(&self, base: &Path) -> Self {
        let root = |p: &PathBuf| if p.is_absolute() { p.clone() } else { base.join(p) };
        Self {
            designs_dir: root(&self.designs_dir),
            users_file: root(&self.users_file),
            catalog_file: root(&self.catalog_file),
        }
    }
}

/// Initial view state for the 2D canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Draw the 1 m grid.
    pub show_grid: bool,
    /// Draw room and furniture name labels.
    pub show_labels: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            show_grid: true,
            show_labels: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub view: ViewSettings,
}

impl AppConfig {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> StorageResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(StorageError::Config(
                    "Config file must be .json or .toml".to_string(),
                ))
            }
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> StorageResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> StorageResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(StorageError::Config(
                    "Config file must be .json or .toml".to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> StorageResult<()> {
        let storage = &self.storage;
        if storage.designs_dir.as_os_str().is_empty() {
            return Err(StorageError::Config("Designs directory must be set".to_string()));
        }
        if storage.users_file.as_os_str().is_empty() {
            return Err(StorageError::Config("User store file must be set".to_string()));
        }
        if storage.catalog_file.as_os_str().is_empty() {
            return Err(StorageError::Config("Catalog file must be set".to_string()));
        }

        if self.view.canvas_width == 0 || self.view.canvas_height == 0 {
            return Err(StorageError::Config("Canvas dimensions must be > 0".to_string()));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
