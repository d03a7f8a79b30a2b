//! Design file storage.
//!
//! One design per `.fvd` file inside a single directory. Each file holds the
//! whole design graph as JSON with no header or version; loading always runs
//! the repair pass in [`crate::record`].

use furniview_core::Design;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StorageError, StorageResult};
use crate::record::DesignRecord;

/// File extension for design files.
pub const DESIGN_EXTENSION: &str = "fvd";

/// Reads and writes design files in one directory.
#[derive(Debug, Clone)]
pub struct FileManager {
    dir: PathBuf,
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new("designs")
    }
}

impl FileManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file for a design name.
    pub fn path_for(&self, name: &str) -> StorageResult<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{DESIGN_EXTENSION}")))
    }

    /// Save a design under `name`, creating the directory if needed.
    pub fn save_design(&self, design: &Design, name: &str) -> StorageResult<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        write_design(design, &path)?;
        info!("Saved design '{}' to {}", design.name(), path.display());
        Ok(())
    }

    /// Load the design stored under `name`.
    pub fn load_design(&self, name: &str) -> StorageResult<Design> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(StorageError::DesignNotFound(name.to_string()));
        }
        let design = read_design(&path)?;
        debug!("Loaded design '{}' from {}", design.name(), path.display());
        Ok(design)
    }

    /// Names of all stored designs, sorted, without extension.
    pub fn list_designs(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(DESIGN_EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    pub fn design_exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.exists()).unwrap_or(false)
    }

    /// Delete a stored design. Returns false if nothing was deleted.
    pub fn delete_design(&self, name: &str) -> bool {
        let Ok(path) = self.path_for(name) else {
            return false;
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted design file {}", path.display());
                true
            }
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Error deleting design {}: {}", path.display(), e);
                }
                false
            }
        }
    }

    /// Write a design to an arbitrary path.
    pub fn export_design(&self, design: &Design, path: &Path) -> StorageResult<()> {
        write_design(design, path)?;
        info!("Exported design '{}' to {}", design.name(), path.display());
        Ok(())
    }

    /// Read a design from an arbitrary path.
    pub fn import_design(&self, path: &Path) -> StorageResult<Design> {
        read_design(path)
    }

    /// Copy every design file into `backup_dir`. Returns the number copied.
    pub fn backup_designs(&self, backup_dir: &Path) -> StorageResult<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        fs::create_dir_all(backup_dir)?;

        let mut copied = 0;
        for name in self.list_designs() {
            let source = self.path_for(&name)?;
            let target = backup_dir.join(format!("{name}.{DESIGN_EXTENSION}"));
            fs::copy(&source, &target)?;
            copied += 1;
        }
        info!("Backed up {} designs to {}", copied, backup_dir.display());
        Ok(copied)
    }
}

fn validate_name(name: &str) -> StorageResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
    {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn write_design(design: &Design, path: &Path) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(design)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_design(path: &Path) -> StorageResult<Design> {
    let content = fs::read_to_string(path)?;
    let record: DesignRecord = serde_json::from_str(&content)?;
    Ok(record.into_design())
}
