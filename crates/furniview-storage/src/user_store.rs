//! User accounts.
//!
//! A single file maps usernames to hex-encoded SHA-256 password hashes. The
//! hash is unsalted. A missing or unreadable file is replaced by one holding
//! the default `admin` account.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::StorageResult;

/// Default account created with a fresh store.
pub const DEFAULT_ADMIN_USER: &str = "admin";
/// Password of the default account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Username to password-hash store with a current session.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
    current_user: Option<String>,
}

impl UserStore {
    /// Open the store at `path`, creating it with the default account if it
    /// is missing or cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let loaded = if path.exists() {
            match read_users(&path) {
                Ok(users) => Some(users),
                Err(e) => {
                    warn!("Error loading users from {}: {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        let mut store = Self {
            path,
            users: loaded.clone().unwrap_or_default(),
            current_user: None,
        };
        if loaded.is_none() {
            store.register_user(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD)?;
            info!("Created user store at {}", store.path.display());
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a new account. Returns false if the username is taken or
    /// either field is empty.
    pub fn register_user(&mut self, username: &str, password: &str) -> StorageResult<bool> {
        if username.trim().is_empty() || password.is_empty() {
            return Ok(false);
        }
        if self.users.contains_key(username) {
            return Ok(false);
        }
        self.users
            .insert(username.to_string(), hash_password(password));
        self.save()?;
        Ok(true)
    }

    /// Check credentials and start a session on success.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(stored) if *stored == hash_password(password) => {
                self.current_user = Some(username.to_string());
                info!("User '{}' logged in", username);
                true
            }
            _ => {
                warn!("Failed login for '{}'", username);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("User '{}' logged out", user);
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn save(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.users)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Hex-encoded SHA-256 of the password bytes.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

fn read_users(path: &Path) -> StorageResult<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
