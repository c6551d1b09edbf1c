//! Flat-file stores backing the application
//!
//! Every store is a whole-file read or overwrite of a JSON or CSV
//! document in the data directory. Writes go to a temp file first and
//! are renamed into place under an exclusive lock, so a crash mid-save
//! never leaves a truncated store behind.

mod accounts;
mod catalog;
mod plans;

pub use accounts::{hash_password, normalize_email, AccountStore, Accounts, AuthError, SignupError};
pub use catalog::CatalogStore;
pub use plans::PlanStore;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Errors raised by the flat-file stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn corrupt(path: &Path, reason: impl std::fmt::Display) -> Self {
        StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Default data directory (~/.equinox/).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".equinox")
}

/// Read a store file, treating a missing or empty file as "no data".
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}

/// Overwrite a store file with atomic write and file locking.
///
/// 1. Exclusive lock serializes concurrent writers of the same store
/// 2. Temp file + rename prevents corruption on crash
/// 3. Parent directory is created if needed
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    // Lock file is separate from the store to survive the rename
    let lock_path = path.with_extension("lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|e| StoreError::io(&lock_path, e))?;

    // Blocks until any in-flight save of this store completes
    lock_file
        .lock_exclusive()
        .map_err(|e| StoreError::io(&lock_path, e))?;

    let temp_path = path.with_extension("tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| StoreError::io(&temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| StoreError::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| StoreError::io(&temp_path, e))?;

    std::fs::rename(&temp_path, path).map_err(|e| StoreError::io(path, e))?;

    // Lock released when lock_file is dropped
    Ok(())
}
