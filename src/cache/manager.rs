//! Snapshot file for the aggregated output
//!
//! Provides a `SnapshotCache` that stores one serializable value as
//! pretty-printed JSON at a fixed path and reads it back verbatim.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used inside the default cache directory
const SNAPSHOT_FILE_NAME: &str = "festivals.json";

/// Errors that can occur when reading or writing the snapshot
#[derive(Debug, Error)]
pub enum CacheError {
    /// The snapshot file exists but could not be read
    #[error("Failed to read cache file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The snapshot file does not hold the expected JSON shape
    #[error("Failed to parse cache file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The value could not be turned into JSON
    #[error("Failed to serialize cache data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Directory creation or file writing failed
    #[error("Failed to write cache file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Reads and writes the snapshot file
///
/// The file holds the value exactly as serialized, with no envelope, so it
/// can be inspected or replaced by hand.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    /// Location of the snapshot file
    path: PathBuf,
}

impl SnapshotCache {
    /// Creates a cache backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default snapshot location in the XDG cache directory
    ///
    /// Uses `~/.cache/festival-labels/festivals.json` on Linux, or the
    /// equivalent on other platforms. Returns `None` if no home directory
    /// can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "festival-labels")?;
        Some(project_dirs.cache_dir().join(SNAPSHOT_FILE_NAME))
    }

    /// The snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot file is present
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` if the location could be checked
    /// * `Err(CacheError::Read)` if it could not, e.g. on a permission error,
    ///   so an inaccessible snapshot is never mistaken for a missing one
    pub fn exists(&self) -> Result<bool, CacheError> {
        self.path.try_exists().map_err(|source| CacheError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the snapshot and deserializes it
    ///
    /// # Returns
    /// * `Ok(T)` if the file exists and parses as `T`
    /// * `Err(CacheError::Read)` if the file cannot be read
    /// * `Err(CacheError::Parse)` if the content is not a valid `T`
    pub fn read<T: DeserializeOwned>(&self) -> Result<T, CacheError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CacheError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CacheError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes `data` and writes it to the snapshot file
    ///
    /// Missing parent directories are created. An existing file is
    /// overwritten.
    pub fn write<T: Serialize>(&self, data: &T) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(data).map_err(CacheError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CacheError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
