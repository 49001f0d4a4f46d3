/// Location key resolution
///
/// Resolution is a pure table lookup. It never touches the filesystem, so
/// a misconfigured key is reported before any file is opened.

use crate::error::{Result, StoreError};
use crate::paths::host::HostDirs;
use crate::paths::location::NamedLocation;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Maps a location key to the directory it names
pub trait PathResolver: Send + Sync {
    /// Directory registered under `key`
    ///
    /// # Errors
    /// - `StoreError::UnknownLocation`: no location is registered under `key`
    /// - `StoreError::BlankLocation`: the registered directory is empty
    fn resolve(&self, key: &str) -> Result<PathBuf>;

    /// Path of `file_name` inside the directory registered under `key`
    fn file_path(&self, key: &str, file_name: &str) -> Result<PathBuf> {
        Ok(self.resolve(key)?.join(file_name))
    }
}

fn checked(key: &str, dir: Option<&PathBuf>) -> Result<PathBuf> {
    let dir = dir.ok_or_else(|| StoreError::UnknownLocation {
        key: key.to_string(),
    })?;

    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(StoreError::BlankLocation {
            key: key.to_string(),
        });
    }

    Ok(dir.clone())
}

/// Key to directory table built once from registered locations
///
/// There is no way to add or change entries after `build`.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    dirs: HashMap<String, PathBuf>,
}

impl LocationTable {
    /// Resolve every location against the host directories
    ///
    /// # Errors
    /// - `StoreError::BlankKey`: a location has an empty key
    /// - `StoreError::DuplicateLocation`: two locations share a key
    /// - `StoreError::MissingBaseDir`: the host cannot supply a location's root
    pub fn build(host: &dyn HostDirs, locations: &[NamedLocation]) -> Result<Self> {
        let mut dirs = HashMap::with_capacity(locations.len());

        for location in locations {
            if location.key.trim().is_empty() {
                return Err(StoreError::BlankKey);
            }
            if dirs.contains_key(&location.key) {
                return Err(StoreError::DuplicateLocation {
                    key: location.key.clone(),
                });
            }

            let dir = location.full_path(host)?;
            debug!("Location '{}' -> {}", location.key, dir.display());
            dirs.insert(location.key.clone(), dir);
        }

        info!("Registered {} storage location(s)", dirs.len());
        Ok(Self { dirs })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dirs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl PathResolver for LocationTable {
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        checked(key, self.dirs.get(key))
    }
}

/// Fixed key to directory constants, no host lookup involved
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    dirs: HashMap<String, PathBuf>,
}

impl FixedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, dir: impl AsRef<Path>) -> Self {
        self.dirs.insert(key.into(), dir.as_ref().to_path_buf());
        self
    }
}

impl PathResolver for FixedResolver {
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        checked(key, self.dirs.get(key))
    }
}
