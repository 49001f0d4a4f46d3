/// Location kinds and named storage locations

use crate::error::{Result, StoreError};
use crate::paths::host::HostDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Base root a storage location hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Main game data directory
    #[serde(rename = "dataPath")]
    Data,
    /// Per-user data that survives updates
    #[serde(rename = "persistentDataPath")]
    PersistentData,
    /// Read-mostly assets shipped with the game
    #[serde(rename = "streamingAssetsPath")]
    StreamingAssets,
    /// Scratch space the OS may purge
    #[serde(rename = "temporaryCachePath")]
    TemporaryCache,
    /// Console/log output
    #[serde(rename = "consoleLogPath")]
    ConsoleLog,
}

impl LocationKind {
    /// Every kind, in declaration order
    pub const ALL: [LocationKind; 5] = [
        LocationKind::Data,
        LocationKind::PersistentData,
        LocationKind::StreamingAssets,
        LocationKind::TemporaryCache,
        LocationKind::ConsoleLog,
    ];

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Data => "dataPath",
            LocationKind::PersistentData => "persistentDataPath",
            LocationKind::StreamingAssets => "streamingAssetsPath",
            LocationKind::TemporaryCache => "temporaryCachePath",
            LocationKind::ConsoleLog => "consoleLogPath",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage location registered under a symbolic key
///
/// `path` is relative to the base directory of `kind`. An empty path
/// names the base directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub key: String,

    #[serde(rename = "type")]
    pub kind: LocationKind,

    #[serde(default)]
    pub path: String,
}

impl NamedLocation {
    pub fn new(key: impl Into<String>, kind: LocationKind, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            path: path.into(),
        }
    }

    /// Join the host's base directory for this kind with the relative path
    ///
    /// # Errors
    /// - `StoreError::MissingBaseDir`: the host has no directory for this kind
    pub fn full_path(&self, host: &dyn HostDirs) -> Result<PathBuf> {
        let base = host.base_dir(self.kind).ok_or_else(|| StoreError::MissingBaseDir {
            kind: self.kind.to_string(),
        })?;

        if self.path.is_empty() {
            Ok(base)
        } else {
            Ok(base.join(&self.path))
        }
    }
}
