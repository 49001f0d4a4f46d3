/// Store configuration: application identity and registered locations
///
/// Loaded once at startup. Errors here are configuration errors and are
/// returned to the caller, unlike file errors in the store itself.
///
/// ```json
/// {
///   "app": { "qualifier": "com", "organization": "Example", "application": "Game" },
///   "locations": [
///     { "key": "saves", "type": "persistentDataPath", "path": "saves" }
///   ]
/// }
/// ```

use crate::error::{Result, StoreError};
use crate::paths::{HostDirs, LocationTable, NamedLocation, ProjectHostDirs};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Application identity used to find platform directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    #[serde(default)]
    pub qualifier: String,

    #[serde(default)]
    pub organization: String,

    pub application: String,
}

/// Everything needed to build a location table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub app: AppIdentity,

    #[serde(default)]
    pub locations: Vec<NamedLocation>,
}

impl StoreConfig {
    /// Parse configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidConfig(format!("Failed to parse store config: {}", e)))
    }

    /// Read and parse a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_json_str(&text)?;
        info!(
            "Loaded store config for '{}' with {} location(s) from {}",
            config.app.application,
            config.locations.len(),
            path.display()
        );
        Ok(config)
    }

    /// Platform directories for the configured application
    pub fn host_dirs(&self) -> Result<ProjectHostDirs> {
        ProjectHostDirs::new(
            &self.app.qualifier,
            &self.app.organization,
            &self.app.application,
        )
        .ok_or_else(|| {
            StoreError::InvalidConfig(format!(
                "No platform directories available for '{}'",
                self.app.application
            ))
        })
    }

    /// Build the location table against the given host directories
    pub fn into_table(self, host: &dyn HostDirs) -> Result<LocationTable> {
        LocationTable::build(host, &self.locations)
    }
}
