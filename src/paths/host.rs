/// Host-supplied base directories
///
/// The host environment owns the five base roots. Everything else in the
/// crate only ever sees them through `HostDirs`.

use crate::paths::location::LocationKind;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Capability that supplies the base directory for each location kind
///
/// Returns `None` when the platform cannot provide a directory for `kind`.
#[cfg_attr(test, mockall::automock)]
pub trait HostDirs: Send + Sync {
    fn base_dir(&self, kind: LocationKind) -> Option<PathBuf>;
}

/// Platform directories for an application, from the `directories` crate
///
/// - `dataPath`: the data root (defaults to the executable's directory)
/// - `persistentDataPath`: the per-user data directory
/// - `streamingAssetsPath`: `<data root>/StreamingAssets`
/// - `temporaryCachePath`: the per-user cache directory
/// - `consoleLogPath`: `<local data directory>/logs`
#[derive(Debug, Clone)]
pub struct ProjectHostDirs {
    data_root: PathBuf,
    persistent: PathBuf,
    cache: PathBuf,
    logs: PathBuf,
}

impl ProjectHostDirs {
    /// Look up platform directories for the given application identity
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn new(qualifier: &str, organization: &str, application: &str) -> Option<Self> {
        let dirs = ProjectDirs::from(qualifier, organization, application)?;

        let data_root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| dirs.data_dir().to_path_buf());

        debug!(
            "Host directories for {}: data root {}",
            application,
            data_root.display()
        );

        Some(Self {
            data_root,
            persistent: dirs.data_dir().to_path_buf(),
            cache: dirs.cache_dir().to_path_buf(),
            logs: dirs.data_local_dir().join("logs"),
        })
    }

    /// Override the data root (and with it the streaming assets root)
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = root.into();
        self
    }
}

impl HostDirs for ProjectHostDirs {
    fn base_dir(&self, kind: LocationKind) -> Option<PathBuf> {
        let dir = match kind {
            LocationKind::Data => self.data_root.clone(),
            LocationKind::PersistentData => self.persistent.clone(),
            LocationKind::StreamingAssets => self.data_root.join("StreamingAssets"),
            LocationKind::TemporaryCache => self.cache.clone(),
            LocationKind::ConsoleLog => self.logs.clone(),
        };
        Some(dir)
    }
}

/// Explicit per-kind roots, for embedding hosts and tests
#[derive(Debug, Clone, Default)]
pub struct FixedHostDirs {
    roots: HashMap<LocationKind, PathBuf>,
}

impl FixedHostDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every kind rooted at `<root>/<kind name>`
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let roots = LocationKind::ALL
            .iter()
            .map(|kind| (*kind, root.join(kind.as_str())))
            .collect();
        Self { roots }
    }

    pub fn with(mut self, kind: LocationKind, dir: impl Into<PathBuf>) -> Self {
        self.roots.insert(kind, dir.into());
        self
    }
}

impl HostDirs for FixedHostDirs {
    fn base_dir(&self, kind: LocationKind) -> Option<PathBuf> {
        self.roots.get(&kind).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dirs_only_supply_registered_kinds() {
        let host = FixedHostDirs::new().with(LocationKind::Data, "/opt/game");

        assert_eq!(host.base_dir(LocationKind::Data), Some(PathBuf::from("/opt/game")));
        assert_eq!(host.base_dir(LocationKind::ConsoleLog), None);
    }

    #[test]
    fn test_fixed_dirs_under_root() {
        let host = FixedHostDirs::under("/srv/game");

        for kind in LocationKind::ALL {
            let dir = host.base_dir(kind).expect("every kind should be supplied");
            assert_eq!(dir, Path::new("/srv/game").join(kind.as_str()));
        }
    }

    #[test]
    fn test_project_dirs_streaming_assets_under_data_root() {
        // No home directory in some sandboxes; nothing to check then.
        let Some(host) = ProjectHostDirs::new("com", "Example", "Datakeeper Test") else {
            return;
        };
        let host = host.with_data_root("/opt/game");

        assert_eq!(host.base_dir(LocationKind::Data), Some(PathBuf::from("/opt/game")));
        assert_eq!(
            host.base_dir(LocationKind::StreamingAssets),
            Some(Path::new("/opt/game").join("StreamingAssets"))
        );
        assert!(host
            .base_dir(LocationKind::ConsoleLog)
            .map(|dir| dir.ends_with("logs"))
            .unwrap_or(false));
    }

    #[test]
    fn test_project_dirs_supply_every_kind() {
        let Some(host) = ProjectHostDirs::new("com", "Example", "Datakeeper Test") else {
            return;
        };

        for kind in LocationKind::ALL {
            assert!(host.base_dir(kind).is_some(), "missing root for {}", kind);
        }
    }
}
