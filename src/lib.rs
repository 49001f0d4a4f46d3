/// Datakeeper - named storage locations and typed file persistence
///
/// Maps symbolic location keys to host directories and exports/imports
/// serde types as JSON files or XML record arrays.

// Module declarations
pub mod error;
pub mod paths;
pub mod config;
pub mod store;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use paths::{
    FixedHostDirs, FixedResolver, HostDirs, LocationKind, LocationTable, NamedLocation,
    PathResolver, ProjectHostDirs,
};
pub use config::{AppIdentity, StoreConfig};
pub use store::{canonical_name, Format, Location, Store, Stored};

/// Initialize logging infrastructure
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let installed = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Datakeeper logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
