/// Storage locations: symbolic keys mapped to host directories
///
/// - Location kinds: the five base roots a host environment supplies
/// - Host directories: the capability that supplies those roots
/// - Resolvers: key to directory lookup (table-driven or fixed constants)

pub mod location;
pub mod host;
pub mod resolver;

// Re-export commonly used types
pub use location::{LocationKind, NamedLocation};
pub use host::{FixedHostDirs, HostDirs, ProjectHostDirs};
pub use resolver::{FixedResolver, LocationTable, PathResolver};

#[cfg(test)]
pub use host::MockHostDirs;
