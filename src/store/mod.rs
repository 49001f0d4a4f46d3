/// Typed file persistence over named storage locations
///
/// Export and import are best effort. File and codec failures are logged
/// and absorbed: export returns normally, import returns the type's default
/// (JSON) or an empty sequence (XML). The only error a caller ever sees is
/// a misconfigured location key.

pub mod format;

pub use format::{canonical_name, Format};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::paths::{LocationTable, PathResolver};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Where a record lives: a registered key or a directory given directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    Key(&'a str),
    Dir(&'a Path),
}

impl<'a> From<&'a str> for Location<'a> {
    fn from(key: &'a str) -> Self {
        Location::Key(key)
    }
}

impl<'a> From<&'a String> for Location<'a> {
    fn from(key: &'a String) -> Self {
        Location::Key(key.as_str())
    }
}

impl<'a> From<&'a Path> for Location<'a> {
    fn from(dir: &'a Path) -> Self {
        Location::Dir(dir)
    }
}

impl<'a> From<&'a PathBuf> for Location<'a> {
    fn from(dir: &'a PathBuf) -> Self {
        Location::Dir(dir.as_path())
    }
}

/// Result of a format-dispatched import
#[derive(Debug, Clone, PartialEq)]
pub enum Stored<T> {
    /// JSON: one record
    Single(T),
    /// XML: an array of records
    Sequence(Vec<T>),
}

impl<T> Stored<T> {
    pub fn into_single(self) -> Option<T> {
        match self {
            Stored::Single(value) => Some(value),
            Stored::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Vec<T> {
        match self {
            Stored::Single(value) => vec![value],
            Stored::Sequence(values) => values,
        }
    }
}

/// Internal result of a single load
#[derive(Debug)]
pub(crate) enum Outcome<T> {
    Done(T),
    NotFound(PathBuf),
    Failed(String),
}

fn is_blank(dir: &Path) -> bool {
    dir.as_os_str().to_string_lossy().trim().is_empty()
}

fn blank_dir_error() -> StoreError {
    StoreError::IoError(io::Error::new(
        io::ErrorKind::InvalidInput,
        "target directory is blank",
    ))
}

/// Serialize and write one file, creating the directory chain first
///
/// The text is fully encoded before the file is opened, so an encoding
/// failure leaves nothing on disk.
fn save(dir: &Path, file_name: &str, encode: impl FnOnce() -> Result<String>) -> Result<PathBuf> {
    if is_blank(dir) {
        return Err(blank_dir_error());
    }

    fs::create_dir_all(dir)?;
    let text = encode()?;

    let path = dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}

/// Read and decode one file
///
/// A leading UTF-8 byte order mark is skipped.
pub(crate) fn load<T>(
    dir: &Path,
    file_name: &str,
    decode: impl FnOnce(&str) -> Result<T>,
) -> Outcome<T> {
    if is_blank(dir) {
        return Outcome::Failed(blank_dir_error().to_string());
    }

    let path = dir.join(file_name);
    if !path.is_file() {
        return Outcome::NotFound(path);
    }

    match fs::read_to_string(&path)
        .map_err(StoreError::from)
        .and_then(|text| decode(text.strip_prefix('\u{feff}').unwrap_or(text.as_str())))
    {
        Ok(value) => Outcome::Done(value),
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

/// File persistence facade over an injected location resolver
#[derive(Debug, Clone)]
pub struct Store<R: PathResolver = LocationTable> {
    resolver: R,
}

impl Store<LocationTable> {
    /// Build a store from configuration using the platform's directories
    pub fn from_config(config: StoreConfig) -> Result<Self> {
        let host = config.host_dirs()?;
        let table = config.into_table(&host)?;
        Ok(Self::new(table))
    }
}

impl<R: PathResolver> Store<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Directory a location names
    ///
    /// # Errors
    /// Configuration errors from the resolver, for keyed locations only.
    pub fn directory(&self, location: Location<'_>) -> Result<PathBuf> {
        match location {
            Location::Key(key) => self.resolver.resolve(key),
            Location::Dir(dir) => Ok(dir.to_path_buf()),
        }
    }

    /// Path an export of `name` in `format` writes to
    pub fn file_path<'a>(
        &self,
        location: impl Into<Location<'a>>,
        name: &str,
        format: Format,
    ) -> Result<PathBuf> {
        Ok(self.directory(location.into())?.join(format.export_file_name(name)))
    }

    // ========================================
    // JSON
    // ========================================

    /// Export `value` as `<canonical type name>.json`
    pub fn export_json<'a, T: Serialize + ?Sized>(
        &self,
        value: &T,
        location: impl Into<Location<'a>>,
    ) -> Result<()> {
        self.export_json_named(value, location, &canonical_name::<T>())
    }

    /// Export `value` as `<name>.json`
    ///
    /// Never fails on I/O or encoding; those are logged at error level.
    pub fn export_json_named<'a, T: Serialize + ?Sized>(
        &self,
        value: &T,
        location: impl Into<Location<'a>>,
        name: &str,
    ) -> Result<()> {
        let dir = self.directory(location.into())?;

        match save(&dir, &Format::Json.export_file_name(name), || {
            format::encode_json(value)
        }) {
            Ok(path) => info!("Exported JSON for {} to: {}", name, path.display()),
            Err(e) => error!("Failed to export JSON for {}: {}", name, e),
        }
        Ok(())
    }

    /// Import `<canonical type name>.json`
    pub fn import_json<'a, T: DeserializeOwned + Default>(
        &self,
        location: impl Into<Location<'a>>,
    ) -> Result<T> {
        self.import_json_named(location, &canonical_name::<T>())
    }

    /// Import `<name>.json`, or `T::default()` when missing or unreadable
    pub fn import_json_named<'a, T: DeserializeOwned + Default>(
        &self,
        location: impl Into<Location<'a>>,
        name: &str,
    ) -> Result<T> {
        let dir = self.directory(location.into())?;

        let value = match load(&dir, &Format::Json.import_file_name(name), format::decode_json::<T>) {
            Outcome::Done(value) => {
                debug!("Imported JSON for {}", name);
                value
            }
            Outcome::NotFound(path) => {
                warn!("JSON file not found for {}: {}", name, path.display());
                T::default()
            }
            Outcome::Failed(reason) => {
                error!("Failed to import JSON for {}: {}", name, reason);
                T::default()
            }
        };
        Ok(value)
    }

    // ========================================
    // XML
    // ========================================

    /// Write a schema sample as `<canonical type name>_Schema.xml`
    ///
    /// See `export_xml_schema_named` for the field attributes `T` needs.
    pub fn export_xml_schema<'a, T: Serialize + Default>(
        &self,
        location: impl Into<Location<'a>>,
    ) -> Result<()> {
        self.export_xml_schema_named::<T>(location, &canonical_name::<T>())
    }

    /// Write two default records as `<name>_Schema.xml`
    ///
    /// The file documents the expected shape of `<name>.xml`; it never
    /// contains caller data.
    ///
    /// Empty collections and `None` values have no XML representation of
    /// their own. For the sample to read back as default records,
    /// collection fields of `T` need `#[serde(default)]` and `Option`
    /// fields need `#[serde(default, skip_serializing_if = "Option::is_none")]`.
    /// Without them the sample imports as an empty sequence (missing
    /// collection, logged at error level) or as `Some` of an empty value.
    pub fn export_xml_schema_named<'a, T: Serialize + Default>(
        &self,
        location: impl Into<Location<'a>>,
        name: &str,
    ) -> Result<()> {
        let dir = self.directory(location.into())?;

        match save(&dir, &Format::Xml.export_file_name(name), || {
            let sample = [T::default(), T::default()];
            format::encode_xml_array(&sample)
        }) {
            Ok(path) => info!("Exported XML schema for {} to: {}", name, path.display()),
            Err(e) => error!("Failed to export XML schema for {}: {}", name, e),
        }
        Ok(())
    }

    /// Import `<canonical type name>.xml`
    pub fn import_xml<'a, T: DeserializeOwned>(
        &self,
        location: impl Into<Location<'a>>,
    ) -> Result<Vec<T>> {
        self.import_xml_named(location, &canonical_name::<T>())
    }

    /// Import the records in `<name>.xml`, or nothing when missing or unreadable
    pub fn import_xml_named<'a, T: DeserializeOwned>(
        &self,
        location: impl Into<Location<'a>>,
        name: &str,
    ) -> Result<Vec<T>> {
        let dir = self.directory(location.into())?;

        let values = match load(&dir, &Format::Xml.import_file_name(name), format::decode_xml_array::<T>) {
            Outcome::Done(values) => {
                debug!("Imported {} XML record(s) for {}", values.len(), name);
                values
            }
            Outcome::NotFound(path) => {
                warn!("XML file not found for {}: {}", name, path.display());
                Vec::new()
            }
            Outcome::Failed(reason) => {
                error!("Failed to import XML for {}: {}", name, reason);
                Vec::new()
            }
        };
        Ok(values)
    }

    // ========================================
    // Format dispatch
    // ========================================

    /// Export in the given format; XML writes a schema sample and ignores `value`
    pub fn export<'a, T: Serialize + Default>(
        &self,
        value: &T,
        location: impl Into<Location<'a>>,
        name: Option<&str>,
        format: Format,
    ) -> Result<()> {
        let name = name.map_or_else(canonical_name::<T>, str::to_string);
        match format {
            Format::Json => self.export_json_named(value, location, &name),
            Format::Xml => self.export_xml_schema_named::<T>(location, &name),
        }
    }

    /// Import in the given format
    pub fn import<'a, T: DeserializeOwned + Default>(
        &self,
        location: impl Into<Location<'a>>,
        name: Option<&str>,
        format: Format,
    ) -> Result<Stored<T>> {
        let name = name.map_or_else(canonical_name::<T>, str::to_string);
        match format {
            Format::Json => self.import_json_named(location, &name).map(Stored::Single),
            Format::Xml => self.import_xml_named(location, &name).map(Stored::Sequence),
        }
    }
}


// Property-based tests for the JSON round trip
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::paths::FixedResolver;
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Progress {
        level: u16,
        checkpoint: String,
        secrets: Vec<u8>,
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_json_round_trip(
            level in any::<u16>(),
            checkpoint in ".*",
            secrets in proptest::collection::vec(any::<u8>(), 0..16)
        ) {
            let dir = tempfile::tempdir().unwrap();
            let store = Store::new(FixedResolver::new().with("saves", dir.path()));
            let progress = Progress { level, checkpoint, secrets };

            store.export_json_named(&progress, "saves", "Progress").unwrap();
            let imported: Progress = store.import_json_named("saves", "Progress").unwrap();

            prop_assert_eq!(imported, progress);
        }
    }
}
