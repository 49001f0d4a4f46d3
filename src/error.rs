/// Error types for Datakeeper
///
/// Only configuration errors ever reach callers of the store facade.
/// I/O and serialization errors are produced internally, logged, and
/// collapsed into default values at the public boundary.

use thiserror::Error;

/// Main error type for Datakeeper operations
#[derive(Error, Debug)]
pub enum StoreError {
    // ========================================
    // Configuration Errors
    // ========================================

    #[error("Path type '{key}' is not valid or not defined.")]
    UnknownLocation {
        key: String,
    },

    #[error("Path type '{key}' resolves to a blank directory.")]
    BlankLocation {
        key: String,
    },

    #[error("Location key '{key}' is registered more than once")]
    DuplicateLocation {
        key: String,
    },

    #[error("Location key cannot be empty or whitespace only")]
    BlankKey,

    #[error("Host cannot supply a base directory for '{kind}'")]
    MissingBaseDir {
        kind: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================
    // IO Errors
    // ========================================

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================
    // Serialization Errors
    // ========================================

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    XmlError(String),
}

impl StoreError {
    /// True for errors caused by location setup rather than by file I/O
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StoreError::UnknownLocation { .. }
                | StoreError::BlankLocation { .. }
                | StoreError::DuplicateLocation { .. }
                | StoreError::BlankKey
                | StoreError::MissingBaseDir { .. }
                | StoreError::InvalidConfig(_)
        )
    }
}

/// Result type alias for Datakeeper operations
pub type Result<T> = std::result::Result<T, StoreError>;

// ========================================
// Unit Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_unknown_location_error() {
        let err = StoreError::UnknownLocation {
            key: "saves".to_string(),
        };

        assert!(err.to_string().contains("'saves'"));
        assert!(err.to_string().contains("not valid or not defined"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_duplicate_location_error() {
        let err = StoreError::DuplicateLocation {
            key: "logs".to_string(),
        };

        assert!(err.to_string().contains("logs"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_error_is_not_configuration() {
        let err: StoreError = IoError::new(ErrorKind::PermissionDenied, "denied").into();

        assert!(err.to_string().contains("denied"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StoreError = json_err.into();

        assert!(matches!(err, StoreError::JsonError(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_result_type_usage() {
        fn example_function() -> Result<String> {
            Err(StoreError::BlankLocation {
                key: "cache".to_string(),
            })
        }

        match example_function() {
            Ok(_) => panic!("Should have returned error"),
            Err(e) => assert!(matches!(e, StoreError::BlankLocation { .. })),
        }
    }
}
