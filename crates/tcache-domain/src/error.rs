//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a cache configuration is rejected at construction time
///
/// Checks run in a fixed order and the first violation wins, so each
/// variant identifies exactly one broken requirement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The backend method is missing or not a recognized backend
    #[error("Invalid cache method {}. Must be 'file' or 'redis'", display_method(.method.as_deref()))]
    InvalidMethod {
        /// The rejected method, if one was given
        method: Option<String>,
    },

    /// The filesystem backend was selected without a storage directory
    #[error("storage_dir must be specified for file cache method")]
    MissingStorageDir,

    /// The storage directory cannot be written by this process
    #[error("Cache directory is not writable: {}: {reason}", .path.display())]
    StorageDirNotWritable {
        /// The probed directory
        path: PathBuf,
        /// Why the probe failed
        reason: String,
    },

    /// The TTL is absent or not numeric
    #[error("TTL must be a number, got {value}")]
    InvalidTtl {
        /// Rendering of the rejected value
        value: String,
    },

    /// The external store backend was selected without a store handle
    #[error("A key-value store handle must be injected for the external store method")]
    MissingStoreHandle,
}

fn display_method(method: Option<&str>) -> String {
    match method {
        Some(m) => format!("'{m}'"),
        None => "(none)".to_string(),
    }
}

/// Main error type for the tenant cache
#[derive(Error, Debug)]
pub enum Error {
    /// Cache configuration rejected during validation
    #[error("Invalid cache configuration: {0}")]
    Config(#[from] ConfigError),

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// External key-value store operation error
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No backend is registered under the requested name
    #[error("Unknown cache backend '{name}'. Available backends: {available:?}")]
    UnknownBackend {
        /// The requested backend name
        name: String,
        /// Names of the registered backends
        available: Vec<String>,
    },

    /// Configuration loading error (files, environment)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Store error creation methods
impl Error {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The configuration rejection behind this error, if any
    pub fn as_config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}
