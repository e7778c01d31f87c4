//! Structured error types for folio-core library.
//!
//! Uses `thiserror` so the CLI (which works in `anyhow`) can still match on
//! the failure kind when it needs to, e.g. to tell a rejected `add` apart
//! from an unreadable seed file.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The seed source could not be read; the catalog cannot be built
    #[error("Failed to load seed projects from {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    /// Persisted user projects exist but could not be parsed
    #[error("Persisted projects under key '{key}' are corrupt: {source}")]
    PersistedDataCorrupt {
        key: String,
        source: serde_json::Error,
    },

    /// Caller-supplied project data was rejected
    #[error("Invalid project: {0}")]
    Validation(#[from] ValidationError),

    /// Writing the persisted store failed
    #[error("Failed to persist projects under key '{key}': {reason}")]
    PersistenceWrite { key: String, reason: String },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Sort key not one of recent/name/category/featured
    #[error("Unknown sort key '{0}' (expected recent, name, category or featured)")]
    InvalidSortKey(String),

    /// Configuration error
    #[error("Configuration error at {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a seed load error
    pub fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a corrupt persisted data error
    pub fn persisted_corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::PersistedDataCorrupt {
            key: key.into(),
            source,
        }
    }

    /// Create a persistence write error
    pub fn persistence_write(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Validation error for caller-supplied project data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
