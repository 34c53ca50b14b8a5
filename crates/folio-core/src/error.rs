//! Error types for folio-core

use std::path::{Path, PathBuf};

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No project record is registered under the identifier.
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// The registry table breaks one of its invariants.
    #[error("Invalid registry: {message}")]
    InvalidRegistry {
        /// What is wrong with the table
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a file path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a not-found error for an identifier.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::ProjectNotFound { id: id.into() }
    }

    /// Creates a registry invariant error.
    pub fn invalid_registry<S: Into<String>>(message: S) -> Self {
        Error::InvalidRegistry {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` for the not-found case, which renders a fallback page
    /// rather than failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ProjectNotFound { .. })
    }
}
