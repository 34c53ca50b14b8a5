//! Error types for folio-server

use thiserror::Error;

/// Result type alias for folio-server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// A single path could not be rendered outside the server.
    #[error("Cannot render '{path}': {message}")]
    Render {
        /// Requested path
        path: String,
        /// What went wrong
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Core(folio_core::Error::config(message))
    }
}
