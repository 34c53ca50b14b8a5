//! # folio-server
//!
//! HTTP server for the Folio portfolio site.
//!
//! This crate provides:
//! - the axum router mapping paths to listing, detail, and not-found pages
//! - static asset serving under the configured base path
//! - TOML configuration with command-line overrides
//! - `tracing` setup for the `folio` binary

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod config_cmd;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{FolioConfig, Overrides};
pub use error::{Error, Result};
pub use routes::{HealthResponse, build_router, render_path};
pub use server::serve;
pub use state::AppState;
