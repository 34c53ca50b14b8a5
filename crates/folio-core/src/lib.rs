//! Folio Core: project records, the static registry, and gallery layout.
//!
//! This crate has no internal Folio dependencies and performs no I/O.
//!
//! # Modules
//!
//! - [`model`]: project record types
//! - [`catalog`]: the site's own records
//! - [`registry`]: identifier lookup and table validation
//! - [`gallery`]: image layout selection
//! - [`profile`]: home page biography
//! - [`ids`]: route identifier helpers
//! - [`error`]: error types and Result alias

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod gallery;
pub mod ids;
pub mod model;
pub mod profile;
pub mod registry;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use gallery::{GalleryLayout, GridColumns, select_layout};
pub use model::{Detail, Gallery, LayoutHint, Link, Project, ProjectKind, Screenshot, Showcase};
pub use profile::{PROFILE, Profile, Skill};
pub use registry::Registry;
