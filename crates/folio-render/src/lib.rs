//! # folio-render
//!
//! Server-side HTML rendering for Folio.
//!
//! - [`Renderer`] turns a route outcome into a complete document
//! - [`SiteContext`] carries the base path used for every link and asset URL
//! - [`gallery`] maps a gallery's layout selection onto markup
//!
//! Rendering is pure: the same inputs always produce the same bytes.

#![forbid(unsafe_code)]

pub mod context;
pub mod gallery;
pub mod html;
pub mod layout;
pub mod pages;

pub use context::{SiteContext, normalize_base_path};
pub use pages::{
    BACK_HOME_LABEL, NOT_FOUND_HEADING, PageStatus, RenderedPage, Renderer, render_home,
    render_not_found, render_project,
};
