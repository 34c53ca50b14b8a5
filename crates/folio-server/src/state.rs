//! Shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{PROFILE, Registry};
use folio_render::Renderer;

use crate::config::FolioConfig;
use crate::error::Result;

/// Immutable state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<Renderer>,
    base_path: Arc<str>,
    asset_dir: Arc<PathBuf>,
}

impl AppState {
    /// Build state for the built-in registry. Fails if the config or the
    /// registry is inconsistent.
    pub fn new(config: &FolioConfig) -> Result<Self> {
        Self::with_registry(config, Registry::builtin())
    }

    /// Build state over a specific registry.
    pub fn with_registry(config: &FolioConfig, registry: Registry) -> Result<Self> {
        config.validate()?;
        registry.validate()?;
        if !config.site.asset_dir.is_dir() {
            tracing::warn!(
                asset_dir = %config.site.asset_dir.display(),
                "asset directory does not exist; images will 404"
            );
        }
        Ok(Self {
            renderer: Arc::new(Renderer::new(config.site_context(), registry, PROFILE)),
            base_path: Arc::from(config.base_path()),
            asset_dir: Arc::new(config.site.asset_dir.clone()),
        })
    }

    /// Page renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Base path with leading and trailing `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Directory static assets are served from.
    pub fn asset_dir(&self) -> &PathBuf {
        &self.asset_dir
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_path", &self.base_path)
            .field("asset_dir", &self.asset_dir)
            .field("projects", &self.renderer.registry().len())
            .finish()
    }
}
