//! Server configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, a TOML
//! file, and command-line flags (which also read `FOLIO_*` environment
//! variables through clap).
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [site]
//! base_path = "/portfolio-site/"
//! asset_dir = "public"
//! contact_email = "hello@example.com"
//!
//! [logging]
//! filter = "info,folio=debug"
//! ```

use std::path::{Path, PathBuf};

use folio_render::{SiteContext, normalize_base_path};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name used for the config directory and in user-facing hints.
pub const PROJECT_NAME: &str = "folio";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Listener settings.
    pub server: ServerSection,
    /// Site settings.
    pub site: SiteSection,
    /// Logging settings.
    pub logging: LoggingSection,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// `[site]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// URL prefix the site is mounted under.
    pub base_path: String,
    /// Directory holding static assets (`images/...`).
    pub asset_dir: PathBuf,
    /// Address for the contact `mailto:` link; empty hides it.
    pub contact_email: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            asset_dir: PathBuf::from("public"),
            contact_email: String::new(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info,folio=debug".to_string(),
        }
    }
}

/// Command-line overrides; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--host` / `FOLIO_HOST`
    pub host: Option<String>,
    /// `--port` / `FOLIO_PORT`
    pub port: Option<u16>,
    /// `--base-path` / `FOLIO_BASE_PATH`
    pub base_path: Option<String>,
    /// `--asset-dir` / `FOLIO_ASSET_DIR`
    pub asset_dir: Option<PathBuf>,
    /// `--contact-email` / `FOLIO_CONTACT_EMAIL`
    pub contact_email: Option<String>,
}

impl FolioConfig {
    /// Default config file location: `<config_dir>/folio/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, otherwise the default location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(Path::new(path))?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, layer command-line overrides on top, and
    /// validate the result.
    pub fn load_with(explicit: Option<&str>, overrides: Overrides) -> Result<Self> {
        let mut config = Self::load(explicit)?;
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| folio_core::Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply command-line overrides.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(base_path) = overrides.base_path {
            self.site.base_path = base_path;
        }
        if let Some(asset_dir) = overrides.asset_dir {
            self.site.asset_dir = asset_dir;
        }
        if let Some(email) = overrides.contact_email {
            self.site.contact_email = email;
        }
    }

    /// Reject values the server cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must not be empty"));
        }
        check_base_path(&self.site.base_path)?;
        if !self.site.contact_email.is_empty() && !self.site.contact_email.contains('@') {
            return Err(Error::config(format!(
                "site.contact_email '{}' is not an e-mail address",
                self.site.contact_email
            )));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Base path with leading and trailing `/`.
    pub fn base_path(&self) -> String {
        normalize_base_path(&self.site.base_path)
    }

    /// Rendering context derived from the `[site]` section.
    pub fn site_context(&self) -> SiteContext {
        SiteContext::new(&self.site.base_path, self.site.contact_email.clone())
    }
}

/// A base path is spliced into route patterns, so it must be literal:
/// no query or fragment characters, no braces, and no segment that the
/// router would read as a `:param` or `*wildcard`.
fn check_base_path(base_path: &str) -> Result<()> {
    let plain = !base_path.contains(['?', '#', ' ', '{', '}'])
        && base_path
            .split('/')
            .all(|segment| !segment.starts_with([':', '*']));
    if plain {
        Ok(())
    } else {
        Err(Error::config(format!(
            "site.base_path '{base_path}' must be a plain URL path"
        )))
    }
}
