//! Handler functions for the `folio config` subcommands.
//!
//! Each handler returns the text to print so the binary stays a thin shell.

use std::path::{Path, PathBuf};

use crate::config::{FolioConfig, PROJECT_NAME};
use crate::error::{Error, Result};

/// The resolved config file path, with a hint when it does not exist yet.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    let path = resolve(config_path)?;
    if path.exists() {
        return Ok(path.display().to_string());
    }
    Ok(format!(
        "{}\n(not created yet; `{PROJECT_NAME} config init` writes the defaults there)",
        path.display()
    ))
}

/// A configuration value by dotted key, e.g. `server.port`.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = FolioConfig::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let value = lookup_key(&tree, key)
        .ok_or_else(|| Error::config(format!("no setting named '{key}'")))?;
    render_value(value)
}

/// Write the default configuration and return where it went.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = resolve(file)?;
    write_config(&path, &FolioConfig::default(), force)?;
    Ok(path)
}

fn resolve(explicit: Option<&str>) -> Result<PathBuf> {
    FolioConfig::resolve_config_path(explicit)
        .ok_or_else(|| Error::config("no config directory on this platform; pass --config"))
}

/// Serialize `config` to `path`, creating parent directories. An existing
/// file is only replaced when `force` is set.
pub fn write_config(path: &Path, config: &FolioConfig, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Err(Error::config(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        )));
    }
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| folio_core::Error::io_with_path(e, dir))?;
    }
    let text = config.to_toml_string()?;
    std::fs::write(path, text).map_err(|e| folio_core::Error::io_with_path(e, path))?;
    Ok(())
}

/// Walk `tree` along the dot-separated segments of `key`.
pub fn lookup_key<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, segment| node.as_table()?.get(segment))
}

/// Text for one value: strings bare, sections as TOML, the rest inline.
pub fn render_value(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(text) => Ok(text.clone()),
        toml::Value::Table(section) => {
            toml::to_string_pretty(section).map_err(|e| Error::config(e.to_string()))
        }
        other => Ok(other.to_string()),
    }
}
