use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::har::{Creator, WriteOptions};

/// Global configuration loaded from `~/.config/flipper-har/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarConfig {
    /// Spaces per indentation level in the written archive.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Write through a temp file and rename on success. Disable for targets
    /// where rename is not possible (e.g. a FIFO or `/dev/stdout`).
    #[serde(default = "default_atomic_write")]
    pub atomic_write: bool,
    /// `log.creator` of every produced archive.
    #[serde(default)]
    pub creator: Creator,
}

fn default_indent_width() -> usize {
    4
}

fn default_atomic_write() -> bool {
    true
}

impl Default for HarConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            atomic_write: default_atomic_write(),
            creator: Creator::default(),
        }
    }
}

impl HarConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent_width: self.indent_width,
            atomic: self.atomic_write,
        }
    }
}

/// Default config location. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flipper-har")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load the default config file if the user has written one; otherwise the
/// built-in defaults. Never writes.
pub fn load_or_default() -> Result<HarConfig> {
    load_if_present(&config_path()?)
}

fn load_if_present(path: &Path) -> Result<HarConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(HarConfig::default());
    }
    load_from(path)
}

/// Load configuration from an explicit path (must exist).
pub fn load_from(path: &Path) -> Result<HarConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HarConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
