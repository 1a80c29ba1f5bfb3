//! Defuser configuration (TOML), passed with `--config`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// How solve results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Text,
    /// A single JSON array.
    Json,
}

/// Defuser configuration.
///
/// Missing fields default to the embedded reference catalog and text output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DefuserConfig {
    /// Catalog file to use instead of the embedded reference catalog.
    pub catalog_path: Option<PathBuf>,

    pub format: OutputFormat,
}

impl DefuserConfig {
    pub fn validate(&self) -> Result<()> {
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(anyhow!("catalog_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DefuserConfig::default()`. A relative
/// `catalog_path` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<DefuserConfig> {
    if !path.exists() {
        return Ok(DefuserConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: DefuserConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    if let (Some(catalog), Some(parent)) = (&cfg.catalog_path, path.parent()) {
        if catalog.is_relative() {
            cfg.catalog_path = Some(parent.join(catalog));
        }
    }
    Ok(cfg)
}

/// Load a config file the user named explicitly.
///
/// Unlike `load_config`, a missing file is an error naming the path.
pub fn load_user_config(path: &Path) -> Result<DefuserConfig> {
    if !path.is_file() {
        return Err(anyhow!("config file {} not found", path.display()));
    }
    load_config(path)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DefuserConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
