//! Resolver configuration.
//!
//! Hosts load this once and hand it to the resolver, which only reads it.
use crate::resolver::DEFAULT_NAMING_PATTERN;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Current schema version for the config file.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;
/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "exname.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub schema_version: u32,
    /// Pattern used when a caller passes none.
    #[serde(default = "default_naming_pattern")]
    pub naming_pattern: String,
    /// Fallback for `${exportExtension}` when no override is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_export_extension: Option<String>,
    /// Entries whose presence marks a directory as a project root.
    #[serde(default = "default_root_markers")]
    pub root_markers: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        default_config()
    }
}

fn default_naming_pattern() -> String {
    DEFAULT_NAMING_PATTERN.to_string()
}

fn default_root_markers() -> Vec<String> {
    vec![".git".to_string()]
}

pub fn default_config() -> ResolverConfig {
    ResolverConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        naming_pattern: default_naming_pattern(),
        default_export_extension: None,
        root_markers: default_root_markers(),
    }
}

/// Render a pretty JSON config stub.
pub fn config_stub() -> String {
    let config = default_config();
    serde_json::to_string_pretty(&config).expect("serialize config stub")
}

/// `<config dir>/exname.json`, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub fn load_config(path: &Path) -> Result<ResolverConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ResolverConfig =
        serde_json::from_slice(&bytes).context("parse exname config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `path` if given, else the default config file if it exists, else defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ResolverConfig> {
    if let Some(path) = path {
        return load_config(path);
    }
    match default_config_path().filter(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading default config");
            load_config(&path)
        }
        None => Ok(default_config()),
    }
}

pub fn validate_config(config: &ResolverConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported exname config schema_version {}",
            config.schema_version
        ));
    }
    if config.naming_pattern.trim().is_empty() {
        return Err(anyhow!("naming_pattern must be non-empty"));
    }
    if let Some(extension) = config.default_export_extension.as_deref() {
        if extension.contains(&['/', '\\'][..]) {
            return Err(anyhow!(
                "default_export_extension must not contain path separators (got {extension:?})"
            ));
        }
    }
    for marker in &config.root_markers {
        if !is_bare_name(marker) {
            return Err(anyhow!(
                "root_markers entries must be bare names (got {marker:?})"
            ));
        }
    }
    Ok(())
}

fn is_bare_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
