//! Configuration loading.
//!
//! The config file is JSON and maps short names to formats:
//!
//! ```json
//! { "formats": { "product": "stores/{store}/products/{product}" } }
//! ```
//!
//! Formats are validated while the file is loaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use resname_format::{parse_format, Format};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "resname", "resname").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Named formats.
    #[serde(default)]
    pub formats: BTreeMap<String, Format>,
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields an empty config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
                }
                Self::read(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        debug!(path = %path.display(), formats = config.formats.len(), "config loaded");
        Ok(config)
    }

    /// Resolve a named format, or parse the argument as a format string.
    pub fn resolve(&self, format_or_name: &str) -> Result<Format, CliError> {
        if let Some(format) = self.formats.get(format_or_name) {
            debug!(name = format_or_name, format = %format, "resolved named format");
            return Ok(format.clone());
        }

        Ok(parse_format(format_or_name)?)
    }
}
