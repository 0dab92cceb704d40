//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional JSON file,
//! then environment variables, then command-line overrides applied by the
//! CLI. The parser only needs the label prefix; the fallback center is used
//! by collaborators that place the default map view.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LABEL_PREFIX, ENV_FALLBACK_CENTER,
    ENV_LABEL_PREFIX,
};
use crate::coordinate_parser::parse_line;
use crate::models::Center;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub view: ViewConfig,
}

/// Coordinate parser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Prefix for labels synthesized when a line has no third field
    pub label_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

/// Map-view settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Center used when no point could be parsed
    pub fallback_center: Center,
}

impl Config {
    /// Set the default label prefix
    pub fn with_label_prefix(mut self, label_prefix: impl Into<String>) -> Self {
        self.parser.label_prefix = label_prefix.into();
        self
    }

    /// Set the fallback map-view center
    pub fn with_fallback_center(mut self, center: Center) -> Self {
        self.view.fallback_center = center;
        self
    }

    /// Default config file location, e.g. `~/.config/coordmap/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Load defaults, then the config file, then environment overrides
    ///
    /// An explicit `config_file` must exist. Without one, the default
    /// location is used only if a file is present there.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                info!("Using config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    info!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(ENV_LABEL_PREFIX) {
            debug!("{} overrides label prefix", ENV_LABEL_PREFIX);
            self.parser.label_prefix = prefix;
        }

        if let Some(center) = lookup(ENV_FALLBACK_CENTER) {
            debug!("{} overrides fallback center", ENV_FALLBACK_CENTER);
            self.view.fallback_center = parse_center(&center)?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.parser.label_prefix.trim().is_empty() {
            return Err(Error::configuration("Label prefix cannot be empty"));
        }

        if !self.view.fallback_center.is_finite() {
            return Err(Error::configuration(format!(
                "Fallback center must be finite, got {}",
                self.view.fallback_center
            )));
        }

        Ok(())
    }
}

/// Parse a "lon, lat" pair using the same rules as coordinate lines
pub fn parse_center(value: &str) -> Result<Center> {
    let fields = parse_line(value.trim()).map_err(|reason| {
        Error::configuration(format!("Invalid center '{}': {}", value, reason))
    })?;

    Ok(Center::new(fields.longitude, fields.latitude))
}
