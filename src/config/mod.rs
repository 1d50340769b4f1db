//! Configuration file support for scrawl.
//!
//! Settings are loaded from `~/.config/scrawl/config.toml`. If no config file
//! exists, the defaults (400×400 surface, black 5px pen) are used.

pub mod types;

pub use types::StrokeConfig;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [stroke]
/// mode = "pen"
/// color = "#1e90ff"
/// line_width = 5.0
/// width = 400
/// height = 400
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke tool, color, width and surface dimensions
    #[serde(default)]
    pub stroke: StrokeConfig,
}

impl Config {
    /// Logs a warning for values that will render oddly.
    ///
    /// Nothing is clamped or rejected: out-of-range values are passed through
    /// to the surface, which handles them however Cairo does.
    fn warn_on_suspicious_values(&self) {
        let stroke = &self.stroke;
        if stroke.line_width <= 0.0 {
            warn!(
                "Non-positive line_width {:.1}; pen strokes may not be visible",
                stroke.line_width
            );
        }
        if stroke.width <= 0 || stroke.height <= 0 {
            warn!(
                "Non-positive surface size {}x{}; the surface may fail to allocate",
                stroke.width, stroke.height
            );
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scrawl");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, or returns defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.warn_on_suspicious_values();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
