//! Configuration system for bracelet.
//!
//! bracelet runs fine without any configuration. An optional TOML file lets the
//! operator change defaults that would otherwise be hard-coded:
//!
//! ```toml
//! output = "bracelet.svg"   # Where the diagram is written
//! font_family = "Arial"     # Font used for every label
//! home_city = "shanghai"    # Default answer for "Your city"
//! friend_city = "london"    # Default answer for "Friend's city"
//! ```
//!
//! ## Configuration Source
//!
//! The file is looked up at **XDG_CONFIG_HOME**/bracelet/bracelet.toml. A missing
//! file is not an error: [`Config::load`] falls back to the defaults and never
//! creates the file.
//!
//! ## Validation
//!
//! - `output` and `font_family` must not be empty
//! - `output` must name an `.svg` file
//! - `home_city` and `friend_city` must be registered cities

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cities;
use crate::constants::*;
use crate::diagram::DiagramStyle;
use crate::logger::Log;

/// Configuration structure for bracelet settings.
///
/// Every field is optional; accessors apply the defaults from
/// [`crate::constants`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output file used when `--output` is not given.
    pub output: Option<PathBuf>,
    /// Font family for hour labels, zone labels, and the caption.
    pub font_family: Option<String>,
    pub home_city: Option<String>,   // default for the first prompt
    pub friend_city: Option<String>, // default for the second prompt
}

impl Config {
    /// Path of the configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from the default location.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load and validate a configuration file at a specific path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn diagram_style(&self) -> DiagramStyle {
        DiagramStyle {
            font_family: self.font_family().to_string(),
        }
    }

    /// Print the effective settings in the logger frame.
    pub fn log_config(&self) {
        Log::log_block_start("Configuration:");
        match Self::get_config_path() {
            Ok(path) => Log::log_indented(&format!("Source: {}", describe_source(&path))),
            Err(_) => Log::log_indented("Source: defaults (no config directory)"),
        }
        Log::log_indented(&format!(
            "Output: {}",
            crate::utils::path_for_display(&self.output_path())
        ));
        Log::log_indented(&format!("Font family: {}", self.font_family()));
        if let Some(home) = &self.home_city {
            Log::log_indented(&format!("Home city: {}", home));
        }
        if let Some(friend) = &self.friend_city {
            Log::log_indented(&format!("Friend city: {}", friend));
        }
    }
}

/// Describe a config file location and whether it was found.
pub fn describe_source(config_path: &Path) -> String {
    let shown = crate::utils::path_for_display(config_path);
    if config_path.exists() {
        format!("{} (loaded)", shown)
    } else {
        format!("{} (not found, using defaults)", shown)
    }
}

/// Check a configuration for values bracelet cannot work with.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(output) = &config.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("output must not be empty");
        }
        let is_svg = output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            anyhow::bail!("output must be an .svg file (got {})", output.display());
        }
    }

    if let Some(font) = &config.font_family {
        if font.trim().is_empty() {
            anyhow::bail!("font_family must not be empty");
        }
    }

    for (field, value) in [
        ("home_city", &config.home_city),
        ("friend_city", &config.friend_city),
    ] {
        if let Some(name) = value {
            if cities::resolve(name).is_none() {
                anyhow::bail!(
                    "{} = \"{}\" is not a known city. Run 'bracelet --list' to see the supported cities",
                    field,
                    name
                );
            }
        }
    }

    Ok(())
}
