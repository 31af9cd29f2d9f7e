//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Default port of the local preview server.
pub const DEFAULT_PREVIEW_PORT: u16 = 3737;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Lowercase name used by the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a CLI value (`auto`, `light`, `dark`), case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Next mode in the Auto -> Light -> Dark cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding persisted custom layouts (defaults to the config directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// File the TUI writes the live preview to (defaults to `<config_dir>/preview.html`)
    #[serde(default)]
    pub preview_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Live preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Inject markup and stylesheets as live HTML/CSS (false escapes them)
    #[serde(default = "default_trusted_content")]
    pub trusted_content: bool,
    /// Port of the local preview server
    #[serde(default = "default_preview_port")]
    pub port: u16,
}

fn default_trusted_content() -> bool {
    true
}

fn default_preview_port() -> u16 {
    DEFAULT_PREVIEW_PORT
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            trusted_content: default_trusted_content(),
            port: default_preview_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/layoutlab/config.toml`
/// - macOS: `~/Library/Application Support/layoutlab/config.toml`
/// - Windows: `%APPDATA%\layoutlab\config.toml`
///
/// The directory can be overridden with the `LAYOUTLAB_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Live preview settings
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `LAYOUTLAB_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `layoutlab`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory holding persisted custom layouts.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.paths.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::config_dir(),
        }
    }

    /// File the TUI writes the live preview to.
    pub fn preview_file(&self) -> Result<PathBuf> {
        match &self.paths.preview_file {
            Some(file) => Ok(file.clone()),
            None => Ok(Self::config_dir()?.join("preview.html")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `preview.port` is not 0
    /// - `preview_file` (if set) names a file, not a bare root or directory marker
    pub fn validate(&self) -> Result<()> {
        if self.preview.port == 0 {
            anyhow::bail!("Preview port must be between 1 and 65535");
        }

        if let Some(file) = &self.paths.preview_file {
            if file.file_name().is_none() {
                anyhow::bail!("Preview file path has no file name: {}", file.display());
            }
        }

        Ok(())
    }
}
