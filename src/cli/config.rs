//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Directory holding the saved custom layouts
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// File the TUI writes the live preview to
    #[arg(long, value_name = "FILE")]
    preview_file: Option<PathBuf>,

    /// Inject preview content as live HTML/CSS (true) or escape it (false)
    #[arg(long, value_name = "BOOL")]
    trusted: Option<bool>,

    /// Port of the local preview server
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_dir: String,
    paths: PathsOutput,
    ui: UiOutput,
    preview: PreviewOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    data_dir: String,
    preview_file: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct PreviewOutput {
    trusted_content: bool,
    port: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.data_dir.is_none()
            && self.preview_file.is_none()
            && self.trusted.is_none()
            && self.port.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --data-dir, --preview-file, --trusted, or --port",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.paths.data_dir = Some(path.clone());
        }

        if let Some(path) = &self.preview_file {
            config.paths.preview_file = Some(path.clone());
        }

        if let Some(trusted) = self.trusted {
            config.preview.trusted_content = trusted;
        }

        if let Some(port) = self.port {
            config.preview.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let resolve = |e: anyhow::Error| CliError::io(format!("Failed to resolve path: {e:#}"));
        Ok(Self {
            config_dir: Config::config_dir()
                .map_err(resolve)?
                .to_string_lossy()
                .to_string(),
            paths: PathsOutput {
                data_dir: config.data_dir().map_err(resolve)?.to_string_lossy().to_string(),
                preview_file: config
                    .preview_file()
                    .map_err(resolve)?
                    .to_string_lossy()
                    .to_string(),
            },
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str().to_string(),
                show_help_on_startup: config.ui.show_help_on_startup,
            },
            preview: PreviewOutput {
                trusted_content: config.preview.trusted_content,
                port: config.preview.port,
            },
        })
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Layout Lab Configuration");
    println!("========================");
    println!();
    println!("Config Directory: {}", output.config_dir);
    println!();

    println!("Paths:");
    println!("  Data Directory: {}", output.paths.data_dir);
    println!("  Preview File:   {}", output.paths.preview_file);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Show Help on Startup: {}", output.ui.show_help_on_startup);
    println!();

    println!("Preview:");
    println!("  Trusted Content: {}", output.preview.trusted_content);
    println!("  Server Port:     {}", output.preview.port);
    println!();
}
