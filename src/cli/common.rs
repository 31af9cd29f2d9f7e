//! Shared CLI types: errors, exit codes and small helpers.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::models::LayoutFamily;
use crate::store::{CustomLayoutStore, FileStorage};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or unknown name
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a family argument.
pub fn parse_family(value: &str) -> CliResult<LayoutFamily> {
    value.parse().map_err(|_| {
        CliError::validation(format!(
            "Unknown layout family '{value}'. Expected flex, grid or media"
        ))
    })
}

/// Loads the configuration, reporting parse errors as validation failures.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Opens the file-backed custom layout store configured for this user.
pub fn open_store(config: &Config) -> CliResult<CustomLayoutStore> {
    let data_dir = config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;
    Ok(CustomLayoutStore::new(FileStorage::new(data_dir)))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Reads a text argument: `-` reads stdin, anything else is a file path.
pub fn read_text_source(source: &Path) -> CliResult<String> {
    if source.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        return Ok(text);
    }

    fs::read_to_string(source)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", source.display())))
}
