//! Application-wide constants.
//!
//! Names, storage keys and timings shared by the TUI, the CLI and the
//! preview server.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Layout Lab";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "layoutlab";

/// The directory name for application data (config, custom layouts, preview).
///
/// - Linux: `~/.config/layoutlab/`
/// - macOS: `~/Library/Application Support/layoutlab/`
/// - Windows: `%APPDATA%\layoutlab\`
pub const APP_DATA_DIR: &str = "layoutlab";

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "LAYOUTLAB_CONFIG_DIR";

/// Storage key under which the custom layout snapshot is persisted.
pub const CUSTOM_LAYOUTS_KEY: &str = "customLayouts";

/// Sentinel preset name selecting the user-editable layout.
pub const CUSTOM_LAYOUT_NAME: &str = "Custom Layout";

/// Description shown for the custom layout entry in the preset list.
pub const CUSTOM_LAYOUT_DESCRIPTION: &str = "Create and save your own custom layout";

/// How long a transient notification stays on screen.
pub const NOTIFICATION_DWELL: Duration = Duration::from_secs(3);

/// Log file name inside the config directory (TUI mode).
pub const LOG_FILE_NAME: &str = "layoutlab.log";
