//! CLI command handlers for Layout Lab.
//!
//! This module provides headless, scriptable access to the preset catalog,
//! the saved custom layouts and preview rendering.

pub mod common;
pub mod config;
pub mod custom;
pub mod designs;
pub mod presets;
pub mod properties;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use custom::CustomArgs;
pub use designs::DesignsArgs;
pub use presets::PresetsArgs;
pub use properties::PropertiesArgs;
pub use render::RenderArgs;
