//! Data models for layout families, presets and custom layouts.
//!
//! Models are plain data, independent of the UI, the storage backend and the
//! preview renderer.

pub mod custom_layout;
pub mod layout_family;
pub mod preset;

// Re-export all model types
pub use custom_layout::{CustomLayout, CustomLayouts};
pub use layout_family::LayoutFamily;
pub use preset::{Design, Preset, PresetSelection};
