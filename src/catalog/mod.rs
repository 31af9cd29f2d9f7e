//! Compiled-in catalog of layout presets and gallery designs.
//!
//! Presets are keyed by a closed [`LayoutFamily`] plus a name. Lookups
//! preserve declaration order for menus and return an explicit
//! [`CatalogError::PresetNotFound`] through [`PresetCatalog::lookup`];
//! [`PresetCatalog::get`] is the lenient form whose callers treat a miss as
//! empty markup and stylesheet.

mod designs;
mod flex;
mod grid;
mod media;
pub mod properties;

use thiserror::Error;

use crate::models::{Design, LayoutFamily, Preset};

/// Errors returned by strict catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No preset with this name in the family
    #[error("no preset named '{name}' in the {family} family")]
    PresetNotFound {
        /// Family that was searched
        family: LayoutFamily,
        /// Requested preset name
        name: String,
    },
    /// No design with this name in the gallery
    #[error("no design named '{0}' in the gallery")]
    DesignNotFound(String),
}

/// Read-only mapping from family to its ordered presets.
#[derive(Debug, Clone, Copy)]
pub struct PresetCatalog {
    flex: &'static [Preset],
    grid: &'static [Preset],
    media: &'static [Preset],
    designs: &'static [Design],
}

impl PresetCatalog {
    /// The catalog bundled with the application.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            flex: flex::PRESETS,
            grid: grid::PRESETS,
            media: media::PRESETS,
            designs: designs::DESIGNS,
        }
    }

    /// Presets of a family in declaration order.
    #[must_use]
    pub const fn presets(&self, family: LayoutFamily) -> &'static [Preset] {
        match family {
            LayoutFamily::Flex => self.flex,
            LayoutFamily::Grid => self.grid,
            LayoutFamily::Media => self.media,
        }
    }

    /// Preset names of a family in declaration order.
    pub fn names(&self, family: LayoutFamily) -> impl Iterator<Item = &'static str> {
        self.presets(family).iter().map(|preset| preset.name)
    }

    /// Finds a preset, or `None` when the family has no such name.
    #[must_use]
    pub fn get(&self, family: LayoutFamily, name: &str) -> Option<&'static Preset> {
        self.presets(family).iter().find(|preset| preset.name == name)
    }

    /// Finds a preset, reporting a miss as an error.
    pub fn lookup(&self, family: LayoutFamily, name: &str) -> Result<&'static Preset, CatalogError> {
        self.get(family, name)
            .ok_or_else(|| CatalogError::PresetNotFound {
                family,
                name: name.to_string(),
            })
    }

    /// Gallery designs in declaration order.
    #[must_use]
    pub const fn designs(&self) -> &'static [Design] {
        self.designs
    }

    /// Finds a gallery design by name.
    pub fn design(&self, name: &str) -> Result<&'static Design, CatalogError> {
        self.designs
            .iter()
            .find(|design| design.name == name)
            .ok_or_else(|| CatalogError::DesignNotFound(name.to_string()))
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_family_has_presets() {
        let catalog = PresetCatalog::builtin();
        for family in LayoutFamily::ALL {
            assert_eq!(catalog.presets(family).len(), 6, "{family} should have six presets");
        }
    }

    #[test]
    fn test_names_unique_within_family() {
        let catalog = PresetCatalog::builtin();
        for family in LayoutFamily::ALL {
            let names: HashSet<_> = catalog.names(family).collect();
            assert_eq!(names.len(), catalog.presets(family).len());
        }
    }

    #[test]
    fn test_declaration_order_preserved() {
        let catalog = PresetCatalog::builtin();
        let flex: Vec<_> = catalog.names(LayoutFamily::Flex).collect();
        assert_eq!(
            flex,
            [
                "Holy Grail",
                "Card Layout",
                "Centered Content",
                "Sticky Footer",
                "Masonry Layout",
                "Navbar with Dropdown"
            ]
        );
        assert_eq!(catalog.names(LayoutFamily::Grid).next(), Some("Grid Gallery"));
        assert_eq!(catalog.names(LayoutFamily::Media).next(), Some("Mobile First"));
    }

    #[test]
    fn test_card_layout_markup() {
        let catalog = PresetCatalog::builtin();
        let preset = catalog.get(LayoutFamily::Flex, "Card Layout").unwrap();
        assert!(preset.markup().starts_with(r#"<div class="card-layout">"#));
        assert_eq!(preset.markup().matches(r#"class="card""#).count(), 4);
        assert!(preset.stylesheet().starts_with(".card-layout {"));
    }

    #[test]
    fn test_get_is_scoped_to_family() {
        let catalog = PresetCatalog::builtin();
        assert!(catalog.get(LayoutFamily::Grid, "Card Layout").is_none());
        assert!(catalog.get(LayoutFamily::Grid, "Grid Card Layout").is_some());
    }

    #[test]
    fn test_lookup_reports_missing_preset() {
        let catalog = PresetCatalog::builtin();
        let err = catalog.lookup(LayoutFamily::Media, "Nope").unwrap_err();
        assert_eq!(
            err,
            CatalogError::PresetNotFound {
                family: LayoutFamily::Media,
                name: "Nope".to_string()
            }
        );
        assert_eq!(err.to_string(), "no preset named 'Nope' in the media family");
    }

    #[test]
    fn test_custom_layout_sentinel_is_not_a_preset() {
        let catalog = PresetCatalog::builtin();
        for family in LayoutFamily::ALL {
            assert!(catalog.get(family, crate::constants::CUSTOM_LAYOUT_NAME).is_none());
        }
    }

    #[test]
    fn test_preset_text_is_trimmed_and_non_empty() {
        let catalog = PresetCatalog::builtin();
        for family in LayoutFamily::ALL {
            for preset in catalog.presets(family) {
                assert!(!preset.markup().is_empty(), "{} markup", preset.name);
                assert!(!preset.stylesheet().is_empty(), "{} stylesheet", preset.name);
                assert!(!preset.description.is_empty());
            }
        }
    }

    #[test]
    fn test_designs() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(catalog.designs().len(), 8);
        assert_eq!(catalog.designs()[0].name, "Modern Login");
        assert!(catalog.design("Glassmorphism").is_ok());
        assert_eq!(
            catalog.design("Brutalism").unwrap_err(),
            CatalogError::DesignNotFound("Brutalism".to_string())
        );
    }
}
