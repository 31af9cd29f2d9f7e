//! Compiled-in presets, gallery designs and the active preset selection.

use serde::Serialize;
use std::fmt;

use crate::constants::CUSTOM_LAYOUT_NAME;

/// A named, read-only bundled example of markup and stylesheet.
///
/// Presets are created at build time and never mutated. The raw text may
/// carry surrounding whitespace; use [`Preset::markup`] and
/// [`Preset::stylesheet`] to get the trimmed form shown in previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Display name, unique within its family
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Structural HTML
    #[serde(rename = "html")]
    pub markup: &'static str,
    /// Presentation CSS
    #[serde(rename = "css")]
    pub stylesheet: &'static str,
}

impl Preset {
    /// Trimmed markup.
    #[must_use]
    pub fn markup(&self) -> &'static str {
        self.markup.trim()
    }

    /// Trimmed stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &'static str {
        self.stylesheet.trim()
    }
}

/// A standalone design snippet from the gallery.
///
/// Like [`Preset`], the raw text keeps its surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Design {
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Structural HTML
    #[serde(rename = "html")]
    pub markup: &'static str,
    /// Presentation CSS
    #[serde(rename = "css")]
    pub stylesheet: &'static str,
}

impl Design {
    /// Trimmed markup.
    #[must_use]
    pub fn markup(&self) -> &'static str {
        self.markup.trim()
    }

    /// Trimmed stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &'static str {
        self.stylesheet.trim()
    }
}

/// What the user picked from the preset list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresetSelection {
    /// A catalog preset by name (may not exist in the catalog)
    Preset(String),
    /// The per-family user-editable layout
    Custom,
}

impl PresetSelection {
    /// Parses a user-supplied name, mapping the "Custom Layout" sentinel.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == CUSTOM_LAYOUT_NAME {
            Self::Custom
        } else {
            Self::Preset(name.to_string())
        }
    }

    /// Display name of the selection.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Preset(name) => name,
            Self::Custom => CUSTOM_LAYOUT_NAME,
        }
    }

    /// Whether this is the custom layout sentinel.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for PresetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_accessors_trim() {
        let preset = Preset {
            name: "Test",
            description: "desc",
            markup: "\n  <div></div>\n   ",
            stylesheet: "\n.a { color: red; }\n",
        };
        assert_eq!(preset.markup(), "<div></div>");
        assert_eq!(preset.stylesheet(), ".a { color: red; }");
    }

    #[test]
    fn test_design_accessors_trim() {
        let design = Design {
            name: "Test",
            description: "desc",
            markup: "\n<button class=\"b\">Go</button>\n  ",
            stylesheet: "  .b { color: teal; }\n\n",
        };
        assert_eq!(design.markup(), "<button class=\"b\">Go</button>");
        assert_eq!(design.stylesheet(), ".b { color: teal; }");
    }

    #[test]
    fn test_selection_from_name() {
        assert_eq!(PresetSelection::from_name("Custom Layout"), PresetSelection::Custom);
        assert_eq!(
            PresetSelection::from_name("Holy Grail"),
            PresetSelection::Preset("Holy Grail".to_string())
        );
        // Sentinel match is exact
        assert!(!PresetSelection::from_name("custom layout").is_custom());
    }

    #[test]
    fn test_selection_name() {
        assert_eq!(PresetSelection::Custom.name(), "Custom Layout");
        assert_eq!(PresetSelection::Preset("Grid Mosaic".into()).to_string(), "Grid Mosaic");
    }
}
