//! Layout family tag selecting which presets and properties apply.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three layout techniques the playground demonstrates.
///
/// Serialized in lowercase (`flex`, `grid`, `media`), which is also the key
/// used for each family in the persisted custom layout object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutFamily {
    /// Flexbox layouts
    #[default]
    Flex,
    /// CSS Grid layouts
    Grid,
    /// Media query driven layouts
    Media,
}

impl LayoutFamily {
    /// All families in display order.
    pub const ALL: [Self; 3] = [Self::Flex, Self::Grid, Self::Media];

    /// Lowercase identifier used in storage, URLs and the CLI.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::Media => "media",
        }
    }

    /// Human-readable name used in navigation chrome.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Flex => "Flex",
            Self::Grid => "Grid",
            Self::Media => "Media Query",
        }
    }

    /// Heading for the main content area ("Flex Layouts", ...).
    #[must_use]
    pub fn heading(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => format!("{}{} Layouts", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    /// Next family, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Flex => Self::Grid,
            Self::Grid => Self::Media,
            Self::Media => Self::Flex,
        }
    }

    /// Previous family, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Flex => Self::Media,
            Self::Grid => Self::Flex,
            Self::Media => Self::Grid,
        }
    }
}

impl fmt::Display for LayoutFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutFamily {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "flex" | "flexbox" => Ok(Self::Flex),
            "grid" => Ok(Self::Grid),
            "media" | "media-query" | "mediaquery" => Ok(Self::Media),
            other => anyhow::bail!(
                "Unknown layout family '{other}'. Must be 'flex', 'grid', or 'media'"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_ids_round_trip_through_from_str() {
        for family in LayoutFamily::ALL {
            assert_eq!(family.id().parse::<LayoutFamily>().unwrap(), family);
        }
    }

    #[test]
    fn test_family_from_str_aliases() {
        assert_eq!("Flexbox".parse::<LayoutFamily>().unwrap(), LayoutFamily::Flex);
        assert_eq!(" media-query ".parse::<LayoutFamily>().unwrap(), LayoutFamily::Media);
        assert!("table".parse::<LayoutFamily>().is_err());
    }

    #[test]
    fn test_family_serializes_lowercase() {
        let json = serde_json::to_string(&LayoutFamily::Grid).unwrap();
        assert_eq!(json, "\"grid\"");
    }

    #[test]
    fn test_family_cycle() {
        assert_eq!(LayoutFamily::Media.next(), LayoutFamily::Flex);
        assert_eq!(LayoutFamily::Flex.previous(), LayoutFamily::Media);
        assert_eq!(LayoutFamily::Grid.next().previous(), LayoutFamily::Grid);
    }

    #[test]
    fn test_heading() {
        assert_eq!(LayoutFamily::Flex.heading(), "Flex Layouts");
        assert_eq!(LayoutFamily::Media.heading(), "Media Layouts");
    }
}
