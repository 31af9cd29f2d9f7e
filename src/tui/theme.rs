//! Terminal color palettes for the playground.
//!
//! The light and dark palettes mirror the CSS variables of the preview page
//! (`assets/preview.css`), so the code panels and the rendered layout read
//! as one scheme.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::preview::PreviewTheme;

/// Semantic colors used by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which palette this is
    pub variant: ThemeVariant,

    /// Borders, titles and the selected row
    pub primary: Color,
    /// Focused field borders and the active family tab
    pub accent: Color,
    /// Notifications reporting success
    pub success: Color,
    /// Errors and failed operations
    pub error: Color,

    /// Body text
    pub text: Color,
    /// Labels and descriptions
    pub text_secondary: Color,
    /// Hints and placeholders
    pub text_muted: Color,

    /// Screen background (`--background-color`)
    pub background: Color,
    /// Code panel background (`--secondary-background`)
    pub surface: Color,

    /// Tag names in markup, selectors in stylesheets
    pub code_keyword: Color,
    /// Attribute values and property values
    pub code_value: Color,
}

/// Palette identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark background
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// Picks the palette matching the OS appearance.
    ///
    /// An undetectable OS mode falls back to dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark palette (`.theme-dark` in the preview page).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,

            primary: Color::Rgb(99, 179, 237),
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::Rgb(247, 250, 252),
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Rgb(26, 32, 44),
            surface: Color::Rgb(45, 55, 72),

            code_keyword: Color::LightBlue,
            code_value: Color::LightGreen,
        }
    }

    /// Light palette (`.theme-light` in the preview page).
    ///
    /// Foreground colors keep at least 4.5:1 contrast on the background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,

            primary: Color::Rgb(49, 130, 206),
            accent: Color::Rgb(180, 100, 0), // Dark orange; yellow vanishes on white
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Rgb(26, 32, 44),
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(240, 244, 248),

            code_keyword: Color::Rgb(0, 70, 160),
            code_value: Color::Rgb(0, 110, 40),
        }
    }

    /// Preview page scheme matching this palette.
    #[must_use]
    pub const fn preview_theme(&self) -> PreviewTheme {
        match self.variant {
            ThemeVariant::Light => PreviewTheme::Light,
            ThemeVariant::Dark => PreviewTheme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_matches_preview_variables() {
        let theme = Theme::dark();
        assert_eq!(theme.variant, ThemeVariant::Dark);
        // --background-color: #1a202c
        assert_eq!(theme.background, Color::Rgb(0x1a, 0x20, 0x2c));
        // --secondary-background: #2d3748
        assert_eq!(theme.surface, Color::Rgb(0x2d, 0x37, 0x48));
    }

    #[test]
    fn test_light_palette_avoids_yellow() {
        let theme = Theme::light();
        assert_eq!(theme.variant, ThemeVariant::Light);
        assert_eq!(theme.background, Color::White);
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_from_explicit_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_preview_theme_follows_variant() {
        assert_eq!(Theme::dark().preview_theme(), PreviewTheme::Dark);
        assert_eq!(Theme::light().preview_theme(), PreviewTheme::Light);
    }
}
