//! User-editable layouts, one per layout family.

use serde::{Deserialize, Serialize};

use super::LayoutFamily;

/// A user-authored markup/stylesheet pair.
///
/// Field names match the persisted JSON (`html`, `css`). Missing fields
/// deserialize to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomLayout {
    /// Structural HTML
    #[serde(default)]
    pub html: String,
    /// Presentation CSS
    #[serde(default)]
    pub css: String,
}

impl CustomLayout {
    /// Creates a custom layout from markup and stylesheet.
    #[must_use]
    pub fn new(html: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
        }
    }

    /// Whether both fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty()
    }
}

/// Snapshot of every family's custom layout.
///
/// Exactly one entry exists per family at all times, which the struct shape
/// enforces. Serializes to `{ "flex": {..}, "grid": {..}, "media": {..} }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomLayouts {
    /// Flexbox custom layout
    #[serde(default)]
    pub flex: CustomLayout,
    /// Grid custom layout
    #[serde(default)]
    pub grid: CustomLayout,
    /// Media query custom layout
    #[serde(default)]
    pub media: CustomLayout,
}

impl CustomLayouts {
    /// Returns the entry for a family.
    #[must_use]
    pub const fn get(&self, family: LayoutFamily) -> &CustomLayout {
        match family {
            LayoutFamily::Flex => &self.flex,
            LayoutFamily::Grid => &self.grid,
            LayoutFamily::Media => &self.media,
        }
    }

    /// Returns the entry for a family mutably.
    pub fn get_mut(&mut self, family: LayoutFamily) -> &mut CustomLayout {
        match family {
            LayoutFamily::Flex => &mut self.flex,
            LayoutFamily::Grid => &mut self.grid,
            LayoutFamily::Media => &mut self.media,
        }
    }

    /// Returns a copy with one family's entry replaced.
    #[must_use]
    pub fn with(mut self, family: LayoutFamily, layout: CustomLayout) -> Self {
        *self.get_mut(family) = layout;
        self
    }

    /// Iterates `(family, layout)` pairs in family order.
    pub fn iter(&self) -> impl Iterator<Item = (LayoutFamily, &CustomLayout)> {
        LayoutFamily::ALL.into_iter().map(move |family| (family, self.get(family)))
    }
}
