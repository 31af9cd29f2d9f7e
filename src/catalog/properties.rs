//! Per-family property lists and their visual examples.
//!
//! Each family has a list of properties shown in the sidebar. Some flex
//! properties have a visual example: a set of labelled flex containers,
//! one per property value, rendered through the same preview pipeline as
//! presets.

use crate::models::LayoutFamily;

const FLEX_PROPERTIES: &[&str] = &[
    "Card Layout",
    "flex-direction",
    "justify-content",
    "align-items",
    "flex-wrap",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
];

const GRID_PROPERTIES: &[&str] = &[
    "grid-template-columns",
    "grid-template-rows",
    "grid-gap",
    "grid-auto-flow",
    "justify-items",
    "align-items",
];

const MEDIA_PROPERTIES: &[&str] = &[
    "max-width",
    "min-width",
    "orientation",
    "aspect-ratio",
    "resolution",
    "color",
];

/// Sidebar properties for a family, in display order.
#[must_use]
pub const fn properties(family: LayoutFamily) -> &'static [&'static str] {
    match family {
        LayoutFamily::Flex => FLEX_PROPERTIES,
        LayoutFamily::Grid => GRID_PROPERTIES,
        LayoutFamily::Media => MEDIA_PROPERTIES,
    }
}

/// A rendered property demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyExample {
    /// Property the example demonstrates
    pub property: String,
    /// Structural HTML
    pub markup: String,
    /// Presentation CSS
    pub stylesheet: String,
}

/// One labelled container in an example: heading, modifier class, declarations.
struct Variant {
    heading: &'static str,
    class: &'static str,
    declarations: &'static str,
}

const BASE_STYLESHEET: &str = ".flex-example h4 {
  margin: 0.75rem 0 0.25rem;
}

.flex-container {
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem;
  min-height: 80px;
  background-color: var(--secondary-background);
  border-radius: 4px;
}

.flex-item {
  padding: 0.5rem 1rem;
  background-color: var(--card-background);
  border: 1px solid var(--text-color);
  border-radius: 4px;
  text-align: center;
}";

const CARD_LAYOUT_STYLESHEET: &str = ".card-layout {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.card {
  flex: 1 1 200px;
  max-width: 250px;
  background-color: var(--secondary-background);
  padding: 1rem;
  border-radius: 4px;
  text-align: center;
}";

/// Builds the visual example for a property, if one exists.
///
/// Returns `None` for properties without a demonstration; callers show
/// [`missing_example_message`] in that case.
#[must_use]
pub fn example(property: &str) -> Option<PropertyExample> {
    if property == "Card Layout" {
        let cards: String = (1..=4)
            .map(|n| format!("  <div class=\"card\">Card {n}</div>\n"))
            .collect();
        return Some(PropertyExample {
            property: property.to_string(),
            markup: format!("<div class=\"card-layout\">\n{cards}</div>"),
            stylesheet: CARD_LAYOUT_STYLESHEET.to_string(),
        });
    }

    let (variants, items): (&[Variant], usize) = match property {
        "flex-direction" => (
            &[
                Variant { heading: "Row (default)", class: "flex-row", declarations: "flex-direction: row;" },
                Variant { heading: "Column", class: "flex-column", declarations: "flex-direction: column;" },
            ],
            3,
        ),
        "justify-content" => (
            &[
                Variant { heading: "Flex-start (default)", class: "justify-start", declarations: "justify-content: flex-start;" },
                Variant { heading: "Center", class: "justify-center", declarations: "justify-content: center;" },
                Variant { heading: "Flex-end", class: "justify-end", declarations: "justify-content: flex-end;" },
                Variant { heading: "Space-between", class: "justify-space-between", declarations: "justify-content: space-between;" },
                Variant { heading: "Space-around", class: "justify-space-around", declarations: "justify-content: space-around;" },
            ],
            3,
        ),
        "align-items" => (
            &[
                Variant { heading: "Stretch (default)", class: "align-stretch", declarations: "align-items: stretch;" },
                Variant { heading: "Flex-start", class: "align-start", declarations: "align-items: flex-start;" },
                Variant { heading: "Center", class: "align-center", declarations: "align-items: center;" },
                Variant { heading: "Flex-end", class: "align-end", declarations: "align-items: flex-end;" },
            ],
            3,
        ),
        "flex-wrap" => (
            &[
                Variant { heading: "No wrap (default)", class: "flex-nowrap", declarations: "flex-wrap: nowrap;" },
                Variant { heading: "Wrap", class: "flex-wrap", declarations: "flex-wrap: wrap;" },
            ],
            5,
        ),
        "flex-grow" => (
            &[
                Variant { heading: "Default (no grow)", class: "flex-no-grow", declarations: "" },
                Variant { heading: "With flex-grow", class: "flex-grow", declarations: "" },
            ],
            3,
        ),
        _ => return None,
    };

    let mut markup = String::from("<div class=\"flex-example\">\n");
    let mut stylesheet = String::from(BASE_STYLESHEET);

    for variant in variants {
        markup.push_str(&format!("  <h4>{}</h4>\n", variant.heading));
        markup.push_str(&format!("  <div class=\"flex-container {}\">\n", variant.class));
        for n in 1..=items {
            markup.push_str(&format!("    <div class=\"flex-item\">{n}</div>\n"));
        }
        markup.push_str("  </div>\n");

        if !variant.declarations.is_empty() {
            stylesheet.push_str(&format!(
                "\n\n.{} {{\n  {}\n}}",
                variant.class, variant.declarations
            ));
        }
    }
    markup.push_str("</div>");

    // Wrapping needs items wider than the container allows
    if property == "flex-wrap" {
        stylesheet.push_str("\n\n.flex-wrap .flex-item,\n.flex-nowrap .flex-item {\n  flex: 0 0 30%;\n}");
    }
    if property == "flex-grow" {
        stylesheet.push_str("\n\n.flex-grow .flex-item {\n  flex-grow: 1;\n}");
    }

    Some(PropertyExample {
        property: property.to_string(),
        markup,
        stylesheet,
    })
}

/// Message shown for properties without a visual example.
#[must_use]
pub fn missing_example_message(property: &str) -> String {
    format!("No visual example available for {property}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lists() {
        assert_eq!(properties(LayoutFamily::Flex).len(), 8);
        assert_eq!(properties(LayoutFamily::Grid)[0], "grid-template-columns");
        assert_eq!(properties(LayoutFamily::Media).last(), Some(&"color"));
    }

    #[test]
    fn test_card_layout_example() {
        let example = example("Card Layout").unwrap();
        assert!(example.markup.starts_with("<div class=\"card-layout\">"));
        assert_eq!(example.markup.matches("class=\"card\"").count(), 4);
    }

    #[test]
    fn test_justify_content_example_has_five_containers() {
        let example = example("justify-content").unwrap();
        assert_eq!(example.markup.matches("flex-container ").count(), 5);
        assert_eq!(example.markup.matches("class=\"flex-item\"").count(), 15);
        assert!(example.stylesheet.contains(".justify-space-around {\n  justify-content: space-around;\n}"));
    }

    #[test]
    fn test_flex_wrap_uses_five_items() {
        let example = example("flex-wrap").unwrap();
        assert_eq!(example.markup.matches("class=\"flex-item\"").count(), 10);
        assert!(example.stylesheet.contains("flex-wrap: wrap;"));
    }

    #[test]
    fn test_flex_grow_styles_only_grow_variant() {
        let example = example("flex-grow").unwrap();
        assert!(example.stylesheet.contains(".flex-grow .flex-item"));
        assert!(!example.stylesheet.contains(".flex-no-grow {"));
    }

    #[test]
    fn test_properties_without_examples() {
        assert!(example("flex-basis").is_none());
        assert!(example("grid-auto-flow").is_none());
        assert_eq!(
            missing_example_message("orientation"),
            "No visual example available for orientation"
        );
    }
}
