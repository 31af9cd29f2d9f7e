//! Structural outline of preview markup for terminal display.
//!
//! This is a best-effort tag scanner, not an HTML parser: it follows start
//! and end tags, tracks nesting depth and records classes and the first run
//! of text inside each element. Unbalanced markup produces a slightly off
//! outline rather than an error.

use std::sync::LazyLock;

use regex::Regex;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Start or end tag: slash, name, attributes.
static TAG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)([^>]*)>").ok());

/// Quoted `class` attribute value.
static CLASS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"class\s*=\s*["']([^"']*)["']"#).ok());

/// One element in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Nesting depth, 0 for top-level elements
    pub depth: usize,
    /// Lowercased element name
    pub tag: String,
    /// Class names from the `class` attribute
    pub classes: Vec<String>,
    /// First non-blank text directly inside the element
    pub text: Option<String>,
}

impl OutlineNode {
    /// CSS-selector-like label, e.g. `div.card.featured`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.tag.clone();
        for class in &self.classes {
            label.push('.');
            label.push_str(class);
        }
        label
    }
}

/// Builds the outline of `markup`.
#[must_use]
pub fn outline(markup: &str) -> Vec<OutlineNode> {
    let (Some(tag_re), Some(class_re)) = (TAG_RE.as_ref(), CLASS_RE.as_ref()) else {
        return Vec::new();
    };

    let mut nodes: Vec<OutlineNode> = Vec::new();
    // Indices into `nodes` of currently open elements
    let mut open: Vec<usize> = Vec::new();
    let mut cursor = 0;

    for caps in tag_re.captures_iter(markup) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        record_text(&mut nodes, &open, &markup[cursor..whole.start()]);
        cursor = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let tag = caps
            .get(2)
            .map(|m| m.as_str().to_ascii_lowercase())
            .unwrap_or_default();
        let attrs = caps.get(3).map_or("", |m| m.as_str());

        if closing {
            // Pop back to the matching element if it is open at all
            if let Some(pos) = open.iter().rposition(|&idx| nodes[idx].tag == tag) {
                open.truncate(pos);
            }
            continue;
        }

        let classes = class_re
            .captures(attrs)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        nodes.push(OutlineNode {
            depth: open.len(),
            tag: tag.clone(),
            classes,
            text: None,
        });

        let self_closing = attrs.trim_end().ends_with('/');
        if !self_closing && !VOID_ELEMENTS.contains(&tag.as_str()) {
            open.push(nodes.len() - 1);
        }
    }

    record_text(&mut nodes, &open, &markup[cursor..]);
    nodes
}

fn record_text(nodes: &mut [OutlineNode], open: &[usize], raw: &str) {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return;
    }
    if let Some(&idx) = open.last() {
        if nodes[idx].text.is_none() {
            nodes[idx].text = Some(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_card_layout() {
        let markup = r#"<div class="card-layout">
  <div class="card">Card 1</div>
  <div class="card">Card 2</div>
</div>"#;
        let nodes = outline(markup);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].label(), "div.card-layout");
        assert_eq!(nodes[0].depth, 0);
        assert_eq!(nodes[1].depth, 1);
        assert_eq!(nodes[1].text.as_deref(), Some("Card 1"));
        assert_eq!(nodes[2].text.as_deref(), Some("Card 2"));
    }

    #[test]
    fn test_outline_void_and_self_closing_elements() {
        let nodes = outline(r#"<form><input type="email" required><label>Email</label><br/></form>"#);
        let depths: Vec<_> = nodes.iter().map(|n| (n.tag.as_str(), n.depth)).collect();
        assert_eq!(depths, [("form", 0), ("input", 1), ("label", 1), ("br", 1)]);
    }

    #[test]
    fn test_outline_multiple_classes() {
        let nodes = outline(r#"<div class="mosaic-item item1">1</div>"#);
        assert_eq!(nodes[0].classes, ["mosaic-item", "item1"]);
        assert_eq!(nodes[0].label(), "div.mosaic-item.item1");
    }

    #[test]
    fn test_outline_tolerates_unbalanced_markup() {
        let nodes = outline("<div><span>open</div><p>after</p></b>");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].tag, "p");
        assert_eq!(nodes[2].depth, 0);
    }

    #[test]
    fn test_patterns_compile_once_and_are_reused() {
        assert!(TAG_RE.is_some());
        assert!(CLASS_RE.is_some());

        let markup = r#"<ul class="nav"><li>One</li><li>Two</li></ul>"#;
        let first = outline(markup);
        for _ in 0..50 {
            assert_eq!(outline(markup), first);
        }
        assert_eq!(first[0].label(), "ul.nav");
        assert_eq!(first[2].text.as_deref(), Some("Two"));
    }

    #[test]
    fn test_outline_plain_text_and_empty() {
        assert!(outline("").is_empty());
        assert!(outline("just text").is_empty());
    }
}
