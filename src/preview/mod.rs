//! Live preview rendering.
//!
//! Turns a markup/stylesheet pair into a standalone HTML document. The
//! stylesheet is injected as a page-scoped `<style>` block and the markup
//! is injected into the body as-is: no sanitizing and no validation, so
//! malformed input renders however the browser tolerates it.
//!
//! Raw injection is a trust decision for a single-user authoring tool. It
//! is gated by [`ContentTrust`]; with [`ContentTrust::Untrusted`] both
//! strings are escaped and shown as source text instead.

pub mod outline;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ThemeMode;

pub use outline::{outline, OutlineNode};

/// Base stylesheet defining the theme variables presets rely on.
pub const BASE_STYLESHEET: &str = include_str!("../../assets/preview.css");

/// Whether preview content may be injected as live HTML/CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTrust {
    /// Content is authored by the current user: inject raw
    #[default]
    Trusted,
    /// Content comes from elsewhere: escape and display as text
    Untrusted,
}

impl ContentTrust {
    /// Maps the `preview.trusted_content` config flag.
    #[must_use]
    pub const fn from_flag(trusted: bool) -> Self {
        if trusted {
            Self::Trusted
        } else {
            Self::Untrusted
        }
    }
}

/// Color scheme applied to the preview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTheme {
    /// Light page background
    #[default]
    Light,
    /// Dark page background
    Dark,
}

impl PreviewTheme {
    /// Resolves a theme mode preference, detecting the OS theme for `Auto`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
            ThemeMode::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Self::Dark,
                Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => {
                    Self::Light
                }
            },
        }
    }

    /// CSS class selecting this theme's variables.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// A rendered, self-contained HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    html: String,
}

impl PreviewDocument {
    /// Full document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Consumes the document, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.html
    }
}

/// Renders previews with a fixed trust level and theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewRenderer {
    /// Trust level for injected content
    pub trust: ContentTrust,
    /// Page color scheme
    pub theme: PreviewTheme,
}

impl PreviewRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(trust: ContentTrust, theme: PreviewTheme) -> Self {
        Self { trust, theme }
    }

    /// Renders a titled preview page.
    #[must_use]
    pub fn render(&self, title: &str, markup: &str, stylesheet: &str) -> PreviewDocument {
        let mut html = String::with_capacity(
            BASE_STYLESHEET.len() + markup.len() + stylesheet.len() + 512,
        );

        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        html.push_str("<style>\n");
        html.push_str(BASE_STYLESHEET);
        html.push_str("</style>\n");

        match self.trust {
            ContentTrust::Trusted => {
                html.push_str("<style>\n");
                html.push_str(stylesheet);
                html.push_str("\n</style>\n</head>\n");
                html.push_str(&format!("<body class=\"{}\">\n", self.theme.css_class()));
                html.push_str(markup);
                html.push('\n');
            }
            ContentTrust::Untrusted => {
                html.push_str("</head>\n");
                html.push_str(&format!("<body class=\"{}\">\n", self.theme.css_class()));
                html.push_str("<h2>HTML</h2>\n<pre class=\"layoutlab-source\">");
                html.push_str(&escape_html(markup));
                html.push_str("</pre>\n<h2>CSS</h2>\n<pre class=\"layoutlab-source\">");
                html.push_str(&escape_html(stylesheet));
                html.push_str("</pre>\n");
            }
        }

        html.push_str("</body>\n</html>\n");
        PreviewDocument { html }
    }
}

/// Renders a preview with default options and the given trust level.
#[must_use]
pub fn render(markup: &str, stylesheet: &str, trust: ContentTrust) -> PreviewDocument {
    PreviewRenderer::new(trust, PreviewTheme::default()).render("Preview", markup, stylesheet)
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes the current preview to a file whenever it changes.
///
/// Point a browser tab at the file to follow the live preview.
#[derive(Debug, Clone)]
pub struct PreviewWriter {
    path: PathBuf,
    last_written: Option<String>,
}

impl PreviewWriter {
    /// Creates a writer targeting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_written: None,
        }
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the document if it differs from the last write.
    ///
    /// Returns `true` if the file was written.
    pub fn write(&mut self, document: &PreviewDocument) -> Result<bool> {
        if self.last_written.as_deref() == Some(document.as_str()) {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create preview directory: {}",
                    parent.display()
                ))?;
            }
        }

        let temp_path = self.path.with_extension("html.tmp");
        fs::write(&temp_path, document.as_str()).context(format!(
            "Failed to write temp preview file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp preview file to: {}",
            self.path.display()
        ))?;

        debug!("Wrote preview to {}", self.path.display());
        self.last_written = Some(document.as_str().to_string());
        Ok(true)
    }
}
