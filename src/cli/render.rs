//! Render a preset or custom layout to a standalone HTML page.

use crate::catalog::PresetCatalog;
use crate::cli::common::{load_config, open_store, parse_family, CliError, CliResult};
use crate::config::ThemeMode;
use crate::models::PresetSelection;
use crate::preview::{ContentTrust, PreviewRenderer, PreviewTheme, PreviewWriter};
use clap::Args;
use std::path::PathBuf;

/// Render a layout preview page
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Layout family (flex, grid, media)
    family: String,

    /// Preset name, or "Custom Layout" for the saved custom layout
    name: String,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Escape markup and stylesheet instead of injecting them
    #[arg(long)]
    untrusted: bool,

    /// Page theme (auto, light, or dark); defaults to the configured theme
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

impl RenderArgs {
    /// Execute render command
    pub fn execute(&self) -> CliResult<()> {
        let family = parse_family(&self.family)?;
        let theme_override = self
            .theme
            .as_deref()
            .map(|value| {
                ThemeMode::parse(value).ok_or_else(|| {
                    CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
                })
            })
            .transpose()?;

        let config = load_config()?;

        let (markup, stylesheet) = match PresetSelection::from_name(&self.name) {
            PresetSelection::Custom => {
                let mut store = open_store(&config)?;
                let layout = store.get(family);
                (layout.html.clone(), layout.css.clone())
            }
            PresetSelection::Preset(name) => {
                let preset = PresetCatalog::builtin()
                    .lookup(family, &name)
                    .map_err(|e| CliError::validation(e.to_string()))?;
                (preset.markup().to_string(), preset.stylesheet().to_string())
            }
        };

        let trust = if self.untrusted {
            ContentTrust::Untrusted
        } else {
            ContentTrust::from_flag(config.preview.trusted_content)
        };
        let theme = PreviewTheme::from_mode(theme_override.unwrap_or(config.ui.theme_mode));
        let title = format!("{} - {}", family.display_name(), self.name);
        let document = PreviewRenderer::new(trust, theme).render(&title, &markup, &stylesheet);

        match &self.out {
            Some(path) => {
                PreviewWriter::new(path)
                    .write(&document)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                eprintln!("Wrote {}", path.display());
            }
            None => print!("{}", document.as_str()),
        }

        Ok(())
    }
}
