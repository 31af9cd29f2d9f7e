//! Custom layout commands.

use crate::cli::common::{
    load_config, open_store, parse_family, print_json, read_text_source, CliError, CliResult,
};
use crate::models::{CustomLayout, LayoutFamily};
use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Inspect and edit the saved custom layouts
#[derive(Args, Debug)]
pub struct CustomArgs {
    #[command(subcommand)]
    command: CustomCommand,
}

#[derive(Subcommand, Debug)]
enum CustomCommand {
    /// Show saved custom layouts
    Show(CustomShowArgs),
    /// Replace a family's custom markup and/or stylesheet
    Set(CustomSetArgs),
    /// Clear custom layouts
    Reset(CustomResetArgs),
}

/// Show saved custom layouts
#[derive(Args, Debug)]
pub struct CustomShowArgs {
    /// Only show this family
    #[arg(short, long, value_name = "FAMILY")]
    family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Replace a family's custom layout fields
#[derive(Args, Debug)]
pub struct CustomSetArgs {
    /// Layout family (flex, grid, media)
    family: String,

    /// File with the new markup (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// File with the new stylesheet (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,
}

/// Clear custom layouts
#[derive(Args, Debug)]
pub struct CustomResetArgs {
    /// Only reset this family
    #[arg(short, long, value_name = "FAMILY")]
    family: Option<String>,
}

impl CustomArgs {
    /// Execute custom subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CustomCommand::Show(args) => args.execute(),
            CustomCommand::Set(args) => args.execute(),
            CustomCommand::Reset(args) => args.execute(),
        }
    }
}

impl CustomShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let families = match &self.family {
            Some(family) => vec![parse_family(family)?],
            None => LayoutFamily::ALL.to_vec(),
        };

        let config = load_config()?;
        let mut store = open_store(&config)?;
        let snapshot = store.load();

        if self.json {
            let selected: BTreeMap<LayoutFamily, &CustomLayout> = families
                .iter()
                .map(|&family| (family, snapshot.get(family)))
                .collect();
            return print_json(&selected);
        }

        for family in families {
            let layout = snapshot.get(family);
            println!("[{}]", family.id());
            if layout.is_empty() {
                println!("  (empty)");
                continue;
            }
            println!("HTML:");
            println!("{}", layout.html);
            println!("CSS:");
            println!("{}", layout.css);
        }
        Ok(())
    }
}

impl CustomSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.html.is_none() && self.css.is_none() {
            return Err(CliError::validation(
                "At least one of --html or --css must be specified",
            ));
        }
        let stdin_sources = [&self.html, &self.css]
            .into_iter()
            .flatten()
            .filter(|path| path.as_os_str() == "-")
            .count();
        if stdin_sources > 1 {
            return Err(CliError::validation(
                "Only one of --html and --css can read from stdin",
            ));
        }

        let family = parse_family(&self.family)?;
        let html = self.html.as_deref().map(read_text_source).transpose()?;
        let css = self.css.as_deref().map(read_text_source).transpose()?;

        let config = load_config()?;
        let mut store = open_store(&config)?;
        let mut layout = store.get(family).clone();
        if let Some(html) = html {
            layout.html = html;
        }
        if let Some(css) = css {
            layout.css = css;
        }

        store
            .save_family(family, layout)
            .map_err(|e| CliError::io(format!("Failed to save custom layout: {e}")))?;

        println!("Custom {} layout saved.", family.id());
        Ok(())
    }
}

impl CustomResetArgs {
    /// Execute reset command
    pub fn execute(&self) -> CliResult<()> {
        let family = self.family.as_deref().map(parse_family).transpose()?;

        let config = load_config()?;
        let mut store = open_store(&config)?;
        store
            .reset(family)
            .map_err(|e| CliError::io(format!("Failed to reset custom layouts: {e}")))?;

        match family {
            Some(family) => println!("Custom {} layout cleared.", family.id()),
            None => println!("All custom layouts cleared."),
        }
        Ok(())
    }
}
