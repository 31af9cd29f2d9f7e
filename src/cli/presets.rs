//! Preset catalog commands.

use crate::catalog::PresetCatalog;
use crate::cli::common::{parse_family, print_json, CliError, CliResult};
use crate::models::{LayoutFamily, Preset};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Browse the built-in layout presets
#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand, Debug)]
enum PresetsCommand {
    /// List presets, optionally for one family
    List(PresetsListArgs),
    /// Show one preset's markup and stylesheet
    Show(PresetsShowArgs),
}

/// List presets
#[derive(Args, Debug)]
pub struct PresetsListArgs {
    /// Only list this family (flex, grid, media)
    #[arg(short, long, value_name = "FAMILY")]
    family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one preset
#[derive(Args, Debug)]
pub struct PresetsShowArgs {
    /// Layout family (flex, grid, media)
    family: String,

    /// Preset name, e.g. "Card Layout"
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PresetSummary {
    family: LayoutFamily,
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize, Debug)]
struct PresetDetail {
    family: LayoutFamily,
    name: &'static str,
    description: &'static str,
    html: &'static str,
    css: &'static str,
}

impl PresetsArgs {
    /// Execute presets subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetsCommand::List(args) => args.execute(),
            PresetsCommand::Show(args) => args.execute(),
        }
    }
}

impl PresetsListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let families = match &self.family {
            Some(family) => vec![parse_family(family)?],
            None => LayoutFamily::ALL.to_vec(),
        };
        let catalog = PresetCatalog::builtin();

        if self.json {
            let presets: Vec<PresetSummary> = families
                .iter()
                .flat_map(|&family| {
                    catalog.presets(family).iter().map(move |preset| PresetSummary {
                        family,
                        name: preset.name,
                        description: preset.description,
                    })
                })
                .collect();
            return print_json(&presets);
        }

        for (i, family) in families.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", family.heading());
            for preset in catalog.presets(*family) {
                println!("  {:<28} {}", preset.name, preset.description);
            }
        }

        Ok(())
    }
}

impl PresetsShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let family = parse_family(&self.family)?;
        let preset = PresetCatalog::builtin()
            .lookup(family, &self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            return print_json(&detail(family, preset));
        }

        println!("{} ({})", preset.name, family.display_name());
        println!("{}", preset.description);
        println!();
        println!("HTML:");
        println!("{}", preset.markup());
        println!();
        println!("CSS:");
        println!("{}", preset.stylesheet());
        Ok(())
    }
}

fn detail(family: LayoutFamily, preset: &'static Preset) -> PresetDetail {
    PresetDetail {
        family,
        name: preset.name,
        description: preset.description,
        html: preset.markup(),
        css: preset.stylesheet(),
    }
}
