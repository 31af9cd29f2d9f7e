//! Design gallery commands.

use crate::catalog::PresetCatalog;
use crate::cli::common::{print_json, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Browse the design gallery
#[derive(Args, Debug)]
pub struct DesignsArgs {
    #[command(subcommand)]
    command: DesignsCommand,
}

#[derive(Subcommand, Debug)]
enum DesignsCommand {
    /// List gallery designs
    List(DesignsListArgs),
    /// Show one design's markup and stylesheet
    Show(DesignsShowArgs),
}

/// List gallery designs
#[derive(Args, Debug)]
pub struct DesignsListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one design
#[derive(Args, Debug)]
pub struct DesignsShowArgs {
    /// Design name, e.g. "Glassmorphism"
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct DesignSummary {
    name: &'static str,
    description: &'static str,
}

impl DesignsArgs {
    /// Execute designs subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            DesignsCommand::List(args) => args.execute(),
            DesignsCommand::Show(args) => args.execute(),
        }
    }
}

impl DesignsListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let designs = PresetCatalog::builtin().designs();

        if self.json {
            let summaries: Vec<DesignSummary> = designs
                .iter()
                .map(|design| DesignSummary {
                    name: design.name,
                    description: design.description,
                })
                .collect();
            return print_json(&summaries);
        }

        for design in designs {
            println!("  {:<22} {}", design.name, design.description);
        }
        Ok(())
    }
}

impl DesignsShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let design = PresetCatalog::builtin()
            .design(&self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            return print_json(design);
        }

        println!("{}", design.name);
        println!("{}", design.description);
        println!();
        println!("HTML:");
        println!("{}", design.markup());
        println!();
        println!("CSS:");
        println!("{}", design.stylesheet());
        Ok(())
    }
}
