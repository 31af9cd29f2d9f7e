//! Property sidebar listing.

use crate::catalog::properties::{example, properties};
use crate::cli::common::{parse_family, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List the properties demonstrated for a family
#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// Layout family (flex, grid, media)
    family: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PropertyEntry {
    name: &'static str,
    has_example: bool,
}

impl PropertiesArgs {
    /// Execute properties command
    pub fn execute(&self) -> CliResult<()> {
        let family = parse_family(&self.family)?;
        let entries: Vec<PropertyEntry> = properties(family)
            .iter()
            .map(|&name| PropertyEntry {
                name,
                has_example: example(name).is_some(),
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        println!("{} Properties", family.display_name());
        for entry in entries {
            let marker = if entry.has_example { "*" } else { " " };
            println!("  {marker} {}", entry.name);
        }
        println!();
        println!("* has a visual example (render with the TUI or the preview server)");
        Ok(())
    }
}
