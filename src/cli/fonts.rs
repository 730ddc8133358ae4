//! Font catalog listing (`cardsmith fonts`).

use anyhow::Result;
use clap::Args;

use crate::cli::common::Workspace;

/// Args for `cardsmith fonts`.
#[derive(Args, Debug)]
pub struct FontsArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `cardsmith fonts`.
pub fn handle(args: FontsArgs, workspace: &Workspace) -> Result<()> {
    let catalog = &workspace.catalog;
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }
    if catalog.is_empty() {
        println!("No fonts found in {}", workspace.font_dir.display());
        return Ok(());
    }
    println!("Fonts in {}:", workspace.font_dir.display());
    for entry in catalog.entries() {
        println!("  - {}: {}", entry.name, entry.path.display());
    }
    Ok(())
}
