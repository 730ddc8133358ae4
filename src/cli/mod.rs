//! Command-line interface wiring for the `cardsmith` binary.
//!
//! The clap definitions live here; each command family is executed by its own
//! submodule.

use std::path::PathBuf;

use anyhow::Result;
use cardsmith::AppSettings;
use clap::{Parser, Subcommand};

pub mod common;
pub mod delete;
pub mod fonts;
pub mod menu;
pub mod render;

/// Parsed CLI entrypoint for the `cardsmith` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cardsmith",
    version,
    about = "Create card images with auto-fitted text from a terminal menu"
)]
pub struct Cli {
    /// Settings file (defaults to ./cardsmith.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory scanned for .ttf/.otf fonts.
    #[arg(long = "fonts-dir", global = true)]
    pub fonts_dir: Option<PathBuf>,
    /// Directory the card image is written to.
    #[arg(long = "output-dir", global = true)]
    pub output_dir: Option<PathBuf>,
    /// Command to run; the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Menu))
    }
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu.
    Menu,
    /// Render a card without the menu.
    Render(render::RenderArgs),
    /// Delete the saved card.
    Delete,
    /// List the fonts in the catalog.
    Fonts(fonts::FontsArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli, settings: &AppSettings) -> Result<()> {
    let workspace = common::Workspace::load(settings)?;
    match cli.command {
        None | Some(Command::Menu) => menu::handle(&workspace),
        Some(Command::Render(args)) => render::handle(args, &workspace),
        Some(Command::Delete) => delete::handle(&workspace),
        Some(Command::Fonts(args)) => fonts::handle(args, &workspace),
    }
}
