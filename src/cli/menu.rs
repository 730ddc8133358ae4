//! The interactive menu (`cardsmith` / `cardsmith menu`).

use anyhow::{Context, Result};
use cardsmith::console::TerminalConsole;
use cardsmith::session::Session;
use tracing::info;

use crate::cli::common::Workspace;

/// Run the menu until the user exits.
pub fn handle(workspace: &Workspace) -> Result<()> {
    let mut console = TerminalConsole::enter().context("failed to initialise the terminal")?;
    info!("interactive session started");
    Session::new(&mut console, &workspace.catalog, &workspace.output)
        .run()
        .context("interactive session failed")?;
    info!("interactive session ended");
    Ok(())
}
