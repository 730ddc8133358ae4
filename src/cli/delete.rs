//! Card removal (`cardsmith delete`).

use anyhow::{Context, Result};
use cardsmith::DeleteOutcome;

use crate::cli::common::Workspace;

/// Execute `cardsmith delete`.
pub fn handle(workspace: &Workspace) -> Result<()> {
    match workspace.output.delete().context("failed to delete card")? {
        DeleteOutcome::Deleted(path) => println!("Deleted {}", path.display()),
        DeleteOutcome::NotFound(dir) => println!("No card found in {}", dir.display()),
    }
    Ok(())
}
