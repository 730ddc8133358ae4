//! State shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardsmith::{AppSettings, CardOutput, FontCatalog};
use tracing::info;

/// Font catalog and output location resolved from the settings.
pub struct Workspace {
    pub font_dir: PathBuf,
    pub catalog: FontCatalog,
    pub output: CardOutput,
}

impl Workspace {
    pub fn load(settings: &AppSettings) -> Result<Self> {
        let catalog = FontCatalog::discover(&settings.font_dir).with_context(|| {
            format!("failed to scan fonts in {}", settings.font_dir.display())
        })?;
        info!(
            fonts = catalog.len(),
            dir = %settings.font_dir.display(),
            "font catalog loaded"
        );
        Ok(Self {
            font_dir: settings.font_dir.clone(),
            catalog,
            output: settings.card_output(),
        })
    }
}
