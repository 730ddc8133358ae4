//! Core library for composing card images with auto-fitted text.

mod card;
mod color;
mod error;
mod fonts;
mod output;
mod settings;

pub mod console;
pub mod menu;
pub mod render;
pub mod session;

pub use card::{CardConfig, RepeatCount};
pub use color::{CardColor, PRESETS};
pub use error::{CardError, ColorError};
pub use fonts::{FontCatalog, FontCatalogEntry};
pub use output::{CardOutput, DEFAULT_FILE_NAME, DEFAULT_JPEG_QUALITY, DeleteOutcome};
pub use render::{CARD_HEIGHT, CARD_WIDTH, render_card};
pub use settings::{AppSettings, DEFAULT_SETTINGS_FILE};

use std::path::PathBuf;

/// Render `config` and save it through `output`, returning the written path.
pub fn create_card(config: &CardConfig, output: &CardOutput) -> Result<PathBuf, CardError> {
    config.ensure_complete()?;
    output.save(&render_card(config))
}

/// Render `config` regardless of missing fields and save it.
pub fn preview_card(config: &CardConfig, output: &CardOutput) -> Result<PathBuf, CardError> {
    output.save(&render_card(config))
}
