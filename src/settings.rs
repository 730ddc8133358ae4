//! Application settings loaded from `cardsmith.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CardError;
use crate::output::{CardOutput, DEFAULT_FILE_NAME, DEFAULT_JPEG_QUALITY};

pub const DEFAULT_SETTINGS_FILE: &str = "cardsmith.toml";

/// Tunables for where fonts are read from and where the card is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    pub font_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub jpeg_quality: u8,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("Data/Fonts"),
            output_dir: PathBuf::from("Pictures"),
            output_file: DEFAULT_FILE_NAME.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl AppSettings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `cardsmith.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CardError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|err| CardError::io(&path, err))?;
        Self::from_toml(&raw).map_err(|reason| CardError::Settings { path, reason })
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        let settings: AppSettings = toml::from_str(raw).map_err(|err| err.to_string())?;
        if !(1..=100).contains(&settings.jpeg_quality) {
            return Err(format!(
                "jpeg_quality must be between 1 and 100 (got {})",
                settings.jpeg_quality
            ));
        }
        if settings.output_file.trim().is_empty() {
            return Err("output_file cannot be empty".to_string());
        }
        Ok(settings)
    }

    pub fn card_output(&self) -> CardOutput {
        CardOutput::new(&self.output_dir)
            .with_file_name(&self.output_file)
            .with_quality(self.jpeg_quality)
    }
}
