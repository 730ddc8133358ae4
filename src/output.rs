//! Persistence of the single card image.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::CardError;

pub const DEFAULT_FILE_NAME: &str = "card.jpg";
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(PathBuf),
    NotFound(PathBuf),
}

/// Where the card is written. Every save replaces the previous card.
#[derive(Debug, Clone)]
pub struct CardOutput {
    dir: PathBuf,
    file_name: String,
    quality: u8,
}

impl CardOutput {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), CardError> {
        fs::create_dir_all(&self.dir).map_err(|err| CardError::io(&self.dir, err))
    }

    /// Encode `card` as JPEG next to the target and rename it into place.
    pub fn save(&self, card: &RgbImage) -> Result<PathBuf, CardError> {
        self.ensure_dir()?;
        let target = self.path();
        let mut staged =
            NamedTempFile::new_in(&self.dir).map_err(|err| CardError::io(&self.dir, err))?;
        let staged_path = staged.path().to_path_buf();
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            JpegEncoder::new_with_quality(&mut writer, self.quality).encode_image(card)?;
            writer.flush().map_err(|err| CardError::io(&staged_path, err))?;
        }
        staged
            .persist(&target)
            .map_err(|err| CardError::io(&target, err.error))?;
        info!(path = %target.display(), "card saved");
        Ok(target)
    }

    /// Remove the card if present.
    pub fn delete(&self) -> Result<DeleteOutcome, CardError> {
        self.ensure_dir()?;
        let target = self.path();
        match fs::remove_file(&target) {
            Ok(()) => {
                info!(path = %target.display(), "card deleted");
                Ok(DeleteOutcome::Deleted(target))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(DeleteOutcome::NotFound(self.dir.clone()))
            }
            Err(err) => Err(CardError::io(&target, err)),
        }
    }
}
