//! Discovery of the font files a card can be rendered with.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CardError;

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// A font file found in the catalog directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontCatalogEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Fonts available for the session, read once at startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FontCatalog {
    entries: Vec<FontCatalogEntry>,
}

impl FontCatalog {
    pub fn new(mut entries: Vec<FontCatalogEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        Self { entries }
    }

    /// Scan `dir` (non-recursively) for font files.
    ///
    /// A missing directory yields an empty catalog; other read errors are returned.
    pub fn discover(dir: &Path) -> Result<Self, CardError> {
        let listing = match fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(dir = %dir.display(), "font directory not found; catalog is empty");
                return Ok(Self::default());
            }
            Err(err) => return Err(CardError::io(dir, err)),
        };

        let mut entries = Vec::new();
        for item in listing {
            let item = item.map_err(|err| CardError::io(dir, err))?;
            let path = item.path();
            if !path.is_file() || !has_font_extension(&path) {
                continue;
            }
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            debug!(font = %name, path = %path.display(), "found font");
            entries.push(FontCatalogEntry { name, path });
        }
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[FontCatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<&FontCatalogEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&FontCatalogEntry> {
        self.entries.get(index)
    }

    /// Resolve a font by name (case-insensitive).
    pub fn find(&self, name: &str) -> Result<&FontCatalogEntry, CardError> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CardError::UnknownFont(name.to_string()))
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn discovers_font_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Zed.ttf", "alpha.OTF", "notes.txt", "Mono.ttf.bak"] {
            fs::write(dir.path().join(name), b"not really a font").unwrap();
        }
        fs::create_dir(dir.path().join("nested.ttf")).unwrap();

        let catalog = FontCatalog::discover(dir.path()).unwrap();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "alpha"]);
        assert_eq!(catalog.first().unwrap().path, dir.path().join("Zed.ttf"));
    }

    #[test]
    fn missing_directory_is_an_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FontCatalog::discover(&dir.path().join("absent")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = FontCatalog::new(vec![FontCatalogEntry {
            name: "Serif".into(),
            path: PathBuf::from("fonts/Serif.ttf"),
        }]);
        assert_eq!(catalog.find("serif").unwrap().name, "Serif");
        assert!(matches!(catalog.find("Sans"), Err(CardError::UnknownFont(_))));
    }
}
