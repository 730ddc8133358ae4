use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while parsing user-supplied colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidHex(String),
    #[error("unknown color '{0}' (use a preset name or #RRGGBB)")]
    Unknown(String),
}

/// Errors surfaced by the card library.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to load font {}: {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },
    #[error("{0} must be set before the card can be created")]
    MissingField(&'static str),
    #[error("no font named '{0}' in the catalog")]
    UnknownFont(String),
    #[error("invalid settings in {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode card image: {0}")]
    Image(#[from] image::ImageError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl CardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CardError::Io {
            path: path.into(),
            source,
        }
    }
}
