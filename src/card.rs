use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::color::CardColor;
use crate::error::CardError;
use crate::fonts::FontCatalogEntry;

/// How many times the card may be used, printed verbatim in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Count(NonZeroU32),
    Unlimited,
}

impl RepeatCount {
    pub const ONE: RepeatCount = RepeatCount::Count(NonZeroU32::MIN);

    /// Choices offered by the "How Many Times" menu.
    pub fn choices() -> Vec<RepeatCount> {
        [1u32, 2, 3, 5, 10]
            .into_iter()
            .filter_map(NonZeroU32::new)
            .map(RepeatCount::Count)
            .chain(std::iter::once(RepeatCount::Unlimited))
            .collect()
    }
}

impl Default for RepeatCount {
    fn default() -> Self {
        RepeatCount::ONE
    }
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatCount::Count(n) => write!(f, "{n}"),
            RepeatCount::Unlimited => write!(f, "Unlimited"),
        }
    }
}

impl FromStr for RepeatCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(RepeatCount::Unlimited);
        }
        s.parse::<NonZeroU32>()
            .map(RepeatCount::Count)
            .map_err(|_| format!("'{s}' is not a positive number or 'unlimited'"))
    }
}

/// Everything the renderer needs to draw one card.
///
/// Values are replaced rather than mutated: each `with_*` call consumes the
/// config and hands back the updated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    pub title: String,
    pub description: String,
    pub font: Option<FontCatalogEntry>,
    pub times: RepeatCount,
    pub border_color: Option<CardColor>,
    pub background_color: CardColor,
    pub text_color: CardColor,
    pub captions: Vec<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            font: None,
            times: RepeatCount::ONE,
            border_color: Some(CardColor::BLACK),
            background_color: CardColor::WHITE,
            text_color: CardColor::BLACK,
            captions: Vec::new(),
        }
    }
}

impl CardConfig {
    /// Fresh configuration preselecting the given font.
    pub fn new(font: Option<FontCatalogEntry>) -> Self {
        Self {
            font,
            ..Self::default()
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_font(self, font: FontCatalogEntry) -> Self {
        Self {
            font: Some(font),
            ..self
        }
    }

    pub fn with_times(self, times: RepeatCount) -> Self {
        Self { times, ..self }
    }

    pub fn with_border_color(self, border_color: Option<CardColor>) -> Self {
        Self {
            border_color,
            ..self
        }
    }

    pub fn with_background_color(self, background_color: CardColor) -> Self {
        Self {
            background_color,
            ..self
        }
    }

    pub fn with_text_color(self, text_color: CardColor) -> Self {
        Self { text_color, ..self }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.captions.push(caption.into());
        self
    }

    /// Footer line drawn at the bottom of the card.
    pub fn footer_text(&self) -> String {
        format!("Times: {}", self.times)
    }

    /// Check the fields required for a final (non-preview) card.
    pub fn ensure_complete(&self) -> Result<(), CardError> {
        if self.title.is_empty() {
            return Err(CardError::MissingField("title"));
        }
        if self.description.is_empty() {
            return Err(CardError::MissingField("description"));
        }
        Ok(())
    }
}
