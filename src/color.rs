//! RGB colors, named presets and the `#RRGGBB` parser.

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::error::ColorError;

/// An RGB triple applied to one layer of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardColor(pub [u8; 3]);

impl CardColor {
    pub const BLACK: CardColor = CardColor([0, 0, 0]);
    pub const WHITE: CardColor = CardColor([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        CardColor([r, g, b])
    }

    /// Parse `#RRGGBB` or `RRGGBB`. Anything else is rejected.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ColorError::InvalidHex(input.to_string());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(CardColor([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    /// Name of the matching preset, if any.
    pub fn preset_name(&self) -> Option<&'static str> {
        PRESETS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    /// Human label used by the menus: preset name or hex form.
    pub fn describe(&self) -> String {
        match self.preset_name() {
            Some(name) => name.to_string(),
            None => self.to_string(),
        }
    }

    pub fn rgb(&self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for CardColor {
    type Err = ColorError;

    /// Accepts a preset name (any case) or a hex color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((_, color)) = PRESETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(*color);
        }
        CardColor::from_hex(trimmed).map_err(|_| ColorError::Unknown(trimmed.to_string()))
    }
}

/// Named colors offered by the color menus, in display order.
pub const PRESETS: [(&str, CardColor); 9] = [
    ("Black", CardColor::new(0, 0, 0)),
    ("Red", CardColor::new(255, 0, 0)),
    ("Green", CardColor::new(0, 255, 0)),
    ("Yellow", CardColor::new(255, 255, 0)),
    ("Blue", CardColor::new(0, 0, 255)),
    ("Magenta", CardColor::new(255, 0, 255)),
    ("Cyan", CardColor::new(0, 255, 255)),
    ("White", CardColor::new(255, 255, 255)),
    ("Gray", CardColor::new(169, 169, 169)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!(CardColor::from_hex("#FF5733"), Ok(CardColor::new(255, 87, 51)));
        assert_eq!(CardColor::from_hex("FF5733"), Ok(CardColor::new(255, 87, 51)));
        assert_eq!(CardColor::from_hex("#a9a9a9"), Ok(CardColor::new(169, 169, 169)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["#ZZZZZZ", "#FFF", "", "#", "FF57331", "#FF 573", "##FF5733", "+F5733"] {
            assert_eq!(
                CardColor::from_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(CardColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn from_str_accepts_presets_and_hex() {
        assert_eq!("gray".parse::<CardColor>(), Ok(CardColor::new(169, 169, 169)));
        assert_eq!("Magenta".parse::<CardColor>(), Ok(CardColor::new(255, 0, 255)));
        assert_eq!("#000080".parse::<CardColor>(), Ok(CardColor::new(0, 0, 128)));
        assert_eq!(
            "teal".parse::<CardColor>(),
            Err(ColorError::Unknown("teal".to_string()))
        );
    }

    #[test]
    fn describe_prefers_preset_names() {
        assert_eq!(CardColor::BLACK.describe(), "Black");
        assert_eq!(CardColor::new(1, 2, 3).describe(), "#010203");
    }
}
