//! Placement of every text block on the card, computed from measured extents.

use super::face::{BuiltinFace, FontFace};
use super::fit::{DESCRIPTION_START_SIZE, TITLE_START_SIZE, fit_font_size};
use crate::card::CardConfig;

pub const CARD_WIDTH: u32 = 3000;
pub const CARD_HEIGHT: u32 = 1812;
pub const BORDER_WIDTH: u32 = 20;
/// Pixel size of captions and the footer, drawn with the builtin face.
pub const DEFAULT_TEXT_SIZE: u32 = 21;

const TEXT_OFFSET: i32 = 100;
const FOOTER_MARGIN: i32 = 20;
const CAPTION_GAP: i32 = 10;

/// A line of text with its size and top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText {
    pub text: String,
    pub size: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PlacedText {
    fn centered<F: FontFace + ?Sized>(face: &F, text: &str, size: u32, y_of: impl Fn(u32) -> i32) -> Self {
        let (width, height) = face.measure(text, size);
        Self {
            text: text.to_string(),
            size,
            x: (CARD_WIDTH as i32 - width as i32) / 2,
            y: y_of(height),
            width,
            height,
        }
    }

    /// Last row covered by this block (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Geometry of a card before any pixels are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub title: PlacedText,
    pub description: PlacedText,
    /// Captions in insertion order, top to bottom.
    pub captions: Vec<PlacedText>,
    pub footer: PlacedText,
}

/// Lay out `config` with `face` for the title and description.
pub fn layout_card<F: FontFace + ?Sized>(config: &CardConfig, face: &F) -> CardLayout {
    let card_h = CARD_HEIGHT as i32;
    let centre_y = |height: u32| (card_h - height as i32) / 2;

    let title_size = fit_font_size(
        face,
        &config.title,
        CARD_WIDTH * 9 / 10,
        CARD_HEIGHT * 3 / 10,
        TITLE_START_SIZE,
    );
    let title = PlacedText::centered(face, &config.title, title_size, |h| centre_y(h) - TEXT_OFFSET);

    let description_size = fit_font_size(
        face,
        &config.description,
        CARD_WIDTH * 9 / 10,
        CARD_HEIGHT * 2 / 10,
        DESCRIPTION_START_SIZE,
    );
    let description = PlacedText::centered(face, &config.description, description_size, |h| {
        centre_y(h) + TEXT_OFFSET
    });

    let footer_text = config.footer_text();
    let footer = PlacedText::centered(&BuiltinFace, &footer_text, DEFAULT_TEXT_SIZE, |h| {
        card_h - h as i32 - FOOTER_MARGIN
    });

    // Stack upwards from just above the footer so captions never overlap.
    let mut captions = Vec::with_capacity(config.captions.len());
    let mut bottom = footer.y - CAPTION_GAP;
    for caption in config.captions.iter().rev() {
        let placed = PlacedText::centered(&BuiltinFace, caption, DEFAULT_TEXT_SIZE, |h| {
            bottom - h as i32
        });
        bottom = placed.y - CAPTION_GAP;
        captions.push(placed);
    }
    captions.reverse();

    CardLayout {
        title,
        description,
        captions,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> CardConfig {
        CardConfig::default().with_title("Hello").with_description("World")
    }

    #[test]
    fn title_above_and_description_below_centre() {
        let layout = layout_card(&config(), &BuiltinFace);
        let centre = CARD_HEIGHT as i32 / 2;
        assert!(layout.title.y + layout.title.height as i32 / 2 < centre);
        assert!(layout.description.y + layout.description.height as i32 / 2 > centre);
        assert!(layout.title.bottom() <= layout.description.y);
    }

    #[test]
    fn blocks_are_horizontally_centred() {
        let layout = layout_card(&config(), &BuiltinFace);
        for block in [&layout.title, &layout.description, &layout.footer] {
            let right = CARD_WIDTH as i32 - (block.x + block.width as i32);
            assert!((block.x - right).abs() <= 1, "{} is off-centre", block.text);
        }
    }

    #[test]
    fn fitted_blocks_stay_inside_their_boxes() {
        let long = "W".repeat(120);
        let layout = layout_card(
            &CardConfig::default().with_title(long.clone()).with_description(long),
            &BuiltinFace,
        );
        assert!(layout.title.width <= CARD_WIDTH * 9 / 10);
        assert!(layout.title.height <= CARD_HEIGHT * 3 / 10);
        assert!(layout.description.width <= CARD_WIDTH * 9 / 10);
        assert!(layout.description.height <= CARD_HEIGHT * 2 / 10);
    }

    #[test]
    fn footer_sits_above_the_border() {
        let layout = layout_card(&config(), &BuiltinFace);
        assert_eq!(layout.footer.text, "Times: 1");
        assert_eq!(layout.footer.bottom(), CARD_HEIGHT as i32 - 20);
        assert!(layout.footer.bottom() <= (CARD_HEIGHT - BORDER_WIDTH) as i32);
    }

    #[test]
    fn captions_stack_without_overlap_in_insertion_order() {
        let config = config()
            .with_caption("first")
            .with_caption("second")
            .with_caption("third");
        let layout = layout_card(&config, &BuiltinFace);
        let texts: Vec<&str> = layout.captions.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        for pair in layout.captions.windows(2) {
            assert!(pair[0].bottom() < pair[1].y);
        }
        let last = layout.captions.last().unwrap();
        assert!(last.bottom() < layout.footer.y);
        assert!(layout.description.bottom() < layout.captions[0].y);
    }

    #[test]
    fn no_captions_means_empty_stack() {
        assert!(layout_card(&config(), &BuiltinFace).captions.is_empty());
    }
}
