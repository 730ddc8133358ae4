//! Card rendering: font faces, size fitting, layout and compositing.

mod face;
mod fit;
mod layout;
mod paint;

pub use face::{BuiltinFace, CardFace, FontFace, GLYPH_HEIGHT, GLYPH_WIDTH, OutlineFace};
pub use fit::{DESCRIPTION_START_SIZE, TITLE_START_SIZE, fit_font_size};
pub use layout::{
    BORDER_WIDTH, CARD_HEIGHT, CARD_WIDTH, CardLayout, DEFAULT_TEXT_SIZE, PlacedText, layout_card,
};
pub use paint::{render_card, render_card_with_face};
