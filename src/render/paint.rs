use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use super::face::{BuiltinFace, CardFace, FontFace};
use super::layout::{BORDER_WIDTH, CARD_HEIGHT, CARD_WIDTH, PlacedText, layout_card};
use crate::card::CardConfig;
use crate::color::CardColor;

/// Render `config` with its selected font, falling back to the builtin face
/// when the font cannot be loaded.
pub fn render_card(config: &CardConfig) -> RgbImage {
    let face = CardFace::load_or_builtin(config.font.as_ref());
    render_card_with_face(config, &face)
}

/// Render `config` using `face` for the fitted title and description.
pub fn render_card_with_face<F: FontFace + ?Sized>(config: &CardConfig, face: &F) -> RgbImage {
    let layout = layout_card(config, face);
    debug!(
        title_size = layout.title.size,
        description_size = layout.description.size,
        captions = layout.captions.len(),
        "laid out card"
    );

    let mut card = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, config.background_color.rgb());
    let ink = config.text_color.rgb();

    draw_block(&mut card, face, &layout.title, ink);
    draw_block(&mut card, face, &layout.description, ink);
    for caption in &layout.captions {
        draw_block(&mut card, &BuiltinFace, caption, ink);
    }
    if let Some(border) = config.border_color {
        draw_border(&mut card, border);
    }
    draw_block(&mut card, &BuiltinFace, &layout.footer, ink);

    card
}

fn draw_block<F: FontFace + ?Sized>(card: &mut RgbImage, face: &F, block: &PlacedText, ink: Rgb<u8>) {
    if block.text.is_empty() {
        return;
    }
    face.draw(card, &block.text, block.x, block.y, block.size, ink);
}

fn draw_border(card: &mut RgbImage, color: CardColor) {
    let (w, h) = card.dimensions();
    let bw = BORDER_WIDTH;
    let bands = [
        Rect::at(0, 0).of_size(w, bw),
        Rect::at(0, (h - bw) as i32).of_size(w, bw),
        Rect::at(0, 0).of_size(bw, h),
        Rect::at((w - bw) as i32, 0).of_size(bw, h),
    ];
    for band in bands {
        draw_filled_rect_mut(card, band, color.rgb());
    }
}
