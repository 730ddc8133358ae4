mod support;

use std::fs;
use std::path::Path;

use cardsmith::render::{
    BuiltinFace, CardFace, FontFace, OutlineFace, TITLE_START_SIZE, fit_font_size, layout_card,
    render_card_with_face,
};
use cardsmith::{
    CARD_HEIGHT, CARD_WIDTH, CardColor, CardConfig, CardError, CardOutput, RepeatCount,
    create_card, preview_card, render_card,
};
use pretty_assertions::assert_eq;

use support::placeholder_catalog;

fn hello_world(dir: &Path) -> CardConfig {
    let catalog = placeholder_catalog(dir);
    CardConfig::new(catalog.first().cloned())
        .with_title("Hello")
        .with_description("World")
        .with_times("3".parse::<RepeatCount>().unwrap())
}

#[test]
fn hello_world_footer_reads_times_three() {
    let dir = tempfile::tempdir().unwrap();
    let config = hello_world(dir.path());
    let face = CardFace::load_or_builtin(config.font.as_ref());
    let layout = layout_card(&config, &face);
    assert_eq!(layout.footer.text, "Times: 3");
    assert_eq!(layout.title.text, "Hello");
    assert_eq!(layout.description.text, "World");
}

#[test]
fn unloadable_font_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let config = hello_world(dir.path());
    assert!(CardFace::load_or_builtin(config.font.as_ref()).is_builtin());

    let card = render_card(&config);
    assert_eq!(card.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    assert_eq!(card, render_card_with_face(&config, &BuiltinFace));
}

#[test]
fn saved_cards_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = hello_world(dir.path()).with_caption("bring a friend");
    let output = CardOutput::new(dir.path().join("Pictures"));

    let path = create_card(&config, &output).unwrap();
    let first = fs::read(&path).unwrap();
    create_card(&config, &output).unwrap();
    let second = fs::read(&path).unwrap();
    assert!(first == second, "rendering must be deterministic");

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (CARD_WIDTH, CARD_HEIGHT));
}

#[test]
fn create_rejects_incomplete_cards_but_preview_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let output = CardOutput::new(dir.path());
    let config = CardConfig::default().with_title("Only a title");

    assert!(matches!(
        create_card(&config, &output),
        Err(CardError::MissingField("description"))
    ));
    assert!(!output.path().exists());

    preview_card(&config, &output).unwrap();
    assert!(output.path().exists());
}

#[test]
fn long_text_keeps_canvas_size() {
    let long = "an extraordinarily verbose title that keeps going ".repeat(8);
    let config = CardConfig::default()
        .with_title(long.clone())
        .with_description(long)
        .with_background_color(CardColor::new(30, 30, 30))
        .with_text_color(CardColor::WHITE);
    let card = render_card_with_face(&config, &BuiltinFace);
    assert_eq!(card.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
}

/// Exercised only where a common system font is installed.
#[test]
fn outline_font_fits_largest_size() {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    let Some(face) = candidates
        .iter()
        .map(Path::new)
        .filter(|path| path.exists())
        .find_map(|path| OutlineFace::load(path).ok())
    else {
        return;
    };

    let text = "Quarterly planning offsite";
    for (w, h) in [(2700, 543), (900, 543), (300, 40)] {
        let size = fit_font_size(&face, text, w, h, TITLE_START_SIZE);
        let (fw, fh) = face.measure(text, size);
        assert!(fw <= w && fh <= h);
        if size < TITLE_START_SIZE {
            let (nw, nh) = face.measure(text, size + 1);
            assert!(nw > w || nh > h);
        }
    }
}
