use super::face::FontFace;

/// Starting size for title-class text.
pub const TITLE_START_SIZE: u32 = 150;
/// Starting size for description-class text.
pub const DESCRIPTION_START_SIZE: u32 = 80;

/// Largest size, searching down from `start_size`, at which `text` fits in
/// `max_width` x `max_height`. Never returns less than 1.
pub fn fit_font_size<F: FontFace + ?Sized>(
    face: &F,
    text: &str,
    max_width: u32,
    max_height: u32,
    start_size: u32,
) -> u32 {
    let mut size = start_size.max(1);
    while size > 1 {
        let (width, height) = face.measure(text, size);
        if width <= max_width && height <= max_height {
            break;
        }
        size -= 1;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::face::BuiltinFace;
    use image::{Rgb, RgbImage};

    /// Face with simple proportional metrics: each char is 0.6 em wide.
    struct ProportionalFace;

    impl FontFace for ProportionalFace {
        fn measure(&self, text: &str, size: u32) -> (u32, u32) {
            let chars = text.chars().count() as u32;
            (chars * size * 3 / 5, if chars == 0 { 0 } else { size })
        }

        fn draw(&self, _: &mut RgbImage, _: &str, _: i32, _: i32, _: u32, _: Rgb<u8>) {}
    }

    #[test]
    fn returns_start_size_when_it_fits() {
        assert_eq!(fit_font_size(&ProportionalFace, "Hi", 2700, 543, 150), 150);
        assert_eq!(fit_font_size(&ProportionalFace, "", 10, 10, 80), 80);
    }

    #[test]
    fn finds_the_largest_fitting_size() {
        let face = ProportionalFace;
        let text = "A rather long description for a small box";
        for (w, h, start) in [(500, 200, 150), (2700, 362, 80), (300, 30, 150), (1000, 40, 80)] {
            let size = fit_font_size(&face, text, w, h, start);
            let (fw, fh) = face.measure(text, size);
            assert!(fw <= w && fh <= h, "size {size} overflows {w}x{h}");
            if size < start {
                let (nw, nh) = face.measure(text, size + 1);
                assert!(nw > w || nh > h, "size {} would also fit {w}x{h}", size + 1);
            }
        }
    }

    #[test]
    fn height_limits_the_size() {
        assert_eq!(fit_font_size(&ProportionalFace, "x", 10_000, 42, 150), 42);
    }

    #[test]
    fn stops_at_one_when_nothing_fits() {
        assert_eq!(fit_font_size(&ProportionalFace, "overflow", 1, 1, 150), 1);
        assert_eq!(fit_font_size(&BuiltinFace, "overflow", 0, 0, 80), 1);
        assert_eq!(fit_font_size(&ProportionalFace, "x", 100, 100, 0), 1);
    }

    #[test]
    fn builtin_face_fits_in_whole_scale_steps() {
        // "Hello" at scale s is 29s wide and 7s tall
        let size = fit_font_size(&BuiltinFace, "Hello", 300, 543, 150);
        assert_eq!(BuiltinFace.measure("Hello", size), (290, 70));
        assert_eq!(size, 76);
    }
}
