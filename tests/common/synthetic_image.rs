use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

pub const DARK: [u8; 3] = [30, 40, 30];
pub const BRIGHT: [u8; 3] = [220, 210, 200];

/// Bright axis-aligned rectangle `[x0, x1) × [y0, y1)` on a dark field,
/// roughly what a fenced plot looks like on a satellite tile.
pub fn rectangle_rgb(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RgbImage {
    assert!(x0 < x1 && y0 < y1, "rectangle must be non-empty");
    RgbImage::from_fn(width, height, |x, y| {
        if x >= x0 && x < x1 && y >= y0 && y < y1 {
            Rgb(BRIGHT)
        } else {
            Rgb(DARK)
        }
    })
}

/// Uniform tile without any structure.
pub fn flat_rgb(width: u32, height: u32, value: u8) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([value; 3]))
}

/// PNG encoding of `img`, as an image service would deliver it.
pub fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .expect("PNG encoding into memory");
    cursor.into_inner()
}
