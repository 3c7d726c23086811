//! Decoding of encoded tiles and RGB → luma conversion.
use super::traits::ImageViewMut;
use super::u8::GrayImageU8;
use crate::error::AcquisitionError;
use image::RgbImage;

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Decode PNG/JPEG bytes into an 8-bit RGB image. Alpha is dropped.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, AcquisitionError> {
    if bytes.is_empty() {
        return Err(AcquisitionError::Decode("empty image buffer".to_string()));
    }
    let img = image::load_from_memory(bytes).map_err(|e| AcquisitionError::Decode(e.to_string()))?;
    Ok(img.to_rgb8())
}

/// Rec. 601 luma `0.299R + 0.587G + 0.114B`, truncated to 8 bits.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64).floor() as u8
}

/// Per-pixel luma of an RGB image.
pub fn luma_from_rgb(rgb: &RgbImage) -> GrayImageU8 {
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    let mut out = GrayImageU8::new(w, h);
    for (y, row) in rgb.rows().enumerate() {
        let out_row = out.row_mut(y);
        for (dst, px) in out_row.iter_mut().zip(row) {
            let [r, g, b] = px.0;
            *dst = luma(r, g, b);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;
    use image::Rgb;

    #[test]
    fn luma_weights_channels() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(100, 0, 0), 29);
        assert_eq!(luma(0, 100, 0), 58);
        assert_eq!(luma(0, 0, 100), 11);
    }

    #[test]
    fn luma_from_rgb_keeps_layout() {
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(2, 1, Rgb([0, 200, 0]));
        let gray = luma_from_rgb(&rgb);
        assert_eq!((gray.width(), gray.height()), (3, 2));
        assert_eq!(gray.get(2, 1), 117);
        assert_eq!(gray.get(0, 0), 0);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode_rgb(&[]), Err(AcquisitionError::Decode(_))));
        assert!(matches!(
            decode_rgb(b"definitely not a png"),
            Err(AcquisitionError::Decode(_))
        ));
    }
}
