//! Fixed 5×5 Gaussian smoothing (σ ≈ 1.4) with integer weights.
//!
//! The kernel sums to 159. Results are truncated to 8 bits. The outermost
//! 2-pixel frame is not processed and stays zero.
use crate::image::{GrayImageU8, ImageU8, ImageView};
use rayon::prelude::*;

pub const GAUSSIAN_KERNEL_5X5: [[u32; 5]; 5] = [
    [2, 4, 5, 4, 2],
    [4, 9, 12, 9, 4],
    [5, 12, 15, 12, 5],
    [4, 9, 12, 9, 4],
    [2, 4, 5, 4, 2],
];
pub const GAUSSIAN_KERNEL_SUM: u32 = 159;

const RADIUS: usize = 2;

pub fn gaussian_blur_5x5(gray: &ImageU8) -> GrayImageU8 {
    let (w, h) = (gray.width(), gray.height());
    let mut out = GrayImageU8::new(w, h);
    if w <= 2 * RADIUS || h <= 2 * RADIUS {
        return out;
    }

    out.as_raw_mut()
        .par_chunks_mut(w)
        .enumerate()
        .filter(|(y, _)| *y >= RADIUS && *y < h - RADIUS)
        .for_each(|(y, out_row)| {
            let rows: [&[u8]; 5] = [
                gray.row(y - 2),
                gray.row(y - 1),
                gray.row(y),
                gray.row(y + 1),
                gray.row(y + 2),
            ];
            for x in RADIUS..w - RADIUS {
                let mut sum = 0u32;
                for (src, weights) in rows.iter().zip(GAUSSIAN_KERNEL_5X5.iter()) {
                    for (kx, &wgt) in weights.iter().enumerate() {
                        sum += src[x + kx - RADIUS] as u32 * wgt;
                    }
                }
                out_row[x] = (sum / GAUSSIAN_KERNEL_SUM) as u8;
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_weights_sum_to_divisor() {
        let total: u32 = GAUSSIAN_KERNEL_5X5.iter().flatten().sum();
        assert_eq!(total, GAUSSIAN_KERNEL_SUM);
    }

    #[test]
    fn flat_image_keeps_interior_and_zeroes_border() {
        let (w, h) = (8, 7);
        let data = vec![100u8; w * h];
        let view = ImageU8::new(w, h, &data).expect("sized");
        let out = gaussian_blur_5x5(&view);
        for y in 0..h {
            for x in 0..w {
                let interior = (2..w - 2).contains(&x) && (2..h - 2).contains(&y);
                let expected = if interior { 100 } else { 0 };
                assert_eq!(out.get(x, y), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn tiny_image_is_left_blank() {
        let data = vec![255u8; 16];
        let view = ImageU8::new(4, 4, &data).expect("sized");
        assert!(gaussian_blur_5x5(&view).as_raw().iter().all(|&v| v == 0));
    }
}
