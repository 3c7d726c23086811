//! Sobel gradients with magnitude and continuous direction.
//!
//! - Convolves the standard 3×3 Sobel pair over the blurred image.
//! - Outputs per-pixel `mag = sqrt(gx^2+gy^2)` and `dir = atan2(gy, gx)`.
//! - The outermost 1-pixel frame is excluded and left at zero.
//!
//! Complexity: O(W·H); memory: two float planes.
use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct SobelGradient {
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub magnitude: ImageF32,
    /// Gradient direction in radians, range (-π, π]
    pub direction: ImageF32,
}

pub fn sobel_gradients(l: &ImageU8) -> SobelGradient {
    let (w, h) = (l.width(), l.height());
    let mut magnitude = ImageF32::new(w, h);
    let mut direction = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return SobelGradient {
            magnitude,
            direction,
        };
    }

    for y in 1..h - 1 {
        let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
        let out_mag = magnitude.row_mut(y);
        let out_dir = direction.row_mut(y);
        for x in 1..w - 1 {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for (ky, src) in rows.iter().enumerate() {
                for kx in 0..3 {
                    let v = src[x + kx - 1] as i32;
                    gx += v * SOBEL_KERNEL_X[ky][kx];
                    gy += v * SOBEL_KERNEL_Y[ky][kx];
                }
            }
            let (gx, gy) = (gx as f32, gy as f32);
            out_mag[x] = (gx * gx + gy * gy).sqrt();
            out_dir[x] = gy.atan2(gx);
        }
    }

    SobelGradient {
        magnitude,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: usize, h: usize, split: usize) -> Vec<u8> {
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in split..w {
                data[y * w + x] = 100;
            }
        }
        data
    }

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let (w, h) = (6, 5);
        let data = vertical_step(w, h, 3);
        let view = ImageU8::new(w, h, &data).expect("sized");
        let grad = sobel_gradients(&view);
        // columns 2 and 3 straddle the step
        assert!((grad.magnitude.get(2, 2) - 400.0).abs() < 1e-3);
        assert!((grad.magnitude.get(3, 2) - 400.0).abs() < 1e-3);
        assert!(grad.direction.get(2, 2).abs() < 1e-6);
        assert_eq!(grad.magnitude.get(1, 2), 0.0);
    }

    #[test]
    fn border_frame_is_zero() {
        let (w, h) = (6, 5);
        let data = vertical_step(w, h, 1);
        let view = ImageU8::new(w, h, &data).expect("sized");
        let grad = sobel_gradients(&view);
        for x in 0..w {
            assert_eq!(grad.magnitude.get(x, 0), 0.0);
            assert_eq!(grad.magnitude.get(x, h - 1), 0.0);
        }
        for y in 0..h {
            assert_eq!(grad.magnitude.get(0, y), 0.0);
            assert_eq!(grad.magnitude.get(w - 1, y), 0.0);
        }
    }
}
