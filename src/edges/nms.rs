//! Non-maximum suppression on gradient magnitude.
//!
//! The continuous direction is folded modulo 180° and rounded to the nearest
//! of four orientations (0°, 45°, 90°, 135°), which selects the two
//! comparison neighbours. A pixel survives when its magnitude is at least as
//! large as both neighbours; survivors are truncated and clamped to 255.
//!
//! The outermost 1-pixel frame is ignored so neighbour lookups never leave
//! the raster.
use super::grad::SobelGradient;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Neighbour offsets `(dx1, dy1, dx2, dy2)` for a direction in radians.
#[inline]
fn neighbour_offsets(direction: f32) -> (isize, isize, isize, isize) {
    let folded = direction.to_degrees().rem_euclid(180.0);
    match ((folded / 45.0).round() as i32) % 4 {
        0 => (-1, 0, 1, 0),
        1 => (1, -1, -1, 1),
        2 => (0, -1, 0, 1),
        _ => (-1, -1, 1, 1),
    }
}

pub fn non_maximum_suppression(grad: &SobelGradient) -> GrayImageU8 {
    let w = grad.magnitude.width();
    let h = grad.magnitude.height();
    let mut out = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let dir_row = grad.direction.row(y);
        for x in 1..w - 1 {
            let mag = grad.magnitude.get(x, y);
            if mag <= 0.0 {
                continue;
            }
            let (dx1, dy1, dx2, dy2) = neighbour_offsets(dir_row[x]);
            let n1 = grad
                .magnitude
                .get((x as isize + dx1) as usize, (y as isize + dy1) as usize);
            let n2 = grad
                .magnitude
                .get((x as isize + dx2) as usize, (y as isize + dy2) as usize);
            if mag >= n1 && mag >= n2 {
                out.set(x, y, mag.floor().min(255.0) as u8);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    fn grad_from(mag: &[f32], dir: f32, w: usize, h: usize) -> SobelGradient {
        let mut magnitude = ImageF32::new(w, h);
        magnitude.data.copy_from_slice(mag);
        let mut direction = ImageF32::new(w, h);
        direction.data.iter_mut().for_each(|d| *d = dir);
        SobelGradient {
            magnitude,
            direction,
        }
    }

    #[test]
    fn orientation_bins_fold_opposites() {
        assert_eq!(neighbour_offsets(0.0), neighbour_offsets(std::f32::consts::PI));
        assert_eq!(neighbour_offsets(-std::f32::consts::PI), (-1, 0, 1, 0));
        assert_eq!(neighbour_offsets(std::f32::consts::FRAC_PI_2), (0, -1, 0, 1));
        assert_eq!(
            neighbour_offsets(-3.0 * std::f32::consts::FRAC_PI_4),
            neighbour_offsets(std::f32::consts::FRAC_PI_4)
        );
    }

    #[test]
    fn keeps_ridge_and_suppresses_flanks() {
        // horizontal gradient, ridge in column 2
        #[rustfmt::skip]
        let mag = [
            0.0, 0.0,   0.0,   0.0,  0.0,
            0.0, 90.0, 300.0, 90.0, 0.0,
            0.0, 90.0, 300.0, 90.0, 0.0,
            0.0, 0.0,   0.0,   0.0,  0.0,
        ];
        let out = non_maximum_suppression(&grad_from(&mag, 0.0, 5, 4));
        assert_eq!(out.get(2, 1), 255);
        assert_eq!(out.get(1, 1), 0);
        assert_eq!(out.get(3, 2), 0);
    }

    #[test]
    fn plateau_pixels_survive_ties() {
        let mag = [0.0, 0.0, 0.0, 0.0, 70.5, 70.5, 0.0, 0.0, 0.0];
        let out = non_maximum_suppression(&grad_from(&mag, 0.0, 3, 3));
        assert_eq!(out.get(1, 1), 70);
    }
}
