//! Double-threshold edge classification.
//!
//! Cells at or above `high` become definite edges (255). Cells in
//! `[low, high)` are promoted when one of their 8 neighbours is already an
//! edge. Promotion runs as a single raster-order pass over the interior and
//! reads the output as it is written, so a weak cell may connect through a
//! weak neighbour promoted earlier in the same pass, but chains that need a
//! second pass are not followed.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

pub const EDGE: u8 = 255;

pub fn hysteresis_threshold(suppressed: &GrayImageU8, low: u8, high: u8) -> GrayImageU8 {
    let (w, h) = (suppressed.width(), suppressed.height());
    let mut out = GrayImageU8::new(w, h);

    for (dst, &src) in out.as_raw_mut().iter_mut().zip(suppressed.as_raw()) {
        if src >= high {
            *dst = EDGE;
        }
    }

    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let v = suppressed.get(x, y);
            if v < low || v >= high {
                continue;
            }
            if touches_edge(&out, x, y) {
                out.set(x, y, EDGE);
            }
        }
    }
    out
}

#[inline]
fn touches_edge(out: &GrayImageU8, x: usize, y: usize) -> bool {
    (y - 1..=y + 1).any(|ny| (x - 1..=x + 1).any(|nx| out.get(nx, ny) == EDGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(w: usize, h: usize, cells: &[(usize, usize, u8)]) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        for &(x, y, v) in cells {
            img.set(x, y, v);
        }
        img
    }

    #[test]
    fn strong_cells_are_edges_and_isolated_weak_cells_are_dropped() {
        let input = image(6, 6, &[(1, 1, 120), (4, 4, 70), (0, 5, 100)]);
        let out = hysteresis_threshold(&input, 50, 100);
        assert_eq!(out.get(1, 1), EDGE);
        assert_eq!(out.get(0, 5), EDGE);
        assert_eq!(out.get(4, 4), 0);
    }

    #[test]
    fn weak_cell_next_to_strong_is_promoted() {
        let input = image(5, 5, &[(2, 2, 150), (3, 3, 60), (1, 2, 49)]);
        let out = hysteresis_threshold(&input, 50, 100);
        assert_eq!(out.get(3, 3), EDGE);
        assert_eq!(out.get(1, 2), 0, "below low threshold stays off");
    }

    #[test]
    fn promotion_is_a_single_forward_pass() {
        // weak chain running away from the strong cell in raster order is
        // followed; the chain leading up to it from earlier rows is not.
        let input = image(
            7,
            7,
            &[(3, 3, 200), (4, 3, 60), (5, 3, 60), (3, 1, 60), (3, 2, 60)],
        );
        let out = hysteresis_threshold(&input, 50, 100);
        assert_eq!(out.get(4, 3), EDGE);
        assert_eq!(out.get(5, 3), EDGE);
        assert_eq!(out.get(3, 2), EDGE);
        assert_eq!(out.get(3, 1), 0);
    }
}
