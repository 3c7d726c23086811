//! Canny edge detection on decoded satellite tiles.
//!
//! Pipeline, each stage deterministic and total over its input:
//! 1. Luma conversion (`0.299R + 0.587G + 0.114B`, truncated).
//! 2. [`blur`]: fixed 5×5 Gaussian, divisor 159, 2-pixel border left at zero.
//! 3. [`grad`]: 3×3 Sobel magnitude and direction, 1-pixel border excluded.
//! 4. [`nms`]: 4-orientation non-maximum suppression, clamped to 255.
//! 5. [`hysteresis`]: low/high double threshold with single-pass promotion.
//!
//! The result is an [`EdgeMap`] of the same size as the input whose cells are
//! 0 or 255. Every call allocates its own buffers.
pub mod blur;
pub mod grad;
pub mod hysteresis;
pub mod map;
pub mod nms;

pub use self::map::EdgeMap;

use crate::diagnostics::timing::{elapsed_ms, StageTiming, TimingBreakdown};
use crate::error::ProcessingError;
use crate::image::luma::luma_from_rgb;
use crate::image::{ImageU8, ImageView};
use image::RgbImage;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Smallest image the 5×5 blur can process at all.
pub const MIN_IMAGE_SIZE: usize = 5;

/// Hysteresis thresholds applied to the suppressed magnitude.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Weak-edge threshold; cells below it are never edges.
    pub low_threshold: u8,
    /// Strong-edge threshold; cells at or above it are always edges.
    pub high_threshold: u8,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 50,
            high_threshold: 100,
        }
    }
}

/// Edge map plus per-stage timings.
pub struct EdgeDetection {
    pub edges: EdgeMap,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Default)]
pub struct CannyEdgeDetector {
    pub options: CannyOptions,
}

impl CannyEdgeDetector {
    pub fn new(options: CannyOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline on an RGB tile.
    pub fn detect_rgb(&self, rgb: &RgbImage) -> Result<EdgeDetection, ProcessingError> {
        let start = Instant::now();
        let gray = luma_from_rgb(rgb);
        let luma_ms = elapsed_ms(start);
        let mut out = self.detect_gray(&gray.as_view())?;
        out.timings.stages.insert(0, StageTiming::new("luma", luma_ms));
        out.timings.total_ms += luma_ms;
        Ok(out)
    }

    /// Run blur → Sobel → NMS → hysteresis on an 8-bit grayscale view.
    pub fn detect_gray(&self, gray: &ImageU8) -> Result<EdgeDetection, ProcessingError> {
        let (w, h) = (gray.width(), gray.height());
        if w < MIN_IMAGE_SIZE || h < MIN_IMAGE_SIZE {
            return Err(ProcessingError::ImageTooSmall {
                width: w,
                height: h,
                min: MIN_IMAGE_SIZE,
            });
        }

        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let blurred = timings.time("blur", || blur::gaussian_blur_5x5(gray));
        let gradient = timings.time("sobel", || grad::sobel_gradients(&blurred.as_view()));
        let suppressed = timings.time("nms", || nms::non_maximum_suppression(&gradient));
        let edges = timings.time("hysteresis", || {
            hysteresis::hysteresis_threshold(
                &suppressed,
                self.options.low_threshold,
                self.options.high_threshold,
            )
        });
        timings.total_ms = elapsed_ms(total_start);

        let edges = EdgeMap::from_gray(edges);
        debug!(
            "Canny {}x{}: {} edge cells in {:.2} ms",
            w,
            h,
            edges.count_above(0),
            timings.total_ms
        );
        Ok(EdgeDetection { edges, timings })
    }
}
