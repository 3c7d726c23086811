//! Parameter types configuring the engine stages.
//!
//! Defaults reproduce the behaviour of the web application: Canny thresholds
//! 50/100, a 640 px tile, a 30 px snapping window and the 0.3 / 15° / 0.1
//! geometric fallback.

use crate::edges::CannyOptions;
use crate::refine::RefineOptions;
use crate::tile::DEFAULT_TILE_SIZE;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Hysteresis thresholds of the Canny detector.
    pub canny: CannyOptions,
    /// Snapping window and geometric fallback knobs.
    pub refine: RefineOptions,
    /// Edge length in pixels of the tile requested from the image source.
    pub tile_size: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            canny: CannyOptions::default(),
            refine: RefineOptions::default(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}
