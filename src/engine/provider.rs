//! Strategies turning a decoded tile into an [`EdgeMap`].
//!
//! The engine is generic over the provider so that replays and demos can
//! inject a known map instead of running detection.
use crate::diagnostics::TimingBreakdown;
use crate::edges::{CannyEdgeDetector, EdgeDetection, EdgeMap};
use crate::error::ProcessingError;
use image::RgbImage;

pub trait EdgeMapProvider {
    fn detect(&self, rgb: &RgbImage) -> Result<EdgeDetection, ProcessingError>;
}

impl EdgeMapProvider for CannyEdgeDetector {
    fn detect(&self, rgb: &RgbImage) -> Result<EdgeDetection, ProcessingError> {
        self.detect_rgb(rgb)
    }
}

/// Returns the same edge map for every tile.
#[derive(Clone, Debug)]
pub struct PrecomputedEdges {
    edges: EdgeMap,
}

impl PrecomputedEdges {
    pub fn new(edges: EdgeMap) -> Self {
        Self { edges }
    }
}

impl EdgeMapProvider for PrecomputedEdges {
    fn detect(&self, _rgb: &RgbImage) -> Result<EdgeDetection, ProcessingError> {
        Ok(EdgeDetection {
            edges: self.edges.clone(),
            timings: TimingBreakdown::default(),
        })
    }
}
