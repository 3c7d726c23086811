use super::timing::TimingBreakdown;
use crate::types::{RefinementPath, RefinementResult};
use serde::Serialize;

/// What one refinement call did, for logging and tooling.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementTrace {
    pub path: RefinementPath,
    /// Set when an image source was supplied but the edge path failed.
    pub fallback_reason: Option<String>,
    /// Decoded tile size, when decoding succeeded.
    pub image_size: Option<(usize, usize)>,
    /// Edge cells above the snapping threshold.
    pub edge_pixels: Option<usize>,
    /// Vertices that moved onto an edge pixel.
    pub snapped_vertices: Option<usize>,
    pub rough_area: f64,
    pub refined_area: f64,
    pub timings: TimingBreakdown,
}

impl RefinementTrace {
    pub(crate) fn new(rough_area: f64) -> Self {
        Self {
            path: RefinementPath::Geometric,
            fallback_reason: None,
            image_size: None,
            edge_pixels: None,
            snapped_vertices: None,
            rough_area,
            refined_area: 0.0,
            timings: TimingBreakdown::default(),
        }
    }

    /// Relative area change of the refined polygon against the rough one.
    pub fn area_change_ratio(&self) -> Option<f64> {
        (self.rough_area > 0.0).then(|| (self.refined_area - self.rough_area) / self.rough_area)
    }
}

/// Result of [`BoundaryRefiner::refine_detailed`](crate::engine::BoundaryRefiner::refine_detailed).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementReport {
    pub result: RefinementResult,
    pub trace: RefinementTrace,
}
