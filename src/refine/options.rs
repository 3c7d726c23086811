//! Parameters of the edge-snapping and geometric refiners.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Half-size (px) of the square window searched around each vertex.
    pub search_radius: u32,
    /// Edge cells must be strictly above this strength to attract a vertex.
    pub edge_threshold: u8,
    /// Neighbour weight `w` of the smoothing pass; the vertex keeps `1 - w`.
    pub smoothing_weight: f64,
    /// Corners within this many degrees of a canonical angle are nudged.
    pub regularize_tolerance_deg: f64,
    /// Nudge length as a fraction of the outgoing edge length.
    pub regularize_step: f64,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            search_radius: 30,
            edge_threshold: 128,
            smoothing_weight: 0.3,
            regularize_tolerance_deg: 15.0,
            regularize_step: 0.1,
        }
    }
}
