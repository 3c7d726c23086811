//! Boundary refinement for hand-drawn land plots.
//!
//! Takes a rough polygon clicked on a map and, optionally, a satellite tile of
//! the surrounding bounds, and returns a refined polygon with its area. With a
//! usable tile the vertices snap onto Canny edges; otherwise a geometric
//! smoothing and angle-regularization pass is applied.

// Public modules (stable-ish surface)
pub mod engine;
pub mod error;
pub mod geometry;
pub mod tile;
pub mod types;

// Building blocks, public for tools and experiments.
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod image;
pub mod refine;

// --- High-level re-exports -------------------------------------------------

pub use crate::engine::{BoundaryRefiner, EngineParams};
pub use crate::error::RefineError;
pub use crate::geometry::polygon_area;
pub use crate::types::{BoundaryPolygon, GeoBounds, GeoPoint, RefinementResult};

/// Refine `rough_points` with the default engine configuration.
///
/// Equivalent to `BoundaryRefiner::default().refine(..)`.
pub fn refine_boundary(
    rough_points: &[GeoPoint],
    bounds: &GeoBounds,
    source: Option<&dyn tile::ImageSource>,
) -> Result<RefinementResult, RefineError> {
    BoundaryRefiner::default().refine(rough_points, bounds, source)
}

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use boundary_refine::prelude::*;
///
/// let rough = [
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 0.001),
///     GeoPoint::new(0.001, 0.001),
///     GeoPoint::new(0.001, 0.0),
/// ];
/// let bounds = GeoBounds::new(0.002, -0.001, 0.002, -0.001);
/// let result = BoundaryRefiner::default().refine(&rough, &bounds, None).unwrap();
/// assert_eq!(result.refined_polygon.len(), 4);
/// ```
pub mod prelude {
    pub use crate::tile::{FileSource, ImageSource, InMemorySource};
    pub use crate::{
        BoundaryPolygon, BoundaryRefiner, EngineParams, GeoBounds, GeoPoint, RefineError,
        RefinementResult,
    };
}
