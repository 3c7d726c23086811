//! Engine pipeline orchestrating one refinement call end to end.
//!
//! Typical usage:
//! ```no_run
//! use boundary_refine::engine::BoundaryRefiner;
//! use boundary_refine::tile::InMemorySource;
//! use boundary_refine::types::{GeoBounds, GeoPoint};
//!
//! # fn example(tile_png: Vec<u8>) {
//! let rough = [
//!     GeoPoint::new(-1.2860, 36.8170),
//!     GeoPoint::new(-1.2860, 36.8180),
//!     GeoPoint::new(-1.2870, 36.8180),
//!     GeoPoint::new(-1.2870, 36.8170),
//! ];
//! let bounds = GeoBounds::new(-1.2855, -1.2875, 36.8185, 36.8165);
//! let source = InMemorySource::new(tile_png, 640);
//! let refiner = BoundaryRefiner::default();
//! let result = refiner.refine(&rough, &bounds, Some(&source)).expect("4 points");
//! println!("{} m², features {:?}", result.area, result.detected_features);
//! # }
//! ```

use super::params::EngineParams;
use super::provider::EdgeMapProvider;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{RefinementReport, RefinementTrace};
use crate::edges::{CannyEdgeDetector, EdgeMap};
use crate::error::{EdgeSnapFailure, ProcessingError, RefineError};
use crate::geometry::polygon_area;
use crate::image::luma::decode_rgb;
use crate::image::ImageView;
use crate::refine::{geometric_refine, snap_to_edges, EdgeSnapOutcome, PixelProjection};
use crate::tile::{ImageSource, TileRequest};
use crate::types::{BoundaryPolygon, GeoBounds, GeoPoint, RefinementPath, RefinementResult};
use log::{debug, warn};
use std::time::Instant;

/// Polygon refinement engine: edge snapping with a geometric fallback.
///
/// Holds configuration only; every call allocates its own buffers, so one
/// refiner can serve concurrent calls through a shared reference.
pub struct BoundaryRefiner<P: EdgeMapProvider = CannyEdgeDetector> {
    params: EngineParams,
    provider: P,
}

impl BoundaryRefiner<CannyEdgeDetector> {
    /// Refiner backed by the Canny detector configured from `params`.
    pub fn new(params: EngineParams) -> Self {
        let provider = CannyEdgeDetector::new(params.canny);
        Self { params, provider }
    }
}

impl Default for BoundaryRefiner<CannyEdgeDetector> {
    fn default() -> Self {
        Self::new(EngineParams::default())
    }
}

struct SnapSuccess {
    outcome: EdgeSnapOutcome,
    image_size: (usize, usize),
}

impl<P: EdgeMapProvider> BoundaryRefiner<P> {
    /// Refiner using a custom edge map strategy.
    pub fn with_provider(params: EngineParams, provider: P) -> Self {
        Self { params, provider }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Refine bare rough points, labelling the output `P1..Pn`.
    ///
    /// Fails only when fewer than three points are supplied. Image failures
    /// switch to the geometric refiner and are reported through
    /// `detected_features` and `notes`.
    pub fn refine(
        &self,
        rough_points: &[GeoPoint],
        bounds: &GeoBounds,
        source: Option<&dyn ImageSource>,
    ) -> Result<RefinementResult, RefineError> {
        let polygon = BoundaryPolygon::from_points(rough_points);
        self.refine_detailed(&polygon, bounds, source)
            .map(|report| report.result)
    }

    /// Refine a labelled polygon and return the result with its trace.
    pub fn refine_detailed(
        &self,
        rough: &BoundaryPolygon,
        bounds: &GeoBounds,
        source: Option<&dyn ImageSource>,
    ) -> Result<RefinementReport, RefineError> {
        if !rough.is_closed_shape() {
            return Err(RefineError::Validation { count: rough.len() });
        }

        let total_start = Instant::now();
        let mut trace = RefinementTrace::new(polygon_area(&rough.points()));

        let snapped = match source {
            Some(source) => match self.try_edge_snap(rough, bounds, source, &mut trace) {
                Ok(success) => Some(success),
                Err(failure) => {
                    warn!("edge snapping failed, using geometric refinement: {failure}");
                    trace.fallback_reason = Some(failure.to_string());
                    None
                }
            },
            None => {
                debug!("no image source supplied, using geometric refinement");
                None
            }
        };

        let (refined, notes) = match snapped {
            Some(SnapSuccess {
                outcome,
                image_size,
            }) => {
                trace.path = RefinementPath::EdgeSnapping;
                trace.image_size = Some(image_size);
                trace.edge_pixels = Some(outcome.edge_pixels);
                trace.snapped_vertices = Some(outcome.snapped);
                let notes = format!(
                    "Boundary refined using Canny edge detection ({}/{} vertices snapped to edges)",
                    outcome.snapped,
                    outcome.polygon.len()
                );
                (outcome.polygon, notes)
            }
            None => {
                trace.path = RefinementPath::Geometric;
                let polygon = trace
                    .timings
                    .time("geometric", || geometric_refine(rough, &self.params.refine));
                let notes = match &trace.fallback_reason {
                    Some(reason) => format!(
                        "Boundary refined using geometric algorithms (edge detection unavailable: {reason})"
                    ),
                    None => "Boundary refined using geometric algorithms".to_string(),
                };
                (polygon, notes)
            }
        };

        let area = trace
            .timings
            .time("area", || polygon_area(&refined.points()));
        trace.refined_area = area;
        trace.timings.total_ms = elapsed_ms(total_start);

        let path = trace.path;
        debug!(
            "refined {} vertices via {:?}: area {:.1} m² (rough {:.1} m²) in {:.2} ms",
            refined.len(),
            path,
            area,
            trace.rough_area,
            trace.timings.total_ms
        );

        let result = RefinementResult {
            refined_polygon: refined,
            area,
            confidence: path.confidence(),
            detected_features: path.features().iter().map(|f| f.to_string()).collect(),
            notes,
        };
        Ok(RefinementReport { result, trace })
    }

    /// Fetch → decode → edge map → snap. Every failure is returned, never
    /// raised, so the caller can branch to the fallback.
    fn try_edge_snap(
        &self,
        rough: &BoundaryPolygon,
        bounds: &GeoBounds,
        source: &dyn ImageSource,
        trace: &mut RefinementTrace,
    ) -> Result<SnapSuccess, EdgeSnapFailure> {
        let request = TileRequest::for_bounds(*bounds, self.params.tile_size);
        let raster = trace.timings.time("fetch", || source.fetch(&request))?;
        let rgb = trace.timings.time("decode", || decode_rgb(&raster.bytes))?;

        let (w, h) = (rgb.width() as usize, rgb.height() as usize);
        if w != raster.size as usize || h != raster.size as usize {
            warn!(
                "tile declared as {0}x{0} px but decoded to {1}x{2}; using decoded size",
                raster.size, w, h
            );
        }
        trace.image_size = Some((w, h));

        let detection = self.provider.detect(&rgb)?;
        trace.timings.extend_prefixed("edges", &detection.timings);
        let edges = detection.edges;
        self.check_edges(&edges)?;

        let projection = PixelProjection::new(raster.bounds, edges.width(), edges.height())?;
        let outcome = trace.timings.time("snap", || {
            snap_to_edges(rough, &edges, &projection, &self.params.refine)
        });
        Ok(SnapSuccess {
            outcome,
            image_size: (w, h),
        })
    }

    fn check_edges(&self, edges: &EdgeMap) -> Result<(), ProcessingError> {
        let threshold = self.params.refine.edge_threshold;
        if edges.width() == 0 || edges.height() == 0 || edges.count_above(threshold) == 0 {
            return Err(ProcessingError::NoEdges { threshold });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PrecomputedEdges;
    use crate::error::AcquisitionError;
    use crate::tile::RasterImage;
    use crate::types::{FEATURE_ANGLE_REGULARIZATION, FEATURE_SMOOTHING};

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    fn bounds() -> GeoBounds {
        GeoBounds::new(0.0015, -0.0005, 0.0015, -0.0005)
    }

    #[test]
    fn rejects_fewer_than_three_points() {
        let err = BoundaryRefiner::default()
            .refine(&square()[..2], &bounds(), None)
            .unwrap_err();
        assert_eq!(err, RefineError::Validation { count: 2 });
    }

    #[test]
    fn no_source_goes_geometric() {
        let report = BoundaryRefiner::default()
            .refine_detailed(&BoundaryPolygon::from_points(&square()), &bounds(), None)
            .expect("valid input");
        assert_eq!(report.trace.path, RefinementPath::Geometric);
        assert!(report.trace.fallback_reason.is_none());
        assert!(report.result.has_feature(FEATURE_SMOOTHING));
        assert!(report.result.has_feature(FEATURE_ANGLE_REGULARIZATION));
        assert_eq!(report.result.confidence, 0.6);
        assert!(report.trace.timings.stage_ms("geometric").is_some());
    }

    #[test]
    fn failing_source_falls_back_with_reason() {
        let source = |_: &TileRequest| -> Result<RasterImage, AcquisitionError> {
            Err(AcquisitionError::Fetch("HTTP 503".into()))
        };
        let report = BoundaryRefiner::default()
            .refine_detailed(
                &BoundaryPolygon::from_points(&square()),
                &bounds(),
                Some(&source),
            )
            .expect("fallback never fails");
        assert_eq!(report.trace.path, RefinementPath::Geometric);
        let reason = report.trace.fallback_reason.expect("reason recorded");
        assert!(reason.contains("HTTP 503"));
        assert!(report.result.notes.contains("HTTP 503"));
    }

    #[test]
    fn blank_edge_map_counts_as_processing_failure() {
        let refiner = BoundaryRefiner::with_provider(
            EngineParams::default(),
            PrecomputedEdges::new(EdgeMap::zeros(64, 64)),
        );
        let err = refiner.check_edges(&EdgeMap::zeros(64, 64)).unwrap_err();
        assert_eq!(err, ProcessingError::NoEdges { threshold: 128 });
    }
}
