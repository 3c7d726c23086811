//! Error taxonomy of the refinement engine.
//!
//! Only [`RefineError`] ever reaches the caller of
//! [`BoundaryRefiner::refine`](crate::engine::BoundaryRefiner::refine). Image
//! acquisition and Canny processing failures are collected into
//! [`EdgeSnapFailure`] and consumed by the orchestrator, which answers them
//! with the geometric fallback.
use thiserror::Error;

/// Errors surfaced to the caller of the engine.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RefineError {
    #[error("at least 3 points are required to refine a boundary, got {count}")]
    Validation { count: usize },
}

/// Failure to obtain or decode the raster tile.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AcquisitionError {
    #[error("failed to fetch satellite image: {0}")]
    Fetch(String),

    #[error("failed to read image {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Failure inside the edge detection or snapping stages.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProcessingError {
    #[error("image {width}x{height} is too small for edge detection (min {min}x{min})")]
    ImageTooSmall { width: usize, height: usize, min: usize },

    #[error("buffer of {actual} bytes does not match {width}x{height}")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("geographic bounds are degenerate (north={north}, south={south}, east={east}, west={west})")]
    InvalidBounds {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },

    #[error("edge map contains no edge pixels above {threshold}")]
    NoEdges { threshold: u8 },
}

/// Why the edge-snapping path could not produce a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeSnapFailure {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
