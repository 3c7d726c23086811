//! Satellite tile acquisition seam.
//!
//! The engine never talks to the network. Callers describe the tile they
//! need with a [`TileRequest`] and plug an [`ImageSource`] that returns the
//! encoded bytes; fetching, caching and timeouts are the source's business.
use crate::error::AcquisitionError;
use crate::types::{GeoBounds, GeoPoint};
use std::fs;
use std::path::PathBuf;

/// Default edge length in pixels of a requested tile.
pub const DEFAULT_TILE_SIZE: u32 = 640;
pub const MIN_ZOOM: u8 = 15;
pub const MAX_ZOOM: u8 = 20;

/// Encoded tile bytes together with what they are supposed to cover.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub bytes: Vec<u8>,
    /// Declared square edge length in pixels.
    pub size: u32,
    pub bounds: GeoBounds,
}

/// Zoom level for a tile covering `max_span_deg` degrees:
/// `clamp(floor(15 - log2(span * 100)), 15, 20)`.
pub fn zoom_for_span(max_span_deg: f64) -> u8 {
    let raw = (15.0 - (max_span_deg * 100.0).log2()).floor();
    if raw.is_nan() {
        return MIN_ZOOM;
    }
    raw.clamp(MIN_ZOOM as f64, MAX_ZOOM as f64) as u8
}

/// Tile needed to refine a boundary within `bounds`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRequest {
    pub bounds: GeoBounds,
    pub center: GeoPoint,
    pub zoom: u8,
    pub size: u32,
}

impl TileRequest {
    pub fn for_bounds(bounds: GeoBounds, size: u32) -> Self {
        Self {
            bounds,
            center: bounds.center(),
            zoom: zoom_for_span(bounds.max_span()),
            size,
        }
    }

    /// URL of a static satellite image for this request, at 2× pixel density.
    pub fn static_image_url(&self, style: &str, access_token: &str) -> String {
        format!(
            "https://api.mapbox.com/styles/v1/mapbox/{style}/static/{},{},{}/{}x{}@2x?access_token={access_token}",
            self.center.lng, self.center.lat, self.zoom, self.size, self.size
        )
    }
}

/// Provider of encoded tiles.
pub trait ImageSource {
    fn fetch(&self, request: &TileRequest) -> Result<RasterImage, AcquisitionError>;
}

impl<F> ImageSource for F
where
    F: Fn(&TileRequest) -> Result<RasterImage, AcquisitionError>,
{
    fn fetch(&self, request: &TileRequest) -> Result<RasterImage, AcquisitionError> {
        self(request)
    }
}

/// Tile bytes fetched ahead of time by the caller.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    bytes: Vec<u8>,
    size: u32,
}

impl InMemorySource {
    pub fn new(bytes: Vec<u8>, size: u32) -> Self {
        Self { bytes, size }
    }
}

impl ImageSource for InMemorySource {
    fn fetch(&self, request: &TileRequest) -> Result<RasterImage, AcquisitionError> {
        if self.bytes.is_empty() {
            return Err(AcquisitionError::Fetch("no image bytes supplied".to_string()));
        }
        Ok(RasterImage {
            bytes: self.bytes.clone(),
            size: self.size,
            bounds: request.bounds,
        })
    }
}

/// Tile stored on local disk, assumed to cover the requested bounds.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    size: u32,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

impl ImageSource for FileSource {
    fn fetch(&self, request: &TileRequest) -> Result<RasterImage, AcquisitionError> {
        let bytes = fs::read(&self.path).map_err(|e| AcquisitionError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(RasterImage {
            bytes,
            size: self.size,
            bounds: request.bounds,
        })
    }
}
