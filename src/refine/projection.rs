//! Linear mapping between geographic coordinates and tile pixels.
//!
//! Pixel row 0 is the northern edge of the bounds, so latitude is inverted.
use crate::error::ProcessingError;
use crate::types::{GeoBounds, GeoPoint};

#[derive(Clone, Copy, Debug)]
pub struct PixelProjection {
    bounds: GeoBounds,
    width: usize,
    height: usize,
}

impl PixelProjection {
    pub fn new(bounds: GeoBounds, width: usize, height: usize) -> Result<Self, ProcessingError> {
        if !bounds.is_valid() {
            return Err(ProcessingError::InvalidBounds {
                north: bounds.north,
                south: bounds.south,
                east: bounds.east,
                west: bounds.west,
            });
        }
        if width == 0 || height == 0 {
            return Err(ProcessingError::ImageTooSmall {
                width,
                height,
                min: 1,
            });
        }
        Ok(Self {
            bounds,
            width,
            height,
        })
    }

    /// Pixel containing `p`. May fall outside the raster when `p` lies
    /// outside the bounds; coordinates beyond the `i64` range saturate.
    pub fn to_pixel(&self, p: GeoPoint) -> (i64, i64) {
        let b = &self.bounds;
        let x = ((p.lng - b.west) / b.lng_span() * self.width as f64).floor();
        let y = ((b.north - p.lat) / b.lat_span() * self.height as f64).floor();
        (x as i64, y as i64)
    }

    /// Geographic position of the top-left corner of pixel `(x, y)`.
    pub fn to_geo(&self, x: usize, y: usize) -> GeoPoint {
        let b = &self.bounds;
        GeoPoint::new(
            b.north - (y as f64 / self.height as f64) * b.lat_span(),
            b.west + (x as f64 / self.width as f64) * b.lng_span(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> PixelProjection {
        PixelProjection::new(GeoBounds::new(1.0, 0.0, 1.0, 0.0), 100, 100).expect("valid")
    }

    #[test]
    fn north_west_corner_is_origin() {
        assert_eq!(unit().to_pixel(GeoPoint::new(1.0, 0.0)), (0, 0));
        assert_eq!(unit().to_pixel(GeoPoint::new(0.255, 0.755)), (75, 74));
    }

    #[test]
    fn inverse_lands_on_pixel_corner() {
        let p = unit().to_geo(25, 50);
        assert!((p.lng - 0.25).abs() < 1e-12);
        assert!((p.lat - 0.5).abs() < 1e-12);
        assert_eq!(unit().to_pixel(p), (25, 50));
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        let err = PixelProjection::new(GeoBounds::new(0.0, 1.0, 1.0, 0.0), 10, 10).err();
        assert!(matches!(err, Some(ProcessingError::InvalidBounds { .. })));
    }
}
