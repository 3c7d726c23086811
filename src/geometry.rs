//! Planar geometry on geographic points.
//!
//! All formulas treat `(lng, lat)` as planar `(x, y)` and convert degrees to
//! metres with a single equirectangular factor ([`METERS_PER_DEGREE`]). This
//! is adequate near the equator and at mid-latitudes for plot-sized shapes;
//! it ignores the `cos(lat)` shrink of longitude degrees and is not valid
//! globally.
use crate::types::GeoPoint;

/// Metres per degree of arc on the equirectangular approximation.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

#[inline]
pub fn degrees_to_meters(deg: f64) -> f64 {
    deg * METERS_PER_DEGREE
}

/// Signed Shoelace area in square degrees. Positive for counter-clockwise
/// rings in the `(lng, lat)` frame. Zero for fewer than three points.
pub fn signed_area_deg2(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i].to_vector();
            let b = points[(i + 1) % n].to_vector();
            a.perp(&b)
        })
        .sum();
    twice * 0.5
}

/// Polygon area in square metres (Shoelace formula on the closed ring).
///
/// Returns 0 for fewer than three points. Independent of the starting vertex
/// and of winding direction.
pub fn polygon_area(points: &[GeoPoint]) -> f64 {
    signed_area_deg2(points).abs() * METERS_PER_DEGREE * METERS_PER_DEGREE
}

/// Planar distance in degrees.
#[inline]
pub fn planar_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    (b.to_vector() - a.to_vector()).norm()
}

/// Length of the closed ring in metres.
pub fn perimeter_meters(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len();
    let deg: f64 = (0..n)
        .map(|i| planar_distance(points[i], points[(i + 1) % n]))
        .sum();
    degrees_to_meters(deg)
}

/// Area-weighted centroid of the ring. Degenerate (zero-area) rings fall back
/// to the vertex mean. `None` for an empty slice.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let area = signed_area_deg2(points);
    if area.abs() < f64::EPSILON * 1e-6 {
        let sum = points
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.to_vector());
        return Some(GeoPoint::from_vector(sum / points.len() as f64));
    }
    let n = points.len();
    let mut acc = nalgebra::Vector2::zeros();
    for i in 0..n {
        let a = points[i].to_vector();
        let b = points[(i + 1) % n].to_vector();
        acc += (a + b) * a.perp(&b);
    }
    Some(GeoPoint::from_vector(acc / (6.0 * area)))
}
