//! Angle utilities used by the geometric refiner.
//!
//! Headings are measured in the planar `(lng, lat)` frame, counter-clockwise
//! from east, matching `atan2(dlat, dlng)`.
use crate::types::GeoPoint;

/// Directions a regularized corner is pulled towards, in degrees.
pub const CANONICAL_ANGLES_DEG: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Normalizes an angle in degrees into the range [0, 360).
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let norm = angle.rem_euclid(360.0);
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Heading of the vector `from -> to` in radians, range (-π, π].
#[inline]
pub fn heading(from: GeoPoint, to: GeoPoint) -> f64 {
    (to.lat - from.lat).atan2(to.lng - from.lng)
}

/// Turn angle at `curr` between the incoming edge `curr - prev` and the
/// outgoing edge `next - curr`, in degrees within [0, 360).
///
/// A straight continuation gives 0; a left-hand right angle gives 90 and a
/// right-hand one 270.
pub fn turn_angle_degrees(prev: GeoPoint, curr: GeoPoint, next: GeoPoint) -> f64 {
    let incoming = heading(prev, curr);
    let outgoing = heading(curr, next);
    normalize_degrees((outgoing - incoming).to_degrees())
}

/// Closest canonical angle to `angle_deg`, together with the signed
/// correction `canonical - angle` in degrees.
///
/// Distance is the plain difference on [0, 360) without wrap-around, so a
/// turn just below 360° is matched against 315°, not 0°.
pub fn nearest_canonical(angle_deg: f64) -> (f64, f64) {
    let angle = normalize_degrees(angle_deg);
    CANONICAL_ANGLES_DEG
        .iter()
        .map(|&c| (c, c - angle))
        .fold((0.0, f64::INFINITY), |best, cand| {
            if cand.1.abs() < best.1.abs() {
                cand
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_degrees_basic() {
        assert!(approx_eq(normalize_degrees(45.0), 45.0));
        assert!(approx_eq(normalize_degrees(-90.0), 270.0));
        assert!(approx_eq(normalize_degrees(720.0), 0.0));
        assert!(normalize_degrees(-1e-14) < 360.0);
    }

    #[test]
    fn turn_angle_of_square_corners() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let c = GeoPoint::new(1.0, 1.0);
        // east then north: left turn
        assert!(approx_eq(turn_angle_degrees(a, b, c), 90.0));
        // north then east: right turn
        assert!(approx_eq(turn_angle_degrees(c, b, a), 270.0));
        let straight = GeoPoint::new(0.0, 2.0);
        assert!(approx_eq(turn_angle_degrees(a, b, straight), 0.0));
    }

    #[test]
    fn nearest_canonical_picks_closest_without_wrap() {
        let (c, d) = nearest_canonical(88.0);
        assert!(approx_eq(c, 90.0));
        assert!(approx_eq(d, 2.0));

        // 358 is 43 below 315; 0 is not reached by wrapping around
        let (c, d) = nearest_canonical(358.0);
        assert!(approx_eq(c, 315.0));
        assert!(approx_eq(d, -43.0));

        let (c, d) = nearest_canonical(3.0);
        assert!(approx_eq(c, 0.0));
        assert!(approx_eq(d, -3.0));

        let (c, d) = nearest_canonical(200.0);
        assert!(approx_eq(c, 180.0));
        assert!(approx_eq(d, -20.0));
    }
}
