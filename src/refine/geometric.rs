//! Geometric fallback refiner: one smoothing pass followed by one angle
//! regularization pass. Needs nothing but the rough polygon.
//!
//! Both passes read from an immutable snapshot of their input and build a
//! fresh vertex list; no vertex ever sees a neighbour that was already moved
//! in the same pass.
use super::options::RefineOptions;
use crate::angle::{heading, nearest_canonical, turn_angle_degrees};
use crate::geometry::planar_distance;
use crate::types::{BoundaryPolygon, GeoPoint};
use nalgebra::Vector2;

/// Weighted neighbour averaging:
/// `p' = p·(1 − w) + (prev + next)·(w / 2)`.
///
/// Polygons with fewer than three vertices are returned unchanged.
pub fn smooth_polygon(points: &[GeoPoint], weight: f64) -> Vec<GeoPoint> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n].to_vector();
            let curr = points[i].to_vector();
            let next = points[(i + 1) % n].to_vector();
            GeoPoint::from_vector(curr * (1.0 - weight) + (prev + next) * (weight * 0.5))
        })
        .collect()
}

/// Nudge corners whose turn angle lies within `tolerance_deg` of a canonical
/// angle. The vertex moves by `step × |next − curr|` along the incoming
/// heading rotated by the canonical correction. Other vertices stay put.
pub fn regularize_angles(points: &[GeoPoint], tolerance_deg: f64, step: f64) -> Vec<GeoPoint> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];

            let turn = turn_angle_degrees(prev, curr, next);
            let (_, correction) = nearest_canonical(turn);
            if correction.abs() >= tolerance_deg {
                return curr;
            }
            let direction = heading(prev, curr) + correction.to_radians();
            let length = planar_distance(curr, next) * step;
            let offset = Vector2::new(direction.cos(), direction.sin()) * length;
            GeoPoint::from_vector(curr.to_vector() + offset)
        })
        .collect()
}

/// Smoothing then regularization, preserving vertex labels.
pub fn geometric_refine(polygon: &BoundaryPolygon, options: &RefineOptions) -> BoundaryPolygon {
    let smoothed = smooth_polygon(&polygon.points(), options.smoothing_weight);
    let regularized = regularize_angles(
        &smoothed,
        options.regularize_tolerance_deg,
        options.regularize_step,
    );
    polygon.with_points(&regularized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn smoothing_uses_original_neighbours() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(10.0, 0.0),
        ];
        let out = smooth_polygon(&pts, 0.3);
        // every corner of the square moves 0.15 of the side towards the middle
        assert!(approx_eq(out[0].lat, 1.5) && approx_eq(out[0].lng, 1.5));
        assert!(approx_eq(out[1].lat, 1.5) && approx_eq(out[1].lng, 8.5));
        assert!(approx_eq(out[2].lat, 8.5) && approx_eq(out[2].lng, 8.5));
        assert!(approx_eq(out[3].lat, 8.5) && approx_eq(out[3].lng, 1.5));
    }

    #[test]
    fn zero_weight_is_identity() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 1.0),
            GeoPoint::new(1.0, 4.0),
        ];
        assert_eq!(smooth_polygon(&pts, 0.0), pts.to_vec());
    }

    #[test]
    fn short_inputs_pass_through() {
        let pts = [GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)];
        assert_eq!(smooth_polygon(&pts, 0.3), pts.to_vec());
        assert_eq!(regularize_angles(&pts, 15.0, 0.1), pts.to_vec());
    }

    #[test]
    fn off_canonical_corner_is_untouched() {
        // turn angle ~ 63.4 degrees, 18.4 away from 45
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(2.0, 2.0),
        ];
        let out = regularize_angles(&pts, 15.0, 0.1);
        assert_eq!(out[1], pts[1]);
    }

    #[test]
    fn nearly_straight_right_hand_corner_is_untouched() {
        // east, then 2 degrees clockwise: turn of 358, 43 away from 315
        let heading = (-2.0_f64).to_radians();
        let prev = GeoPoint::new(0.0, 0.0);
        let curr = GeoPoint::new(0.0, 1.0);
        let next = GeoPoint::new(heading.sin(), 1.0 + heading.cos());
        assert!((turn_angle_degrees(prev, curr, next) - 358.0).abs() < 1e-9);

        let out = regularize_angles(&[prev, curr, next], 15.0, 0.1);
        assert_eq!(out[1], curr);
    }

    #[test]
    fn canonical_corner_moves_along_incoming_edge() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(2.0, 1.0),
        ];
        let out = regularize_angles(&pts, 15.0, 0.1);
        // heading east, outgoing edge length 2
        assert!(approx_eq(out[1].lng, 1.2));
        assert!(approx_eq(out[1].lat, 0.0));
    }

    #[test]
    fn labels_survive_geometric_refine() {
        let poly = BoundaryPolygon::from_points(&[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]);
        let out = geometric_refine(&poly, &RefineOptions::default());
        assert_eq!(out.len(), 4);
        assert_eq!(out.vertices[3].point_id, "P4");
    }
}
