//! Value types shared by every stage: geographic points, bounds, labelled
//! boundary polygons and the refinement result handed back to callers.
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Feature tag emitted when the Canny edge path produced the polygon.
pub const FEATURE_CANNY: &str = "canny-edge-detection";
/// Feature tag emitted alongside [`FEATURE_CANNY`].
pub const FEATURE_CONTOUR_SNAPPING: &str = "contour-snapping";
/// Feature tag emitted when the geometric fallback produced the polygon.
pub const FEATURE_SMOOTHING: &str = "geometric-smoothing";
/// Feature tag emitted alongside [`FEATURE_SMOOTHING`].
pub const FEATURE_ANGLE_REGULARIZATION: &str = "angle-regularization";

/// WGS84-like point in degrees. No altitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar vector view with `x = lng`, `y = lat`.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.lng, self.lat)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { lat: v.y, lng: v.x }
    }
}

/// Axis-aligned bounding box in degrees.
///
/// Valid bounds satisfy `north > south` and `east > west`; see
/// [`GeoBounds::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Smallest bounds enclosing `points`. `None` for an empty slice.
    pub fn enclosing(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.lat, first.lat, first.lng, first.lng);
        Some(points.iter().skip(1).fold(init, |acc, p| Self {
            north: acc.north.max(p.lat),
            south: acc.south.min(p.lat),
            east: acc.east.max(p.lng),
            west: acc.west.min(p.lng),
        }))
    }

    pub fn is_valid(&self) -> bool {
        self.north.is_finite()
            && self.south.is_finite()
            && self.east.is_finite()
            && self.west.is_finite()
            && self.north > self.south
            && self.east > self.west
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    pub fn max_span(&self) -> f64 {
        self.lat_span().max(self.lng_span())
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) * 0.5,
            (self.east + self.west) * 0.5,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat <= self.north && p.lat >= self.south && p.lng <= self.east && p.lng >= self.west
    }
}

/// One labelled vertex of a boundary polygon.
///
/// Serialises as `{ "lat", "lng", "point" }`, the shape the web front-end
/// consumes; `description` is only emitted when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryVertex {
    #[serde(rename = "point")]
    pub point_id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BoundaryVertex {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Ordered ring of labelled vertices. The first vertex is implicitly
/// connected to the last; insertion order defines the winding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPolygon {
    pub vertices: Vec<BoundaryVertex>,
}

impl BoundaryPolygon {
    /// Build a polygon from bare points, labelling them `P1..Pn`.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let vertices = points
            .iter()
            .enumerate()
            .map(|(i, p)| BoundaryVertex {
                point_id: vertex_label(i),
                lat: p.lat,
                lng: p.lng,
                description: None,
            })
            .collect();
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// At least three vertices, i.e. a closed shape.
    pub fn is_closed_shape(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn points(&self) -> Vec<GeoPoint> {
        self.vertices.iter().map(BoundaryVertex::position).collect()
    }

    /// Copy of this polygon with vertex positions replaced by `points`,
    /// keeping labels and descriptions. Callers pass exactly `self.len()`
    /// points.
    pub(crate) fn with_points(&self, points: &[GeoPoint]) -> Self {
        debug_assert_eq!(points.len(), self.vertices.len());
        let vertices = self
            .vertices
            .iter()
            .zip(points)
            .map(|(v, p)| BoundaryVertex {
                point_id: v.point_id.clone(),
                lat: p.lat,
                lng: p.lng,
                description: v.description.clone(),
            })
            .collect();
        Self { vertices }
    }
}

/// Default label of the vertex at `index` (zero-based).
pub fn vertex_label(index: usize) -> String {
    format!("P{}", index + 1)
}

/// Which refiner produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefinementPath {
    EdgeSnapping,
    Geometric,
}

impl RefinementPath {
    pub fn confidence(self) -> f64 {
        match self {
            RefinementPath::EdgeSnapping => 0.75,
            RefinementPath::Geometric => 0.6,
        }
    }

    pub fn features(self) -> [&'static str; 2] {
        match self {
            RefinementPath::EdgeSnapping => [FEATURE_CANNY, FEATURE_CONTOUR_SNAPPING],
            RefinementPath::Geometric => [FEATURE_SMOOTHING, FEATURE_ANGLE_REGULARIZATION],
        }
    }
}

/// Final output of one refinement call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementResult {
    #[serde(rename = "refinedPoints")]
    pub refined_polygon: BoundaryPolygon,
    /// Square metres.
    pub area: f64,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub detected_features: Vec<String>,
    pub notes: String,
}

impl RefinementResult {
    pub fn has_feature(&self, tag: &str) -> bool {
        self.detected_features.iter().any(|f| f == tag)
    }

    /// Path that produced this result, recovered from the feature tags.
    pub fn path(&self) -> Option<RefinementPath> {
        if self.has_feature(FEATURE_CANNY) {
            Some(RefinementPath::EdgeSnapping)
        } else if self.has_feature(FEATURE_SMOOTHING) {
            Some(RefinementPath::Geometric)
        } else {
            None
        }
    }

    /// Short user-facing summary of how the boundary was refined.
    pub fn message(&self) -> &'static str {
        match self.path() {
            Some(RefinementPath::EdgeSnapping) => "Boundary refined using edge detection",
            Some(RefinementPath::Geometric) => "Boundary refined using geometric algorithms",
            None => "Boundary refined successfully",
        }
    }
}
