//! Edge-snapping refiner.
//!
//! Each vertex is projected into the tile, the square window of
//! `search_radius` around it is scanned for edge cells stronger than
//! `edge_threshold`, and the vertex moves to the qualifying cell closest in
//! Euclidean pixel distance (first in row-major scan order on ties). Vertices
//! without a qualifying cell in their window are kept unchanged.
//!
//! Snapped vertices map back through the inverse projection of an in-raster
//! pixel, so they always lie inside the tile bounds.
use super::options::RefineOptions;
use super::projection::PixelProjection;
use crate::edges::EdgeMap;
use crate::image::ImageView;
use crate::types::{BoundaryPolygon, GeoPoint};
use log::debug;
use rayon::prelude::*;

/// Polygon produced by the snapping pass.
#[derive(Clone, Debug)]
pub struct EdgeSnapOutcome {
    pub polygon: BoundaryPolygon,
    /// Vertices that moved onto an edge cell.
    pub snapped: usize,
    /// Edge cells above the threshold in the whole map.
    pub edge_pixels: usize,
}

/// Closest cell to `(cx, cy)` within `radius` whose strength exceeds
/// `threshold`. The window is clipped to the raster; centres far outside it
/// (including saturated projections) find nothing.
pub fn nearest_edge_pixel(
    edges: &EdgeMap,
    cx: i64,
    cy: i64,
    radius: i64,
    threshold: u8,
) -> Option<(usize, usize)> {
    let (w, h) = (edges.width() as i64, edges.height() as i64);
    let y0 = cy.saturating_sub(radius).max(0);
    let y1 = cy.saturating_add(radius).min(h - 1);
    let x0 = cx.saturating_sub(radius).max(0);
    let x1 = cx.saturating_add(radius).min(w - 1);
    if y0 > y1 || x0 > x1 {
        return None;
    }

    let mut best: Option<(i64, usize, usize)> = None;
    for y in y0..=y1 {
        let row = edges.row(y as usize);
        let dy = y - cy;
        for x in x0..=x1 {
            if row[x as usize] <= threshold {
                continue;
            }
            let dx = x - cx;
            let d2 = dx * dx + dy * dy;
            if best.map_or(true, |(bd, _, _)| d2 < bd) {
                best = Some((d2, x as usize, y as usize));
            }
        }
    }
    best.map(|(_, x, y)| (x, y))
}

/// Snap every vertex of `polygon` to its nearest edge cell.
pub fn snap_to_edges(
    polygon: &BoundaryPolygon,
    edges: &EdgeMap,
    projection: &PixelProjection,
    options: &RefineOptions,
) -> EdgeSnapOutcome {
    let radius = options.search_radius as i64;
    let snapped: Vec<Option<GeoPoint>> = polygon
        .vertices
        .par_iter()
        .map(|v| {
            let (px, py) = projection.to_pixel(v.position());
            nearest_edge_pixel(edges, px, py, radius, options.edge_threshold)
                .map(|(x, y)| projection.to_geo(x, y))
        })
        .collect();

    let moved = snapped.iter().filter(|s| s.is_some()).count();
    let points: Vec<GeoPoint> = polygon
        .vertices
        .iter()
        .zip(&snapped)
        .map(|(v, s)| s.unwrap_or_else(|| v.position()))
        .collect();
    debug!(
        "edge snapping moved {}/{} vertices (radius {} px)",
        moved,
        points.len(),
        radius
    );

    EdgeSnapOutcome {
        polygon: polygon.with_points(&points),
        snapped: moved,
        edge_pixels: edges.count_above(options.edge_threshold),
    }
}
