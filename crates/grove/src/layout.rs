//! Admissible planting-point enumeration.
//!
//! Purpose
//! - Sweep the boundary's bounding box at `spacing / scale` steps and keep
//!   the points inside the buffered boundary that are far enough from
//!   every boundary edge. Deterministic: identical inputs enumerate
//!   identical points in identical (row-major) order.
//!
//! Two tree counts exist on purpose: the enumerated count from
//! [`generate_grid`] is canonical for rendering and persisted metrics,
//! while [`estimate_tree_count`] is an instant-feedback approximation.

use crate::geom::{bounding_box, min_edge_distance, point_in_polygon, Point, Spacing};

/// Enumerate admissible planting points.
///
/// A grid point is admissible iff it lies inside `buffered` and its
/// distance to every edge of `boundary` is at least
/// `min_edge_distance_px` working units.
///
/// Grid positions are computed as `min + k·step` (not accumulated), so a
/// halved spacing enumerates a superset of the original grid exactly.
/// Degenerate inputs — fewer than 3 vertices on either polygon, or a
/// non-finite/non-positive step — yield an empty vector; input validation
/// proper lives in the planner layer.
pub fn generate_grid(
    boundary: &[Point],
    buffered: &[Point],
    spacing: Spacing,
    scale: f64,
    min_edge_distance_px: f64,
) -> Vec<Point> {
    if boundary.len() < 3 || buffered.len() < 3 {
        return Vec::new();
    }
    let step_x = spacing.horizontal / scale;
    let step_y = spacing.vertical / scale;
    if !(step_x.is_finite() && step_x > 0.0 && step_y.is_finite() && step_y > 0.0) {
        return Vec::new();
    }
    let Some((min, max)) = bounding_box(boundary) else {
        return Vec::new();
    };
    let steps_x = ((max.x - min.x) / step_x).floor() as usize;
    let steps_y = ((max.y - min.y) / step_y).floor() as usize;
    let mut out = Vec::new();
    for iy in 0..=steps_y {
        let y = min.y + iy as f64 * step_y;
        for ix in 0..=steps_x {
            let x = min.x + ix as f64 * step_x;
            let p = Point::new(x, y);
            if point_in_polygon(p, buffered)
                && min_edge_distance(p, boundary) >= min_edge_distance_px
            {
                out.push(p);
            }
        }
    }
    out
}

/// Analytic tree-count shortcut: `floor(plantable_area / cell_area)`.
///
/// Instant-feedback approximation only — it ignores grid alignment and the
/// edge-distance rule. The enumerated count from [`generate_grid`] is the
/// value to render and persist.
pub fn estimate_tree_count(plantable_area: f64, spacing: Spacing) -> usize {
    let cell = spacing.cell_area();
    if !(cell > 0.0 && cell.is_finite()) || !(plantable_area > 0.0 && plantable_area.is_finite()) {
        return 0;
    }
    (plantable_area / cell).floor() as usize
}
