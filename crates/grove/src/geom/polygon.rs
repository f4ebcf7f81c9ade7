//! Pure polygon primitives over vertex lists.
//!
//! All functions are total over their documented domains: fewer than 3
//! vertices measures zero and contains nothing, and no input makes them
//! divide by zero or panic.

use super::types::Point;

/// Shoelace signed area in working units². Positive for counterclockwise
/// winding, negative for clockwise; zero for fewer than 3 vertices.
pub fn signed_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..polygon.len() {
        let p = polygon[i];
        let q = polygon[(i + 1) % polygon.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc / 2.0
}

/// Absolute polygon area in m², given `scale` meters per working unit.
#[inline]
pub fn area(polygon: &[Point], scale: f64) -> f64 {
    signed_area(polygon).abs() * scale * scale
}

/// Perimeter in meters (closing edge included).
pub fn perimeter(polygon: &[Point], scale: f64) -> f64 {
    if polygon.len() < 2 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..polygon.len() {
        let p = polygon[i];
        let q = polygon[(i + 1) % polygon.len()];
        acc += (q - p).norm();
    }
    acc * scale
}

/// Axis-aligned bounding box `(min, max)`, or `None` for an empty list.
pub fn bounding_box(polygon: &[Point]) -> Option<(Point, Point)> {
    let first = *polygon.first()?;
    let mut min = first;
    let mut max = first;
    for p in &polygon[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Even-odd ray-cast membership test.
///
/// Membership of points exactly on an edge is implementation-defined, but
/// the test itself is total: the strict/non-strict comparison pair below
/// guarantees the crossing edge is never horizontal, so the division is
/// always well defined.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance from `p` to segment `ab` (projection parameter clamped to
/// `[0, 1]`). A zero-length segment degrades to point distance.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Minimum distance from `p` to any edge of `polygon` (closing edge
/// included). `f64::INFINITY` for fewer than 2 vertices.
pub fn min_edge_distance(p: Point, polygon: &[Point]) -> f64 {
    if polygon.len() < 2 {
        return f64::INFINITY;
    }
    let mut best = f64::INFINITY;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        best = best.min(distance_point_to_segment(p, a, b));
    }
    best
}
