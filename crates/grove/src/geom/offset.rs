//! Inward polygon offset (buffering) via bisector miters.
//!
//! Purpose
//! - The single canonical offset used everywhere a buffered boundary is
//!   needed: per vertex, take the outward normals of both incident edges,
//!   form their normalized bisector, and move the vertex inward along it
//!   by `distance / sin(interior_angle / 2)` so the new vertex sits at
//!   `distance` from both edges.
//!
//! Degeneracy policy
//! - Zero-length edges, near-degenerate miters (half-angle sine under
//!   `GeomCfg::eps_miter`, i.e. spike or full-reflex vertices), and miters
//!   that leave the source polygon fall back to the un-offset vertex and
//!   set `degenerate`. The result never contains non-finite coordinates.
//! - An offset past the polygon's local inradius inverts or collapses the
//!   polygon; that is detected globally (winding flip or non-shrinking
//!   area) and flagged.

use super::polygon::{point_in_polygon, signed_area};
use super::types::{GeomCfg, Point};

/// Inward-offset polygon plus a flag recording whether any guard fired.
///
/// A degenerate buffer still has finite, renderable coordinates; callers
/// decide whether to trust areas derived from it.
#[derive(Clone, Debug, Default)]
pub struct BufferedBoundary {
    pub points: Vec<Point>,
    pub degenerate: bool,
}

impl BufferedBoundary {
    /// True when the buffer has enough vertices to act as a polygon.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.points.len() >= 3
    }
}

/// Offset `polygon` inward by `distance` working units.
///
/// Accepts either winding; output preserves the input winding and vertex
/// count. Fewer than 3 vertices yields an empty result, `distance == 0`
/// returns the input unchanged.
pub fn offset_polygon(polygon: &[Point], distance: f64, cfg: GeomCfg) -> BufferedBoundary {
    if polygon.len() < 3 {
        return BufferedBoundary::default();
    }
    if distance == 0.0 {
        return BufferedBoundary {
            points: polygon.to_vec(),
            degenerate: false,
        };
    }
    let sa_in = signed_area(polygon);
    // Outward normal of an edge direction is its clockwise perpendicular
    // for counterclockwise winding; flip for clockwise input.
    let orient = if sa_in >= 0.0 { 1.0 } else { -1.0 };
    let n = polygon.len();
    let mut points = Vec::with_capacity(n);
    let mut degenerate = false;
    for i in 0..n {
        let prev = polygon[(i + n - 1) % n];
        let v = polygon[i];
        let next = polygon[(i + 1) % n];
        let e_in = v - prev;
        let e_out = next - v;
        let (l_in, l_out) = (e_in.norm(), e_out.norm());
        if l_in < cfg.eps_len || l_out < cfg.eps_len {
            points.push(v);
            degenerate = true;
            continue;
        }
        let d_in = e_in / l_in;
        let d_out = e_out / l_out;
        let n_in = Point::new(d_in.y, -d_in.x) * orient;
        let n_out = Point::new(d_out.y, -d_out.x) * orient;
        // Turn angle between the incident edges; sin(interior/2) equals
        // cos(turn/2) for either winding since cosine is even.
        let turn = (d_in.x * d_out.y - d_in.y * d_out.x).atan2(d_in.dot(&d_out));
        let sin_half = (turn / 2.0).cos();
        let bisector = n_in + n_out;
        let bisector_len = bisector.norm();
        if sin_half < cfg.eps_miter || bisector_len < cfg.eps_len {
            points.push(v);
            degenerate = true;
            continue;
        }
        let q = v - (bisector / bisector_len) * (distance / sin_half);
        // Local-inradius guard: an inward offset vertex must stay inside
        // the source polygon.
        if !q.x.is_finite() || !q.y.is_finite() || !point_in_polygon(q, polygon) {
            points.push(v);
            degenerate = true;
            continue;
        }
        points.push(q);
    }
    // Global inradius guard: a valid inward offset strictly shrinks the
    // area and keeps the winding.
    let sa_out = signed_area(&points);
    if sa_out * sa_in <= 0.0 || sa_out.abs() >= sa_in.abs() {
        degenerate = true;
    }
    BufferedBoundary { points, degenerate }
}
