//! 2D land-boundary geometry kernel.
//!
//! Purpose
//! - Single home for area/perimeter/membership/distance and the canonical
//!   inward offset, so every consumer (layout, planner, capture previews)
//!   computes identical numbers for identical inputs.
//!
//! Why one kernel
//! - Offsetting in particular is easy to reimplement slightly differently
//!   at each call site, and different offsets mean different plantable
//!   areas for the same boundary. Keeping the bisector-miter offset here
//!   makes the buffered boundary a single well-defined derivation.
//!
//! Conventions
//! - A polygon is an ordered `&[Point]` with an implicit closing edge from
//!   the last vertex back to the first; either winding is accepted.
//! - Inputs are assumed pre-validated by the capture layer (finite, inside
//!   the viewport). The kernel never re-checks canvas bounds and never
//!   panics on short vertex lists; it returns zero/empty/flagged values.

pub mod offset;
pub mod polygon;
pub mod rand;
mod types;

pub use offset::{offset_polygon, BufferedBoundary};
pub use polygon::{
    area, bounding_box, distance_point_to_segment, min_edge_distance, perimeter,
    point_in_polygon, signed_area,
};
pub use types::{GeomCfg, Point, Spacing};
