//! grove: land-boundary geometry and tree-layout engine.
//!
//! Purpose
//! - Turn a traced 2D land boundary into a planting layout plus derived
//!   economic/environmental metrics.
//!
//! Layering (data flows strictly downward)
//! - `capture` → `geom` → `layout` → `terrain` → `metrics`, wired together
//!   by `plan::Planner`. Each stage takes immutable inputs and returns new
//!   values; no shared mutable state crosses module boundaries.
//!
//! Coordinates
//! - All geometry works in working units (canvas pixels). A scale factor
//!   (meters per unit) converts lengths and areas to real-world figures;
//!   no geodesic projection is attempted.

pub mod capture;
pub mod geom;
pub mod layout;
pub mod metrics;
pub mod plan;
pub mod terrain;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::capture::{AddOutcome, BoundaryCapture, CaptureCfg, CaptureMode};
    pub use crate::geom::rand::{draw_boundary_radial, RadialCfg, ReplayToken};
    pub use crate::geom::{
        area, bounding_box, distance_point_to_segment, min_edge_distance, offset_polygon,
        perimeter, point_in_polygon, signed_area, BufferedBoundary, GeomCfg, Point, Spacing,
    };
    pub use crate::layout::{estimate_tree_count, generate_grid};
    pub use crate::metrics::Metrics;
    pub use crate::plan::{Analysis, PlanError, PlanRecord, Planner};
    pub use crate::terrain::{sample, SoilType, TerrainSample, TreePoint};
}
