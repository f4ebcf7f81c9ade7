//! Planner: validated inputs, memoized recompute, storage records.
//!
//! Purpose
//! - Wire capture output through the geometry kernel, layout, terrain, and
//!   metrics stages, owning the input validation the kernel assumes and
//!   the memoization that keeps recomputes off hot pointer-move paths.
//!
//! Recompute model
//! - Derived state is a pure function of the inputs; it is cached and
//!   invalidated whenever an input changes. Every input change bumps a
//!   `revision` counter and the produced [`Analysis`] records the revision
//!   it was computed at, so embedders running recomputes asynchronously
//!   can drop results that are older than the current revision (last
//!   write wins). The core itself is synchronous and single-threaded.
//!
//! Determinism
//! - The only randomness (maturity jitter) is keyed by a replay token per
//!   tree index, so a layout is reproducible from `(inputs, seed)` alone
//!   and does not depend on enumeration history.

use crate::geom::rand::ReplayToken;
use crate::geom::{area, offset_polygon, BufferedBoundary, GeomCfg, Point, Spacing};
use crate::layout::{estimate_tree_count, generate_grid};
use crate::metrics::Metrics;
use crate::terrain::TreePoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation errors. Boundary geometry itself is never an error:
/// fewer than 3 points produces the zero analysis.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("scale must be strictly positive meters per unit (got {0})")]
    NonPositiveScale(f64),
    #[error("spacing must be strictly positive on both axes (got {horizontal} x {vertical})")]
    NonPositiveSpacing { horizontal: f64, vertical: f64 },
    #[error("buffer distance must be non-negative (got {0})")]
    NegativeBuffer(f64),
    #[error("minimum edge distance must be non-negative (got {0})")]
    NegativeEdgeDistance(f64),
}

/// Full derived state for one input revision.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Input revision this analysis was computed at.
    pub revision: u64,
    /// The boundary polyline the analysis was computed from.
    pub boundary: Vec<Point>,
    pub buffered: BufferedBoundary,
    pub trees: Vec<TreePoint>,
    /// Analytic shortcut; advisory only. The enumerated count in
    /// `metrics.tree_count` is canonical.
    pub estimated_tree_count: usize,
    pub metrics: Metrics,
}

/// Planner inputs plus the memoized analysis.
#[derive(Clone, Debug)]
pub struct Planner {
    boundary: Vec<Point>,
    spacing: Spacing,
    /// Meters per working unit.
    scale: f64,
    /// Meters of inward buffer between trees and the boundary.
    buffer_distance: f64,
    /// Working units of clearance from every boundary edge.
    min_edge_distance: f64,
    /// Maturity-jitter seed.
    seed: u64,
    geom_cfg: GeomCfg,
    revision: u64,
    cache: Option<Analysis>,
}

impl Planner {
    pub fn new(spacing: Spacing, scale: f64, buffer_distance: f64) -> Result<Self, PlanError> {
        check_spacing(spacing)?;
        check_scale(scale)?;
        check_buffer(buffer_distance)?;
        Ok(Self {
            boundary: Vec::new(),
            spacing,
            scale,
            buffer_distance,
            min_edge_distance: 10.0,
            seed: 0,
            geom_cfg: GeomCfg::default(),
            revision: 0,
            cache: None,
        })
    }

    #[inline]
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    #[inline]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn buffer_distance(&self) -> f64 {
        self.buffer_distance
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current input revision; bumped by every setter.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_boundary(&mut self, boundary: Vec<Point>) {
        self.boundary = boundary;
        self.touch();
    }

    pub fn set_spacing(&mut self, spacing: Spacing) -> Result<(), PlanError> {
        check_spacing(spacing)?;
        self.spacing = spacing;
        self.touch();
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), PlanError> {
        check_scale(scale)?;
        self.scale = scale;
        self.touch();
        Ok(())
    }

    pub fn set_buffer_distance(&mut self, buffer_distance: f64) -> Result<(), PlanError> {
        check_buffer(buffer_distance)?;
        self.buffer_distance = buffer_distance;
        self.touch();
        Ok(())
    }

    pub fn set_min_edge_distance(&mut self, min_edge_distance: f64) -> Result<(), PlanError> {
        if !(min_edge_distance >= 0.0 && min_edge_distance.is_finite()) {
            return Err(PlanError::NegativeEdgeDistance(min_edge_distance));
        }
        self.min_edge_distance = min_edge_distance;
        self.touch();
        Ok(())
    }

    pub fn set_seed(&mut self, seed: u64) {
        if seed != self.seed {
            self.seed = seed;
            self.touch();
        }
    }

    /// The analysis for the current inputs, recomputing only if an input
    /// changed since the last call.
    pub fn analysis(&mut self) -> &Analysis {
        if self.cache.is_none() {
            let analysis = self.recompute();
            self.cache = Some(analysis);
        }
        match self.cache {
            Some(ref a) => a,
            None => unreachable!("cache filled above"),
        }
    }

    /// Snapshot the current inputs and derived figures as a storage record.
    pub fn to_record(&mut self) -> PlanRecord {
        let metrics = self.analysis().metrics;
        PlanRecord {
            boundary: self.boundary.clone(),
            spacing: self.spacing,
            scale: self.scale,
            buffer_distance: self.buffer_distance,
            min_edge_distance: self.min_edge_distance,
            seed: self.seed,
            total_area: metrics.total_area,
            plantable_area: metrics.plantable_area,
            total_trees: metrics.tree_count,
            metrics,
        }
    }

    /// Rebuild a planner from a record's geometry fields. Recomputing the
    /// analysis regenerates the record's derived fields exactly, which is
    /// what makes storage round-trips lossless.
    pub fn from_record(record: &PlanRecord) -> Result<Self, PlanError> {
        let mut planner = Planner::new(record.spacing, record.scale, record.buffer_distance)?;
        planner.set_min_edge_distance(record.min_edge_distance)?;
        planner.set_seed(record.seed);
        planner.set_boundary(record.boundary.clone());
        Ok(planner)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.cache = None;
    }

    fn recompute(&self) -> Analysis {
        let buffer_px = self.buffer_distance / self.scale;
        let buffered = offset_polygon(&self.boundary, buffer_px, self.geom_cfg);
        if buffered.degenerate {
            tracing::warn!(
                buffer_m = self.buffer_distance,
                vertices = self.boundary.len(),
                "degenerate buffer; some vertices kept un-offset"
            );
        }
        let total_area = area(&self.boundary, self.scale);
        let plantable_area = if buffered.is_usable() {
            area(&buffered.points, self.scale)
        } else {
            0.0
        };
        let positions = generate_grid(
            &self.boundary,
            &buffered.points,
            self.spacing,
            self.scale,
            self.min_edge_distance,
        );
        let trees: Vec<TreePoint> = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut rng = ReplayToken {
                    seed: self.seed,
                    index: i as u64,
                }
                .to_std_rng();
                TreePoint::grow(p, &mut rng)
            })
            .collect();
        let estimated_tree_count = estimate_tree_count(plantable_area, self.spacing);
        let metrics = Metrics::aggregate(trees.len(), total_area, plantable_area);
        tracing::debug!(
            revision = self.revision,
            vertices = self.boundary.len(),
            trees = trees.len(),
            estimated = estimated_tree_count,
            "layout recomputed"
        );
        Analysis {
            revision: self.revision,
            boundary: self.boundary.clone(),
            buffered,
            trees,
            estimated_tree_count,
            metrics,
        }
    }
}

/// Stored analysis record. External persistence stores this shape; the
/// planner can be rebuilt from its geometry fields alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub boundary: Vec<Point>,
    pub spacing: Spacing,
    pub scale: f64,
    pub buffer_distance: f64,
    #[serde(default = "default_min_edge_distance")]
    pub min_edge_distance: f64,
    #[serde(default)]
    pub seed: u64,
    pub total_area: f64,
    pub plantable_area: f64,
    pub total_trees: usize,
    pub metrics: Metrics,
}

fn default_min_edge_distance() -> f64 {
    10.0
}

fn check_scale(scale: f64) -> Result<(), PlanError> {
    if scale > 0.0 && scale.is_finite() {
        Ok(())
    } else {
        Err(PlanError::NonPositiveScale(scale))
    }
}

fn check_spacing(spacing: Spacing) -> Result<(), PlanError> {
    let ok = spacing.horizontal > 0.0
        && spacing.horizontal.is_finite()
        && spacing.vertical > 0.0
        && spacing.vertical.is_finite();
    if ok {
        Ok(())
    } else {
        Err(PlanError::NonPositiveSpacing {
            horizontal: spacing.horizontal,
            vertical: spacing.vertical,
        })
    }
}

fn check_buffer(buffer: f64) -> Result<(), PlanError> {
    if buffer >= 0.0 && buffer.is_finite() {
        Ok(())
    } else {
        Err(PlanError::NegativeBuffer(buffer))
    }
}
