//! Basic 2D types and tolerances used by the geometry kernel.
//!
//! - `Point`: working-unit coordinates (canvas pixels); combined with a
//!   scale factor (meters per unit) for real-world distances.
//! - `Spacing`: meters between tree centers along each axis.
//! - `GeomCfg`: centralizes epsilons for edge-length and miter checks.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Working-unit coordinate pair.
pub type Point = Vector2<f64>;

/// Meters between tree centers along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Spacing {
    #[inline]
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Ground footprint of one tree in m².
    #[inline]
    pub fn cell_area(&self) -> f64 {
        self.horizontal * self.vertical
    }
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Edges shorter than this are treated as zero-length.
    pub eps_len: f64,
    /// Half-angle sines below this make a miter degenerate.
    pub eps_miter: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-9,
            eps_miter: 1e-6,
        }
    }
}
