//! Economic and environmental rollup.
//!
//! A pure numeric model: the same tree count and areas always produce the
//! same figures, and no input produces NaN (zero maintenance cost reports
//! an ROI of 0 rather than dividing by zero).

use serde::{Deserialize, Serialize};

/// kg of produce per tree per year.
const YIELD_KG_PER_TREE: f64 = 50.0;
/// Liters per tree per day.
const WATER_L_PER_TREE_PER_DAY: f64 = 50.0;
/// kg CO₂ sequestered per tree per year.
const CARBON_KG_PER_TREE: f64 = 21.7;
/// Currency units per tree per year.
const MAINTENANCE_PER_TREE: f64 = 25.0;
/// Currency units per kg of produce.
const PRICE_PER_KG: f64 = 2.5;

/// Rolled-up layout figures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Boundary area, m².
    pub total_area: f64,
    /// Buffered-boundary area, m².
    pub plantable_area: f64,
    /// Exact enumerated tree count (canonical, not the analytic estimate).
    pub tree_count: usize,
    /// kg per year.
    pub estimated_yield: f64,
    /// Liters per year.
    pub water_requirement: f64,
    /// kg CO₂ per year.
    pub carbon_sequestration: f64,
    pub maintenance_cost: f64,
    pub estimated_revenue: f64,
    /// Percent. 0 when there is no cost basis; never NaN.
    pub roi: f64,
}

impl Metrics {
    /// Roll a tree count and the two areas into the full record.
    pub fn aggregate(tree_count: usize, total_area: f64, plantable_area: f64) -> Self {
        let n = tree_count as f64;
        let estimated_yield = n * YIELD_KG_PER_TREE;
        let water_requirement = n * WATER_L_PER_TREE_PER_DAY * 365.0;
        let carbon_sequestration = n * CARBON_KG_PER_TREE;
        let maintenance_cost = n * MAINTENANCE_PER_TREE;
        let estimated_revenue = estimated_yield * PRICE_PER_KG;
        let roi = if maintenance_cost == 0.0 {
            0.0
        } else {
            (estimated_revenue - maintenance_cost) / maintenance_cost * 100.0
        };
        Self {
            total_area,
            plantable_area,
            tree_count,
            estimated_yield,
            water_requirement,
            carbon_sequestration,
            maintenance_cost,
            estimated_revenue,
            roi,
        }
    }

    /// The empty-layout rollup.
    pub fn zero() -> Self {
        Self::aggregate(0, 0.0, 0.0)
    }
}
