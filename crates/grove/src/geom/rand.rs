//! Random simple boundaries (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic boundary sampler for property tests and benches. The
//!   polygon is star-shaped about `center` (angles strictly increasing),
//!   hence always simple, and non-convex whenever radial jitter is nonzero.
//!
//! Determinism
//! - Every draw is keyed by a `ReplayToken (seed, index)` mixed into a
//!   single `StdRng`; identical tokens reproduce identical boundaries.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n.
    /// Clamped to [0, 0.49] so vertex angles stay strictly increasing.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 100.0,
            center: Point::new(200.0, 200.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// SplitMix64-style mixing, cheap and stable.
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }

    pub fn to_std_rng(self) -> StdRng {
        let k = Self::mix(self.seed ^ Self::mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped simple boundary as a counterclockwise vertex list.
pub fn draw_boundary_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let th = k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj).max(1e-6) * r0;
            cfg.center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_boundary_radial(RadialCfg::default(), tok);
        let p2 = draw_boundary_radial(RadialCfg::default(), tok);
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert!((a - b).norm() < 1e-15);
        }
    }

    #[test]
    fn distinct_tokens_differ() {
        let a = draw_boundary_radial(RadialCfg::default(), ReplayToken { seed: 1, index: 0 });
        let b = draw_boundary_radial(RadialCfg::default(), ReplayToken { seed: 1, index: 1 });
        assert!(a.iter().zip(b.iter()).any(|(p, q)| (p - q).norm() > 1e-9));
    }

    #[test]
    fn boundary_is_simple_star() {
        // Strictly increasing angles about the center imply a simple polygon.
        let cfg = RadialCfg::default();
        let poly = draw_boundary_radial(cfg, ReplayToken { seed: 9, index: 3 });
        let angles: Vec<f64> = poly
            .iter()
            .map(|p| (p.y - cfg.center.y).atan2(p.x - cfg.center.x))
            .collect();
        let mut rotated = angles.clone();
        rotated.sort_by(|a, b| a.partial_cmp(b).expect("finite angles"));
        // Angles are a cyclic shift of their sorted order.
        let start = angles
            .iter()
            .position(|a| (a - rotated[0]).abs() < 1e-12)
            .expect("minimum angle present");
        for (k, want) in rotated.iter().enumerate() {
            let got = angles[(start + k) % angles.len()];
            assert!((got - want).abs() < 1e-12);
        }
    }
}
