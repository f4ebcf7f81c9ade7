use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grove::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "Land-boundary analysis and tree-layout runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze a boundary request and write the plan record
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Overrides the jitter seed from the request
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recompute a stored record from its geometry fields and report drift
    Verify {
        #[arg(long)]
        input: PathBuf,
        /// Maximum tolerated absolute drift per numeric field
        #[arg(long, default_value_t = 1e-9)]
        tolerance: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Analysis request as produced by capture front ends.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    boundary: Vec<[f64; 2]>,
    spacing: Spacing,
    scale: f64,
    buffer: f64,
    #[serde(default = "default_min_edge_distance")]
    min_edge_distance: f64,
    #[serde(default)]
    seed: u64,
}

fn default_min_edge_distance() -> f64 {
    10.0
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze { input, out, seed } => analyze(&input, &out, seed),
        Action::Verify { input, tolerance } => verify(&input, tolerance),
        Action::Report => report(),
    }
}

fn analyze(input: &Path, out: &Path, seed: Option<u64>) -> Result<()> {
    let raw = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let request: AnalyzeRequest =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", input.display()))?;

    let mut planner = Planner::new(request.spacing, request.scale, request.buffer)?;
    planner.set_min_edge_distance(request.min_edge_distance)?;
    planner.set_seed(seed.unwrap_or(request.seed));
    planner.set_boundary(
        request
            .boundary
            .iter()
            .map(|&[x, y]| Point::new(x, y))
            .collect(),
    );

    let analysis = planner.analysis();
    tracing::info!(
        trees = analysis.metrics.tree_count,
        estimated = analysis.estimated_tree_count,
        roi = analysis.metrics.roi,
        degenerate_buffer = analysis.buffered.degenerate,
        "analyzed"
    );
    let trees = analysis.trees.clone();
    let record = planner.to_record();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", out.display()))?;
    // Tree point list next to the record, for renderers.
    let trees_path = out.with_extension("trees.json");
    std::fs::write(&trees_path, serde_json::to_vec_pretty(&trees)?)
        .with_context(|| format!("writing {}", trees_path.display()))?;

    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "input": input.to_string_lossy(),
            "seed": seed,
        })),
    )?;
    Ok(())
}

fn verify(input: &Path, tolerance: f64) -> Result<()> {
    let raw = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let record: PlanRecord =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", input.display()))?;

    let mut planner = Planner::from_record(&record)?;
    let fresh = planner.to_record();

    let mut ok = true;
    if record.total_trees != fresh.total_trees {
        tracing::error!(
            stored = record.total_trees,
            recomputed = fresh.total_trees,
            "tree count drift"
        );
        ok = false;
    }
    let fields = [
        ("totalArea", record.total_area, fresh.total_area),
        ("plantableArea", record.plantable_area, fresh.plantable_area),
        (
            "estimatedYield",
            record.metrics.estimated_yield,
            fresh.metrics.estimated_yield,
        ),
        (
            "waterRequirement",
            record.metrics.water_requirement,
            fresh.metrics.water_requirement,
        ),
        (
            "carbonSequestration",
            record.metrics.carbon_sequestration,
            fresh.metrics.carbon_sequestration,
        ),
        (
            "maintenanceCost",
            record.metrics.maintenance_cost,
            fresh.metrics.maintenance_cost,
        ),
        (
            "estimatedRevenue",
            record.metrics.estimated_revenue,
            fresh.metrics.estimated_revenue,
        ),
        ("roi", record.metrics.roi, fresh.metrics.roi),
    ];
    for (name, stored, recomputed) in fields {
        if (stored - recomputed).abs() > tolerance {
            tracing::error!(name, stored, recomputed, "field drift");
            ok = false;
        }
    }
    anyhow::ensure!(ok, "stored record disagrees with recomputation");
    println!("ok");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "grove_version": grove::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_request(path: &Path) {
        std::fs::write(
            path,
            serde_json::json!({
                "boundary": [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]],
                "spacing": { "horizontal": 5.0, "vertical": 5.0 },
                "scale": 1.0,
                "buffer": 2.0,
                "minEdgeDistance": 2.0
            })
            .to_string(),
        )
        .unwrap();
    }

    #[test]
    fn analyze_then_verify_round_trips() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("request.json");
        write_request(&input);

        let out = dir.path().join("record.json");
        analyze(&input, &out, None).unwrap();
        verify(&out, 1e-9).unwrap();

        let record: PlanRecord = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(record.total_trees, 1);
        assert!((record.total_area - 100.0).abs() < 1e-9);
        assert!(out.with_extension("trees.json").exists());
    }

    #[test]
    fn verify_rejects_tampered_records() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("request.json");
        write_request(&input);
        let out = dir.path().join("record.json");
        analyze(&input, &out, None).unwrap();

        let mut record: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        record["totalTrees"] = serde_json::json!(7);
        std::fs::write(&out, record.to_string()).unwrap();
        assert!(verify(&out, 1e-9).is_err());
    }

    #[test]
    fn analyze_rejects_invalid_scale() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("request.json");
        std::fs::write(
            &input,
            serde_json::json!({
                "boundary": [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]],
                "spacing": { "horizontal": 5.0, "vertical": 5.0 },
                "scale": 0.0,
                "buffer": 2.0
            })
            .to_string(),
        )
        .unwrap();
        let out = dir.path().join("record.json");
        assert!(analyze(&input, &out, None).is_err());
    }
}
