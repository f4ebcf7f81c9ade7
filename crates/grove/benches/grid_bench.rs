//! Criterion benchmarks for offsetting and grid enumeration.
//! Focus sizes: boundary vertex counts n in {4, 12, 50, 200}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grove::prelude::*;

fn sample_boundary(n: usize) -> Vec<Point> {
    let cfg = RadialCfg {
        vertex_count: n,
        base_radius: 200.0,
        center: Point::new(400.0, 300.0),
        ..RadialCfg::default()
    };
    draw_boundary_radial(cfg, ReplayToken { seed: 43, index: 0 })
}

fn bench_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset");
    for &n in &[4usize, 12, 50, 200] {
        let boundary = sample_boundary(n);
        group.bench_with_input(BenchmarkId::new("offset_polygon", n), &boundary, |b, poly| {
            b.iter(|| offset_polygon(poly, 5.0, GeomCfg::default()));
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[4usize, 12, 50, 200] {
        let boundary = sample_boundary(n);
        let buffered = offset_polygon(&boundary, 5.0, GeomCfg::default());
        group.bench_with_input(BenchmarkId::new("generate_grid", n), &boundary, |b, poly| {
            b.iter(|| {
                generate_grid(
                    poly,
                    &buffered.points,
                    Spacing::new(5.0, 5.0),
                    1.0,
                    5.0,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_offset, bench_grid);
criterion_main!(benches);
