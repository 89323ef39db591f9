//! Criterion benchmarks for the planar hull.
//! Focus sizes: n in {100, 1k, 10k, 100k}; disk and square clouds plus the
//! circle worst case (every point is a vertex), against monotone chain.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use octohull::cloud::{sample_cloud, CloudCfg, CloudShape, ReplayToken};
use octohull::hull::{find_hull, monotone_chain};
use octohull::Point;

fn cloud(shape: CloudShape, n: usize, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        shape,
        count: n,
        ..CloudCfg::default()
    };
    sample_cloud(cfg, ReplayToken { seed, index: n as u64 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for (label, shape) in [
        ("disk", CloudShape::Disk),
        ("square", CloudShape::Square),
        ("circle", CloudShape::Circle),
    ] {
        for &n in &[100usize, 1_000, 10_000, 100_000] {
            if matches!(shape, CloudShape::Circle) && n > 10_000 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(format!("octagon_{label}"), n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || cloud(shape, n, 43),
                        |pts| {
                            let _h = find_hull(&pts);
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("monotone_{label}"), n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || cloud(shape, n, 43),
                        |pts| {
                            let _h = monotone_chain(&pts);
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
