//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {16, 256, 4096}; disk (few hull points) vs circle (all).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hullmerge

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullmerge::rand::{draw_points, PointCloud, ReplayToken};
use hullmerge::{compute_hull, lex_cmp, Point};

fn sorted_cloud(cloud: PointCloud, n: usize, seed: u64) -> Vec<Point> {
    let mut pts = draw_points(cloud, n, ReplayToken::new(seed, n as u64));
    pts.sort_by(lex_cmp);
    pts
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("disk", n), &n, |b, &n| {
            b.iter_batched(
                || sorted_cloud(PointCloud::Disk { radius: 1.0 }, n, 43),
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || sorted_cloud(PointCloud::Circle { radius: 1.0 }, n, 44),
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
