//! Wall-time and call-count scaling of `Plane::force_on` vs. N, grounded in
//! `particular`'s own `[[bench]]` harness for this kind of n-body crate.

use barnes_hut2d::{gravity2, BhConfig, Body2, Plane, Point2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bodies(n: usize, seed: u64) -> Vec<Body2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Body2::new(
                Point2::new(rng.random_range(0.0..1_000.0), rng.random_range(0.0..1_000.0)),
                rng.random_range(0.5..5.0),
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane_build");
    for &n in &[1_000usize, 10_000, 50_000] {
        let bodies = random_bodies(n, n as u64);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| black_box(Plane::build(&bodies)))
        });
    }
    group.finish();
}

fn bench_force_on(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_on");
    let cfg = BhConfig::default();

    for &n in &[1_000usize, 10_000, 50_000] {
        let bodies = random_bodies(n, n as u64);
        let plane = Plane::build(&bodies);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let mut total = Point2::new_zero();
                for i in 0..n.min(200) {
                    total += plane.force_on(i, &cfg, gravity2);
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_force_on);
criterion_main!(benches);
