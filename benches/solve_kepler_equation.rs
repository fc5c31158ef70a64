use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use perihelion::constants::T2000;
use perihelion::ephemeris::geocentric_position;
use perihelion::kepler::solve_kepler;
use perihelion::KeplerianElements;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Typical regime: e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/typical_e<=0.7", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.0..=0.7)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(solve_kepler(black_box(m), black_box(e)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// Stress regime: e ∈ [0.7, 0.95], where Newton convergence slows down
fn bench_high_eccentricity(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/high_e<=0.95", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.7..=0.95)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(solve_kepler(black_box(m), black_box(e)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// Full pipeline cost of one geocentric evaluation
fn bench_geocentric(c: &mut Criterion) {
    let earth = KeplerianElements::earth_j2000();
    let body = KeplerianElements::from_degrees(
        1.458, 0.223, 10.83, 304.3, 178.9, 320.1, T2000, 643.2,
    )
    .unwrap();

    c.bench_function("geocentric_position/single_instant", |b| {
        b.iter(|| geocentric_position(black_box(T2000 + 1234.5), &body, &earth))
    });
}

criterion_group!(
    benches,
    bench_typical,
    bench_high_eccentricity,
    bench_geocentric
);
criterion_main!(benches);
