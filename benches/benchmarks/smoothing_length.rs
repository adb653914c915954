use criterion::{black_box, criterion_group, Criterion};

use pesph1d::sph::*;

fn bench_smoothing_lengths(c: &mut Criterion) {
    // Spacing and jitter don't matter much, h just has to cover a few neighbors.
    let particles = ParticleSet::jittered_line(1000, 0.1, 0.5, 1.0, 0).unwrap();
    let separations = SeparationTable::new(particles.positions());
    let solver = TraditionalSphSolver::with_config(SolverConfig::default()).unwrap();

    c.bench_function("SeparationTable.new - 1000 particles", |b| {
        b.iter(|| SeparationTable::new(black_box(particles.positions())))
    });
    c.bench_function("TraditionalSphSolver.smoothing_lengths - 1000 particles", |b| {
        b.iter(|| solver.smoothing_lengths(&particles, &separations).unwrap())
    });
}

criterion_group!(smoothing_length, bench_smoothing_lengths);
