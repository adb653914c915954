use criterion::{criterion_group, Criterion};

use pesph1d::sph::*;

fn bench_pressure_entropy(c: &mut Criterion) {
    let particles = ParticleSet::jittered_line(200, 0.1, 0.5, 1.0, 0).unwrap();
    let solver = PressureEntropySphSolver::with_config(SolverConfig::default()).unwrap();

    c.bench_function(&format!("PressureEntropySphSolver.solve - {} particles", particles.len()), |b| {
        b.iter(|| solver.solve(&particles).unwrap())
    });
}

fn config() -> Criterion {
    Criterion::default().sample_size(20)
}

criterion_group!(
    name = pressure_entropy;
    config = config();
    targets = bench_pressure_entropy
);
