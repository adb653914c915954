use criterion::{black_box, criterion_group, Criterion};

use pesph1d::sph::smoothing_kernel::*;

fn bench_kernels(c: &mut Criterion) {
    let r = black_box(0.7);

    for &kind in KernelKind::ALL.iter() {
        let kernel = kind.with_smoothing_length(black_box(1.0)).unwrap();
        c.bench_function(&format!("{:?}.evaluate", kind), |b| b.iter(|| kernel.evaluate(r)));
    }
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(core::time::Duration::new(0, 100))
        .sample_size(1000)
        .significance_level(0.1)
}

criterion_group!(
    name = smoothing_kernel;
    config = config();
    targets = bench_kernels
);
