use approx::assert_relative_eq;
use more_asserts::*;
use pesph1d::sph::*;

fn config() -> SolverConfig {
    SolverConfig {
        eta: 0.84,
        gamma: 4.0 / 3.0,
        tolerance: 1.0e-6,
        kernel: KernelKind::GadgetCubicSpline,
        ..Default::default()
    }
}

#[test]
fn three_particle_line() {
    let particles = ParticleSet::with_energies(vec![0.0, 1.0, 2.0], vec![1.0; 3]).unwrap();
    let solver = PressureEntropySphSolver::with_config(config()).unwrap();
    let snapshot = solver.solve(&particles).unwrap();
    let traditional = &snapshot.traditional;

    let table = SeparationTable::new(particles.positions());
    let h_solver = SmoothingLengthSolver::new(BracketingRootFinder::default(), &config());
    for i in 0..3 {
        let h = traditional.smoothing_lengths[i];
        assert_gt!(h, 0.0);
        assert_le!(h_solver.residual(table.row(i), h, 1.0, None).unwrap().abs(), 1.0e-6);
        assert_gt!(traditional.densities[i], 0.0);
        assert_gt!(snapshot.adiabats[i], 0.0);
        assert!(snapshot.smoothed_pressures[i].is_finite());
        assert!(snapshot.smoothed_densities[i].is_finite());
    }
    assert_relative_eq!(traditional.densities[0], traditional.densities[2], max_relative = 1.0e-12);
    // More neighbors within reach means a wider kernel for the same η.
    assert_gt!(traditional.smoothing_lengths[1], traditional.smoothing_lengths[0]);
}

#[test]
fn mirror_symmetric_line() {
    let particles = ParticleSet::with_energies(vec![-1.0, 0.0, 1.0], vec![1.0; 3]).unwrap();
    let snapshot = PressureEntropySphSolver::with_config(config()).unwrap().solve(&particles).unwrap();

    let traditional = &snapshot.traditional;
    assert_relative_eq!(traditional.smoothing_lengths[0], traditional.smoothing_lengths[2], max_relative = 1.0e-12);
    assert_relative_eq!(traditional.densities[0], traditional.densities[2], max_relative = 1.0e-12);
    // Sweeping in index order breaks the symmetry of the iteration, not of its fixed point.
    assert_relative_eq!(snapshot.adiabats[0], snapshot.adiabats[2], max_relative = 1.0e-5);
    assert_relative_eq!(snapshot.smoothed_densities[0], snapshot.smoothed_densities[2], max_relative = 1.0e-5);
    assert_relative_eq!(traditional.pressures[0], traditional.pressures[2], max_relative = 1.0e-12);
    assert_relative_eq!(snapshot.smoothed_pressures[0], snapshot.smoothed_pressures[2], max_relative = 1.0e-5);
}

#[test]
fn single_particle() {
    let particles = ParticleSet::with_energies(vec![3.0], vec![1.0]).unwrap();
    let snapshot = PressureEntropySphSolver::with_config(config()).unwrap().solve(&particles).unwrap();

    let expected_h = (8.0 / (std::f64::consts::PI * 0.84)).sqrt();
    assert_relative_eq!(snapshot.traditional.smoothing_lengths[0], expected_h, max_relative = 1.0e-5);
    assert!(snapshot.adiabats[0].is_finite());
    assert!(snapshot.smoothed_pressures[0].is_finite());
    assert!(snapshot.smoothed_densities[0].is_finite());
}

#[test]
fn repeated_solves_are_identical() {
    let particles = ParticleSet::jittered_line(40, 0.3, 0.6, 1.0, 11).unwrap();
    let solver = PressureEntropySphSolver::with_config(config()).unwrap();
    assert_eq!(solver.solve(&particles).unwrap(), solver.solve(&particles).unwrap());
}

#[test]
fn thermal_state_must_be_given_exactly_once() {
    assert!(matches!(
        ParticleSet::new(vec![0.0, 1.0], None, Some(vec![1.0, 1.0]), Some(vec![1.0, 1.0])),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        ParticleSet::new(vec![0.0, 1.0], None, None, None),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn converged_adiabats_are_a_fixed_point() {
    let particles = ParticleSet::with_energies(vec![0.0, 0.7, 1.2, 2.0, 2.4], vec![1.0, 1.5, 0.8, 1.0, 2.0]).unwrap();
    let solver = PressureEntropySphSolver::with_config(config()).unwrap();
    let snapshot = solver.solve(&particles).unwrap();

    let pressure_entropy = solver.pressure_entropy_solver();
    let weights = pressure_entropy
        .kernel_weights(
            &SeparationTable::new(particles.positions()),
            &snapshot.traditional.smoothing_lengths,
            particles.masses(),
        )
        .unwrap();
    let mut adiabats = AdiabatVector::new(snapshot.adiabats.clone()).unwrap();
    let difference = pressure_entropy
        .sweep(&weights, &snapshot.traditional.energies, &mut adiabats, snapshot.sweeps + 1)
        .unwrap();
    assert_le!(difference, config().adiabat_tolerance);
    assert_relative_eq!(separations::absolute_difference(&snapshot.adiabats, adiabats.as_slice()), difference, max_relative = 1.0e-9);
}

#[test]
fn adiabats_as_input() {
    let positions = vec![0.0, 0.8, 1.5, 2.1];
    let from_energies = PressureEntropySphSolver::with_config(config())
        .unwrap()
        .solve(&ParticleSet::with_energies(positions.clone(), vec![1.0, 2.0, 1.0, 0.5]).unwrap())
        .unwrap();
    let from_adiabats = PressureEntropySphSolver::with_config(config())
        .unwrap()
        .solve(&ParticleSet::with_adiabats(positions, from_energies.traditional.adiabats.clone()).unwrap())
        .unwrap();

    for i in 0..4 {
        assert_relative_eq!(from_adiabats.traditional.energies[i], from_energies.traditional.energies[i], max_relative = 1.0e-12);
        assert_relative_eq!(from_adiabats.adiabats[i], from_energies.adiabats[i], max_relative = 1.0e-6);
    }
}

#[test]
fn masses_scale_density() {
    let positions = vec![0.0, 1.0, 2.0];
    let unit = TraditionalSphSolver::with_config(config())
        .unwrap()
        .solve(&ParticleSet::with_energies(positions.clone(), vec![1.0; 3]).unwrap())
        .unwrap();
    let heavy = TraditionalSphSolver::with_config(config())
        .unwrap()
        .solve(
            &ParticleSet::with_energies(positions, vec![1.0; 3])
                .unwrap()
                .with_masses(vec![2.0; 3])
                .unwrap(),
        )
        .unwrap();

    // Uniformly scaled masses leave h unchanged and scale the density.
    for i in 0..3 {
        assert_relative_eq!(heavy.smoothing_lengths[i], unit.smoothing_lengths[i], max_relative = 1.0e-5);
        assert_relative_eq!(heavy.densities[i], 2.0 * unit.densities[i], max_relative = 1.0e-4);
    }
}

#[test]
fn every_kernel_but_tophat_produces_a_snapshot() {
    let particles = ParticleSet::jittered_line(10, 0.5, 0.4, 1.0, 5).unwrap();
    for &kernel in KernelKind::ALL.iter().filter(|&&kernel| kernel != KernelKind::Tophat) {
        let solver = PressureEntropySphSolver::with_config(SolverConfig { kernel, ..config() }).unwrap();
        let snapshot = solver.solve(&particles).unwrap();
        for &a in snapshot.adiabats.iter() {
            assert!(a > 0.0 && a.is_finite(), "{:?}: adiabat {}", kernel, a);
        }
    }
}

#[test]
fn tophat_on_spread_out_line() {
    let particles = ParticleSet::with_energies(vec![0.0, 1.0, 2.0], vec![1.0; 3]).unwrap();
    let config = SolverConfig {
        kernel: KernelKind::Tophat,
        ..config()
    };
    let snapshot = PressureEntropySphSolver::with_config(config.clone()).unwrap().solve(&particles).unwrap();

    // The support never reaches a neighbor, so every particle only sees itself: h · 3/(4πh³) = η.
    let expected_h = (3.0 / (4.0 * std::f64::consts::PI * 0.84)).sqrt();
    let table = SeparationTable::new(particles.positions());
    let h_solver = SmoothingLengthSolver::new(BracketingRootFinder::default(), &config);
    for i in 0..3 {
        let h = snapshot.traditional.smoothing_lengths[i];
        assert_relative_eq!(h, expected_h, max_relative = 1.0e-5);
        assert_le!(h_solver.residual(table.row(i), h, 1.0, None).unwrap().abs(), 1.0e-6);
        assert_relative_eq!(snapshot.adiabats[i], snapshot.traditional.adiabats[i], max_relative = 1.0e-9);
        assert_relative_eq!(snapshot.smoothed_densities[i], snapshot.traditional.densities[i], max_relative = 1.0e-9);
    }
    assert_eq!(snapshot.sweeps, 1);
}
