use super::super::config::SolverConfig;
use super::super::density::density;
use super::super::eos;
use super::super::error::Result;
use super::super::particles::{ParticleSet, ThermalState};
use super::super::rootfinder::{BracketingRootFinder, RootFinder};
use super::super::separations::SeparationTable;
use super::super::smoothing_length::SmoothingLengthSolver;
use super::Solver;
use crate::units::*;
use rayon::prelude::*;

/// Per-particle results of traditional SPH, all in particle order.
#[derive(Clone, Debug, PartialEq)]
pub struct TraditionalSnapshot {
    pub smoothing_lengths: Vec<Real>,
    pub densities: Vec<Real>,
    pub pressures: Vec<Real>,
    // Both thermal variables are reported, one of them is the input, the other derived from the density.
    pub energies: Vec<Real>,
    pub adiabats: Vec<Real>,
}

// Traditional ("GADGET" style) SPH:
// adaptive smoothing lengths, kernel-summed densities and gas pressures.
// Every particle is independent once the separations are known, so all per-particle work runs in parallel.
pub struct TraditionalSphSolver<TRootFinder: RootFinder = BracketingRootFinder> {
    config: SolverConfig,
    smoothing_length_solver: SmoothingLengthSolver<TRootFinder>,
}

impl TraditionalSphSolver<BracketingRootFinder> {
    pub fn with_config(config: SolverConfig) -> Result<TraditionalSphSolver<BracketingRootFinder>> {
        Self::new(BracketingRootFinder::default(), config)
    }
}

impl<TRootFinder: RootFinder + Sync> TraditionalSphSolver<TRootFinder> {
    pub fn new(root_finder: TRootFinder, config: SolverConfig) -> Result<TraditionalSphSolver<TRootFinder>> {
        config.validate()?;
        Ok(TraditionalSphSolver {
            smoothing_length_solver: SmoothingLengthSolver::new(root_finder, &config),
            config,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn smoothing_length_solver(&self) -> &SmoothingLengthSolver<TRootFinder> {
        &self.smoothing_length_solver
    }

    /// Solves for all smoothing lengths.
    ///
    /// If several particles fail, the error of the lowest index is returned.
    pub fn smoothing_lengths(&self, particles: &ParticleSet, separations: &SeparationTable) -> Result<Vec<Real>> {
        let _span = tracing::debug_span!("smoothing_lengths").entered();
        let masses = particles.masses();
        let results: Vec<Result<Real>> = (0..separations.len())
            .into_par_iter()
            .map(|i| {
                self.smoothing_length_solver
                    .solve(i, separations.row(i), particles.mass(i), masses)
            })
            .collect();
        results.into_iter().collect()
    }

    pub fn densities(&self, particles: &ParticleSet, separations: &SeparationTable, smoothing_lengths: &[Real]) -> Result<Vec<Real>> {
        let _span = tracing::debug_span!("densities").entered();
        let masses = particles.masses();
        let kernel = self.config.kernel;
        let results: Vec<Result<Real>> = smoothing_lengths
            .par_iter()
            .enumerate()
            .map(|(i, &h)| density(separations.row(i), h, masses, kernel))
            .collect();
        results.into_iter().collect()
    }

    /// Same as [`Solver::solve`] with precomputed separations, which have to belong to `particles`.
    pub fn solve_with_separations(&self, particles: &ParticleSet, separations: &SeparationTable) -> Result<TraditionalSnapshot> {
        let _span = tracing::debug_span!("traditional_sph", num_particles = particles.len()).entered();

        let smoothing_lengths = self.smoothing_lengths(particles, separations)?;
        let densities = self.densities(particles, separations, &smoothing_lengths)?;

        let gamma = self.config.gamma;
        let (energies, adiabats, pressures) = match particles.state() {
            ThermalState::InternalEnergies(energies) => {
                let adiabats = energies
                    .iter()
                    .zip(densities.iter())
                    .map(|(&u, &rho)| eos::adiabat(u, rho, gamma))
                    .collect();
                let pressures = densities
                    .iter()
                    .zip(energies.iter())
                    .map(|(&rho, &u)| eos::gas_pressure(rho, u, gamma))
                    .collect();
                (energies.clone(), adiabats, pressures)
            }
            ThermalState::Adiabats(adiabats) => {
                let energies = adiabats
                    .iter()
                    .zip(densities.iter())
                    .map(|(&a, &rho)| eos::internal_energy(a, rho, gamma))
                    .collect();
                let pressures = densities
                    .iter()
                    .zip(adiabats.iter())
                    .map(|(&rho, &a)| eos::gas_pressure_from_adiabat(rho, a, gamma))
                    .collect();
                (energies, adiabats.clone(), pressures)
            }
        };

        Ok(TraditionalSnapshot {
            smoothing_lengths,
            densities,
            pressures,
            energies,
            adiabats,
        })
    }
}

impl<TRootFinder: RootFinder + Sync> Solver for TraditionalSphSolver<TRootFinder> {
    type Snapshot = TraditionalSnapshot;

    fn solve(&self, particles: &ParticleSet) -> Result<TraditionalSnapshot> {
        let separations = SeparationTable::new(particles.positions());
        self.solve_with_separations(particles, &separations)
    }
}
