use super::super::adiabat_vector::AdiabatVector;
use super::super::config::SolverConfig;
use super::super::error::Result;
use super::super::particles::ParticleSet;
use super::super::pressure_entropy::PressureEntropySolver;
use super::super::rootfinder::{BracketingRootFinder, RootFinder};
use super::super::separations::SeparationTable;
use super::traditional::{TraditionalSnapshot, TraditionalSphSolver};
use super::Solver;
use crate::units::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PressureEntropySnapshot {
    /// Smoothing lengths and physical densities come from traditional SPH unchanged.
    pub traditional: TraditionalSnapshot,
    pub adiabats: Vec<Real>,
    pub smoothed_pressures: Vec<Real>,
    pub smoothed_densities: Vec<Real>,
    // Gauss-Seidel sweeps until the adiabats converged.
    pub sweeps: usize,
}

// Pressure-entropy SPH as described in
// A general class of Lagrangian smoothed particle hydrodynamics methods and implications for fluid mixing problems
// Hopkins 2013, https://arxiv.org/abs/1206.5006
//
// Runs traditional SPH first, then iterates the adiabats seeded from its densities to a self-consistent fixed point.
pub struct PressureEntropySphSolver<TRootFinder: RootFinder = BracketingRootFinder> {
    traditional: TraditionalSphSolver<TRootFinder>,
    pressure_entropy: PressureEntropySolver<TRootFinder>,
}

impl PressureEntropySphSolver<BracketingRootFinder> {
    pub fn with_config(config: SolverConfig) -> Result<PressureEntropySphSolver<BracketingRootFinder>> {
        Self::new(BracketingRootFinder::default(), config)
    }
}

impl<TRootFinder: RootFinder + Sync + Clone> PressureEntropySphSolver<TRootFinder> {
    pub fn new(root_finder: TRootFinder, config: SolverConfig) -> Result<PressureEntropySphSolver<TRootFinder>> {
        let pressure_entropy = PressureEntropySolver::new(root_finder.clone(), &config);
        Ok(PressureEntropySphSolver {
            traditional: TraditionalSphSolver::new(root_finder, config)?,
            pressure_entropy,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        self.traditional.config()
    }

    pub fn pressure_entropy_solver(&self) -> &PressureEntropySolver<TRootFinder> {
        &self.pressure_entropy
    }
}

impl<TRootFinder: RootFinder + Sync + Clone> Solver for PressureEntropySphSolver<TRootFinder> {
    type Snapshot = PressureEntropySnapshot;

    fn solve(&self, particles: &ParticleSet) -> Result<PressureEntropySnapshot> {
        let _span = tracing::debug_span!("pressure_entropy_sph", num_particles = particles.len()).entered();

        let separations = SeparationTable::new(particles.positions());
        let traditional = self.traditional.solve_with_separations(particles, &separations)?;

        let weights = self
            .pressure_entropy
            .kernel_weights(&separations, &traditional.smoothing_lengths, particles.masses())?;
        let seed = AdiabatVector::new(traditional.adiabats.clone())?;
        let convergence = self.pressure_entropy.converge(&weights, &traditional.energies, seed)?;

        let smoothed_pressures = self.pressure_entropy.smoothed_pressures(&weights, &convergence.adiabats);
        let smoothed_densities = self.pressure_entropy.smoothed_densities(&convergence.adiabats, &smoothed_pressures);

        Ok(PressureEntropySnapshot {
            traditional,
            adiabats: convergence.adiabats,
            smoothed_pressures,
            smoothed_densities,
            sweeps: convergence.sweeps,
        })
    }
}
