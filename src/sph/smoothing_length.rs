use super::config::SolverConfig;
use super::density::density;
use super::error::Result;
use super::rootfinder::{RootFinder, RootSearch};
use super::smoothing_kernel::KernelKind;
use crate::units::Real;

/// Finds a particle's smoothing length from the adaptive density constraint
///
/// ```text
/// (h / (m η)) ρ(h) - 1 = 0
/// ```
///
/// i.e. h is η times the local mean interparticle spacing m/ρ.
/// With a 3D-normalized kernel h·ρ(h) falls from ∞ (self contribution only, h → 0) to 0 (h → ∞),
/// so a solution exists for any number of particles, a single one included.
pub struct SmoothingLengthSolver<TRootFinder: RootFinder> {
    root_finder: TRootFinder,
    kernel: KernelKind,
    eta: Real,
    search: RootSearch,
}

impl<TRootFinder: RootFinder> SmoothingLengthSolver<TRootFinder> {
    pub fn new(root_finder: TRootFinder, config: &SolverConfig) -> SmoothingLengthSolver<TRootFinder> {
        SmoothingLengthSolver {
            root_finder,
            kernel: config.kernel,
            eta: config.eta,
            search: RootSearch {
                initial: config.initial_smoothing_length,
                tolerance: config.tolerance,
                max_iterations: config.max_root_iterations,
            },
        }
    }

    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    /// Left-hand side of the smoothing length equation for a trial `smoothing_length`.
    /// `mass` is the mass of the particle being smoothed, `masses` those of all particles in `separations`.
    pub fn residual(&self, separations: &[Real], smoothing_length: Real, mass: Real, masses: Option<&[Real]>) -> Result<Real> {
        let rho = density(separations, smoothing_length, masses, self.kernel)?;
        Ok(smoothing_length / (mass * self.eta) * rho - 1.0)
    }

    /// Solves for the smoothing length of particle `particle`.
    ///
    /// Non-convergence is reported as an error attributed to `particle`, never as a best guess.
    pub fn solve(&self, particle: usize, separations: &[Real], mass: Real, masses: Option<&[Real]>) -> Result<Real> {
        let _span = tracing::trace_span!("smoothing_length", particle).entered();
        self.root_finder
            .find_root(|h| self.residual(separations, h, mass, masses), &self.search)
            .map(|root| {
                tracing::trace!(particle, smoothing_length = root.estimate, iterations = root.iterations, "converged");
                root.estimate
            })
            .map_err(|failure| failure.into_error(particle, None))
    }
}
