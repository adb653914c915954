use super::adiabat_vector::AdiabatVector;
use super::config::SolverConfig;
use super::eos;
use super::error::{Error, Result};
use super::rootfinder::{RootFinder, RootSearch};
use super::separations::SeparationTable;
use super::smoothing_kernel::{Kernel, KernelKind};
use crate::units::Real;

/// Mass-weighted kernel values w_ij = m_j W(r_ij, h_i), one row per particle.
///
/// Smoothing lengths are fixed while adiabats converge, so the weights are computed once up front.
pub struct KernelWeights {
    num_particles: usize,
    weights: Vec<Real>,
}

impl KernelWeights {
    pub fn new(
        separations: &SeparationTable,
        smoothing_lengths: &[Real],
        masses: Option<&[Real]>,
        kernel: KernelKind,
    ) -> Result<KernelWeights> {
        let num_particles = separations.len();
        if smoothing_lengths.len() != num_particles {
            return Err(Error::configuration(format!(
                "{} smoothing lengths given for {} particles",
                smoothing_lengths.len(),
                num_particles
            )));
        }
        if let Some(masses) = masses {
            if masses.len() != num_particles {
                return Err(Error::configuration(format!(
                    "{} masses given for {} particles",
                    masses.len(),
                    num_particles
                )));
            }
        }

        let mut weights = Vec::with_capacity(num_particles * num_particles);
        for (row, &h) in separations.rows().zip(smoothing_lengths.iter()) {
            let kernel = kernel.with_smoothing_length(h)?;
            for (j, &r) in row.iter().enumerate() {
                let mass = masses.map_or(1.0, |masses| masses[j]);
                weights.push(mass * kernel.evaluate(r));
            }
        }
        Ok(KernelWeights { num_particles, weights })
    }

    pub fn len(&self) -> usize {
        self.num_particles
    }

    pub fn is_empty(&self) -> bool {
        self.num_particles == 0
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[Real] {
        &self.weights[i * self.num_particles..(i + 1) * self.num_particles]
    }
}

/// Result of iterating adiabats to a fixed point.
#[derive(Clone, Debug, PartialEq)]
pub struct Convergence {
    pub adiabats: Vec<Real>,
    pub sweeps: usize,
    // Σ|A_old - A_new| of the last sweep.
    pub difference: Real,
}

/// Finds self-consistent adiabats for pressure-entropy SPH.
///
/// Particle i's adiabat has to reproduce, via its internal energy, the pressure that the kernel smooths
/// from all adiabats (Hopkins 2013, "A general class of Lagrangian smoothed particle hydrodynamics methods"):
///
/// ```text
/// P̄_i = (Σ_j m_j W(r_ij, h_i) A_j^(1/γ))^γ  =  A_i ((u_i/A_i)(γ-1))^(γ/(γ-1))
/// ```
///
/// Every particle's equation depends on all other adiabats. The system is solved with Gauss-Seidel sweeps:
/// particles are visited in index order and each scalar solve immediately updates its entry in place,
/// so later particles of the same sweep already see the new value while later indices still hold the previous sweep's.
pub struct PressureEntropySolver<TRootFinder: RootFinder> {
    root_finder: TRootFinder,
    kernel: KernelKind,
    gamma: Real,
    tolerance: Real,
    max_sweeps: usize,
    search: RootSearch, // initial guess is replaced per particle
}

impl<TRootFinder: RootFinder> PressureEntropySolver<TRootFinder> {
    pub fn new(root_finder: TRootFinder, config: &SolverConfig) -> PressureEntropySolver<TRootFinder> {
        PressureEntropySolver {
            root_finder,
            kernel: config.kernel,
            gamma: config.gamma,
            tolerance: config.adiabat_tolerance,
            max_sweeps: config.max_sweeps,
            search: RootSearch {
                initial: 1.0,
                tolerance: config.adiabat_residual_tolerance,
                max_iterations: config.max_root_iterations,
            },
        }
    }

    pub fn kernel_weights(
        &self,
        separations: &SeparationTable,
        smoothing_lengths: &[Real],
        masses: Option<&[Real]>,
    ) -> Result<KernelWeights> {
        KernelWeights::new(separations, smoothing_lengths, masses, self.kernel)
    }

    /// P̄ = (Σ_j w_j A_j^(1/γ))^γ for one row of kernel weights.
    #[inline]
    pub fn smoothed_pressure(&self, weights: &[Real], adiabats: &[Real]) -> Real {
        let one_over_gamma = 1.0 / self.gamma;
        let sum: Real = weights
            .iter()
            .zip(adiabats.iter())
            .map(|(&w, &a)| w * a.powf(one_over_gamma))
            .sum();
        sum.powf(self.gamma)
    }

    /// 1 - P̄_i / P_i(u_i, A_i), zero at the fixed point. Decreases monotonically in A_i.
    pub fn residual(&self, weights: &[Real], adiabats: &[Real], particle: usize, energy: Real) -> Real {
        let smoothed = self.smoothed_pressure(weights, adiabats);
        let thermodynamic = eos::pressure_from_energy_and_adiabat(energy, adiabats[particle], self.gamma);
        1.0 - smoothed / thermodynamic
    }

    /// One Gauss-Seidel pass over all particles, returns Σ|A_old - A_new|.
    ///
    /// If a particle's search fails, its entry is restored and the error returned.
    /// Entries of particles before it keep their updated values.
    pub fn sweep(&self, weights: &KernelWeights, energies: &[Real], adiabats: &mut AdiabatVector, sweep: usize) -> Result<Real> {
        let _span = tracing::debug_span!("adiabat_sweep", sweep).entered();
        check_lengths(weights, energies, adiabats)?;

        let mut difference = 0.0;
        for (i, &energy) in energies.iter().enumerate() {
            let row = weights.row(i);
            let mut slot = adiabats.slot(i);
            let previous = slot.original();
            let search = RootSearch {
                initial: previous,
                ..self.search
            };

            let root = self.root_finder.find_root(
                |candidate| {
                    slot.set(candidate)?;
                    Ok(self.residual(row, slot.values(), i, energy))
                },
                &search,
            );

            match root {
                Ok(root) => {
                    slot.commit(root.estimate)?;
                    difference += (root.estimate - previous).abs();
                }
                Err(failure) => {
                    let error = failure.into_error(i, Some(sweep));
                    tracing::warn!(particle = i, sweep, %error, "adiabat search failed");
                    return Err(error);
                }
            }
        }
        Ok(difference)
    }

    /// Sweeps until the adiabats change by at most the tolerance, or fails after the sweep budget.
    pub fn converge(&self, weights: &KernelWeights, energies: &[Real], mut adiabats: AdiabatVector) -> Result<Convergence> {
        let _span = tracing::debug_span!("converge_adiabats", num_particles = adiabats.len()).entered();
        check_lengths(weights, energies, &adiabats)?;
        if let Some(i) = energies.iter().position(|&u| !(u > 0.0) || !u.is_finite()) {
            return Err(Error::domain(format!(
                "internal energy of particle {} must be positive, was {}",
                i, energies[i]
            )));
        }

        let mut difference = Real::INFINITY;
        for sweep in 1..=self.max_sweeps {
            difference = self.sweep(weights, energies, &mut adiabats, sweep)?;
            tracing::debug!(sweep, difference, "adiabat sweep finished");
            if difference <= self.tolerance {
                tracing::info!(sweeps = sweep, difference, "adiabats converged");
                return Ok(Convergence {
                    adiabats: adiabats.into_vec(),
                    sweeps: sweep,
                    difference,
                });
            }
        }

        Err(Error::Divergence {
            sweeps: self.max_sweeps,
            difference,
            tolerance: self.tolerance,
        })
    }

    pub fn smoothed_pressures(&self, weights: &KernelWeights, adiabats: &[Real]) -> Vec<Real> {
        (0..weights.len())
            .map(|i| self.smoothed_pressure(weights.row(i), adiabats))
            .collect()
    }

    /// ρ̃_i = (P̄_i / A_i)^(1/γ)
    pub fn smoothed_densities(&self, adiabats: &[Real], smoothed_pressures: &[Real]) -> Vec<Real> {
        adiabats
            .iter()
            .zip(smoothed_pressures.iter())
            .map(|(&a, &p)| eos::smoothed_density(a, p, self.gamma))
            .collect()
    }
}

fn check_lengths(weights: &KernelWeights, energies: &[Real], adiabats: &AdiabatVector) -> Result<()> {
    if weights.len() != energies.len() || adiabats.len() != energies.len() {
        return Err(Error::configuration(format!(
            "mismatching particle counts: {} weight rows, {} energies, {} adiabats",
            weights.len(),
            energies.len(),
            adiabats.len()
        )));
    }
    Ok(())
}
