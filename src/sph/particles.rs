use rand::{Rng, SeedableRng};

use super::error::{Error, Result};
use crate::units::*;

/// The one thermodynamic variable a particle set is constructed with.
/// The other one follows once densities are known.
#[derive(Clone, Debug, PartialEq)]
pub enum ThermalState {
    InternalEnergies(Vec<Real>),
    Adiabats(Vec<Real>),
}

impl ThermalState {
    pub fn values(&self) -> &[Real] {
        match self {
            ThermalState::InternalEnergies(values) | ThermalState::Adiabats(values) => values,
        }
    }
}

/// Particles on a line, stored as parallel arrays.
///
/// Order only matters as an indexing convention, except for the order in which adiabats are swept.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSet {
    positions: Vec<Position>,
    masses: Option<Vec<Real>>, // None means every particle has mass 1
    state: ThermalState,
}

impl ParticleSet {
    /// Validating constructor, exactly one of `energies` and `adiabats` has to be given.
    pub fn new(
        positions: Vec<Position>,
        masses: Option<Vec<Real>>,
        energies: Option<Vec<Real>>,
        adiabats: Option<Vec<Real>>,
    ) -> Result<ParticleSet> {
        let state = match (energies, adiabats) {
            (Some(energies), None) => ThermalState::InternalEnergies(energies),
            (None, Some(adiabats)) => ThermalState::Adiabats(adiabats),
            (Some(_), Some(_)) => {
                return Err(Error::configuration("both internal energies and adiabats given, provide only one"));
            }
            (None, None) => return Err(Error::configuration("neither internal energies nor adiabats given")),
        };

        if positions.is_empty() {
            return Err(Error::domain("particle set is empty"));
        }
        if let Some(i) = positions.iter().position(|x| !x.is_finite()) {
            return Err(Error::domain(format!("position of particle {} is not finite", i)));
        }

        let num_particles = positions.len();
        let check_length = |name: &str, len: usize| {
            if len == num_particles {
                Ok(())
            } else {
                Err(Error::configuration(format!("{} {} given for {} positions", len, name, num_particles)))
            }
        };

        if let Some(masses) = &masses {
            check_length("masses", masses.len())?;
            if let Some(i) = masses.iter().position(|&m| !(m > 0.0) || !m.is_finite()) {
                return Err(Error::configuration(format!("mass of particle {} must be positive, was {}", i, masses[i])));
            }
        }

        let name = match state {
            ThermalState::InternalEnergies(_) => "internal energies",
            ThermalState::Adiabats(_) => "adiabats",
        };
        check_length(name, state.values().len())?;
        if let Some(i) = state.values().iter().position(|&v| !(v > 0.0) || !v.is_finite()) {
            return Err(Error::domain(format!("{} of particle {} must be positive, was {}", name, i, state.values()[i])));
        }

        Ok(ParticleSet { positions, masses, state })
    }

    pub fn with_energies(positions: Vec<Position>, energies: Vec<Real>) -> Result<ParticleSet> {
        Self::new(positions, None, Some(energies), None)
    }

    pub fn with_adiabats(positions: Vec<Position>, adiabats: Vec<Real>) -> Result<ParticleSet> {
        Self::new(positions, None, None, Some(adiabats))
    }

    /// Replaces the unit masses.
    pub fn with_masses(self, masses: Vec<Real>) -> Result<ParticleSet> {
        let ParticleSet { positions, state, .. } = self;
        match state {
            ThermalState::InternalEnergies(energies) => Self::new(positions, Some(masses), Some(energies), None),
            ThermalState::Adiabats(adiabats) => Self::new(positions, Some(masses), None, Some(adiabats)),
        }
    }

    /// Evenly spaced particles with equal internal energy, starting at the origin.
    ///
    /// - `jitter_amount`: Amount of jitter. 0 for a perfect lattice, 1 moves each particle by up to half a spacing either way.
    /// - `seed`: Jitter is reproducible for a given seed.
    pub fn jittered_line(num_particles: usize, spacing: Real, jitter_amount: Real, energy: Real, seed: u64) -> Result<ParticleSet> {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        let jitter_factor = spacing * jitter_amount;
        let positions = (0..num_particles)
            .map(|i| {
                let jitter = (rng.gen::<Real>() - 0.5) * jitter_factor;
                spacing * i as Real + jitter
            })
            .collect();
        Self::with_energies(positions, vec![energy; num_particles])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    // Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn masses(&self) -> Option<&[Real]> {
        self.masses.as_deref()
    }

    #[inline]
    pub fn mass(&self, i: usize) -> Real {
        self.masses.as_ref().map_or(1.0, |masses| masses[i])
    }

    pub fn state(&self) -> &ThermalState {
        &self.state
    }
}
