pub use pressure_entropy_sph::{PressureEntropySnapshot, PressureEntropySphSolver};
pub use traditional::{TraditionalSnapshot, TraditionalSphSolver};

mod pressure_entropy_sph;
mod traditional;

// ------------------------------------------------------

use super::error::Result;
use super::particles::ParticleSet;

pub trait Solver {
    type Snapshot;

    // computes all per-particle quantities of a static particle snapshot.
    fn solve(&self, particles: &ParticleSet) -> Result<Self::Snapshot>;
}
