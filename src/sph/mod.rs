pub use self::adiabat_vector::{AdiabatSlot, AdiabatVector};
pub use self::config::SolverConfig;
pub use self::error::{Error, Result};
pub use self::particles::{ParticleSet, ThermalState};
pub use self::pressure_entropy::{Convergence, KernelWeights, PressureEntropySolver};
pub use self::rootfinder::{BracketingRootFinder, NewtonRootFinder, Root, RootFinder, RootSearch};
pub use self::separations::SeparationTable;
pub use self::smoothing_kernel::{Kernel, KernelKind, SmoothingKernel};
pub use self::smoothing_length::SmoothingLengthSolver;
pub use self::solver::*;

pub mod density;
pub mod eos;
pub mod separations;
pub mod smoothing_kernel;

mod adiabat_vector;
mod config;
mod error;
mod particles;
mod pressure_entropy;
mod rootfinder;
mod smoothing_length;
mod solver;
