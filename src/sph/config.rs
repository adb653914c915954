use std::path::Path;

use serde::Deserialize;

use super::error::{Error, Result};
use super::smoothing_kernel::KernelKind;
use crate::units::Real;

/// Solver settings shared by the traditional and the pressure-entropy computation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Target ratio of smoothing length to mean interparticle spacing (η).
    pub eta: Real,
    /// Adiabatic index of the gas (γ).
    pub gamma: Real,
    /// Accepted |residual| of the smoothing length equation.
    pub tolerance: Real,
    /// Sweeps stop once Σ|A_old - A_new| is at or below this.
    pub adiabat_tolerance: Real,
    /// Accepted |residual| of a single particle's adiabat equation.
    pub adiabat_residual_tolerance: Real,
    pub kernel: KernelKind,
    pub initial_smoothing_length: Real,
    /// Budget of every scalar root search.
    pub max_root_iterations: usize,
    /// Budget of Gauss-Seidel sweeps over all adiabats.
    pub max_sweeps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            eta: 0.84,
            gamma: 4.0 / 3.0,
            tolerance: 1.0e-6,
            adiabat_tolerance: 1.0e-7,
            adiabat_residual_tolerance: 1.0e-10,
            kernel: KernelKind::GadgetCubicSpline,
            initial_smoothing_length: 1.0,
            max_root_iterations: 200,
            max_sweeps: 500,
        }
    }
}

impl SolverConfig {
    /// Reads settings from a file (any format the `config` crate understands, e.g. toml),
    /// overridden by `PESPH_*` environment variables. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<SolverConfig> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("PESPH"))
            .build()?;
        let config: SolverConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: Real) -> Result<()> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(Error::configuration(format!("{} must be positive and finite, was {}", name, value)))
            }
        }
        positive("eta", self.eta)?;
        positive("tolerance", self.tolerance)?;
        positive("adiabat_tolerance", self.adiabat_tolerance)?;
        positive("adiabat_residual_tolerance", self.adiabat_residual_tolerance)?;
        positive("initial_smoothing_length", self.initial_smoothing_length)?;
        // γ-1 appears in denominators and exponents.
        if !(self.gamma > 1.0) || !self.gamma.is_finite() {
            return Err(Error::configuration(format!("gamma must be finite and greater than 1, was {}", self.gamma)));
        }
        if self.max_root_iterations == 0 {
            return Err(Error::configuration("max_root_iterations must be at least 1"));
        }
        if self.max_sweeps == 0 {
            return Err(Error::configuration("max_sweeps must be at least 1"));
        }
        Ok(())
    }
}
