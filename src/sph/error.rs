use crate::units::Real;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while computing a snapshot.
///
/// Configuration and domain errors are raised before any solve starts.
/// Convergence errors carry enough context (particle, sweep, last estimate and residual)
/// for a caller to decide whether to retry with looser tolerances.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("numeric domain violation: {0}")]
    NumericDomain(String),

    #[error(
        "root search for particle {particle}{} did not converge after {iterations} iterations (last estimate {estimate:.6e}, residual {residual:.3e})",
        sweep_suffix(.sweep)
    )]
    NonConvergence {
        particle: usize,
        sweep: Option<usize>,
        iterations: usize,
        estimate: Real,
        residual: Real,
    },

    #[error("adiabat sweeps diverged: difference {difference:.4e} still above {tolerance:.4e} after {sweeps} sweeps")]
    Divergence { sweeps: usize, difference: Real, tolerance: Real },

    #[error(transparent)]
    ConfigSource(#[from] config::ConfigError),
}

fn sweep_suffix(sweep: &Option<usize>) -> String {
    match sweep {
        Some(sweep) => format!(" in sweep {}", sweep),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn domain(message: impl Into<String>) -> Error {
        Error::NumericDomain(message.into())
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Error {
        Error::Configuration(message.into())
    }
}
