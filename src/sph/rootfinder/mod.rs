pub use self::bracketing::BracketingRootFinder;
pub use self::newton::NewtonRootFinder;

mod bracketing;
mod newton;

// ------------------------------------------------------

use super::error::{Error, Result};
use crate::units::Real;

/// Parameters of one scalar root search.
#[derive(Copy, Clone, Debug)]
pub struct RootSearch {
    pub initial: Real,
    // A root is accepted once |objective(x)| <= tolerance.
    pub tolerance: Real,
    pub max_iterations: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Root {
    pub estimate: Real,
    pub residual: Real,
    pub iterations: usize,
}

#[derive(Debug)]
pub enum RootFailure {
    /// Iteration budget exhausted (or the search stalled) before the residual met the tolerance.
    /// Holds the last point evaluated.
    NotConverged { estimate: Real, residual: Real, iterations: usize },
    /// The objective failed, typically because a candidate was outside its domain.
    Objective(Error),
}

impl From<Error> for RootFailure {
    fn from(error: Error) -> Self {
        RootFailure::Objective(error)
    }
}

impl RootFailure {
    /// Attributes the failure to a particle (and a sweep, for the adiabat iteration).
    pub fn into_error(self, particle: usize, sweep: Option<usize>) -> Error {
        match self {
            RootFailure::NotConverged {
                estimate,
                residual,
                iterations,
            } => Error::NonConvergence {
                particle,
                sweep,
                iterations,
                estimate,
                residual,
            },
            RootFailure::Objective(error) => error,
        }
    }
}

/// Scalar root finder over the positive half-line.
///
/// Every unknown solved for in this crate (smoothing lengths, adiabats) is strictly positive,
/// so implementations never pass a candidate <= 0 to the objective.
pub trait RootFinder {
    fn find_root<F>(&self, objective: F, search: &RootSearch) -> std::result::Result<Root, RootFailure>
    where
        F: FnMut(Real) -> Result<Real>;
}

fn check_initial_guess(search: &RootSearch) -> std::result::Result<(), RootFailure> {
    if search.initial > 0.0 && search.initial.is_finite() {
        Ok(())
    } else {
        Err(Error::domain(format!("initial guess must be positive and finite, was {}", search.initial)).into())
    }
}

// Evaluates the objective, rejecting NaN/∞ residuals.
#[inline]
fn evaluate<F>(objective: &mut F, x: Real) -> std::result::Result<Real, RootFailure>
where
    F: FnMut(Real) -> Result<Real>,
{
    let residual = objective(x)?;
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::domain(format!("objective is not finite at {} (was {})", x, residual)).into())
    }
}
