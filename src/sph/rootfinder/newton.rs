use super::*;

/// Newton's method with a forward-difference derivative.
///
/// Converges quadratically near a root, but needs a reasonable initial guess and a smooth objective.
/// Steps that would leave the positive half-line are replaced by halving the current estimate.
#[derive(Copy, Clone, Debug)]
pub struct NewtonRootFinder {
    // Finite difference step relative to the current estimate.
    pub relative_step: Real,
}

impl Default for NewtonRootFinder {
    fn default() -> Self {
        NewtonRootFinder { relative_step: 1.0e-7 }
    }
}

impl RootFinder for NewtonRootFinder {
    fn find_root<F>(&self, mut objective: F, search: &RootSearch) -> std::result::Result<Root, RootFailure>
    where
        F: FnMut(Real) -> Result<Real>,
    {
        check_initial_guess(search)?;

        let mut x = search.initial;
        let mut f = evaluate(&mut objective, x)?;
        let mut iterations = 0;
        loop {
            if f.abs() <= search.tolerance {
                return Ok(Root {
                    estimate: x,
                    residual: f,
                    iterations,
                });
            }
            if iterations >= search.max_iterations {
                break;
            }
            iterations += 1;

            let step = self.relative_step * x;
            let derivative = (evaluate(&mut objective, x + step)? - f) / step;
            if derivative == 0.0 || !derivative.is_finite() {
                break;
            }
            let next = x - f / derivative;
            x = if next > 0.0 { next } else { 0.5 * x };
            f = evaluate(&mut objective, x)?;
        }

        Err(RootFailure::NotConverged {
            estimate: x,
            residual: f,
            iterations,
        })
    }
}
