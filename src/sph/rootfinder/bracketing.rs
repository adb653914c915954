use super::*;

/// Brackets the root by geometric expansion around the initial guess, then bisects.
///
/// Slower than Newton, but converges for any continuous objective that changes sign on the positive half-line,
/// including the piecewise polynomial ones that kernel sums produce.
#[derive(Copy, Clone, Debug)]
pub struct BracketingRootFinder {
    // Factor by which the bracket grows (upwards) and shrinks (downwards) per expansion step.
    pub expansion_factor: Real,
}

impl Default for BracketingRootFinder {
    fn default() -> Self {
        BracketingRootFinder { expansion_factor: 2.0 }
    }
}

impl RootFinder for BracketingRootFinder {
    fn find_root<F>(&self, mut objective: F, search: &RootSearch) -> std::result::Result<Root, RootFailure>
    where
        F: FnMut(Real) -> Result<Real>,
    {
        check_initial_guess(search)?;
        let tolerance = search.tolerance;
        let not_converged = |estimate, residual, iterations| RootFailure::NotConverged {
            estimate,
            residual,
            iterations,
        };

        let f_initial = evaluate(&mut objective, search.initial)?;
        if f_initial.abs() <= tolerance {
            return Ok(Root {
                estimate: search.initial,
                residual: f_initial,
                iterations: 0,
            });
        }

        // Expand in both directions until a sign change is enclosed.
        let mut iterations = 0;
        let (mut lower, mut f_lower) = (search.initial, f_initial);
        let (mut upper, mut f_upper) = (search.initial, f_initial);
        let (mut a, mut f_a, mut b) = loop {
            if iterations >= search.max_iterations {
                return Err(not_converged(upper, f_upper, iterations));
            }
            iterations += 1;

            let candidate = lower / self.expansion_factor;
            let f = evaluate(&mut objective, candidate)?;
            if f.abs() <= tolerance {
                return Ok(Root {
                    estimate: candidate,
                    residual: f,
                    iterations,
                });
            }
            if f.signum() != f_lower.signum() {
                break (candidate, f, lower);
            }
            lower = candidate;
            f_lower = f;

            let candidate = upper * self.expansion_factor;
            let f = evaluate(&mut objective, candidate)?;
            if f.abs() <= tolerance {
                return Ok(Root {
                    estimate: candidate,
                    residual: f,
                    iterations,
                });
            }
            if f.signum() != f_upper.signum() {
                break (upper, f_upper, candidate);
            }
            upper = candidate;
            f_upper = f;
        };

        // Bisection, invariant: sign(f(a)) != sign(f(b))
        let (mut last, mut f_last) = (a, f_a);
        loop {
            if iterations >= search.max_iterations {
                return Err(not_converged(last, f_last, iterations));
            }
            iterations += 1;

            let mid = 0.5 * (a + b);
            if mid <= a || mid >= b {
                // Bracket collapsed to neighbouring floats, the tolerance is out of reach.
                return Err(not_converged(last, f_last, iterations));
            }
            let f = evaluate(&mut objective, mid)?;
            if f.abs() <= tolerance {
                return Ok(Root {
                    estimate: mid,
                    residual: f,
                    iterations,
                });
            }
            if f.signum() == f_a.signum() {
                a = mid;
                f_a = f;
            } else {
                b = mid;
            }
            last = mid;
            f_last = f;
        }
    }
}
