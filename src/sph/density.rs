use super::error::{Error, Result};
use super::smoothing_kernel::{Kernel, KernelKind};
use crate::units::Real;

/// Kernel-weighted SPH density ρ = Σ m_j W(r_j, h).
///
/// `separations` includes the particle itself (r = 0), so every particle contributes to its own density.
/// Without `masses` all particles weigh 1.
pub fn density(separations: &[Real], smoothing_length: Real, masses: Option<&[Real]>, kernel: KernelKind) -> Result<Real> {
    let kernel = kernel.with_smoothing_length(smoothing_length)?;
    density_with(&kernel, separations, masses)
}

/// Fails unless there is exactly one mass per separation.
fn check_masses(separations: &[Real], masses: Option<&[Real]>) -> Result<()> {
    match masses {
        Some(masses) if masses.len() != separations.len() => Err(Error::configuration(format!(
            "{} masses given for {} separations",
            masses.len(),
            separations.len()
        ))),
        _ => Ok(()),
    }
}

/// Same as [`density`] for an already bound kernel.
#[inline]
pub fn density_with(kernel: &impl Kernel, separations: &[Real], masses: Option<&[Real]>) -> Result<Real> {
    check_masses(separations, masses)?;
    Ok(match masses {
        Some(masses) => separations
            .iter()
            .zip(masses.iter())
            .map(|(&r, &mass)| mass * kernel.evaluate(r))
            .sum(),
        None => separations.iter().map(|&r| kernel.evaluate(r)).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sph::error::Error;
    use crate::sph::smoothing_kernel::GadgetCubicSpline;

    #[test]
    fn single_particle_density_is_self_contribution() {
        let rho = density(&[0.0], 2.0, None, KernelKind::GadgetCubicSpline).unwrap();
        assert_eq!(rho, GadgetCubicSpline::new(2.0).evaluate(0.0));
    }

    #[test]
    fn masses_weight_contributions() {
        let separations = [0.0, 0.4, 1.5];
        let unit = density(&separations, 1.0, None, KernelKind::Cubic).unwrap();
        let ones = density(&separations, 1.0, Some(&[1.0, 1.0, 1.0]), KernelKind::Cubic).unwrap();
        let doubled = density(&separations, 1.0, Some(&[2.0, 2.0, 2.0]), KernelKind::Cubic).unwrap();
        assert_eq!(unit, ones);
        assert!((doubled - 2.0 * unit).abs() < 1.0e-12);
    }

    #[test]
    fn particles_outside_support_do_not_contribute() {
        let near = density(&[0.0, 0.5], 1.0, None, KernelKind::Triangle).unwrap();
        let with_far = density(&[0.0, 0.5, 1.0, 7.0], 1.0, None, KernelKind::Triangle).unwrap();
        assert_eq!(near, with_far);
    }

    #[test]
    fn mass_count_must_match_separations() {
        let separations = [0.0, 0.3, 0.6];
        assert!(matches!(
            density(&separations, 1.0, Some(&[1.0]), KernelKind::GadgetCubicSpline),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            density_with(&GadgetCubicSpline::new(1.0), &separations, Some(&[1.0, 1.0, 1.0, 1.0])),
            Err(Error::Configuration(_))
        ));
        assert!(density(&separations, 1.0, Some(&[1.0, 1.0, 1.0]), KernelKind::GadgetCubicSpline).is_ok());
    }

    #[test]
    fn non_positive_smoothing_length_is_domain_error() {
        assert!(matches!(
            density(&[0.0, 1.0], 0.0, None, KernelKind::GadgetCubicSpline),
            Err(Error::NumericDomain(_))
        ));
    }
}
