use super::kernel::Kernel;
use crate::units::Real;

/// Gaussian kernel, truncated at three smoothing lengths.
///
/// The tail value exp(-9) is subtracted so the kernel reaches zero continuously at the cut.
/// This loses a fraction of a percent of the normalization.
#[derive(Copy, Clone)]
pub struct Gaussian {
    h_inv: Real,
    support_radius: Real,
    normalizer: Real,
}

impl Gaussian {
    pub const SUPPORT: Real = 3.0;
    const TAIL: Real = -(Self::SUPPORT * Self::SUPPORT);

    pub fn new(smoothing_length: Real) -> Gaussian {
        Gaussian {
            h_inv: 1.0 / smoothing_length,
            support_radius: Self::SUPPORT * smoothing_length,
            normalizer: 1.0 / (std::f64::consts::PI.powf(1.5) * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for Gaussian {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r >= self.support_radius {
            return 0.0;
        }
        let q = r * self.h_inv;
        // rounding may push the difference a hair below zero right at the cut
        self.normalizer * ((-q * q).exp() - Self::TAIL.exp()).max(0.0)
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(Gaussian, normalization_tolerance = 1.0e-2);
