use super::kernel::Kernel;
use crate::units::Real;

/// Cubic spline kernel as used by GADGET-2.
///
/// Shape of the classic Monaghan & Lattanzio 1985 spline, but rescaled so that the support ends at the smoothing length.
/// See Springel 2005, "The cosmological simulation code GADGET-2", eq. 4.
#[derive(Copy, Clone)]
pub struct GadgetCubicSpline {
    h_inv: Real,
    support_radius: Real,
    normalizer: Real,
}

impl GadgetCubicSpline {
    pub const SUPPORT: Real = 1.0;

    pub fn new(smoothing_length: Real) -> GadgetCubicSpline {
        GadgetCubicSpline {
            h_inv: 1.0 / smoothing_length,
            support_radius: Self::SUPPORT * smoothing_length,
            normalizer: 8.0 / (std::f64::consts::PI * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for GadgetCubicSpline {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r >= self.support_radius {
            return 0.0;
        }
        let q = r * self.h_inv;
        if q <= 0.5 {
            self.normalizer * (1.0 + (q * q * q - q * q) * 6.0)
        } else {
            self.normalizer * (1.0 - q).max(0.0).powi(3) * 2.0
        }
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(GadgetCubicSpline);
