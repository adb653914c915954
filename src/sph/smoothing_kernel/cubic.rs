use super::kernel::Kernel;
use crate::units::Real;

/// Cubic B-spline (M4) kernel with support of two smoothing lengths.
///
/// "J. Monaghan, Smoothed Particle Hydrodynamics, Annual Review of Astronomy and Astrophysics, 30 (1992), pp. 543-574."
/// Normalization factor 1/(πh³) for three dimensions.
#[derive(Copy, Clone)]
pub struct CubicSpline {
    h_inv: Real,
    support_radius: Real,
    normalizer: Real,
}

impl CubicSpline {
    pub const SUPPORT: Real = 2.0;

    pub fn new(smoothing_length: Real) -> CubicSpline {
        CubicSpline {
            h_inv: 1.0 / smoothing_length,
            support_radius: Self::SUPPORT * smoothing_length,
            normalizer: 1.0 / (std::f64::consts::PI * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for CubicSpline {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r >= self.support_radius {
            return 0.0;
        }
        let q = r * self.h_inv;
        if q <= 1.0 {
            self.normalizer * (1.0 - 1.5 * q * q + 0.75 * q * q * q)
        } else {
            self.normalizer * 0.25 * (2.0 - q).max(0.0).powi(3)
        }
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(CubicSpline);
