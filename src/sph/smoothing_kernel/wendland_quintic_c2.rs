use super::kernel::Kernel;
use crate::units::Real;

/// Wendland C2 kernel, a quintic polynomial in q with support of two smoothing lengths.
///
/// Dehnen & Aly 2012, "Improving convergence in smoothed particle hydrodynamics simulations without pairing instability".
/// This is the kernel used by the ANARCHY flavour of pressure-entropy SPH.
// https://github.com/InteractiveComputerGraphics/SPlisHSPlasH/blob/d5172c9/SPlisHSPlasH/SPHKernels.h#L545 (there with support h)
#[derive(Copy, Clone)]
pub struct WendlandQuinticC2 {
    h_inv: Real,
    support_radius: Real,
    normalizer: Real,
}

impl WendlandQuinticC2 {
    pub const SUPPORT: Real = 2.0;

    pub fn new(smoothing_length: Real) -> Self {
        WendlandQuinticC2 {
            h_inv: 1.0 / smoothing_length,
            support_radius: Self::SUPPORT * smoothing_length,
            normalizer: 21.0 / (16.0 * std::f64::consts::PI * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for WendlandQuinticC2 {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r >= self.support_radius {
            return 0.0;
        }
        let q = self.h_inv * r;
        let one_minus_half_q = 1.0 - 0.5 * q;
        let one_minus_half_q_sq = one_minus_half_q * one_minus_half_q;
        self.normalizer * one_minus_half_q_sq * one_minus_half_q_sq * (2.0 * q + 1.0)
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(WendlandQuinticC2);
