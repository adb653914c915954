use super::kernel::Kernel;
use crate::units::Real;

/// Linearly decaying ("tent") kernel.
#[derive(Copy, Clone)]
pub struct Triangle {
    h_inv: Real,
    support_radius: Real,
    normalizer: Real,
}

impl Triangle {
    pub const SUPPORT: Real = 1.0;

    pub fn new(smoothing_length: Real) -> Triangle {
        Triangle {
            h_inv: 1.0 / smoothing_length,
            support_radius: Self::SUPPORT * smoothing_length,
            // 3D: ∫(1-q) 4πq² dq over [0,1] is π/3
            normalizer: 3.0 / (std::f64::consts::PI * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for Triangle {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r >= self.support_radius {
            return 0.0;
        }
        self.normalizer * (1.0 - r * self.h_inv).max(0.0)
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(Triangle);
