use super::kernel::Kernel;
use crate::units::Real;

/// Constant weight inside the smoothing length, zero outside.
///
/// Discontinuous at r = h.
#[derive(Copy, Clone)]
pub struct Tophat {
    support_radius: Real,
    normalizer: Real,
}

impl Tophat {
    pub const SUPPORT: Real = 1.0;

    pub fn new(smoothing_length: Real) -> Tophat {
        Tophat {
            support_radius: Self::SUPPORT * smoothing_length,
            normalizer: 3.0 / (4.0 * std::f64::consts::PI * smoothing_length.powi(3)),
        }
    }
}

impl Kernel for Tophat {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        if r < self.support_radius {
            self.normalizer
        } else {
            0.0
        }
    }

    #[inline]
    fn support_radius(&self) -> Real {
        self.support_radius
    }
}

generate_kernel_tests!(Tophat, discontinuous);
