/// Smoothing Kernels.
pub use self::cubic::CubicSpline;
pub use self::gadget::GadgetCubicSpline;
pub use self::gaussian::Gaussian;
pub use self::kernel::Kernel;
pub use self::tophat::Tophat;
pub use self::triangle::Triangle;
pub use self::wendland_quintic_c2::WendlandQuinticC2;

#[macro_use]
mod kernel;
mod cubic;
mod gadget;
mod gaussian;
mod tophat;
mod triangle;
mod wendland_quintic_c2;

// ------------------------------------------------------

use super::error::{Error, Result};
use crate::units::Real;
use serde::{Deserialize, Serialize};

/// Selects one of the kernels above.
///
/// Chosen once per computation, every smoothing length solve and pressure sum uses the same kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KernelKind {
    GadgetCubicSpline,
    Cubic,
    Quintic,
    Gaussian,
    Tophat,
    Triangle,
}

impl Default for KernelKind {
    fn default() -> Self {
        KernelKind::GadgetCubicSpline
    }
}

impl KernelKind {
    pub const ALL: [KernelKind; 6] = [
        KernelKind::GadgetCubicSpline,
        KernelKind::Cubic,
        KernelKind::Quintic,
        KernelKind::Gaussian,
        KernelKind::Tophat,
        KernelKind::Triangle,
    ];

    /// Support radius in units of the smoothing length.
    pub fn support(self) -> Real {
        match self {
            KernelKind::GadgetCubicSpline => GadgetCubicSpline::SUPPORT,
            KernelKind::Cubic => CubicSpline::SUPPORT,
            KernelKind::Quintic => WendlandQuinticC2::SUPPORT,
            KernelKind::Gaussian => Gaussian::SUPPORT,
            KernelKind::Tophat => Tophat::SUPPORT,
            KernelKind::Triangle => Triangle::SUPPORT,
        }
    }

    /// Binds the kernel to a smoothing length.
    ///
    /// Fails for non-positive or non-finite smoothing lengths instead of producing NaN/∞ weights.
    pub fn with_smoothing_length(self, smoothing_length: Real) -> Result<SmoothingKernel> {
        if !(smoothing_length > 0.0) || !smoothing_length.is_finite() {
            return Err(Error::domain(format!(
                "smoothing length must be positive and finite, was {}",
                smoothing_length
            )));
        }
        Ok(match self {
            KernelKind::GadgetCubicSpline => SmoothingKernel::GadgetCubicSpline(GadgetCubicSpline::new(smoothing_length)),
            KernelKind::Cubic => SmoothingKernel::Cubic(CubicSpline::new(smoothing_length)),
            KernelKind::Quintic => SmoothingKernel::Quintic(WendlandQuinticC2::new(smoothing_length)),
            KernelKind::Gaussian => SmoothingKernel::Gaussian(Gaussian::new(smoothing_length)),
            KernelKind::Tophat => SmoothingKernel::Tophat(Tophat::new(smoothing_length)),
            KernelKind::Triangle => SmoothingKernel::Triangle(Triangle::new(smoothing_length)),
        })
    }

    /// One-off evaluation of W(r, h).
    pub fn evaluate(self, r: Real, smoothing_length: Real) -> Result<Real> {
        Ok(self.with_smoothing_length(smoothing_length)?.evaluate(r))
    }
}

/// A kernel of any kind bound to a smoothing length.
#[derive(Copy, Clone)]
pub enum SmoothingKernel {
    GadgetCubicSpline(GadgetCubicSpline),
    Cubic(CubicSpline),
    Quintic(WendlandQuinticC2),
    Gaussian(Gaussian),
    Tophat(Tophat),
    Triangle(Triangle),
}

impl Kernel for SmoothingKernel {
    #[inline]
    fn evaluate(&self, r: Real) -> Real {
        match self {
            SmoothingKernel::GadgetCubicSpline(kernel) => kernel.evaluate(r),
            SmoothingKernel::Cubic(kernel) => kernel.evaluate(r),
            SmoothingKernel::Quintic(kernel) => kernel.evaluate(r),
            SmoothingKernel::Gaussian(kernel) => kernel.evaluate(r),
            SmoothingKernel::Tophat(kernel) => kernel.evaluate(r),
            SmoothingKernel::Triangle(kernel) => kernel.evaluate(r),
        }
    }

    #[inline]
    fn support_radius(&self) -> Real {
        match self {
            SmoothingKernel::GadgetCubicSpline(kernel) => kernel.support_radius(),
            SmoothingKernel::Cubic(kernel) => kernel.support_radius(),
            SmoothingKernel::Quintic(kernel) => kernel.support_radius(),
            SmoothingKernel::Gaussian(kernel) => kernel.support_radius(),
            SmoothingKernel::Tophat(kernel) => kernel.support_radius(),
            SmoothingKernel::Triangle(kernel) => kernel.support_radius(),
        }
    }
}
