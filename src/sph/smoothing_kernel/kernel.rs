use crate::units::Real;

/// SPH smoothing kernel
///
/// Only radially symmetric kernels with compact support are supported.
/// A kernel instance is bound to one smoothing length at construction, evaluating it is then just a function of distance.
/// Kernels are normalized in three dimensions (W ∝ h⁻³), as in GADGET, even though particles live on a line.
pub trait Kernel {
    /// Evaluates the kernel function for a given distance.
    /// `r`:    Absolute distance between two particles, >= 0.
    fn evaluate(&self, r: Real) -> Real;

    /// Distance at and beyond which `evaluate` returns zero.
    fn support_radius(&self) -> Real;
}

/// Tests every kernel needs to pass.
///
/// Kernels that are not continuous at their support boundary opt out of the continuity test with `discontinuous`.
/// Kernels that are truncated versions of infinite-support functions may pass a looser normalization tolerance.
macro_rules! generate_kernel_tests {
    ($kernel_type:ident) => {
        generate_kernel_tests!(@common $kernel_type, 1.0e-4);
        generate_kernel_tests!(@continuity $kernel_type);
    };
    ($kernel_type:ident, normalization_tolerance = $tolerance:expr) => {
        generate_kernel_tests!(@common $kernel_type, $tolerance);
        generate_kernel_tests!(@continuity $kernel_type);
    };
    ($kernel_type:ident, discontinuous) => {
        generate_kernel_tests!(@common $kernel_type, 1.0e-4);
    };

    (@common $kernel_type:ident, $tolerance:expr) => {
    };

    (@continuity $kernel_type:ident) => {
    };
}
