pub mod pressure_entropy;
pub mod smoothing_kernel;
pub mod smoothing_length;
