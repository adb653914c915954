// All quantities are one-dimensional scalars, positions included.
pub type Real = f64;
pub type Position = Real;
