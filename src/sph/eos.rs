// Equation of state for an ideal gas with adiabatic index γ, in the forms GADGET-2 uses.
//
//   P = (γ-1) ρ u = A ρ^γ
//
// u: internal energy per unit mass, A: adiabat ("entropic function").

use crate::units::Real;

/// Gas pressure from density and internal energy, P = (γ-1) ρ u.
#[inline]
pub fn gas_pressure(density: Real, internal_energy: Real, gamma: Real) -> Real {
    (gamma - 1.0) * density * internal_energy
}

/// Gas pressure from density and adiabat, P = A ρ^γ.
#[inline]
pub fn gas_pressure_from_adiabat(density: Real, adiabat: Real, gamma: Real) -> Real {
    adiabat * density.powf(gamma)
}

/// Adiabat of a particle, A = (γ-1) u / ρ^(γ-1).
#[inline]
pub fn adiabat(internal_energy: Real, density: Real, gamma: Real) -> Real {
    let gamma_minus_1 = gamma - 1.0;
    internal_energy * gamma_minus_1 / density.powf(gamma_minus_1)
}

/// Internal energy from adiabat and density, u = A ρ^(γ-1) / (γ-1).
#[inline]
pub fn internal_energy(adiabat: Real, density: Real, gamma: Real) -> Real {
    let gamma_minus_1 = gamma - 1.0;
    adiabat / gamma_minus_1 * density.powf(gamma_minus_1)
}

/// Density implied by a smoothed pressure and an adiabat, ρ̃ = (P/A)^(1/γ).
///
/// In pressure-entropy SPH this is the smoothed density, not the physical (kernel-summed) one.
#[inline]
pub fn smoothed_density(adiabat: Real, pressure: Real, gamma: Real) -> Real {
    (pressure / adiabat).powf(1.0 / gamma)
}

/// Pressure that internal energy `u` and adiabat `A` imply together, by eliminating the density:
/// P = A ((u/A)(γ-1))^(γ/(γ-1)).
#[inline]
pub fn pressure_from_energy_and_adiabat(internal_energy: Real, adiabat: Real, gamma: Real) -> Real {
    let gamma_minus_1 = gamma - 1.0;
    adiabat * (internal_energy / adiabat * gamma_minus_1).powf(gamma / gamma_minus_1)
}
