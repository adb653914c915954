use crate::units::*;
use rayon::prelude::*;

/// Distances from `position` to every particle in `positions`, in particle order.
///
/// If `position` belongs to one of the particles, its own entry is zero.
pub fn separations(position: Position, positions: &[Position]) -> Vec<Real> {
    positions.iter().map(|&other| (other - position).abs()).collect()
}

/// Sum of absolute element-wise differences, used as the convergence norm between two sweeps.
pub fn absolute_difference(a: &[Real], b: &[Real]) -> Real {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// All pairwise separations of a particle set, one row per particle.
///
/// Positions don't change during a snapshot computation, so rows are computed once and shared by the
/// smoothing length, density and pressure-entropy passes. Quadratic in memory.
pub struct SeparationTable {
    num_particles: usize,
    distances: Vec<Real>,
}

impl SeparationTable {
    pub fn new(positions: &[Position]) -> SeparationTable {
        let num_particles = positions.len();
        let mut distances = vec![0.0; num_particles * num_particles];
        if num_particles > 0 {
            distances
                .par_chunks_mut(num_particles)
                .zip(positions.par_iter())
                .for_each(|(row, &ri)| {
                    for (distance, &rj) in row.iter_mut().zip(positions.iter()) {
                        *distance = (rj - ri).abs();
                    }
                });
        }
        SeparationTable { num_particles, distances }
    }

    pub fn len(&self) -> usize {
        self.num_particles
    }

    pub fn is_empty(&self) -> bool {
        self.num_particles == 0
    }

    /// Separations of particle `i` to all particles, including itself.
    #[inline]
    pub fn row(&self, i: usize) -> &[Real] {
        &self.distances[i * self.num_particles..(i + 1) * self.num_particles]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Real]> {
        (0..self.num_particles).map(move |i| self.row(i))
    }
}
