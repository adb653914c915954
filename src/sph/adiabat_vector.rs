use super::error::{Error, Result};
use crate::units::Real;

/// One adiabat estimate per particle, mutated in place by the pressure-entropy sweeps.
///
/// All entries are positive and finite at all times, since they are raised to fractional powers.
/// Individual entries can only be changed through an [`AdiabatSlot`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdiabatVector {
    values: Vec<Real>,
}

impl AdiabatVector {
    pub fn new(values: Vec<Real>) -> Result<AdiabatVector> {
        if let Some(i) = values.iter().position(|&a| !is_valid_adiabat(a)) {
            return Err(Error::domain(format!("adiabat of particle {} must be positive and finite, was {}", i, values[i])));
        }
        Ok(AdiabatVector { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Real> {
        self.values
    }

    /// Exclusive write access to entry `index` for the duration of one root search.
    ///
    /// Unless the slot is committed, the entry reverts to its current value when the slot is dropped,
    /// so an aborted search can't leave a trial value behind.
    pub fn slot(&mut self, index: usize) -> AdiabatSlot<'_> {
        let original = self.values[index];
        AdiabatSlot {
            vector: self,
            index,
            original,
            committed: false,
        }
    }
}

#[inline]
fn is_valid_adiabat(adiabat: Real) -> bool {
    adiabat > 0.0 && adiabat.is_finite()
}

pub struct AdiabatSlot<'a> {
    vector: &'a mut AdiabatVector,
    index: usize,
    original: Real,
    committed: bool,
}

impl<'a> AdiabatSlot<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value the entry had when the slot was acquired.
    pub fn original(&self) -> Real {
        self.original
    }

    /// Writes a trial value. Non-positive or non-finite values are rejected and leave the entry untouched.
    pub fn set(&mut self, adiabat: Real) -> Result<()> {
        if !is_valid_adiabat(adiabat) {
            return Err(Error::domain(format!(
                "trial adiabat {} for particle {} must be positive and finite",
                adiabat, self.index
            )));
        }
        self.vector.values[self.index] = adiabat;
        Ok(())
    }

    /// All entries, including the current trial value of this slot.
    pub fn values(&self) -> &[Real] {
        &self.vector.values
    }

    /// Keeps `adiabat` as the entry's value and releases the slot.
    pub fn commit(mut self, adiabat: Real) -> Result<()> {
        self.set(adiabat)?;
        self.committed = true;
        Ok(())
    }
}

impl<'a> Drop for AdiabatSlot<'a> {
    fn drop(&mut self) {
        if !self.committed {
            self.vector.values[self.index] = self.original;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_entries() {
        assert!(AdiabatVector::new(vec![1.0, 0.0]).is_err());
        assert!(AdiabatVector::new(vec![-1.0]).is_err());
        assert!(AdiabatVector::new(vec![Real::INFINITY]).is_err());
        assert!(AdiabatVector::new(vec![0.5, 2.0]).is_ok());
    }

    #[test]
    fn trial_values_are_visible_through_the_slot() {
        let mut adiabats = AdiabatVector::new(vec![1.0, 2.0, 3.0]).unwrap();
        let mut slot = adiabats.slot(1);
        slot.set(5.0).unwrap();
        assert_eq!(slot.values(), &[1.0, 5.0, 3.0]);
        assert_eq!(slot.original(), 2.0);
        assert_eq!(slot.index(), 1);
    }

    #[test]
    fn dropped_slot_rolls_back() {
        let mut adiabats = AdiabatVector::new(vec![1.0, 2.0, 3.0]).unwrap();
        {
            let mut slot = adiabats.slot(2);
            slot.set(7.0).unwrap();
            slot.set(8.0).unwrap();
        }
        assert_eq!(adiabats.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn committed_slot_keeps_value() {
        let mut adiabats = AdiabatVector::new(vec![1.0, 2.0, 3.0]).unwrap();
        let mut slot = adiabats.slot(0);
        slot.set(9.0).unwrap();
        slot.commit(4.0).unwrap();
        assert_eq!(adiabats.as_slice(), &[4.0, 2.0, 3.0]);
    }

    #[test]
    fn invalid_trial_value_is_rejected() {
        let mut adiabats = AdiabatVector::new(vec![1.0, 2.0]).unwrap();
        {
            let mut slot = adiabats.slot(0);
            assert!(matches!(slot.set(-1.0), Err(Error::NumericDomain(_))));
            assert_eq!(slot.values(), &[1.0, 2.0]);
            assert!(slot.commit(0.0).is_err());
        }
        assert_eq!(adiabats.as_slice(), &[1.0, 2.0]);
    }
}
