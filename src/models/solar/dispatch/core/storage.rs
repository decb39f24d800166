use uom::{
    ConstZero,
    si::{
        f64::{Energy, Ratio},
        ratio::ratio,
    },
};

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, NonNegative, UnitInterval,
};

/// Thermal energy held in the store, bounded to `[0, capacity]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageState {
    energy: Energy,
    capacity: Energy,
}

impl StorageState {
    /// Constructs a store holding `energy`.
    ///
    /// # Errors
    ///
    /// Returns an error if `energy` is negative, not a number, or above `capacity`.
    pub fn new(
        energy: Energy,
        capacity: Constrained<Energy, NonNegative>,
    ) -> ConstraintResult<Self> {
        let energy = Constrained::<Energy, NonNegative>::new(energy)?.into_inner();
        let capacity = capacity.into_inner();
        if energy > capacity {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self { energy, capacity })
    }

    /// Constructs a store filled to the given fraction of its capacity.
    #[must_use]
    pub fn with_state_of_charge(
        capacity: Constrained<Energy, NonNegative>,
        state_of_charge: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        Self::filled(capacity.into_inner(), state_of_charge.into_inner())
    }

    /// Fills a store of `capacity` to `fraction`, which must lie in `[0, 1]`.
    pub(super) fn filled(capacity: Energy, fraction: Ratio) -> Self {
        Self {
            energy: capacity * fraction.get::<ratio>(),
            capacity,
        }
    }

    /// Energy currently held.
    #[must_use]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    #[must_use]
    pub fn capacity(&self) -> Energy {
        self.capacity
    }

    /// Fraction of capacity currently held, zero for a store with no capacity.
    #[must_use]
    pub fn state_of_charge(&self) -> Ratio {
        if self.capacity > Energy::ZERO {
            self.energy / self.capacity
        } else {
            Ratio::ZERO
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.energy <= Energy::ZERO
    }

    /// Adds energy, spilling anything above capacity.
    pub(super) fn charge(self, energy: Energy) -> Self {
        Self {
            energy: (self.energy + energy).min(self.capacity),
            ..self
        }
    }

    /// Removes energy, never going below empty.
    pub(super) fn draw(self, energy: Energy) -> Self {
        Self {
            energy: (self.energy - energy).max(Energy::ZERO),
            ..self
        }
    }

    pub(super) fn drain(self) -> Self {
        Self {
            energy: Energy::ZERO,
            ..self
        }
    }
}
