use uom::si::{
    f64::{Ratio, Time},
    ratio::ratio,
    time::hour,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitInterval};

/// Simulation settings for the dispatch fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchConfig {
    time_step: Time,
    initial_state_of_charge: Ratio,
}

impl DispatchConfig {
    /// Constructs a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the time step is not strictly positive or the
    /// initial state of charge lies outside `[0, 1]`.
    pub fn new(time_step: Time, initial_state_of_charge: Ratio) -> ConstraintResult<Self> {
        let time_step = Constrained::<Time, StrictlyPositive>::new(time_step)?;
        let initial_state_of_charge =
            Constrained::<Ratio, UnitInterval>::new(initial_state_of_charge)?;
        Ok(Self {
            time_step: time_step.into_inner(),
            initial_state_of_charge: initial_state_of_charge.into_inner(),
        })
    }

    /// Duration covered by each irradiance sample.
    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    /// Fraction of storage capacity held at the start of the run.
    #[must_use]
    pub fn initial_state_of_charge(&self) -> Ratio {
        self.initial_state_of_charge
    }
}

/// Hourly steps starting from a half-full store.
impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<hour>(1.0),
            initial_state_of_charge: Ratio::new::<ratio>(0.5),
        }
    }
}
