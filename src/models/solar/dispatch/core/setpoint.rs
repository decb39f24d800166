use uom::{
    ConstZero,
    si::f64::{MassRate, Power, ThermodynamicTemperature},
};

use crate::{
    models::desalination::med::SteadyStateResult,
    support::{
        constraint::{Constrained, ConstraintResult, NonNegative},
        seawater,
    },
};

/// Plant operating point the dispatcher tries to sustain.
///
/// The GOR is held fixed at part load, so the distillate rate scales
/// linearly with the heat delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchSetpoint {
    nominal_load: Power,
    gor: f64,
    steam_temperature: ThermodynamicTemperature,
}

impl DispatchSetpoint {
    /// Constructs a setpoint from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if the nominal load or GOR is negative or not a number.
    pub fn new(
        nominal_load: Power,
        gor: f64,
        steam_temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        let nominal_load = Constrained::<Power, NonNegative>::new(nominal_load)?;
        let gor = Constrained::<f64, NonNegative>::new(gor)?;
        Ok(Self {
            nominal_load: nominal_load.into_inner(),
            gor: gor.into_inner(),
            steam_temperature,
        })
    }

    /// Takes the nominal load, GOR and steam temperature of a solved design.
    #[must_use]
    pub fn from_steady_state(result: &SteadyStateResult) -> Self {
        Self {
            nominal_load: result.nominal_load,
            gor: result.gor,
            steam_temperature: result.steam_temperature,
        }
    }

    /// Heat the plant draws at full output.
    #[must_use]
    pub fn nominal_load(&self) -> Power {
        self.nominal_load
    }

    #[must_use]
    pub fn gor(&self) -> f64 {
        self.gor
    }

    #[must_use]
    pub fn steam_temperature(&self) -> ThermodynamicTemperature {
        self.steam_temperature
    }

    /// Distillate produced when `delivered` heat reaches the first effect.
    ///
    /// The heat is converted to an equivalent steam flow at the steam
    /// temperature and multiplied by the GOR.
    #[must_use]
    pub fn distillate_rate(&self, delivered: Power) -> MassRate {
        if delivered <= Power::ZERO || self.gor <= 0.0 {
            return MassRate::ZERO;
        }
        let steam: MassRate = delivered / seawater::latent_heat(self.steam_temperature);
        steam * self.gor
    }
}
