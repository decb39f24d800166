//! Forward-feed multi-effect distillation (MED).
//!
//! [`MedPlant`] is the [`twine_core::Model`] adapter for the steady-state
//! balance. The computation lives in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_desal::models::desalination::{
//!     med::MedPlant,
//!     plant::{PlantParameters, SolarField},
//! };
//! use twine_desal::support::constraint::{NonNegative, StrictlyPositive, UnitInterval};
//! use uom::si::{
//!     area::square_meter,
//!     energy::kilowatt_hour,
//!     f64::{Area, Energy, MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     ratio::{part_per_million, ratio},
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = PlantParameters {
//!     effects: StrictlyPositive::new(8)?,
//!     steam_temperature: ThermodynamicTemperature::new::<degree_celsius>(70.0),
//!     feed_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     cooling_water_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     feed_flow: StrictlyPositive::new(MassRate::new::<kilogram_per_second>(30.0))?,
//!     feed_salinity: NonNegative::new(Ratio::new::<part_per_million>(42_000.0))?,
//!     boiling_point_elevation: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(0.8))?,
//!     preheater_ttd: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(1.5))?,
//!     solar: SolarField {
//!         collector_area: NonNegative::new(Area::new::<square_meter>(10_000.0))?,
//!         efficiency: UnitInterval::new(Ratio::new::<ratio>(0.7))?,
//!         storage_capacity: NonNegative::new(Energy::new::<kilowatt_hour>(50_000.0))?,
//!     },
//! };
//!
//! let result = MedPlant::default().call(&params)?;
//! assert_eq!(result.effects.len(), 8);
//! assert!(result.gor > 0.0);
//! # Ok(())
//! # }
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

use super::plant::PlantParameters;

pub use self::core::{DesignTargets, EffectState, PreheatAllocation, SteadyStateResult};

/// Steady-state forward-feed MED model.
///
/// Holds the design targets that fix the steam consumption. Solving is a pure
/// function of the [`PlantParameters`]: repeated calls with the same input
/// return identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MedPlant {
    targets: DesignTargets,
}

impl MedPlant {
    /// Creates a model with the given design targets.
    #[must_use]
    pub fn new(targets: DesignTargets) -> Self {
        Self { targets }
    }

    /// Returns the design targets.
    #[must_use]
    pub fn targets(&self) -> DesignTargets {
        self.targets
    }

    /// Solves the steady-state balance for a design point.
    #[must_use]
    pub fn solve(&self, params: &PlantParameters) -> SteadyStateResult {
        self::core::solve(params, &self.targets)
    }
}

impl Model for MedPlant {
    type Input = PlantParameters;
    type Output = SteadyStateResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.solve(input))
    }
}
