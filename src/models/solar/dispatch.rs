//! Solar field and thermal storage dispatch.
//!
//! [`SolarDispatch`] drives a plant at a fixed [`DispatchSetpoint`] from a
//! sequence of irradiance samples. Each step spends solar power first, then
//! stored energy, and banks any surplus. Distillate output follows the heat
//! actually delivered, with the GOR held at its design value.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_desal::models::{
//!     desalination::plant::SolarField,
//!     solar::dispatch::{DispatchConfig, DispatchSetpoint, HourlyIrradiance, SolarDispatch},
//! };
//! use twine_desal::support::constraint::{NonNegative, UnitInterval};
//! use uom::si::{
//!     area::square_meter,
//!     energy::kilowatt_hour,
//!     f64::{Area, Energy, HeatFluxDensity, Power, Ratio, ThermodynamicTemperature},
//!     heat_flux_density::watt_per_square_meter,
//!     power::kilowatt,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let setpoint = DispatchSetpoint::new(
//!     Power::new::<kilowatt>(1_600.0),
//!     1.5,
//!     ThermodynamicTemperature::new::<degree_celsius>(70.0),
//! )?;
//! let field = SolarField {
//!     collector_area: NonNegative::new(Area::new::<square_meter>(10_000.0))?,
//!     efficiency: UnitInterval::new(Ratio::new::<ratio>(0.7))?,
//!     storage_capacity: NonNegative::new(Energy::new::<kilowatt_hour>(50_000.0))?,
//! };
//! let dispatch = SolarDispatch::new(setpoint, field, DispatchConfig::default());
//!
//! let samples = [0.0, 350.0, 800.0]
//!     .into_iter()
//!     .zip(0..)
//!     .map(|(w_m2, label)| {
//!         HourlyIrradiance::new(label, HeatFluxDensity::new::<watt_per_square_meter>(w_m2))
//!     })
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let day = dispatch.call(&samples)?;
//! assert_eq!(day.hourly.len(), 3);
//! assert_eq!(day.hourly[2].mode.to_string(), "Solar + Charge");
//! # Ok(())
//! # }
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

use crate::models::desalination::{
    med::SteadyStateResult,
    plant::{PlantParameters, SolarField},
};

pub use self::core::{
    DailyResults, DispatchConfig, DispatchSetpoint, HourlyIrradiance, HourlyRecord,
    OperatingMode, StorageState, dispatch_step,
};

/// Dispatch simulator for a plant with a fixed operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDispatch {
    setpoint: DispatchSetpoint,
    field: SolarField,
    config: DispatchConfig,
}

impl SolarDispatch {
    /// Creates a simulator for the given operating point, field and settings.
    #[must_use]
    pub fn new(setpoint: DispatchSetpoint, field: SolarField, config: DispatchConfig) -> Self {
        Self {
            setpoint,
            field,
            config,
        }
    }

    /// Dispatches a solved design using the field described by its parameters.
    #[must_use]
    pub fn from_steady_state(
        params: &PlantParameters,
        design: &SteadyStateResult,
        config: DispatchConfig,
    ) -> Self {
        Self::new(
            DispatchSetpoint::from_steady_state(design),
            params.solar,
            config,
        )
    }

    /// Returns the operating point the plant is driven at.
    #[must_use]
    pub fn setpoint(&self) -> &DispatchSetpoint {
        &self.setpoint
    }

    /// Returns the collector field and storage sizing.
    #[must_use]
    pub fn field(&self) -> &SolarField {
        &self.field
    }

    /// Returns the simulation settings.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Runs the samples in order from the configured initial charge.
    #[must_use]
    pub fn simulate(&self, samples: &[HourlyIrradiance]) -> DailyResults {
        self::core::simulate(&self.setpoint, &self.field, &self.config, samples)
    }
}

impl Model for SolarDispatch {
    type Input = Vec<HourlyIrradiance>;
    type Output = DailyResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.simulate(input))
    }
}
