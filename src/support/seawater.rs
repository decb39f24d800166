//! Property correlations for saline water in MED evaporators.
//!
//! All correlations are polynomial fits evaluated in °C (and salinity in
//! parts per thousand). They are calibrated for the typical seawater MED
//! operating range, roughly 20–80 °C, and no bounds are enforced outside it.
//!
//! # Example
//!
//! ```
//! use twine_desal::support::seawater;
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::ThermodynamicTemperature,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let steam = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! let h_fg = seawater::latent_heat(steam);
//! assert!((h_fg.get::<kilojoule_per_kilogram>() - 2338.18).abs() < 0.01);
//! ```

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{HeatTransfer, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    ratio::part_per_million,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

/// Latent heat of vaporization of water.
///
/// Cubic fit in temperature, monotonically decreasing over the MED range.
#[must_use]
pub fn latent_heat(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    let t = temperature.get::<degree_celsius>();
    let h_fg = 2.501e6 - 2.369e3 * t + 1.676 * t.powi(2) - 1.517e-2 * t.powi(3);
    SpecificEnthalpy::new::<joule_per_kilogram>(h_fg)
}

/// Specific heat capacity of saline water.
///
/// The salinity term is linear in parts per thousand with a
/// temperature-dependent slope.
#[must_use]
pub fn specific_heat(temperature: ThermodynamicTemperature, salinity: Ratio) -> SpecificHeatCapacity {
    let t = temperature.get::<degree_celsius>();
    let s = salinity.get::<part_per_million>() / 1000.0;
    let cp = 4187.0 - 7.55 * t + 0.046 * t.powi(2) + s * (-54.6 + 0.38 * t);
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp)
}

/// Overall heat transfer coefficient of a falling-film evaporator tube bundle.
#[must_use]
pub fn heat_transfer_coefficient(temperature: ThermodynamicTemperature) -> HeatTransfer {
    let t = temperature.get::<degree_celsius>();
    HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0 + 40.0 * t)
}
