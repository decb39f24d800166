//! Extensions to [`uom`].
//!
//! Every physical value in this crate is a [`uom`] quantity. This module fills
//! the gaps the models run into.
//!
//! ## Temperature differences
//!
//! Subtracting two [`ThermodynamicTemperature`]s in [`uom`] yields another
//! absolute temperature. [`TemperatureDifference::minus`] yields the interval
//! instead, which is what driving forces and temperature spans need:
//!
//! ```
//! use twine_desal::support::units::TemperatureDifference;
//! use uom::si::{
//!     f64::ThermodynamicTemperature, temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let steam = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! let cooling_water = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let span = steam.minus(cooling_water);
//! assert!((span.get::<kelvin>() - 50.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//!
//! ## Quantity aliases
//!
//! [`SpecificEnthalpy`] (J/kg) carries latent heats, and [`SpecificArea`]
//! (m²·s/kg) carries evaporator area per unit distillate rate.

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificArea, SpecificEnthalpy};
pub use temperature_difference::TemperatureDifference;
