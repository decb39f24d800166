//! Hourly dispatch of solar heat and stored energy to a desalination plant.
//!
//! The run is a sequential fold: each step takes the storage level left by the
//! previous one, so steps cannot be reordered or evaluated independently.

mod config;
mod irradiance;
mod mode;
mod results;
mod setpoint;
mod simulate;
mod step;
mod storage;

pub use config::DispatchConfig;
pub use irradiance::HourlyIrradiance;
pub use mode::OperatingMode;
pub use results::{DailyResults, HourlyRecord};
pub use setpoint::DispatchSetpoint;
pub use step::dispatch_step;
pub use storage::StorageState;

pub(super) use simulate::simulate;
