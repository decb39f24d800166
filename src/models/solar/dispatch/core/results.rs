//! Hourly and daily dispatch outputs.

use uom::{
    ConstZero,
    si::f64::{Energy, HeatFluxDensity, Mass, MassRate, Power, Time},
};

use super::OperatingMode;

/// Outcome of one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    /// Hour label copied from the input sample.
    pub hour: u32,

    /// Irradiance on the collector field.
    pub irradiance: HeatFluxDensity,

    /// Useful solar power collected, whether used or stored.
    pub solar_power: Power,

    /// Heat delivered to the plant.
    pub delivered: Power,

    /// Energy held in the store at the end of the step.
    pub storage: Energy,

    /// Distillate production rate during the step.
    pub distillate_rate: MassRate,

    pub mode: OperatingMode,
}

/// Totals and hourly trace of one dispatch run.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyResults {
    /// Distillate produced over the run.
    pub daily_distillate: Mass,

    /// Nominal load of the plant being dispatched.
    pub nominal_load: Power,

    /// Solar energy collected over the run, including any spilled.
    pub solar_collection: Energy,

    /// Duration of each step.
    pub time_step: Time,

    /// One record per input sample, in input order.
    pub hourly: Vec<HourlyRecord>,
}

impl DailyResults {
    /// Heat delivered to the plant over the run.
    #[must_use]
    pub fn energy_delivered(&self) -> Energy {
        self.hourly.iter().fold(Energy::ZERO, |total, record| {
            total + record.delivered * self.time_step
        })
    }

    /// Equivalent hours of full-load operation.
    ///
    /// Zero when the nominal load is zero.
    #[must_use]
    pub fn operating_hours(&self) -> Time {
        if self.nominal_load > Power::ZERO {
            self.energy_delivered() / self.nominal_load
        } else {
            Time::ZERO
        }
    }
}
