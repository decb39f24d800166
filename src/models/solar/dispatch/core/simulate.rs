use uom::{
    ConstZero,
    si::f64::{Energy, Mass},
};

use crate::models::desalination::plant::SolarField;

use super::{
    DailyResults, DispatchConfig, DispatchSetpoint, HourlyIrradiance, StorageState, dispatch_step,
};

/// Folds [`dispatch_step`] over the samples in order.
pub(in crate::models::solar::dispatch) fn simulate(
    setpoint: &DispatchSetpoint,
    field: &SolarField,
    config: &DispatchConfig,
    samples: &[HourlyIrradiance],
) -> DailyResults {
    let time_step = config.time_step();
    let mut storage = StorageState::filled(
        field.storage_capacity.into_inner(),
        config.initial_state_of_charge(),
    );

    let mut hourly = Vec::with_capacity(samples.len());
    let mut daily_distillate = Mass::ZERO;
    let mut solar_collection = Energy::ZERO;

    for sample in samples {
        let (next, record) = dispatch_step(setpoint, field, storage, sample, time_step);
        daily_distillate += record.distillate_rate * time_step;
        solar_collection += record.solar_power * time_step;
        hourly.push(record);
        storage = next;
    }

    DailyResults {
        daily_distillate,
        nominal_load: setpoint.nominal_load(),
        solar_collection,
        time_step,
        hourly,
    }
}
