use uom::{
    ConstZero,
    si::f64::{Energy, Power, Time},
};

use crate::models::desalination::plant::SolarField;

use super::{DispatchSetpoint, HourlyIrradiance, HourlyRecord, OperatingMode, StorageState};

/// Advances the store by one step and records what the plant received.
///
/// Solar power goes to the plant first. A surplus charges the store, spilling
/// whatever exceeds its capacity. A shortfall is drawn from the store; if the
/// store cannot cover it, the plant runs at part load on what is left and the
/// store ends the step empty.
///
/// This is a pure function of its inputs, so a caller may checkpoint the
/// returned [`StorageState`] and resume a run later.
#[must_use]
pub fn dispatch_step(
    setpoint: &DispatchSetpoint,
    field: &SolarField,
    storage: StorageState,
    sample: &HourlyIrradiance,
    time_step: Time,
) -> (StorageState, HourlyRecord) {
    let nominal_load = setpoint.nominal_load();
    let solar_power = field.collected_power(sample.irradiance());
    let stored = storage.energy();

    let (mode, delivered, storage) = if solar_power >= nominal_load {
        let surplus: Energy = (solar_power - nominal_load) * time_step;
        (OperatingMode::SolarCharge, nominal_load, storage.charge(surplus))
    } else if solar_power > Power::ZERO {
        let deficit: Energy = (nominal_load - solar_power) * time_step;
        if stored >= deficit {
            (OperatingMode::SolarDraw, nominal_load, storage.draw(deficit))
        } else {
            let delivered: Power = solar_power + stored / time_step;
            (OperatingMode::SolarPartialDraw, delivered, storage.drain())
        }
    } else {
        let demand: Energy = nominal_load * time_step;
        if stored >= demand {
            (OperatingMode::StorageOnly, nominal_load, storage.draw(demand))
        } else if stored > Energy::ZERO {
            (OperatingMode::PartialStorage, stored / time_step, storage.drain())
        } else {
            (OperatingMode::Off, Power::ZERO, storage)
        }
    };

    let record = HourlyRecord {
        hour: sample.hour(),
        irradiance: sample.irradiance(),
        solar_power,
        delivered,
        storage: storage.energy(),
        distillate_rate: setpoint.distillate_rate(delivered),
        mode,
    };
    log::debug!("dispatch hour {}: {record:?}", record.hour);

    (storage, record)
}
