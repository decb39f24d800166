use uom::si::{
    area::square_meter,
    energy::kilowatt_hour,
    f64::{Area, Energy, MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    ratio::{part_per_million, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{NonNegative, StrictlyPositive, UnitInterval};

use super::{PlantParameters, SolarField};

/// Eight-effect seawater plant with a 10 000 m² field and 50 MWh store.
pub(crate) fn reference_parameters() -> PlantParameters {
    PlantParameters {
        effects: StrictlyPositive::new(8).unwrap(),
        steam_temperature: ThermodynamicTemperature::new::<degree_celsius>(70.0),
        feed_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        cooling_water_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        feed_flow: StrictlyPositive::new(MassRate::new::<kilogram_per_second>(30.0)).unwrap(),
        feed_salinity: NonNegative::new(Ratio::new::<part_per_million>(42_000.0)).unwrap(),
        boiling_point_elevation: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(0.8))
            .unwrap(),
        preheater_ttd: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(1.5)).unwrap(),
        solar: SolarField {
            collector_area: NonNegative::new(Area::new::<square_meter>(10_000.0)).unwrap(),
            efficiency: UnitInterval::new(Ratio::new::<ratio>(0.7)).unwrap(),
            storage_capacity: NonNegative::new(Energy::new::<kilowatt_hour>(50_000.0)).unwrap(),
        },
    }
}
