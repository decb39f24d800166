//! Solves an eight-effect MED design point and dispatches it through one
//! clear day of solar irradiance.
//!
//! Run with `cargo run --example solar_med_day`.

use std::error::Error;

use twine_core::Model;
use twine_desal::{
    models::{
        desalination::{
            med::MedPlant,
            plant::{PlantParameters, SolarField},
        },
        solar::dispatch::{DispatchConfig, HourlyIrradiance, SolarDispatch},
    },
    support::constraint::{NonNegative, StrictlyPositive, UnitInterval},
};
use uom::si::{
    area::square_meter,
    energy::{gigajoule, kilowatt_hour, megawatt_hour},
    f64::{
        Area, Energy, HeatFluxDensity, MassRate, Ratio, TemperatureInterval,
        ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    mass::kilogram,
    mass_rate::kilogram_per_second,
    power::megawatt,
    ratio::{part_per_million, percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

/// Irradiance on the collector plane in W/m², one value per hour from midnight.
const CLEAR_DAY: [f64; 24] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 300.0, 500.0, 700.0, 800.0, 800.0, 800.0, 800.0, 750.0,
    600.0, 400.0, 200.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

fn main() -> Result<(), Box<dyn Error>> {
    let params = PlantParameters {
        effects: StrictlyPositive::new(8)?,
        steam_temperature: ThermodynamicTemperature::new::<degree_celsius>(70.0),
        feed_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        cooling_water_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        feed_flow: StrictlyPositive::new(MassRate::new::<kilogram_per_second>(30.0))?,
        feed_salinity: NonNegative::new(Ratio::new::<part_per_million>(42_000.0))?,
        boiling_point_elevation: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(0.8))?,
        preheater_ttd: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(1.5))?,
        solar: SolarField {
            collector_area: NonNegative::new(Area::new::<square_meter>(10_000.0))?,
            efficiency: UnitInterval::new(Ratio::new::<ratio>(0.7))?,
            storage_capacity: NonNegative::new(Energy::new::<kilowatt_hour>(50_000.0))?,
        },
    };

    let design = MedPlant::default().call(&params)?;

    let samples = CLEAR_DAY
        .iter()
        .zip(0..)
        .map(|(&w_m2, label)| {
            HourlyIrradiance::new(label, HeatFluxDensity::new::<watt_per_square_meter>(w_m2))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let dispatch = SolarDispatch::from_steady_state(&params, &design, DispatchConfig::default());
    let day = dispatch.call(&samples)?;

    println!("{}-effect forward-feed MED", params.effect_count());
    println!(
        "  collector field     {:>10.0} m²",
        params.solar.collector_area.into_inner().get::<square_meter>()
    );
    println!(
        "  storage capacity    {:>10.0} kWh",
        params.solar.storage_capacity.into_inner().get::<kilowatt_hour>()
    );

    println!("\nDesign point");
    println!("  GOR                 {:>10.2}", design.gor);
    println!(
        "  specific area       {:>10.2} m²/(kg/s)",
        design.specific_area.value
    );
    println!(
        "  nominal load        {:>10.2} MW",
        design.nominal_load.get::<megawatt>()
    );
    println!(
        "  distillate          {:>10.2} kg/s",
        design.distillate_flow.get::<kilogram_per_second>()
    );
    println!(
        "  recovery ratio      {:>10.2} %",
        design.recovery_ratio.get::<percent>()
    );
    println!(
        "  brine salinity      {:>10.0} ppm",
        design.final_brine_salinity.get::<part_per_million>()
    );
    println!(
        "  top temperature     {:>10.1} °C",
        design.top_temperature.get::<degree_celsius>()
    );
    println!(
        "  total area          {:>10.1} m²",
        design.total_area.get::<square_meter>()
    );

    println!("\nDaily operation");
    println!(
        "  distillate          {:>10.0} kg",
        day.daily_distillate.get::<kilogram>()
    );
    println!(
        "  solar collection    {:>10.2} GJ",
        day.solar_collection.get::<gigajoule>()
    );
    println!(
        "  operating hours     {:>10.1} h",
        day.operating_hours().get::<hour>()
    );

    println!("\nhour  W/m²   heat MW  storage MWh  distillate kg/s  mode");
    for record in &day.hourly {
        println!(
            "{:>4} {:>5.0} {:>9.2} {:>12.2} {:>16.3}  {}",
            record.hour,
            record.irradiance.get::<watt_per_square_meter>(),
            record.delivered.get::<megawatt>(),
            record.storage.get::<megawatt_hour>(),
            record.distillate_rate.get::<kilogram_per_second>(),
            record.mode,
        );
    }

    Ok(())
}
