//! Design parameters for a solar-driven MED plant.

use uom::si::f64::{
    Area, Energy, HeatFluxDensity, MassRate, Power, Ratio, TemperatureInterval,
    ThermodynamicTemperature,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval};

#[cfg(test)]
pub(crate) mod test_support;

/// Immutable design point of a forward-feed MED plant and its solar field.
///
/// Sign and interval constraints are enforced by the [`Constrained`] fields.
/// Cross-field consistency (e.g. steam hotter than cooling water) is not
/// checked: the models degrade to zero contributions instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantParameters {
    /// Number of evaporator effects (at least one).
    pub effects: Constrained<usize, StrictlyPositive>,

    /// Heating steam temperature supplied to the first effect.
    pub steam_temperature: ThermodynamicTemperature,

    /// Raw seawater feed temperature before preheating.
    pub feed_temperature: ThermodynamicTemperature,

    /// Cooling water temperature at the end condenser.
    pub cooling_water_temperature: ThermodynamicTemperature,

    /// Seawater feed mass flow rate into the first effect.
    pub feed_flow: Constrained<MassRate, StrictlyPositive>,

    /// Seawater feed salinity.
    pub feed_salinity: Constrained<Ratio, NonNegative>,

    /// Boiling point elevation applied in every effect.
    pub boiling_point_elevation: Constrained<TemperatureInterval, NonNegative>,

    /// Terminal temperature difference of each feed preheater.
    pub preheater_ttd: Constrained<TemperatureInterval, NonNegative>,

    /// Solar collector field and thermal storage sizing.
    pub solar: SolarField,
}

impl PlantParameters {
    /// Returns the effect count.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.into_inner()
    }
}

/// Solar collector field with a thermal energy store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarField {
    /// Aperture area of the collector field.
    pub collector_area: Constrained<Area, NonNegative>,

    /// Fraction of incident irradiance delivered as useful heat.
    pub efficiency: Constrained<Ratio, UnitInterval>,

    /// Thermal energy storage capacity.
    pub storage_capacity: Constrained<Energy, NonNegative>,
}

impl SolarField {
    /// Useful thermal power collected under the given irradiance.
    #[must_use]
    pub fn collected_power(&self, irradiance: HeatFluxDensity) -> Power {
        irradiance * self.collector_area.into_inner() * self.efficiency.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, energy::kilowatt_hour, heat_flux_density::watt_per_square_meter,
        power::megawatt, ratio::ratio,
    };

    #[test]
    fn collected_power_scales_with_area_and_efficiency() {
        let field = SolarField {
            collector_area: NonNegative::new(Area::new::<square_meter>(10_000.0)).unwrap(),
            efficiency: UnitInterval::new(Ratio::new::<ratio>(0.7)).unwrap(),
            storage_capacity: NonNegative::new(Energy::new::<kilowatt_hour>(50_000.0)).unwrap(),
        };

        let noon = HeatFluxDensity::new::<watt_per_square_meter>(800.0);
        assert_relative_eq!(
            field.collected_power(noon).get::<megawatt>(),
            5.6,
            epsilon = 1e-12
        );

        let night = HeatFluxDensity::new::<watt_per_square_meter>(0.0);
        assert_relative_eq!(field.collected_power(night).get::<megawatt>(), 0.0);
    }
}
