//! Forward mass, salt, energy and area balance across the effects.

use uom::{
    ConstZero,
    si::{
        f64::{
            Area, HeatFluxDensity, MassRate, Power, TemperatureInterval, ThermodynamicTemperature,
        },
        mass_rate::kilogram_per_second,
    },
};

use crate::{
    models::desalination::plant::PlantParameters,
    support::{seawater, units::TemperatureDifference},
};

use super::{EffectState, PreheatAllocation, ladder::TemperatureLadder};

/// Brine flow (kg/s) below which salinity is carried through unchanged.
pub(super) const BRINE_FLOW_EPSILON: f64 = 1e-6;

/// Solves each effect in order, hottest first, for a fixed steam supply.
///
/// Effect 0 condenses the external steam. Every later effect condenses the
/// vapor of its predecessor less what the predecessor diverted to the feed
/// preheater. Brine from each effect becomes the feed of the next.
///
/// Degenerate conditions never fail: a heat deficit yields zero evaporation,
/// surplus heat evaporates at most the whole feed, and a non-positive driving
/// temperature difference yields zero area.
pub(super) fn forward_pass(
    params: &PlantParameters,
    steam_flow: MassRate,
    ladder: &TemperatureLadder,
    preheat: &PreheatAllocation,
) -> Vec<EffectState> {
    let bpe = params.boiling_point_elevation.into_inner();
    let mut effects: Vec<EffectState> = Vec::with_capacity(ladder.len());

    let mut feed_flow = params.feed_flow.into_inner();
    let mut feed_salinity = params.feed_salinity.into_inner();

    for (index, temperature) in ladder.iter().enumerate() {
        let (heat_input, feed_temperature, driving_delta_t): (
            Power,
            ThermodynamicTemperature,
            TemperatureInterval,
        ) = match effects.last() {
            None => (
                steam_flow * seawater::latent_heat(params.steam_temperature),
                preheat.feed_temperature(),
                params.steam_temperature.minus(temperature) - bpe,
            ),
            Some(previous) => (
                previous.heating_vapor() * seawater::latent_heat(previous.temperature),
                previous.temperature,
                previous.temperature.minus(temperature) - bpe,
            ),
        };

        let cp = seawater::specific_heat(feed_temperature, feed_salinity);
        let sensible_heat: Power = feed_flow * cp * temperature.minus(feed_temperature);
        let sensible_heat = sensible_heat.max(Power::ZERO);

        let evaporation: MassRate =
            ((heat_input - sensible_heat) / seawater::latent_heat(temperature)).max(MassRate::ZERO);
        if heat_input < sensible_heat {
            log::warn!(
                "MED effect {index}: heat input {heat_input:?} below sensible demand {sensible_heat:?}, no evaporation"
            );
        }
        let vapor_flow = evaporation.min(feed_flow);
        if evaporation > feed_flow {
            log::warn!(
                "MED effect {index}: evaporation {evaporation:?} exceeds feed {feed_flow:?}, brine dries out"
            );
        }
        let preheat_vapor = vapor_flow.min(preheat.from_effect(index));

        let brine_flow = feed_flow - vapor_flow;
        let brine_salinity = if brine_flow.get::<kilogram_per_second>() > BRINE_FLOW_EPSILON {
            feed_flow * feed_salinity / brine_flow
        } else {
            feed_salinity
        };

        let area = if driving_delta_t > TemperatureInterval::ZERO {
            let flux: HeatFluxDensity =
                seawater::heat_transfer_coefficient(temperature) * driving_delta_t;
            heat_input / flux
        } else {
            log::warn!(
                "MED effect {index}: non-positive driving temperature difference {driving_delta_t:?}"
            );
            Area::ZERO
        };

        let effect = EffectState {
            temperature,
            feed_temperature,
            feed_flow,
            feed_salinity,
            heat_input,
            vapor_flow,
            preheat_vapor,
            brine_flow,
            brine_salinity,
            area,
        };
        log::debug!("MED effect {index}: {effect:?}");
        effects.push(effect);

        feed_flow = brine_flow;
        feed_salinity = brine_salinity;
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, power::kilowatt, ratio::part_per_million,
        thermodynamic_temperature::degree_celsius,
    };

    use uom::si::{f64::Ratio, ratio::ratio};

    use crate::models::desalination::{
        med::core::DesignTargets, plant::test_support::reference_parameters,
    };

    fn reference_effects() -> Vec<EffectState> {
        let params = reference_parameters();
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);
        let steam_flow = DesignTargets::default().steam_flow(params.feed_flow.into_inner());
        forward_pass(&params, steam_flow, &ladder, &preheat)
    }

    #[test]
    fn reference_vapor_and_area_profile() {
        let effects = reference_effects();
        assert_eq!(effects.len(), 8);

        let vapor = [0.491_129, 0.334_789, 0.183_888, 0.038_208, 0.0, 0.0, 0.0, 0.0];
        let area = [73.901_95, 44.649_12, 25.781_71, 5.643_48, 0.0, 0.0, 0.0, 0.0];
        for ((effect, vapor), area) in effects.iter().zip(vapor).zip(area) {
            assert_relative_eq!(
                effect.vapor_flow.get::<kilogram_per_second>(),
                vapor,
                epsilon = 1e-6
            );
            assert_relative_eq!(effect.area.get::<square_meter>(), area, epsilon = 1e-4);
        }
    }

    #[test]
    fn first_effect_is_fed_from_the_preheater_train() {
        let effects = reference_effects();

        assert_relative_eq!(
            effects[0].feed_temperature.get::<degree_celsius>(),
            effects[1].temperature.get::<degree_celsius>() - 1.5,
            epsilon = 1e-9
        );
        for pair in effects.windows(2) {
            assert_eq!(pair[1].feed_temperature, pair[0].temperature);
        }
    }

    #[test]
    fn conserves_mass_and_salt() {
        for effect in reference_effects() {
            assert_relative_eq!(
                effect.feed_flow.get::<kilogram_per_second>(),
                (effect.brine_flow + effect.vapor_flow).get::<kilogram_per_second>(),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                (effect.feed_flow * effect.feed_salinity).get::<kilogram_per_second>(),
                (effect.brine_flow * effect.brine_salinity).get::<kilogram_per_second>(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn brine_cascades_forward() {
        let effects = reference_effects();
        for pair in effects.windows(2) {
            assert_eq!(pair[1].feed_flow, pair[0].brine_flow);
            assert_eq!(pair[1].feed_salinity, pair[0].brine_salinity);
        }
        assert_relative_eq!(
            effects[7].brine_salinity.get::<part_per_million>(),
            43_520.33,
            epsilon = 1e-2
        );
    }

    #[test]
    fn preheat_draw_is_capped_by_vapor_produced() {
        let effects = reference_effects();
        for effect in &effects {
            assert!(effect.preheat_vapor <= effect.vapor_flow);
            assert!(effect.heating_vapor() >= MassRate::ZERO);
        }
        // Effects 4-6 produce nothing, so their preheat demand goes unmet.
        assert_eq!(effects[5].preheat_vapor, MassRate::ZERO);
        assert_eq!(effects[6].heat_input, Power::ZERO);
    }

    #[test]
    fn no_steam_means_no_evaporation() {
        let params = reference_parameters();
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);
        let effects = forward_pass(&params, MassRate::ZERO, &ladder, &preheat);

        for effect in &effects {
            assert_eq!(effect.vapor_flow, MassRate::ZERO);
            assert_eq!(effect.area, Area::ZERO);
            assert_eq!(effect.brine_flow, effect.feed_flow);
        }
        assert_relative_eq!(effects[0].heat_input.get::<kilowatt>(), 0.0);
    }

    #[test]
    fn surplus_steam_dries_out_the_brine() {
        // Twice the feed flow in steam, far more heat than the feed can absorb.
        let params = reference_parameters();
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);
        let targets = DesignTargets::new(Ratio::new::<ratio>(1.0), 0.5).unwrap();
        let steam_flow = targets.steam_flow(params.feed_flow.into_inner());
        let effects = forward_pass(&params, steam_flow, &ladder, &preheat);

        let first = effects[0];
        assert_eq!(first.vapor_flow, first.feed_flow);
        assert_eq!(first.brine_flow, MassRate::ZERO);
        assert_eq!(first.brine_salinity, first.feed_salinity);

        for effect in &effects {
            assert!(effect.vapor_flow >= MassRate::ZERO);
            assert!(effect.brine_flow >= MassRate::ZERO);
            assert!(effect.vapor_flow <= effect.feed_flow);
            assert_eq!(effect.brine_salinity, params.feed_salinity.into_inner());
        }
        for effect in &effects[1..] {
            assert_eq!(effect.feed_flow, MassRate::ZERO);
            assert_eq!(effect.vapor_flow, MassRate::ZERO);
        }
    }
}
