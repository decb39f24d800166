use crate::{models::desalination::plant::PlantParameters, support::seawater};

use super::{
    DesignTargets, PreheatAllocation, SteadyStateResult, balance::forward_pass,
    ladder::TemperatureLadder, results::Operating,
};

/// Relative GOR drift from the design target that is reported as a warning.
const GOR_DRIFT_WARNING: f64 = 0.05;

/// Solves the steady-state balance for one design point.
///
/// The steam rate is set from the design targets, and the resulting GOR is
/// whatever the forward balance yields. It is not iterated to match the target.
pub(in crate::models::desalination::med) fn solve(
    params: &PlantParameters,
    targets: &DesignTargets,
) -> SteadyStateResult {
    let ladder = TemperatureLadder::new(params);
    let preheat = PreheatAllocation::new(params, &ladder);

    let feed_flow = params.feed_flow.into_inner();
    let steam_flow = targets.steam_flow(feed_flow);
    let effects = forward_pass(params, steam_flow, &ladder, &preheat);

    let operating = Operating {
        feed_flow,
        steam_flow,
        steam_temperature: params.steam_temperature,
        nominal_load: steam_flow * seawater::latent_heat(params.steam_temperature),
    };
    let result = SteadyStateResult::aggregate(operating, effects, preheat);

    let drift = (result.gor - targets.gor()) / targets.gor();
    if drift.abs() > GOR_DRIFT_WARNING {
        log::warn!(
            "MED balance yields GOR {:.3} against design target {:.3}",
            result.gor,
            targets.gor()
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::ConstZero;
    use uom::si::{
        area::square_meter,
        f64::{MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature},
        mass_rate::kilogram_per_second,
        power::megawatt,
        ratio::{part_per_million, percent, ratio},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::desalination::plant::test_support::reference_parameters,
        support::constraint::{NonNegative, StrictlyPositive},
    };

    #[test]
    fn reference_design_point() {
        let result = solve(&reference_parameters(), &DesignTargets::default());

        assert_relative_eq!(
            result.steam_flow.get::<kilogram_per_second>(),
            30.0 * 0.12 / 5.14,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            result.nominal_load.get::<megawatt>(),
            1.637_635,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            result.distillate_flow.get::<kilogram_per_second>(),
            1.048_014,
            epsilon = 1e-6
        );
        assert_relative_eq!(result.total_area.get::<square_meter>(), 149.976_27, epsilon = 1e-4);
        assert_relative_eq!(result.specific_area.value, 143.105_23, epsilon = 1e-4);
        assert_relative_eq!(result.recovery_ratio.get::<percent>(), 3.493_38, epsilon = 1e-5);
        assert_relative_eq!(
            result.final_brine_salinity.get::<part_per_million>(),
            43_520.33,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            result.top_temperature.get::<degree_celsius>(),
            64.355_56,
            epsilon = 1e-5
        );
        assert_eq!(result.effects.len(), 8);
        assert_eq!(result.preheat.extractions().len(), 7);
    }

    #[test]
    fn derived_gor_stays_in_regression_band() {
        // The steam rate assumes GOR 5.14, but the forward balance of the
        // reference ladder only recovers about 1.5. Guard the derived value.
        let result = solve(&reference_parameters(), &DesignTargets::default());
        assert!(
            (1.45..=1.55).contains(&result.gor),
            "GOR drifted to {}",
            result.gor
        );
        assert_relative_eq!(result.gor, 1.496_331, epsilon = 1e-6);
        assert_relative_eq!(
            result.gor,
            (result.distillate_flow / result.steam_flow).get::<ratio>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn repeated_solves_are_identical() {
        let params = reference_parameters();
        let targets = DesignTargets::default();
        assert_eq!(solve(&params, &targets), solve(&params, &targets));
    }

    #[test]
    fn zero_distillate_target_degrades_to_zero_metrics() {
        let targets = DesignTargets::new(Ratio::new::<ratio>(0.0), 5.14).unwrap();
        let result = solve(&reference_parameters(), &targets);

        assert_eq!(result.steam_flow, MassRate::ZERO);
        assert_relative_eq!(result.gor, 0.0);
        assert_relative_eq!(result.specific_area.value, 0.0);
        assert_relative_eq!(result.recovery_ratio.get::<ratio>(), 0.0);
        assert_relative_eq!(
            result.final_brine_salinity.get::<part_per_million>(),
            42_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn oversized_steam_target_recovers_at_most_the_feed() {
        let targets = DesignTargets::new(Ratio::new::<ratio>(1.0), 0.5).unwrap();
        let result = solve(&reference_parameters(), &targets);

        assert_relative_eq!(
            result.distillate_flow.get::<kilogram_per_second>(),
            30.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.recovery_ratio.get::<ratio>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            result.final_brine_salinity.get::<part_per_million>(),
            42_000.0,
            epsilon = 1e-6
        );
        for effect in &result.effects {
            assert!(effect.brine_flow >= MassRate::ZERO);
        }
    }

    #[test]
    fn collapsed_ladder_reports_zero_area() {
        // Steam barely above cooling water: BPE consumes the whole span.
        let params = PlantParameters {
            steam_temperature: ThermodynamicTemperature::new::<degree_celsius>(24.0),
            boiling_point_elevation: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(
                1.0,
            ))
            .unwrap(),
            ..reference_parameters()
        };
        let result = solve(&params, &DesignTargets::default());

        assert_relative_eq!(result.total_area.get::<square_meter>(), 0.0);
        for effect in &result.effects {
            assert!(effect.vapor_flow >= MassRate::ZERO);
            assert_eq!(effect.area.get::<square_meter>(), 0.0);
        }
    }

    #[test]
    fn single_effect_plant() {
        let params = PlantParameters {
            effects: StrictlyPositive::new(1).unwrap(),
            ..reference_parameters()
        };
        let result = solve(&params, &DesignTargets::default());

        assert_eq!(result.effects.len(), 1);
        assert!(result.preheat.extractions().is_empty());
        assert_relative_eq!(result.top_temperature.get::<degree_celsius>(), 44.6, epsilon = 1e-9);
        assert_relative_eq!(result.gor, 0.228_430, epsilon = 1e-6);
        assert_relative_eq!(
            result.distillate_flow.get::<kilogram_per_second>(),
            0.159_990,
            epsilon = 1e-6
        );
    }
}
