//! Backward allocation of vapor to the feed preheater train.

use uom::{
    ConstZero,
    si::f64::{MassRate, Power, ThermodynamicTemperature},
};

use crate::{
    models::desalination::plant::PlantParameters,
    support::{seawater, units::TemperatureDifference},
};

use super::ladder::TemperatureLadder;

/// Vapor requested from each effect to preheat the raw feed.
///
/// Entry `i` is the vapor drawn from effect `i` to lift the feed to its
/// target before the preheat stage of effect `i + 1`. There are `n - 1`
/// entries for an `n`-effect plant.
///
/// These are demands computed before the forward balance. The vapor actually
/// diverted from an effect never exceeds what that effect produces; see
/// [`EffectState::preheat_vapor`](super::EffectState::preheat_vapor).
#[derive(Debug, Clone, PartialEq)]
pub struct PreheatAllocation {
    extractions: Vec<MassRate>,
    feed_temperature: ThermodynamicTemperature,
}

impl PreheatAllocation {
    /// Walks the preheater train from the last effect back to the second.
    ///
    /// Each stage lifts the full feed flow to `T_effect[i] - TTD` using vapor
    /// condensed from effect `i - 1`. Stages whose target is not above the
    /// current feed temperature draw nothing.
    pub(super) fn new(params: &PlantParameters, ladder: &TemperatureLadder) -> Self {
        let n = ladder.len();
        let feed_flow = params.feed_flow.into_inner();
        let salinity = params.feed_salinity.into_inner();
        let ttd = params.preheater_ttd.into_inner();

        let mut extractions = vec![MassRate::ZERO; n.saturating_sub(1)];
        let mut feed_temperature = params.feed_temperature;

        for i in (1..n).rev() {
            let target = ladder[i] - ttd;
            if target <= feed_temperature {
                continue;
            }

            let cp = seawater::specific_heat(feed_temperature.midpoint(target), salinity);
            let q_dot: Power = feed_flow * cp * target.minus(feed_temperature);
            extractions[i - 1] = q_dot / seawater::latent_heat(ladder[i - 1]);
            feed_temperature = target;
        }

        Self {
            extractions,
            feed_temperature,
        }
    }

    /// Vapor requested from each effect, indexed by source effect.
    #[must_use]
    pub fn extractions(&self) -> &[MassRate] {
        &self.extractions
    }

    /// Vapor requested from effect `index`, zero for the last effect.
    #[must_use]
    pub fn from_effect(&self, index: usize) -> MassRate {
        self.extractions
            .get(index)
            .copied()
            .unwrap_or(MassRate::ZERO)
    }

    /// Feed temperature leaving the preheater train, entering the first effect.
    #[must_use]
    pub fn feed_temperature(&self) -> ThermodynamicTemperature {
        self.feed_temperature
    }

    /// Total vapor requested across all stages.
    #[must_use]
    pub fn total(&self) -> MassRate {
        self.extractions
            .iter()
            .fold(MassRate::ZERO, |total, &m_dot| total + m_dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::TemperatureInterval, mass_rate::kilogram_per_second,
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::desalination::plant::test_support::reference_parameters,
        support::constraint::{NonNegative, StrictlyPositive},
    };

    #[test]
    fn reference_train() {
        let params = reference_parameters();
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);

        let expected = [
            0.154_728, 0.150_024, 0.145_499, 0.141_151, 0.136_976, 0.132_971, 0.105_383,
        ];
        assert_eq!(preheat.extractions().len(), expected.len());
        for (m_dot, expected) in preheat.extractions().iter().zip(expected) {
            assert_relative_eq!(m_dot.get::<kilogram_per_second>(), expected, epsilon = 1e-6);
        }
        assert_relative_eq!(preheat.from_effect(7).get::<kilogram_per_second>(), 0.0);
        assert_relative_eq!(
            preheat.total().get::<kilogram_per_second>(),
            0.966_732,
            epsilon = 1e-6
        );

        // Feed leaves the train one TTD below the second effect.
        assert_relative_eq!(
            preheat.feed_temperature().get::<degree_celsius>(),
            ladder[1].get::<degree_celsius>() - 1.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn warm_feed_skips_preheating() {
        let params = PlantParameters {
            preheater_ttd: NonNegative::new(TemperatureInterval::new::<delta_kelvin>(40.0))
                .unwrap(),
            ..reference_parameters()
        };
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);

        assert!(preheat.extractions().iter().all(|m| *m == MassRate::ZERO));
        assert_eq!(preheat.feed_temperature(), params.feed_temperature);
    }

    #[test]
    fn single_effect_has_no_stages() {
        let params = PlantParameters {
            effects: StrictlyPositive::new(1).unwrap(),
            ..reference_parameters()
        };
        let ladder = TemperatureLadder::new(&params);
        let preheat = PreheatAllocation::new(&params, &ladder);

        assert!(preheat.extractions().is_empty());
        assert_eq!(preheat.total(), MassRate::ZERO);
        assert_eq!(preheat.feed_temperature(), params.feed_temperature);
    }
}
