//! Effect boiling temperatures.

use std::ops::Index;

use uom::{
    ConstZero,
    si::f64::{TemperatureInterval, ThermodynamicTemperature},
};

use crate::{models::desalination::plant::PlantParameters, support::units::TemperatureDifference};

/// Boiling temperatures of each effect, hottest first.
///
/// The usable span `(T_steam - T_cw) - n·BPE` is split evenly across `n + 1`
/// intervals, one per effect plus one for the end condenser.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TemperatureLadder {
    temperatures: Vec<ThermodynamicTemperature>,
}

impl TemperatureLadder {
    pub(super) fn new(params: &PlantParameters) -> Self {
        let n = params.effect_count();
        let bpe = params.boiling_point_elevation.into_inner();

        #[allow(clippy::cast_precision_loss)]
        let intervals = n as f64;

        let span = params
            .steam_temperature
            .minus(params.cooling_water_temperature);
        let step = (span - bpe * intervals) / (intervals + 1.0);

        if step <= TemperatureInterval::ZERO {
            log::warn!("MED temperature ladder has no driving force: step={step:?}");
        }

        let temperatures = (1..=n)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let k = k as f64;
                params.steam_temperature - step * k - bpe
            })
            .collect();

        Self { temperatures }
    }

    pub(super) fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.temperatures.iter().copied()
    }
}

impl Index<usize> for TemperatureLadder {
    type Output = ThermodynamicTemperature;

    fn index(&self, index: usize) -> &Self::Output {
        &self.temperatures[index]
    }
}
