//! Aggregate steady-state performance.

use uom::{
    ConstZero,
    si::{
        f64::{Area, MassRate, Power, Ratio, ThermodynamicTemperature},
        ratio::ratio,
    },
};

use crate::support::units::SpecificArea;

use super::{EffectState, PreheatAllocation};

/// Steady-state performance of a forward-feed MED plant.
///
/// Degenerate designs are reported, not rejected: a GOR or specific area of
/// zero signals that no distillate is produced at this design point.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateResult {
    /// Gained output ratio, total distillate per unit steam.
    pub gor: f64,

    /// Total evaporator area per unit distillate rate.
    pub specific_area: SpecificArea,

    /// Total distillate production rate.
    pub distillate_flow: MassRate,

    /// Heating steam consumption rate.
    pub steam_flow: MassRate,

    /// Heating steam temperature.
    pub steam_temperature: ThermodynamicTemperature,

    /// Thermal power drawn by the plant at its design point.
    pub nominal_load: Power,

    /// Sum of evaporator areas over all effects.
    pub total_area: Area,

    /// Fraction of the feed recovered as distillate.
    pub recovery_ratio: Ratio,

    /// Salinity of the brine rejected by the last effect.
    pub final_brine_salinity: Ratio,

    /// Boiling temperature of the first (hottest) effect.
    pub top_temperature: ThermodynamicTemperature,

    /// Solved effects, hottest first.
    pub effects: Vec<EffectState>,

    /// Preheater vapor demand from the backward pass.
    pub preheat: PreheatAllocation,
}

/// Inputs to [`SteadyStateResult::aggregate`] that are not carried by the effects.
pub(super) struct Operating {
    pub(super) feed_flow: MassRate,
    pub(super) steam_flow: MassRate,
    pub(super) steam_temperature: ThermodynamicTemperature,
    pub(super) nominal_load: Power,
}

impl SteadyStateResult {
    /// Rolls the solved effects up into plant-level metrics.
    ///
    /// Expects at least one effect.
    pub(super) fn aggregate(
        operating: Operating,
        effects: Vec<EffectState>,
        preheat: PreheatAllocation,
    ) -> Self {
        let distillate_flow = effects
            .iter()
            .fold(MassRate::ZERO, |total, effect| total + effect.vapor_flow);
        let total_area = effects
            .iter()
            .fold(Area::ZERO, |total, effect| total + effect.area);

        let gor = if operating.steam_flow > MassRate::ZERO {
            (distillate_flow / operating.steam_flow).get::<ratio>()
        } else {
            0.0
        };

        let specific_area: SpecificArea = if distillate_flow > MassRate::ZERO {
            total_area / distillate_flow
        } else {
            SpecificArea::ZERO
        };

        let recovery_ratio: Ratio = distillate_flow / operating.feed_flow;

        let top_temperature = effects[0].temperature;
        let final_brine_salinity = effects[effects.len() - 1].brine_salinity;

        Self {
            gor,
            specific_area,
            distillate_flow,
            steam_flow: operating.steam_flow,
            steam_temperature: operating.steam_temperature,
            nominal_load: operating.nominal_load,
            total_area,
            recovery_ratio,
            final_brine_salinity,
            top_temperature,
            effects,
            preheat,
        }
    }
}
