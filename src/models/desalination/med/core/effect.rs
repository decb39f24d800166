use uom::si::f64::{Area, MassRate, Power, Ratio, ThermodynamicTemperature};

/// Solved state of a single evaporator effect.
///
/// Mass and salt are conserved across each effect:
/// `feed_flow = brine_flow + vapor_flow` and
/// `feed_flow · feed_salinity = brine_flow · brine_salinity`, except when the
/// brine flow is negligible, in which case the salinity is carried through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectState {
    /// Boiling temperature.
    pub temperature: ThermodynamicTemperature,

    /// Temperature of the feed entering the effect.
    pub feed_temperature: ThermodynamicTemperature,

    /// Feed mass flow entering the effect.
    pub feed_flow: MassRate,

    /// Salinity of the feed entering the effect.
    pub feed_salinity: Ratio,

    /// Heat released by the heating steam or vapor condensing in the tube bundle.
    pub heat_input: Power,

    /// Vapor generated by evaporation.
    pub vapor_flow: MassRate,

    /// Portion of the generated vapor diverted to the feed preheater.
    ///
    /// Never exceeds [`vapor_flow`](Self::vapor_flow).
    pub preheat_vapor: MassRate,

    /// Brine leaving the effect.
    pub brine_flow: MassRate,

    /// Salinity of the brine leaving the effect.
    pub brine_salinity: Ratio,

    /// Required evaporator heat-transfer area.
    pub area: Area,
}

impl EffectState {
    /// Vapor passed forward to heat the next effect.
    #[must_use]
    pub fn heating_vapor(&self) -> MassRate {
        self.vapor_flow - self.preheat_vapor
    }
}
