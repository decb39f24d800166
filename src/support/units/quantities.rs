use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
///
/// Also used for latent heat of vaporization.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heat-transfer area per unit mass flow rate, m²·s/kg in SI.
///
/// The MED specific area (total evaporator area per unit distillate rate).
pub type SpecificArea = Quantity<ISQ<P2, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
