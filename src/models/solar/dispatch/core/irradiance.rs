use uom::si::f64::HeatFluxDensity;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// One irradiance sample of the dispatch input sequence.
///
/// The hour label is carried through to the output unchanged. Neither its
/// range nor the ordering of samples is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyIrradiance {
    hour: u32,
    irradiance: HeatFluxDensity,
}

impl HourlyIrradiance {
    /// Constructs a sample with validated irradiance.
    ///
    /// # Errors
    ///
    /// Returns an error if the irradiance is negative or not a number.
    pub fn new(hour: u32, irradiance: HeatFluxDensity) -> ConstraintResult<Self> {
        let irradiance = Constrained::<HeatFluxDensity, NonNegative>::new(irradiance)?;
        Ok(Self::from_constrained(hour, irradiance))
    }

    /// Constructs a sample from pre-validated irradiance.
    #[must_use]
    pub fn from_constrained(
        hour: u32,
        irradiance: Constrained<HeatFluxDensity, NonNegative>,
    ) -> Self {
        Self {
            hour,
            irradiance: irradiance.into_inner(),
        }
    }

    /// Returns the hour label.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the global irradiance on the collector plane.
    #[must_use]
    pub fn irradiance(&self) -> HeatFluxDensity {
        self.irradiance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::heat_flux_density::watt_per_square_meter;

    #[test]
    fn rejects_negative_irradiance() {
        let w_m2 = HeatFluxDensity::new::<watt_per_square_meter>;

        assert!(HourlyIrradiance::new(12, w_m2(800.0)).is_ok());
        assert!(HourlyIrradiance::new(0, w_m2(0.0)).is_ok());
        assert!(HourlyIrradiance::new(3, w_m2(-1.0)).is_err());
        assert!(HourlyIrradiance::new(3, w_m2(f64::NAN)).is_err());
    }
}
