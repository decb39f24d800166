use uom::si::{
    f64::{MassRate, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive, UnitInterval};

/// Design targets that fix the steam consumption before the balance runs.
///
/// Steam rate is set a priori as `feed × distillate_fraction / gor`.
/// The forward balance then reports the GOR the ladder actually achieves,
/// which is not forced to match [`DesignTargets::gor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTargets {
    distillate_fraction: Ratio,
    gor: f64,
}

impl DesignTargets {
    /// Default fraction of the feed recovered as distillate.
    pub const DISTILLATE_FRACTION: f64 = 0.12;

    /// Default target gained output ratio.
    pub const GOR: f64 = 5.14;

    /// Constructs validated design targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the distillate fraction lies outside `[0, 1]` or
    /// the target GOR is not strictly positive.
    pub fn new(distillate_fraction: Ratio, gor: f64) -> ConstraintResult<Self> {
        let distillate_fraction = Constrained::<Ratio, UnitInterval>::new(distillate_fraction)?;
        let gor = Constrained::<f64, StrictlyPositive>::new(gor)?;
        Ok(Self {
            distillate_fraction: distillate_fraction.into_inner(),
            gor: gor.into_inner(),
        })
    }

    /// Returns the target distillate fraction of the feed.
    #[must_use]
    pub fn distillate_fraction(&self) -> Ratio {
        self.distillate_fraction
    }

    /// Returns the target gained output ratio.
    #[must_use]
    pub fn gor(&self) -> f64 {
        self.gor
    }

    /// Steam consumption implied by these targets for the given feed flow.
    #[must_use]
    pub fn steam_flow(&self, feed_flow: MassRate) -> MassRate {
        feed_flow * self.distillate_fraction / self.gor
    }
}

impl Default for DesignTargets {
    fn default() -> Self {
        Self {
            distillate_fraction: Ratio::new::<ratio>(Self::DISTILLATE_FRACTION),
            gor: Self::GOR,
        }
    }
}
