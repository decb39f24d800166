//! Steady-state thermal and mass balance of a forward-feed MED plant.
//!
//! The solve is a direct forward calculation in three sequenced phases:
//!
//! 1. Lay out the effect boiling temperatures (the ladder).
//! 2. Walk the preheater train backward from the last effect to allocate
//!    vapor for lifting the raw feed.
//! 3. Balance mass, salt, energy and area forward from the first effect with
//!    a steam supply fixed by the [`DesignTargets`].
//!
//! Phase 3 depends on the complete output of phase 2, so the two passes are
//! never merged.

mod balance;
mod effect;
mod ladder;
mod preheat;
mod results;
mod solve;
mod targets;

pub use effect::EffectState;
pub use preheat::PreheatAllocation;
pub use results::SteadyStateResult;
pub use targets::DesignTargets;

pub(super) use solve::solve;
