//! Validated numeric inputs.
//!
//! Plant and dispatch inputs that must satisfy a sign or range condition are
//! wrapped in [`Constrained<T, C>`], where `C` is a zero-sized marker type
//! implementing [`Constraint<T>`]. A value that reaches a model has already
//! been checked, so the models never re-validate it.
//!
//! Markers:
//!
//! - [`NonNegative`]: zero or greater (salinity, areas, storage capacity)
//! - [`StrictlyPositive`]: greater than zero (effect count, feed flow)
//! - [`UnitInterval`]: `0 ≤ x ≤ 1` (collector efficiency, state of charge)
//!
//! Each marker also has an associated `new()` shorthand, for example
//! `StrictlyPositive::new(8)`.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric condition checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies the condition.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_desal::support::constraint::{Constrained, ConstraintError, NonNegative};
/// use uom::si::{f64::Ratio, ratio::part_per_million};
///
/// let salinity = Ratio::new::<part_per_million>(42_000.0);
/// let feed = Constrained::<_, NonNegative>::new(salinity).unwrap();
/// assert_eq!(feed.into_inner(), salinity);
///
/// let brackish = Ratio::new::<part_per_million>(-5.0);
/// assert_eq!(NonNegative::new(brackish), Err(ConstraintError::Negative));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
