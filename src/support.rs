//! Supporting utilities shared across models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`seawater`]: Property correlations for saline water in MED evaporators.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod seawater;
pub mod units;
