//! Thermal desalination models.
//!
//! - [`plant`]: Design parameters shared by the desalination and solar models.
//! - [`med`]: Steady-state forward-feed multi-effect distillation.

pub mod med;
pub mod plant;
