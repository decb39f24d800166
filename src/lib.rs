//! # Twine Desal
//!
//! Thermal desalination models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate pairs a steady-state forward-feed multi-effect distillation (MED)
//! model with an hourly dispatch simulator for a solar-thermal field backed by
//! a thermal energy store.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Typical use
//!
//! The steady-state model runs once to fix the plant's nominal thermal demand
//! and gained output ratio. The dispatch model then folds an ordered irradiance
//! sequence against that setpoint, one time step at a time.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;
