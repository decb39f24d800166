//! Solar-thermal supply models.

pub mod dispatch;
