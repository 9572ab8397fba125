//! # Solar Storage Models
//!
//! Multinode solar thermal storage models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The centerpiece is [`models::thermal::solar_tank`], a stratified
//! hot-water storage tank coupled to a flat-plate solar collector. The tank
//! is discretized into a fixed number of vertical layers and integrated
//! forward in time with an explicit energy balance, followed by a mixing
//! pass that restores buoyancy-stable stratification.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
