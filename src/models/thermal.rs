//! Thermal systems models.
//!
//! This module contains models for thermal storage and the solar equipment
//! that charges it.

pub mod solar_tank;
