use uom::si::f64::ThermodynamicTemperature;

use crate::support::units::TemperatureRate;

use super::NumericalInstability;

/// Time derivatives of the full system state.
///
/// This is the output of the energy balance alone; no integration or mixing
/// has been applied.
#[derive(Debug, Clone, Copy)]
pub struct SolarTankOutput<const N: usize> {
    /// `dT/dt` for each tank layer, bottom to top.
    pub tank: [TemperatureRate; N],

    /// `dT/dt` for the collector fluid.
    pub collector: TemperatureRate,
}

/// The system state one timestep later.
#[derive(Debug, Clone, Copy)]
pub struct SolarTankStep<const N: usize> {
    /// Tank layer temperatures after the explicit update and stratification
    /// repair, bottom to top. Adjacent inversions beyond the mixing
    /// tolerance have been averaged away.
    pub temperatures: [ThermodynamicTemperature; N],

    /// Collector temperature after the explicit update.
    pub collector_temperature: ThermodynamicTemperature,

    /// Advisory diagnostic, set when the update shows signs that the
    /// timestep is too large for the configured parameters.
    pub instability: Option<NumericalInstability>,
}
