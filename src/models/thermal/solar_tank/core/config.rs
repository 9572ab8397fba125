use uom::si::f64::{
    Area, Length, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature, Volume,
};

use crate::support::units::{ThermalInsulance, ThermalResistance};

/// Thermophysical properties of the storage fluid.
///
/// The model assumes a single incompressible fluid with constant properties
/// throughout the tank and the collector loop.
#[derive(Debug, Clone, Copy)]
pub struct FluidProperties {
    /// Thermal conductivity between adjacent layers.
    pub conductivity: ThermalConductivity,

    /// Specific heat capacity.
    pub specific_heat: SpecificHeatCapacity,

    /// Mass density.
    pub density: MassDensity,
}

/// Static physical description of the storage tank.
///
/// All values are validated when the model is constructed; every field must
/// be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct TankConfig {
    /// Total tank height.
    pub height: Length,

    /// Tank radius.
    pub radius: Length,

    /// Properties of the stored fluid.
    pub fluid: FluidProperties,

    /// Area-specific thermal resistance of the tank insulation, m²·K/W.
    pub insulance: ThermalInsulance,

    /// Temperature of the indoor space surrounding the tank.
    pub indoor_temperature: ThermodynamicTemperature,
}

/// Static physical description of the solar collector.
#[derive(Debug, Clone, Copy)]
pub struct CollectorConfig {
    /// Volume of fluid held in the collector loop.
    pub volume: Volume,

    /// Optical/thermal conversion efficiency, in `(0, 1]`.
    pub efficiency: Ratio,

    /// Aperture area exposed to the sun.
    pub area: Area,

    /// Absolute thermal resistance between the collector fluid and the
    /// outdoors, K/W.
    pub loss_resistance: ThermalResistance,

    /// Outdoor ambient temperature seen by the collector.
    pub outdoor_temperature: ThermodynamicTemperature,
}
