use uom::si::f64::{HeatFluxDensity, ThermodynamicTemperature, VolumeRate};

use crate::support::constraint::{Constrained, NonNegative};

use super::InvalidParameter;

/// Per-step boundary forcing supplied by the caller.
///
/// Both values are non-negative by construction. Reverse (negative) pump
/// flow is not modeled and is rejected as invalid input.
#[derive(Debug, Clone, Copy)]
pub struct Forcing {
    /// Pump volumetric flow rate through the collector loop.
    /// Zero means the loop is idle and no advection occurs.
    pub pump_flow: Constrained<VolumeRate, NonNegative>,

    /// Solar irradiance incident on the collector aperture.
    pub irradiance: Constrained<HeatFluxDensity, NonNegative>,
}

impl Forcing {
    /// Validates raw forcing values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if either value is negative or NaN.
    pub fn new(pump_flow: VolumeRate, irradiance: HeatFluxDensity) -> Result<Self, InvalidParameter> {
        Ok(Self {
            pump_flow: NonNegative::new(pump_flow).map_err(|source| InvalidParameter {
                parameter: "forcing.pump_flow",
                source,
            })?,
            irradiance: NonNegative::new(irradiance).map_err(|source| InvalidParameter {
                parameter: "forcing.irradiance",
                source,
            })?,
        })
    }

    /// No pump flow and no sun: the tank sees only conduction and ambient
    /// loss, the collector only its outdoor loss.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            pump_flow: NonNegative::zero(),
            irradiance: NonNegative::zero(),
        }
    }
}

/// Full model input at one instant.
///
/// Layer temperatures run from the bottom of the tank (`temperatures[0]`) to
/// the top (`temperatures[N - 1]`).
#[derive(Debug, Clone, Copy)]
pub struct SolarTankInput<const N: usize> {
    /// Tank layer temperatures, bottom to top.
    pub temperatures: [ThermodynamicTemperature; N],

    /// Collector fluid temperature.
    pub collector_temperature: ThermodynamicTemperature,

    /// Boundary forcing for this step.
    pub forcing: Forcing,
}
