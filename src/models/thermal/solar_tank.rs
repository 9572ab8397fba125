//! Multinode solar storage tank with a pumped flat-plate collector.
//!
//! This module provides [`SolarTank`], a [`twine_core::Model`] implementation
//! of a vertically stratified hot water tank charged by a solar collector.
//! The computational core is in the internal [`core`] module.

pub(crate) mod core;

pub use self::core::{
    CollectorConfig, FluidProperties, Forcing, InvalidParameter, MixOutcome, MixingConfig,
    NumericalInstability, Parameters, SolarTankInput, SolarTankOutput, SolarTankStep, TankConfig,
};

use std::{array, convert::Infallible};

use twine_core::Model;
use uom::si::f64::{ThermodynamicTemperature, Time};

/// A stratified storage tank of `N` stacked layers coupled to a collector.
///
/// Geometry and material properties are folded into per-layer [`Parameters`]
/// at construction, so stepping the model allocates nothing and cannot fail.
///
/// # Minimum Layer Count
///
/// The layer count `N` must be at least 2 (a bottom and a top layer).
/// This constraint is enforced at compile time via const assertions.
///
/// ```compile_fail
/// # use solar_storage_models::models::thermal::solar_tank::SolarTank;
/// // This will fail to compile: N must be >= 2
/// let _new: fn(&_, &_) -> _ = SolarTank::<1>::new;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolarTank<const N: usize> {
    parameters: Parameters,
    mixing: MixingConfig,
}

impl<const N: usize> SolarTank<N> {
    /// Builds a tank model from tank and collector configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameter`] if any dimension, property, or
    /// boundary condition is non-physical.
    pub fn new(tank: &TankConfig, collector: &CollectorConfig) -> Result<Self, InvalidParameter> {
        Ok(Self {
            parameters: Parameters::derive::<N>(tank, collector)?,
            mixing: MixingConfig::default(),
        })
    }

    /// Replaces the default stratification repair tuning.
    #[must_use]
    pub fn with_mixing(self, mixing: MixingConfig) -> Self {
        Self { mixing, ..self }
    }

    /// The derived per-layer parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Evaluates the instantaneous energy balance.
    ///
    /// Pure with respect to the input: no time integration and no
    /// stratification repair is applied.
    pub fn derivatives(&self, input: &SolarTankInput<N>) -> SolarTankOutput<N> {
        core::derivatives(&self.parameters, input)
    }

    /// Advances the state one explicit Euler step of size `dt`.
    ///
    /// After the update, buoyancy inversions in the layer profile are
    /// repaired by [`SolarTank::stabilize`]. Numerical trouble (a non-finite
    /// temperature, or a repair pass that fails to settle) is reported as an
    /// advisory on the returned [`SolarTankStep`] rather than an error, so a
    /// simulation driver can decide whether to shrink the step or abort.
    pub fn step(&self, input: &SolarTankInput<N>, dt: Time) -> SolarTankStep<N> {
        let rates = self.derivatives(input);

        let updated = array::from_fn(|j| input.temperatures[j] + rates.tank[j] * dt);
        let collector_temperature = input.collector_temperature + rates.collector * dt;

        let (temperatures, outcome) = self.stabilize(updated);

        let finite = collector_temperature.value.is_finite()
            && temperatures.iter().all(|t| t.value.is_finite());

        let instability = if !finite {
            Some(NumericalInstability::NonFiniteTemperature)
        } else if outcome.settled {
            None
        } else {
            Some(NumericalInstability::RepairUnsettled {
                passes: outcome.passes,
            })
        };

        SolarTankStep {
            temperatures,
            collector_temperature,
            instability,
        }
    }

    /// Repairs buoyancy inversions in a layer temperature profile.
    ///
    /// Averages the lowest inverted adjacent pair and rescans from the
    /// bottom until the profile is non-decreasing within tolerance. The
    /// returned [`MixOutcome`] reports the work done.
    #[must_use]
    pub fn stabilize(
        &self,
        mut temperatures: [ThermodynamicTemperature; N],
    ) -> ([ThermodynamicTemperature; N], MixOutcome) {
        let outcome = core::mix_inversions(&mut temperatures, &self.mixing);
        (temperatures, outcome)
    }
}

impl<const N: usize> Model for SolarTank<N> {
    type Input = SolarTankInput<N>;
    type Output = SolarTankOutput<N>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.derivatives(input))
    }
}
