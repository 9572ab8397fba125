use std::f64::consts::PI;

use num_traits::Zero;
use uom::si::f64::{Area, HeatCapacity, Length, Ratio, ThermodynamicTemperature, Volume};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen},
    units::{ThermalDiffusivity, ThermalInsulance, ThermalResistance},
};

use super::{CollectorConfig, InvalidParameter, TankConfig};

/// Validated model parameters, with per-layer quantities derived once.
///
/// Every derived field is a pure function of the configuration, so a
/// `Parameters` built twice from equal configs is identical. The struct is
/// immutable after construction; changing any physical input means building
/// a new one.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    /// Height of one tank layer, `h / N`.
    pub layer_height: Length,

    /// Lateral (wetted wall) surface area of one layer, `dx · 2πr`.
    pub layer_surface_area: Area,

    /// Horizontal cross-sectional area of the tank, `πr²`.
    pub cross_section_area: Area,

    /// Volume of one layer.
    pub layer_volume: Volume,

    /// Thermal capacitance of one layer, `V · cp · ρ`.
    pub layer_heat_capacity: HeatCapacity,

    /// Thermal diffusivity of the fluid, `k / (cp · ρ)`.
    pub diffusivity: ThermalDiffusivity,

    /// Insulance of the tank wall.
    pub insulance: ThermalInsulance,

    /// Indoor ambient temperature around the tank.
    pub indoor_temperature: ThermodynamicTemperature,

    /// Fluid volume in the collector loop.
    pub collector_volume: Volume,

    /// Collector aperture area.
    pub collector_area: Area,

    /// Collector conversion efficiency.
    pub collector_efficiency: Ratio,

    /// Thermal capacitance of the collector fluid, `V_col · cp · ρ`.
    pub collector_heat_capacity: HeatCapacity,

    /// Absolute thermal resistance from collector fluid to outdoors.
    pub collector_loss_resistance: ThermalResistance,

    /// Outdoor ambient temperature at the collector.
    pub outdoor_temperature: ThermodynamicTemperature,
}

impl Parameters {
    /// Validates the configuration and derives the per-layer quantities for
    /// a tank with `N` layers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if any physical constant is non-positive
    /// (or NaN), or if the collector efficiency is outside `(0, 1]`.
    pub fn derive<const N: usize>(
        tank: &TankConfig,
        collector: &CollectorConfig,
    ) -> Result<Self, InvalidParameter> {
        const {
            assert!(N >= 2, "a stratified tank requires at least 2 layers");
        };

        let height = positive("tank.height", tank.height)?;
        let radius = positive("tank.radius", tank.radius)?;
        let conductivity = positive("tank.fluid.conductivity", tank.fluid.conductivity)?;
        let specific_heat = positive("tank.fluid.specific_heat", tank.fluid.specific_heat)?;
        let density = positive("tank.fluid.density", tank.fluid.density)?;
        let insulance = positive("tank.insulance", tank.insulance)?;
        let indoor_temperature =
            positive_temperature("tank.indoor_temperature", tank.indoor_temperature)?;

        let collector_volume = positive("collector.volume", collector.volume)?;
        let collector_area = positive("collector.area", collector.area)?;
        let collector_loss_resistance =
            positive("collector.loss_resistance", collector.loss_resistance)?;
        let outdoor_temperature = positive_temperature(
            "collector.outdoor_temperature",
            collector.outdoor_temperature,
        )?;
        let collector_efficiency = UnitIntervalLowerOpen::new(collector.efficiency)
            .map(Constrained::into_inner)
            .map_err(|source| InvalidParameter {
                parameter: "collector.efficiency",
                source,
            })?;

        #[allow(clippy::cast_precision_loss)]
        let layer_height = height / (N as f64);
        let layer_surface_area = 2.0 * PI * layer_height * radius;
        let cross_section_area = PI * radius * radius;
        let layer_volume = layer_height * cross_section_area;

        Ok(Self {
            layer_height,
            layer_surface_area,
            cross_section_area,
            layer_volume,
            layer_heat_capacity: layer_volume * specific_heat * density,
            diffusivity: conductivity / (specific_heat * density),
            insulance,
            indoor_temperature,
            collector_volume,
            collector_area,
            collector_efficiency,
            collector_heat_capacity: collector_volume * specific_heat * density,
            collector_loss_resistance,
            outdoor_temperature,
        })
    }
}

fn positive<T: PartialOrd + Zero>(
    parameter: &'static str,
    value: T,
) -> Result<T, InvalidParameter> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| InvalidParameter { parameter, source })
}

/// Absolute temperatures have no zero-based arithmetic in `uom`, so the
/// constraint is checked on the underlying SI value (kelvin).
fn positive_temperature(
    parameter: &'static str,
    value: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, InvalidParameter> {
    positive(parameter, value.value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, length::meter, ratio::ratio,
        thermodynamic_temperature::kelvin as abs_kelvin, volume::cubic_meter,
    };

    use crate::models::thermal::solar_tank::core::test_support::{collector_config, tank_config};
    use crate::support::constraint::ConstraintError;

    #[test]
    fn derives_layer_quantities() {
        // Hand-computed from a 44.25 in × 9 in tank split into 20 layers.
        let p = Parameters::derive::<20>(&tank_config(), &collector_config()).unwrap();

        assert_relative_eq!(p.layer_height.get::<meter>(), 0.056_197_612_4, epsilon = 1e-9);
        assert_relative_eq!(
            p.layer_surface_area.get::<square_meter>(),
            0.080_718_824_3,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            p.cross_section_area.get::<square_meter>(),
            0.164_173_879_9,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            p.layer_volume.get::<cubic_meter>(),
            0.009_226_180_07,
            epsilon = 1e-9
        );
        // J/K and m²/s, checked in SI base values.
        assert_relative_eq!(p.layer_heat_capacity.value, 38_577.426_72, epsilon = 1e-3);
        assert_relative_eq!(p.diffusivity.value, 3.109_080_908e-7, epsilon = 1e-13);
        assert_relative_eq!(p.collector_heat_capacity.value, 3_956.983_708, epsilon = 1e-4);
    }

    #[test]
    fn derivation_is_idempotent() {
        let a = Parameters::derive::<20>(&tank_config(), &collector_config()).unwrap();
        let b = Parameters::derive::<20>(&tank_config(), &collector_config()).unwrap();

        assert_eq!(a.layer_height, b.layer_height);
        assert_eq!(a.layer_surface_area, b.layer_surface_area);
        assert_eq!(a.layer_heat_capacity, b.layer_heat_capacity);
        assert_eq!(a.diffusivity, b.diffusivity);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let mut tank = tank_config();
        tank.height = Length::new::<meter>(0.0);
        let err = Parameters::derive::<20>(&tank, &collector_config()).unwrap_err();
        assert_eq!(err.parameter, "tank.height");
        assert_eq!(err.source, ConstraintError::Zero);

        let mut tank = tank_config();
        tank.radius = Length::new::<meter>(-0.2);
        let err = Parameters::derive::<20>(&tank, &collector_config()).unwrap_err();
        assert_eq!(err.parameter, "tank.radius");
        assert_eq!(err.source, ConstraintError::Negative);

        let mut collector = collector_config();
        collector.volume = Volume::new::<cubic_meter>(0.0);
        let err = Parameters::derive::<20>(&tank_config(), &collector).unwrap_err();
        assert_eq!(err.parameter, "collector.volume");

        let mut collector = collector_config();
        collector.outdoor_temperature = ThermodynamicTemperature::new::<abs_kelvin>(0.0);
        let err = Parameters::derive::<20>(&tank_config(), &collector).unwrap_err();
        assert_eq!(err.parameter, "collector.outdoor_temperature");
    }

    #[test]
    fn rejects_efficiency_outside_unit_interval() {
        let mut collector = collector_config();
        collector.efficiency = Ratio::new::<ratio>(0.0);
        let err = Parameters::derive::<20>(&tank_config(), &collector).unwrap_err();
        assert_eq!(err.parameter, "collector.efficiency");
        assert_eq!(err.source, ConstraintError::BelowMinimum);

        let mut collector = collector_config();
        collector.efficiency = Ratio::new::<ratio>(1.2);
        let err = Parameters::derive::<20>(&tank_config(), &collector).unwrap_err();
        assert_eq!(err.source, ConstraintError::AboveMaximum);
    }
}
