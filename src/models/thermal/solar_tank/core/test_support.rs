//! Shared fixtures for solar tank tests.
//!
//! The constants describe a small residential system: a 44.25 in × 9 in
//! storage tank of water and a 1 m² collector holding a quarter gallon.

use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatFluxDensity, Length, MassDensity, Power, Ratio, SpecificHeatCapacity,
        TemperatureInterval, ThermalConductivity, ThermodynamicTemperature, Volume, VolumeRate,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
    volume::cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use super::{CollectorConfig, FluidProperties, TankConfig};

pub(crate) fn tank_config() -> TankConfig {
    TankConfig {
        height: Length::new::<meter>(44.25 / 39.37),
        radius: Length::new::<meter>(9.0 / 39.37),
        fluid: FluidProperties {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.3),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4181.3),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.0e3),
        },
        insulance: TemperatureInterval::new::<delta_kelvin>(1.3)
            * Area::new::<square_meter>(1.0)
            / Power::new::<watt>(1.0),
        indoor_temperature: ThermodynamicTemperature::new::<abs_kelvin>(294.261),
    }
}

pub(crate) fn collector_config() -> CollectorConfig {
    CollectorConfig {
        volume: Volume::new::<cubic_meter>(0.003_785_41 / 4.0),
        efficiency: Ratio::new::<ratio>(0.7),
        area: Area::new::<square_meter>(1.0),
        loss_resistance: TemperatureInterval::new::<delta_kelvin>(0.5) / Power::new::<watt>(1.0),
        outdoor_temperature: ThermodynamicTemperature::new::<abs_kelvin>(283.15),
    }
}

pub(crate) fn kelvin<const N: usize>(values: [f64; N]) -> [ThermodynamicTemperature; N] {
    values.map(ThermodynamicTemperature::new::<abs_kelvin>)
}

pub(crate) fn flow(cubic_meters_per_second: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(cubic_meters_per_second)
}

pub(crate) fn irradiance(watts_per_square_meter: f64) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(watts_per_square_meter)
}
