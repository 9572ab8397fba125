//! Finite-difference energy balance for the tank layers and the collector.
//!
//! Each tank layer is a fully mixed control volume exchanging heat by
//! conduction with its vertical neighbors, by advection with the pump-driven
//! loop flow, and by conduction through the insulated wall to the indoor
//! ambient. The loop flow runs collector → top of tank → down through the
//! layers → back to the collector, so the advective term at every layer is
//! upwinded on the node above it, and the top layer is upwinded on the
//! collector itself.

use std::array;

use crate::support::units::{TemperatureDifference, TemperatureRate};

use super::{Parameters, SolarTankInput, SolarTankOutput};

/// Evaluates `dT/dt` for every layer and the collector.
pub(crate) fn derivatives<const N: usize>(
    params: &Parameters,
    input: &SolarTankInput<N>,
) -> SolarTankOutput<N> {
    SolarTankOutput {
        tank: tank_derivatives(params, input),
        collector: collector_derivative(params, input),
    }
}

/// Per-layer energy balance.
///
/// For an interior layer `j`:
///
/// ```text
/// dT[j]/dt = −A_s/(C·R)·(T[j] − T_amb)
///          + α·(T[j−1] − T[j])/dx² + α·(T[j+1] − T[j])/dx²
///          − (V̇/A_c)·(T[j] − T[j+1])/dx
/// ```
///
/// The bottom and top layers lose heat through an exposed end face as well
/// (`A_s + A_c`), conduct with their single neighbor, and the top layer
/// advects from the collector instead of a layer above.
fn tank_derivatives<const N: usize>(
    params: &Parameters,
    input: &SolarTankInput<N>,
) -> [TemperatureRate; N] {
    let temps = &input.temperatures;
    let pump_flow = input.forcing.pump_flow.into_inner();

    let dx = params.layer_height;
    let dx_sq = dx * dx;
    let velocity = pump_flow / params.cross_section_area;
    let end_face_area = params.layer_surface_area + params.cross_section_area;

    array::from_fn(|j| {
        let t = temps[j];

        let loss_area = if j == 0 || j == N - 1 {
            end_face_area
        } else {
            params.layer_surface_area
        };
        let loss_coeff = loss_area / (params.layer_heat_capacity * params.insulance);
        let mut rate: TemperatureRate = -(loss_coeff * t.minus(params.indoor_temperature));

        if j > 0 {
            rate += params.diffusivity * temps[j - 1].minus(t) / dx_sq;
        }
        if j < N - 1 {
            rate += params.diffusivity * temps[j + 1].minus(t) / dx_sq;
        }

        // Upwind on the flow direction: each layer receives the fluid of the
        // node above it, the top layer receives the collector fluid.
        let upwind = if j < N - 1 {
            temps[j + 1]
        } else {
            input.collector_temperature
        };
        rate -= velocity * t.minus(upwind) / dx;

        rate
    })
}

/// Collector energy balance:
///
/// ```text
/// dTc/dt = η·A_col·q / C_col − (V̇/V_col)·(Tc − T[0]) − (Tc − T_out)/(C_col·R_col)
/// ```
///
/// With zero pump flow the middle term vanishes and the collector is
/// thermally isolated from the tank.
fn collector_derivative<const N: usize>(
    params: &Parameters,
    input: &SolarTankInput<N>,
) -> TemperatureRate {
    let t_col = input.collector_temperature;
    let pump_flow = input.forcing.pump_flow.into_inner();
    let irradiance = input.forcing.irradiance.into_inner();

    let solar_gain = params.collector_efficiency * params.collector_area * irradiance
        / params.collector_heat_capacity;
    let tank_exchange = pump_flow / params.collector_volume * t_col.minus(input.temperatures[0]);
    let outdoor_loss = t_col.minus(params.outdoor_temperature)
        / (params.collector_heat_capacity * params.collector_loss_resistance);

    solar_gain - tank_exchange - outdoor_loss
}
