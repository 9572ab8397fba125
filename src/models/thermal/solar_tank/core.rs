//! Multinode stratified tank computations.
//!
//! The tank is divided into a vertical stack of equal-volume layers that
//! exchange heat by conduction and lose heat to the surrounding room. The
//! pumped loop enters hot at the top of the tank and draws its return from
//! the bottom, so loop flow moves downward through the stack. All arithmetic
//! is dimension-checked through `uom`.

mod config;
mod energy_balance;
mod error;
mod input;
mod mixing;
mod output;
mod parameters;

#[cfg(test)]
pub(super) mod test_support;

pub use config::{CollectorConfig, FluidProperties, TankConfig};
pub use error::{InvalidParameter, NumericalInstability};
pub use input::{Forcing, SolarTankInput};
pub use mixing::{MixOutcome, MixingConfig};
pub use output::{SolarTankOutput, SolarTankStep};
pub use parameters::Parameters;

pub(super) use energy_balance::derivatives;
pub(super) use mixing::mix_inversions;
