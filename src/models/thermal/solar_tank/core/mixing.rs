//! Buoyancy mixing heuristic for the layered temperature profile.
//!
//! The explicit update can leave a cooler layer sitting above a warmer one,
//! which a real tank would erase almost instantly by convective mixing. The
//! repair pass averages such pairs until the profile is non-decreasing from
//! bottom to top (within tolerance).
//!
//! The scan order matters: the lowest inversion is always resolved first,
//! and the scan restarts from the bottom after every averaging operation,
//! because averaging one pair can create or remove inversions elsewhere.
//! A single left-to-right sweep would pair different layers in cascading
//! cases and is deliberately not used.

use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::TemperatureDifference;

/// Tuning for the mixing pass.
#[derive(Debug, Clone, Copy)]
pub struct MixingConfig {
    /// An adjacent pair is considered inverted when
    /// `upper − lower < −tolerance`.
    pub tolerance: TemperatureInterval,

    /// Upper bound on averaging operations per call. Hitting the cap is
    /// reported through [`MixOutcome::settled`] and signals that the
    /// timestep is likely too large for the configured parameters.
    pub max_passes: usize,
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            tolerance: TemperatureInterval::new::<uom::si::temperature_interval::kelvin>(0.01),
            max_passes: 1024,
        }
    }
}

/// Result of one mixing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixOutcome {
    /// Number of averaging operations performed.
    pub passes: usize,

    /// Whether the profile is free of inversions beyond tolerance.
    /// `false` only if [`MixingConfig::max_passes`] was exhausted first.
    pub settled: bool,
}

/// Averages inverted adjacent layers in place until the profile is stable.
///
/// Each averaging operation replaces both members of the lowest inverted
/// pair with their arithmetic mean, which conserves the pair's total energy
/// (layers share one volume and one fluid). NaN temperatures compare as
/// non-inverted and are left untouched; callers detect them separately.
pub(crate) fn mix_inversions<const N: usize>(
    temperatures: &mut [ThermodynamicTemperature; N],
    config: &MixingConfig,
) -> MixOutcome {
    for pass in 0..config.max_passes {
        let Some(j) = first_inversion(temperatures, config.tolerance) else {
            return MixOutcome {
                passes: pass,
                settled: true,
            };
        };

        let mean = temperatures[j] + temperatures[j + 1].minus(temperatures[j]) / 2.0;
        temperatures[j] = mean;
        temperatures[j + 1] = mean;
    }

    MixOutcome {
        passes: config.max_passes,
        settled: first_inversion(temperatures, config.tolerance).is_none(),
    }
}

/// Index of the lowest adjacent pair violating the tolerance, if any.
fn first_inversion<const N: usize>(
    temperatures: &[ThermodynamicTemperature; N],
    tolerance: TemperatureInterval,
) -> Option<usize> {
    temperatures
        .windows(2)
        .position(|pair| pair[1].minus(pair[0]) < -tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    };

    use crate::models::thermal::solar_tank::core::test_support::kelvin;

    fn in_kelvin<const N: usize>(temps: &[ThermodynamicTemperature; N]) -> [f64; N] {
        temps.map(|t| t.get::<abs_kelvin>())
    }

    fn sum<const N: usize>(temps: &[ThermodynamicTemperature; N]) -> f64 {
        temps.iter().map(|t| t.get::<abs_kelvin>()).sum()
    }

    #[test]
    fn stable_profile_is_untouched() {
        let mut temps = kelvin([295.0, 297.4, 298.7, 302.5, 304.2]);
        let outcome = mix_inversions(&mut temps, &MixingConfig::default());

        assert_eq!(outcome, MixOutcome { passes: 0, settled: true });
        assert_eq!(in_kelvin(&temps), [295.0, 297.4, 298.7, 302.5, 304.2]);
    }

    #[test]
    fn single_inversion_averages_the_pair() {
        let mut temps = kelvin([300.0, 295.0, 310.0]);
        let outcome = mix_inversions(&mut temps, &MixingConfig::default());

        assert!(outcome.settled);
        assert_relative_eq!(temps[0].get::<abs_kelvin>(), 297.5);
        assert_relative_eq!(temps[1].get::<abs_kelvin>(), 297.5);
        assert_relative_eq!(temps[2].get::<abs_kelvin>(), 310.0);
    }

    #[test]
    fn inversion_within_tolerance_is_ignored() {
        let mut temps = kelvin([300.0, 299.995, 310.0]);
        let outcome = mix_inversions(&mut temps, &MixingConfig::default());

        assert_eq!(outcome.passes, 0);
        assert_relative_eq!(temps[1].get::<abs_kelvin>(), 299.995);
    }

    #[test]
    fn repair_is_idempotent() {
        let config = MixingConfig::default();
        let mut temps = kelvin([302.0, 300.0, 295.0, 308.0, 301.0]);

        mix_inversions(&mut temps, &config);
        let once = temps;
        let outcome = mix_inversions(&mut temps, &config);

        assert_eq!(outcome.passes, 0);
        assert_eq!(in_kelvin(&temps), in_kelvin(&once));
    }

    #[test]
    fn repair_conserves_total_energy() {
        let config = MixingConfig::default();
        let mut temps = kelvin([320.0, 310.0, 305.0, 330.0, 300.0, 315.0]);
        let before = sum(&temps);

        mix_inversions(&mut temps, &config);

        assert_relative_eq!(sum(&temps), before, epsilon = 1e-9);
    }

    #[test]
    fn no_residual_inversion_beyond_tolerance() {
        let config = MixingConfig::default();
        let mut temps = kelvin([330.0, 320.0, 310.0, 300.0, 290.0, 280.0, 335.0, 270.0]);

        let outcome = mix_inversions(&mut temps, &config);

        assert!(outcome.settled);
        for pair in temps.windows(2) {
            assert!(pair[1].minus(pair[0]) >= -config.tolerance);
        }
    }

    #[test]
    fn cascading_inversion_resolves_lowest_first() {
        // Fixing the (1, 2) pair exposes a new inversion at (0, 1); the
        // rescan must go back and settle the whole head of the profile.
        let config = MixingConfig::default();
        let mut temps = kelvin([20.0, 30.0, 5.0]);

        let outcome = mix_inversions(&mut temps, &config);

        assert!(outcome.settled);
        assert!(outcome.passes > 1);
        assert_relative_eq!(sum(&temps), 55.0, epsilon = 1e-9);
        for pair in temps.windows(2) {
            assert!(pair[1].minus(pair[0]) >= -config.tolerance);
        }
    }

    #[test]
    fn lowest_inversion_wins_the_tie_break() {
        // Two disjoint inversions: after one averaging operation only the
        // lower pair may have been touched.
        let temps = kelvin([310.0, 300.0, 320.0, 330.0, 325.0]);
        assert_eq!(
            first_inversion(&temps, TemperatureInterval::new::<delta_kelvin>(0.01)),
            Some(0)
        );

        let one_op = MixingConfig {
            max_passes: 1,
            ..MixingConfig::default()
        };
        let mut temps = temps;
        mix_inversions(&mut temps, &one_op);

        assert_relative_eq!(temps[0].get::<abs_kelvin>(), 305.0);
        assert_relative_eq!(temps[1].get::<abs_kelvin>(), 305.0);
        // Upper inversion untouched so far.
        assert_relative_eq!(temps[3].get::<abs_kelvin>(), 330.0);
        assert_relative_eq!(temps[4].get::<abs_kelvin>(), 325.0);
    }

    #[test]
    fn iteration_cap_reports_unsettled() {
        let starved = MixingConfig {
            tolerance: TemperatureInterval::new::<delta_kelvin>(0.01),
            max_passes: 1,
        };
        let mut temps = kelvin([30.0, 20.0, 10.0, 0.5]);

        let outcome = mix_inversions(&mut temps, &starved);

        assert_eq!(outcome.passes, 1);
        assert!(!outcome.settled);
    }
}
