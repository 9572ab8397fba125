use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A physical constant supplied to the model was invalid.
///
/// Raised at construction time, before any simulation happens. There is no
/// recovery: fix the offending input and rebuild the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid value for `{parameter}`: {source}")]
pub struct InvalidParameter {
    /// Name of the offending configuration field.
    pub parameter: &'static str,

    /// The constraint the value failed.
    #[source]
    pub source: ConstraintError,
}

/// An advisory signal that the chosen timestep is too large for the
/// configured parameters.
///
/// Instability is reported alongside the stepped state rather than as a hard
/// failure: the integration is deterministic and the caller may prefer to
/// inspect the offending state, shrink the timestep, and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericalInstability {
    /// The stratification-repair loop hit its iteration cap with inversions
    /// still present.
    #[error("stratification repair unsettled after {passes} averaging passes")]
    RepairUnsettled { passes: usize },

    /// A layer or collector temperature became NaN or infinite after the
    /// explicit update. The values are passed through uncorrected.
    #[error("non-finite temperature after explicit update")]
    NonFiniteTemperature,
}
