//! Error taxonomy shared by every aggregate, dispersion, and fitting routine.

use thiserror::Error;

/// Errors raised by the statistics and regression routines.
///
/// Every variant is raised at the offending call; no routine returns a
/// sentinel (`NaN`, `0.0`) in place of an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A reduction (`sum`, `mean`, `min`, `max`, `prod`) received no data.
    #[error("empty input: at least one value is required")]
    EmptyInput,

    /// A sample statistic needs more observations than were supplied.
    #[error("insufficient sample: need at least {required} values, got {actual}")]
    InsufficientSample { required: usize, actual: usize },

    /// Two paired samples differ in length.
    #[error("length mismatch: left has {left} values, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The independent variable has zero variance, so the slope is undefined.
    #[error("degenerate fit: independent variable has zero variance")]
    DegenerateFit,
}

/// Result type for statistical operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Rejects empty input to a reduction.
pub(crate) fn ensure_non_empty(data: &[f64]) -> StatsResult<()> {
    if data.is_empty() {
        tracing::debug!("rejecting empty input");
        return Err(StatsError::EmptyInput);
    }
    Ok(())
}

/// Rejects samples shorter than `required`.
pub(crate) fn ensure_len(data: &[f64], required: usize) -> StatsResult<()> {
    if data.len() < required {
        tracing::debug!(required, actual = data.len(), "rejecting short sample");
        return Err(StatsError::InsufficientSample {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Rejects paired samples of unequal length.
pub(crate) fn ensure_paired(x: &[f64], y: &[f64]) -> StatsResult<()> {
    if x.len() != y.len() {
        tracing::debug!(left = x.len(), right = y.len(), "rejecting unpaired samples");
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}
