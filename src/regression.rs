//! Ordinary least-squares fit of a straight line to paired samples.
//!
//! # Formula
//! ```text
//! slope     = Cov(X, Y) / Var(X)
//! intercept = ȳ − slope·x̄
//! ```
//!
//! Both moments use the compensated two-pass routines from [`crate::stats`],
//! so the Bessel corrections cancel and the slope equals the classical
//! `Sxy / Sxx`.

use crate::error::{ensure_len, ensure_paired, StatsError, StatsResult};
use crate::stats;

/// A fitted line `f(x) = slope·x + intercept`.
///
/// Also carries the fitted values at every input `x`, in input order, for
/// overlaying the line against the raw data.
///
/// # Examples
/// ```
/// use u_datakit::regression::fit;
/// let model = fit(&[1.0, 2.0, 3.0, 5.0], &[2.0, 4.0, 6.0, 10.0]).unwrap();
/// assert_eq!(model.slope(), 2.0);
/// assert_eq!(model.intercept(), 0.0);
/// assert_eq!(model.predict(4.0), 8.0);
/// assert_eq!(model.fitted_points()[0], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
    fitted: Vec<f64>,
}

impl LinearFit {
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fitted values at the original `x` sample, same order and length.
    pub fn fitted_points(&self) -> &[f64] {
        &self.fitted
    }

    /// Number of observations the line was fitted on.
    pub fn len(&self) -> usize {
        self.fitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fitted.is_empty()
    }

    /// Observed minus fitted, `yᵢ − ŷᵢ`.
    ///
    /// # Errors
    /// [`StatsError::LengthMismatch`] if `y` does not match the fitted sample.
    pub fn residuals(&self, y: &[f64]) -> StatsResult<Vec<f64>> {
        ensure_paired(&self.fitted, y)?;
        Ok(y.iter()
            .zip(&self.fitted)
            .map(|(&obs, &fit)| obs - fit)
            .collect())
    }
}

/// Fits `y ≈ slope·x + intercept` by ordinary least squares.
///
/// # Complexity
/// Time: O(n), Space: O(n) for the fitted points
///
/// # Errors
/// - [`StatsError::LengthMismatch`] if `x.len() != y.len()`.
/// - [`StatsError::InsufficientSample`] if `n < 2`.
/// - [`StatsError::DegenerateFit`] if `x` has zero variance.
///
/// # Examples
/// ```
/// use u_datakit::regression::fit;
/// use u_datakit::StatsError;
/// assert_eq!(fit(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]), Err(StatsError::DegenerateFit));
/// ```
pub fn fit(x: &[f64], y: &[f64]) -> StatsResult<LinearFit> {
    ensure_paired(x, y)?;
    ensure_len(x, 2)?;

    // A constant x can still yield a variance of ~1e-34 when its mean rounds.
    let constant = x.iter().all(|&v| v == x[0]);
    let var_x = stats::variance(x)?;
    if constant || var_x == 0.0 {
        tracing::debug!(n = x.len(), "rejecting fit: constant independent variable");
        return Err(StatsError::DegenerateFit);
    }
    let slope = stats::covariance(x, y)? / var_x;
    let intercept = stats::mean(y)? - slope * stats::mean(x)?;
    let fitted = x.iter().map(|&xi| slope * xi + intercept).collect();

    tracing::debug!(n = x.len(), slope, intercept, "fitted least-squares line");
    Ok(LinearFit {
        slope,
        intercept,
        fitted,
    })
}
