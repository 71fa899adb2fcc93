//! Descriptive statistics with numerical stability guarantees.
//!
//! Every reduction rejects input it cannot summarise (see [`StatsError`])
//! rather than returning a sentinel. Non-finite values are not filtered:
//! they propagate through the arithmetic under IEEE-754 rules.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation for O(ε) error
//!   independent of n, via [`KahanAccumulator`].
//! - **Product**: log-domain accumulation with separate sign tracking, so
//!   intermediate overflow/underflow cannot occur.
//! - **Variance/Covariance**: two-pass with compensated deviation sums and
//!   Bessel's correction (n − 1).

use crate::error::{ensure_len, ensure_non_empty, ensure_paired, StatsError, StatsResult};

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Running compensated sum.
///
/// Holds the running total, a compensation term capturing the low-order
/// bits discarded by each addition, and the number of values folded in.
/// At every step `total + compensation` is the best available estimate of
/// the exact sum.
///
/// # Algorithm
/// Neumaier's improvement of Kahan summation: the branch picks whichever
/// operand is smaller in magnitude as the one whose bits were lost, so the
/// compensation stays correct when an addend dwarfs the running total.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use u_datakit::stats::KahanAccumulator;
/// let mut acc = KahanAccumulator::new();
/// for &x in &[1e16, 1.0, -1e16] {
///     acc.add(x);
/// }
/// assert_eq!(acc.sum(), 1.0);
/// assert_eq!(acc.count(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanAccumulator {
    total: f64,
    compensation: f64,
    count: u64,
}

impl KahanAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one value into the running sum.
    pub fn add(&mut self, value: f64) {
        self.fold(value);
        self.count += 1;
    }

    fn fold(&mut self, value: f64) {
        let t = self.total + value;
        // Once the total overflows or meets inf/NaN, the compensation would
        // compute `inf - inf`; leave it alone and let the total carry IEEE-754.
        if !t.is_finite() {
            self.total = t;
            return;
        }
        if self.total.abs() >= value.abs() {
            self.compensation += (self.total - t) + value;
        } else {
            self.compensation += (value - t) + self.total;
        }
        self.total = t;
    }

    /// Combines another partial summation into this one.
    ///
    /// Summing two disjoint chunks separately and merging gives the same
    /// estimate (within rounding of the compensation terms) as summing the
    /// concatenation in one pass.
    pub fn merge(&mut self, other: &KahanAccumulator) {
        self.fold(other.total);
        self.compensation += other.compensation;
        self.count += other.count;
    }

    /// Best estimate of the sum so far (`total + compensation`).
    ///
    /// A non-finite total is returned as is.
    pub fn sum(&self) -> f64 {
        if !self.total.is_finite() {
            return self.total;
        }
        self.total + self.compensation
    }

    /// Running total before the compensation term is folded back in.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Accumulated rounding error not yet folded into the total.
    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Compensated sum divided by the count.
    ///
    /// # Errors
    /// [`StatsError::EmptyInput`] if nothing has been added.
    pub fn mean(&self) -> StatsResult<f64> {
        if self.count == 0 {
            return Err(StatsError::EmptyInput);
        }
        Ok(self.sum() / self.count as f64)
    }
}

impl Extend<f64> for KahanAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for KahanAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Compensated sum of `data`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_datakit::stats::sum;
/// let floats: Vec<f64> = [0.1, 0.2, 0.3].repeat(10_000);
/// assert_eq!(sum(&floats).unwrap(), 6000.0);
/// ```
pub fn sum(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(data)?;
    Ok(data.iter().copied().collect::<KahanAccumulator>().sum())
}

/// Arithmetic mean using compensated summation.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_datakit::stats::mean;
/// assert_eq!(mean(&[-10.0, 15.0, 25.0, 0.0, -5.0]).unwrap(), 5.0);
/// ```
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(data)?;
    data.iter().copied().collect::<KahanAccumulator>().mean()
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// Largest value in `data`.
///
/// Single scan seeded with the first element; a later value replaces the
/// current maximum only if strictly greater.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_datakit::stats::max;
/// assert_eq!(max(&[10.0, -2.0, 23.0, 12.0, 43.0, 123213.0, 2.0]).unwrap(), 123213.0);
/// ```
pub fn max(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(data)?;
    Ok(data[1..]
        .iter()
        .fold(data[0], |acc, &x| if x > acc { x } else { acc }))
}

/// Smallest value in `data`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_datakit::stats::min;
/// assert_eq!(min(&[10.0, -2.0, 23.0, 12.0, 43.0, 123213.0, 2.0]).unwrap(), -2.0);
/// ```
pub fn min(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(data)?;
    Ok(data[1..]
        .iter()
        .fold(data[0], |acc, &x| if x < acc { x } else { acc }))
}

/// Product of `data`, computed in the log domain.
///
/// # Algorithm
/// Accumulates `ln|xᵢ|` with compensated summation and tracks the sign
/// separately, then recombines as `sign · exp(Σ ln|xᵢ|)`. Intermediate
/// partial products never materialise, so a sequence such as
/// `[1e200, 1e200, 1e-200, 1e-200]` yields `1.0` where naive
/// multiplication overflows to `inf`.
///
/// A zero element returns exactly `0.0` without evaluating `ln(0)`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_datakit::compare::is_close;
/// use u_datakit::stats::prod;
/// let p = prod(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
/// assert!(is_close(p, 3_628_800.0));
/// ```
pub fn prod(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(data)?;
    let mut log_sum = KahanAccumulator::new();
    let mut negative = false;
    for &x in data {
        if x == 0.0 {
            return Ok(0.0);
        }
        if x.is_sign_negative() {
            negative = !negative;
        }
        log_sum.add(x.abs().ln());
    }
    let magnitude = log_sum.sum().exp();
    Ok(if negative { -magnitude } else { magnitude })
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// Sample variance with Bessel's correction.
///
/// # Formula
/// ```text
/// Var(X) = Σ(xᵢ − x̄)² / (n − 1)
/// ```
///
/// # Algorithm
/// Two-pass: compensated mean, then a compensated sum of squared
/// deviations. Avoids the cancellation of `E[X²] − (E[X])²`.
///
/// # Errors
/// [`StatsError::InsufficientSample`] if `data.len() < 2`.
///
/// # Examples
/// ```
/// use u_datakit::stats::variance;
/// assert_eq!(variance(&[-10.0, -5.0, 0.0, 5.0, 10.0]).unwrap(), 62.5);
/// ```
pub fn variance(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 2)?;
    let m = mean(data)?;
    let squares: KahanAccumulator = data
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .collect();
    Ok(squares.sum() / (data.len() - 1) as f64)
}

/// Sample standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// [`StatsError::InsufficientSample`] if `data.len() < 2`.
///
/// # Examples
/// ```
/// use u_datakit::stats::std_dev;
/// assert_eq!(std_dev(&[0.0, 10.0, 20.0, 30.0, 40.0]).unwrap(), 250.0_f64.sqrt());
/// ```
pub fn std_dev(data: &[f64]) -> StatsResult<f64> {
    variance(data).map(f64::sqrt)
}

/// Sample covariance between two paired datasets.
///
/// # Formula
/// ```text
/// Cov(X, Y) = Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)
/// ```
///
/// # Errors
/// - [`StatsError::LengthMismatch`] if `x.len() != y.len()`.
/// - [`StatsError::InsufficientSample`] if `n < 2`.
///
/// # Examples
/// ```
/// use u_datakit::stats::covariance;
/// let x = [-10.0, -5.0, 0.0, 5.0, 10.0];
/// let y = [0.0, 10.0, 20.0, 30.0, 40.0];
/// assert_eq!(covariance(&x, &y).unwrap(), 125.0);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    ensure_paired(x, y)?;
    ensure_len(x, 2)?;
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let products: KahanAccumulator = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .collect();
    Ok(products.sum() / (x.len() - 1) as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
