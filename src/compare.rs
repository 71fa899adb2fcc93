//! Approximate equality for floating-point values.
//!
//! The comparison is deliberately asymmetric: the relative term scales with
//! the *second* argument, matching `numpy.isclose`.
//!
//! ```text
//! |a − b| ≤ atol + rtol·|b|
//! ```

/// Default relative tolerance.
pub const RTOL: f64 = 1e-5;

/// Default absolute tolerance.
pub const ATOL: f64 = 1e-8;

/// Returns `true` if `a` is within the default tolerance of `b`.
///
/// Equivalent to `Tolerance::default().is_close(a, b)`.
///
/// # Examples
/// ```
/// use u_datakit::compare::is_close;
/// assert!(is_close(0.0, 1e-15));
/// assert!(!is_close(0.0, 1e-5));
/// ```
pub fn is_close(a: f64, b: f64) -> bool {
    Tolerance::default().is_close(a, b)
}

/// Relative/absolute tolerance pair for [`Tolerance::is_close`].
///
/// # Examples
/// ```
/// use u_datakit::compare::Tolerance;
/// let loose = Tolerance::default().with_atol(1e-3);
/// assert!(loose.is_close(0.0, 5e-4));
/// assert!(!Tolerance::default().is_close(0.0, 5e-4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    rtol: f64,
    atol: f64,
}

impl Tolerance {
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    pub const fn with_rtol(self, rtol: f64) -> Self {
        Self { rtol, ..self }
    }

    pub const fn with_atol(self, atol: f64) -> Self {
        Self { atol, ..self }
    }

    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// `|a − b| ≤ atol + rtol·|b|`. NaN on either side is never close.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(RTOL, ATOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_via_atol() {
        assert!(is_close(0.0, 1e-15));
    }

    #[test]
    fn test_distant() {
        assert!(!is_close(0.0, 1e-5));
    }

    #[test]
    fn test_relative_scales_with_second_argument() {
        // 1e-3 off from 100 is within rtol·|100| = 1e-3
        assert!(is_close(100.001, 100.0));
        // but not from 0.001, where the relative term is tiny
        assert!(!is_close(100.0, 0.001));
    }

    #[test]
    fn test_asymmetry() {
        let a = 1.0;
        let b = 1.0 + 1.0000005e-5;
        // tolerance scales with |b| > |a|, so (a, b) passes where (b, a) fails
        let tol = Tolerance::new(1e-5, 0.0);
        assert!(tol.is_close(a, b));
        assert!(!tol.is_close(b, a));
    }

    #[test]
    fn test_nan_never_close() {
        assert!(!is_close(f64::NAN, f64::NAN));
        assert!(!is_close(1.0, f64::NAN));
    }

    #[test]
    fn test_builder() {
        let tol = Tolerance::default().with_rtol(0.1).with_atol(0.0);
        assert_eq!(tol.rtol(), 0.1);
        assert_eq!(tol.atol(), 0.0);
        assert!(tol.is_close(105.0, 100.0));
        assert_eq!(Tolerance::default(), Tolerance::new(RTOL, ATOL));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let tol = Tolerance::new(1e-3, 1e-6);
        let json = serde_json::to_string(&tol).unwrap();
        let back: Tolerance = serde_json::from_str(&json).unwrap();
        assert_eq!(tol, back);
    }
}
