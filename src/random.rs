//! Random variate generation: uniform, standard normal, and exponential.
//!
//! Each generator comes in two forms. The plain form (`uniform(n)`) draws
//! from the thread-local platform generator and is not reproducible. The
//! `_with` form accepts any [`Rng`] as the uniform source, so passing a
//! seeded generator from [`create_rng`] makes a batch reproducible.
//!
//! All transforms consume uniforms from the **open** interval (0, 1), so
//! `ln(u)` is always finite.
//!
//! # Reproducibility
//!
//! ```
//! use u_datakit::random::{create_rng, normal_with};
//! let a = normal_with(10, &mut create_rng(7));
//! let b = normal_with(10, &mut create_rng(7));
//! assert_eq!(a, b);
//! ```

use std::f64::consts::PI;

use rand::distr::Open01;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded uniform source for the `_with` generators.
///
/// Returns a `SmallRng`; two generators built from the same seed produce
/// identical variate batches on the same platform.
///
/// # Examples
/// ```
/// use u_datakit::random::{create_rng, exponential_with, uniform_with};
/// let u = uniform_with(5, &mut create_rng(42));
/// assert_eq!(u, uniform_with(5, &mut create_rng(42)));
/// assert!(exponential_with(5, &mut create_rng(42)).iter().all(|&e| e > 0.0));
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[inline]
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}

/// Box–Muller transform of two uniforms in (0, 1) into two independent
/// standard normals.
///
/// ```text
/// r  = √(−2 ln u₁)
/// z₁ = r·cos(2π u₂)
/// z₂ = r·sin(2π u₂)
/// ```
///
/// Reference: Box & Muller (1958), "A Note on the Generation of Random
/// Normal Deviates", *Ann. Math. Statist.* 29(2), pp. 610–611.
///
/// # Examples
/// ```
/// use u_datakit::random::box_muller;
/// let (z1, z2) = box_muller(0.5, 0.25);
/// assert!(z1.abs() < 1e-12);
/// assert!((z2 - (2.0 * 2.0_f64.ln()).sqrt()).abs() < 1e-12);
/// ```
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    (r * theta.cos(), r * theta.sin())
}

/// `n` draws from the open interval (0, 1) using the platform generator.
///
/// # Examples
/// ```
/// use u_datakit::random::uniform;
/// let u = uniform(100);
/// assert_eq!(u.len(), 100);
/// assert!(u.iter().all(|&x| x > 0.0 && x < 1.0));
/// ```
pub fn uniform(n: usize) -> Vec<f64> {
    uniform_with(n, &mut rand::rng())
}

/// `n` draws from the open interval (0, 1) using `rng` as the source.
pub fn uniform_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    tracing::trace!(n, "drawing uniform variates");
    (0..n).map(|_| open_unit(rng)).collect()
}

/// `n` standard normal draws via Box–Muller, using the platform generator.
///
/// # Examples
/// ```
/// use u_datakit::random::normal;
/// assert_eq!(normal(3).len(), 3);
/// ```
pub fn normal(n: usize) -> Vec<f64> {
    normal_with(n, &mut rand::rng())
}

/// `n` standard normal draws via Box–Muller, using `rng` as the source.
///
/// Output is consecutive `(z₁, z₂)` pairs in draw order. For odd `n` the
/// second output of the final transform is discarded.
pub fn normal_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    tracing::trace!(n, "drawing standard normal variates");
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let u1 = open_unit(rng);
        let u2 = open_unit(rng);
        let (z1, z2) = box_muller(u1, u2);
        out.push(z1);
        if out.len() < n {
            out.push(z2);
        }
    }
    out
}

/// `n` exponential (rate 1) draws using the platform generator.
///
/// # Examples
/// ```
/// use u_datakit::random::exponential;
/// let e = exponential(100);
/// assert_eq!(e.len(), 100);
/// assert!(e.iter().all(|&x| x > 0.0));
/// ```
pub fn exponential(n: usize) -> Vec<f64> {
    exponential_with(n, &mut rand::rng())
}

/// `n` exponential (rate 1) draws using `rng` as the source.
///
/// # Algorithm
/// Inverse-transform sampling: `e = −ln(u)` for `u ∈ (0, 1)`, which is
/// strictly positive and finite.
pub fn exponential_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    tracing::trace!(n, "drawing exponential variates");
    (0..n).map(|_| -open_unit(rng).ln()).collect()
}

// ============================================================================
// Tests
// ============================================================================
