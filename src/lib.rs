//! # u-datakit
//!
//! Numerically robust statistics toolkit for the U-Engine ecosystem.
//!
//! Aggregates over `f64` slices, random variates from standard
//! distributions, and a least-squares line fit. Every routine is a pure,
//! synchronous function of its inputs.
//!
//! ## Modules
//!
//! - [`compare`] — Approximate equality with relative/absolute tolerance
//! - [`stats`] — Compensated sum and mean, min/max, log-domain product,
//!   sample variance, standard deviation, covariance
//! - [`random`] — Uniform, Box–Muller normal, and inverse-transform
//!   exponential variates, optionally from a seeded source
//! - [`regression`] — Ordinary least-squares line fit
//!
//! ## Design Philosophy
//!
//! - **Numerical stability first**: compensated summation for every sum,
//!   log-domain accumulation for products
//! - **Errors, not sentinels**: empty or undersized input is a
//!   [`StatsError`], never a silent `NaN` or `0.0`
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod compare;
pub mod error;
pub mod random;
pub mod regression;
pub mod stats;

pub use error::{StatsError, StatsResult};
