// Reference values checked end to end through the public API.

use u_datakit::compare::is_close;
use u_datakit::random::{create_rng, exponential, exponential_with, normal, uniform};
use u_datakit::regression::fit;
use u_datakit::stats::{covariance, max, mean, min, prod, std_dev, sum, variance};
use u_datakit::StatsError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn floats() -> Vec<f64> {
    let mut v = Vec::with_capacity(30_000);
    for _ in 0..10_000 {
        v.extend_from_slice(&[0.1, 0.2, 0.3]);
    }
    v
}

// ============================================================================
// Aggregates
// ============================================================================

#[test]
fn test_is_close_reference() {
    assert!(is_close(0.0, 1e-15));
    assert!(!is_close(0.0, 1e-5));
}

#[test]
fn test_sum_reference() {
    let nums: Vec<f64> = (0..=10_000).map(f64::from).collect();
    assert_eq!(sum(&nums).unwrap(), 50_005_000.0);
    assert!(is_close(6000.0, sum(&floats()).unwrap()));
}

#[test]
fn test_mean_reference() {
    assert_eq!(mean(&[-10.0, 15.0, 25.0, 0.0, -5.0]).unwrap(), 5.0);
    assert!(is_close(0.2, mean(&floats()).unwrap()));
}

#[test]
fn test_prod_reference() {
    let nums: Vec<f64> = (1..=10).map(f64::from).collect();
    assert!(is_close(prod(&nums).unwrap(), 3_628_800.0));

    let mut mixed = vec![1e75];
    mixed.extend_from_slice(&floats()[..99]);
    assert!(is_close(prod(&mixed).unwrap(), 47.751_966_659_678_405));
}

#[test]
fn test_min_max_reference() {
    let nums = [10.0, -2.0, 23.0, 12.0, 43.0, 123213.0, 2.0];
    assert_eq!(max(&nums).unwrap(), 123213.0);
    assert_eq!(min(&nums).unwrap(), -2.0);
}

#[test]
fn test_dispersion_reference() {
    let nums = [-10.0, -5.0, 0.0, 5.0, 10.0];
    let nums_ = [0.0, 10.0, 20.0, 30.0, 40.0];
    assert_eq!(covariance(&nums, &nums_).unwrap(), 125.0);
    assert_eq!(variance(&nums).unwrap(), 62.5);
    assert_eq!(std_dev(&nums_).unwrap(), 250.0_f64.sqrt());
}

// ============================================================================
// Random variates
// ============================================================================

#[test]
fn test_generator_lengths() {
    assert_eq!(uniform(100).len(), 100);
    assert_eq!(normal(100).len(), 100);
    assert_eq!(exponential(100).len(), 100);
    assert_eq!(normal(3).len(), 3);
}

#[test]
fn test_uniform_boundaries() {
    let u = uniform(100);
    assert!(min(&u).unwrap() > 0.0);
    assert!(max(&u).unwrap() < 1.0);
}

#[test]
fn test_exponential_from_uniforms() {
    let e = exponential_with(100, &mut create_rng(99));
    for &x in &e {
        let u = (-x).exp();
        assert!(u > 0.0 && u < 1.0);
    }
}

// ============================================================================
// Regression
// ============================================================================

#[test]
fn test_regression_reference() {
    init_tracing();
    let model = fit(&[1.0, 2.0, 3.0, 5.0], &[2.0, 4.0, 6.0, 10.0]).unwrap();
    assert_eq!(model.predict(4.0), 8.0);
    assert_eq!(model.fitted_points()[0], 2.0);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[test]
fn test_error_kinds() {
    init_tracing();
    assert_eq!(sum(&[]), Err(StatsError::EmptyInput));
    assert!(matches!(
        variance(&[1.0]),
        Err(StatsError::InsufficientSample { .. })
    ));
    assert!(matches!(
        covariance(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(StatsError::LengthMismatch { .. })
    ));
    assert_eq!(
        fit(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]),
        Err(StatsError::DegenerateFit)
    );
}

#[test]
fn test_repeated_calls_identical() {
    let data = floats();
    assert_eq!(sum(&data), sum(&data));
    assert_eq!(variance(&data), variance(&data));
    assert_eq!(prod(&data[..50]), prod(&data[..50]));
}
