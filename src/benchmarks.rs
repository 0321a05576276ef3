//! Standard benchmark objectives for swarm evaluation.
//!
//! The usual single-objective test functions, all minimization problems
//! with known optima. Useful both for exercising the optimizer in tests and
//! as ready-made objectives for callers comparing parameter settings.

use std::f64::consts::PI;

/// Sphere function - unimodal, separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::sphere;
/// assert!(sphere(&[0.0, 0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock function - unimodal, non-separable, narrow curved valley.
///
/// Global minimum: f(1, 1, ..., 1) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::rosenbrock;
/// assert!(rosenbrock(&[1.0, 1.0, 1.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin function - multimodal, separable, regular lattice of local
/// minima.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::rastrigin;
/// assert!(rastrigin(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley function - multimodal, non-separable, nearly flat outer region.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::ackley;
/// assert!(ackley(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}

/// Griewank function - multimodal, non-separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::griewank;
/// assert!(griewank(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - prod + 1.0
}
