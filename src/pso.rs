//! Particle Swarm Optimization (PSO).
//!
//! A population-based metaheuristic for bounded continuous minimization.
//!
//! # Algorithm
//!
//! ```text
//! For each generation g:
//!   Phase A (evaluate): for each particle
//!     value = f(position)
//!     update personal best and global best on strict improvement
//!   Phase B (move): with inertia w(g) shared by the generation,
//!     for each particle, for each dimension i, fresh r1, r2 ~ U[0,1):
//!       v[i] = w·v[i] + c1·r1·(pbest[i] - x[i]) + c2·r2·(gbest[i] - x[i])
//!       clamp v[i] to ±0.2·(upper[i] - lower[i])
//!       x[i] += v[i], clamp x[i] to [lower[i], upper[i]]
//! ```
//!
//! The inertia weight decreases linearly from `inertia_max` at generation 0
//! toward `inertia_min`, trading early exploration for late exploitation.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle Swarm Optimization"
//! - Shi & Eberhart (1998): "A Modified Particle Swarm Optimizer"
//!   (linearly decreasing inertia weight)

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EnjambreError, Result};
use crate::swarm::Swarm;

/// Fraction of the per-dimension search range used as the velocity limit.
const VELOCITY_RANGE_FRACTION: f64 = 0.2;

/// The objective function: maps a candidate position to the value being
/// minimized.
///
/// Blanket-implemented for every `Fn(&[f64]) -> f64`. With the `parallel`
/// feature enabled the evaluation phase calls the objective from multiple
/// threads, so `Sync` is required as well; a plain `fn` or a closure over
/// shared-immutable state satisfies both.
#[cfg(feature = "parallel")]
pub trait Objective: Fn(&[f64]) -> f64 + Sync {}

#[cfg(feature = "parallel")]
impl<F> Objective for F where F: Fn(&[f64]) -> f64 + Sync {}

/// The objective function: maps a candidate position to the value being
/// minimized.
///
/// Blanket-implemented for every `Fn(&[f64]) -> f64`. With the `parallel`
/// feature enabled the evaluation phase calls the objective from multiple
/// threads, so `Sync` is required as well; a plain `fn` or a closure over
/// shared-immutable state satisfies both.
#[cfg(not(feature = "parallel"))]
pub trait Objective: Fn(&[f64]) -> f64 {}

#[cfg(not(feature = "parallel"))]
impl<F> Objective for F where F: Fn(&[f64]) -> f64 {}

/// What happens to a particle that steps outside the search box.
///
/// Either way the position is clamped back onto the boundary; the policies
/// differ in what happens to the velocity component that pushed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Clamp the position and keep the velocity. The classical behavior: a
    /// particle can keep pushing against a wall for several generations
    /// until the social/cognitive terms pull it back inside.
    #[default]
    Clamp,

    /// Clamp the position and zero the offending velocity component, so the
    /// particle stops at the wall instead of pressing into it.
    ClampAndZeroVelocity,
}

/// PSO hyperparameters.
///
/// Defaults follow the common textbook setup: 10 particles, 500
/// generations, inertia scheduled over `[0.2, 0.9]`, c1 = c2 = 2.0.
///
/// # Example
///
/// ```
/// use enjambre::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_particles(40)
///     .with_iterations(200)
///     .with_seed(42);
/// assert_eq!(config.particles, 40);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsoConfig {
    /// Population size (default: 10)
    pub particles: usize,

    /// Number of generations `run` executes (default: 500)
    pub iterations: usize,

    /// Inertia weight at the end of the schedule (default: 0.2)
    pub inertia_min: f64,

    /// Inertia weight at generation 0 (default: 0.9)
    pub inertia_max: f64,

    /// Cognitive coefficient c1, attraction toward the personal best
    /// (default: 2.0)
    pub cognitive: f64,

    /// Social coefficient c2, attraction toward the global best
    /// (default: 2.0)
    pub social: f64,

    /// Boundary handling policy (default: [`BoundaryPolicy::Clamp`])
    pub boundary: BoundaryPolicy,

    /// Random seed for reproducibility
    #[serde(default)]
    seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particles: 10,
            iterations: 500,
            inertia_min: 0.2,
            inertia_max: 0.9,
            cognitive: 2.0,
            social: 2.0,
            boundary: BoundaryPolicy::default(),
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Create a config with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size.
    #[must_use]
    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    /// Set the generation budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the inertia weight schedule endpoints.
    #[must_use]
    pub fn with_inertia(mut self, min: f64, max: f64) -> Self {
        self.inertia_min = min;
        self.inertia_max = max;
        self
    }

    /// Set the cognitive (c1) and social (c2) coefficients.
    #[must_use]
    pub fn with_coefficients(mut self, cognitive: f64, social: f64) -> Self {
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Set the boundary handling policy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Particle Swarm optimizer over a box-bounded continuous search space.
///
/// Owns the configuration, the objective, the random source, and the
/// [`Swarm`] it mutates. One optimizer drives one run; construct a fresh
/// optimizer per concurrent run.
///
/// With the `parallel` cargo feature enabled, the evaluation phase calls
/// the objective across the rayon thread pool while best tracking stays
/// sequential, so a seeded run produces the same trajectory as the serial
/// build.
///
/// # Example
///
/// ```
/// use enjambre::pso::{ParticleSwarm, PsoConfig};
///
/// // Sphere function: f(x) = Σxᵢ²
/// let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
///
/// let config = PsoConfig::default().with_particles(40).with_seed(42);
/// let mut pso =
///     ParticleSwarm::new(config, vec![-5.0; 3], vec![5.0; 3], objective).unwrap();
/// pso.run();
///
/// let (solution, value) = pso.best();
/// assert_eq!(solution.len(), 3);
/// assert!(value < 1e-2);
/// ```
pub struct ParticleSwarm<F>
where
    F: Objective,
{
    config: PsoConfig,
    lower: Vec<f64>,
    upper: Vec<f64>,
    velocity_min: Vec<f64>,
    velocity_max: Vec<f64>,
    objective: F,
    swarm: Swarm,
    rng: StdRng,
    history: Vec<f64>,
}

impl<F> std::fmt::Debug for ParticleSwarm<F>
where
    F: Objective,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSwarm")
            .field("config", &self.config)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("velocity_min", &self.velocity_min)
            .field("velocity_max", &self.velocity_max)
            .field("objective", &"<objective>")
            .field("swarm", &self.swarm)
            .field("rng", &self.rng)
            .field("history", &self.history)
            .finish()
    }
}

impl<F> ParticleSwarm<F>
where
    F: Objective,
{
    /// Create an optimizer and randomize the initial population.
    ///
    /// Each position coordinate is drawn independently as
    /// `lower[i] + u · (upper[i] - lower[i])` with `u` uniform in `[0, 1)`;
    /// velocities start at zero and bests at the infinity sentinel, to be
    /// populated by the first generation of [`run`](Self::run). Velocity is
    /// limited per dimension to ±0.2 of the range width, the standard
    /// heuristic damping the maximum step size.
    ///
    /// # Errors
    ///
    /// Returns [`EnjambreError::InvalidConfiguration`] if the particle or
    /// iteration count is zero, the bound vectors are empty or of unequal
    /// length, or `lower[i] > upper[i]` for any dimension.
    pub fn new(config: PsoConfig, lower: Vec<f64>, upper: Vec<f64>, objective: F) -> Result<Self> {
        if config.iterations == 0 {
            return Err(EnjambreError::invalid_configuration(
                "iterations",
                config.iterations,
                "> 0",
            ));
        }
        if upper.len() != lower.len() {
            return Err(EnjambreError::invalid_configuration(
                "upper_bound.len()",
                upper.len(),
                &format!("== lower_bound.len() ({})", lower.len()),
            ));
        }
        for (i, (lo, hi)) in lower.iter().zip(&upper).enumerate() {
            if lo > hi {
                return Err(EnjambreError::invalid_configuration(
                    &format!("lower_bound[{i}]"),
                    lo,
                    &format!("<= upper_bound[{i}] ({hi})"),
                ));
            }
        }

        // Rejects zero dimensions / zero particles.
        let mut swarm = Swarm::new(lower.len(), config.particles)?;

        let velocity_max: Vec<f64> = lower
            .iter()
            .zip(&upper)
            .map(|(lo, hi)| VELOCITY_RANGE_FRACTION * (hi - lo))
            .collect();
        let velocity_min: Vec<f64> = velocity_max.iter().map(|v| -v).collect();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        for particle in &mut swarm.particles {
            for (x, (lo, hi)) in particle.position.iter_mut().zip(lower.iter().zip(&upper)) {
                let u: f64 = rng.random();
                *x = lo + u * (hi - lo);
            }
        }

        Ok(Self {
            config,
            lower,
            upper,
            velocity_min,
            velocity_max,
            objective,
            swarm,
            rng,
            history: Vec::new(),
        })
    }

    /// Run the configured number of generations and return the
    /// per-generation global-best trace.
    ///
    /// Always executes the full iteration budget; there is no early
    /// stopping. A panic from the objective aborts the run and propagates.
    pub fn run(&mut self) -> &[f64] {
        self.run_observed(|_, _| {})
    }

    /// Like [`run`](Self::run), invoking `observer` with the generation
    /// index and a view of the swarm after each completed generation.
    ///
    /// The observer is a reporting hook; it cannot stop the run, so the
    /// fixed-budget behavior is preserved.
    pub fn run_observed<C>(&mut self, mut observer: C) -> &[f64]
    where
        C: FnMut(usize, &Swarm),
    {
        self.history.reserve(self.config.iterations);
        for generation in 0..self.config.iterations {
            self.evaluate();
            self.advance(generation);
            self.history.push(self.swarm.best_value);
            observer(generation, &self.swarm);
        }
        &self.history
    }

    /// Current global best as `(position, value)`.
    ///
    /// Before the first generation this is the infinity sentinel paired
    /// with a zero vector, which callers must read as "no result yet".
    #[must_use]
    pub fn best(&self) -> (&[f64], f64) {
        (&self.swarm.best_position, self.swarm.best_value)
    }

    /// Read-only view of the population.
    #[must_use]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Global best value after each completed generation, oldest first.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Per-dimension velocity limits as `(min, max)`.
    #[must_use]
    pub fn velocity_bounds(&self) -> (&[f64], &[f64]) {
        (&self.velocity_min, &self.velocity_max)
    }

    /// The configuration this optimizer was built with.
    #[must_use]
    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Phase A: evaluate every particle and fold strict improvements into
    /// the personal and global bests.
    ///
    /// Values are computed first (in parallel under the `parallel` feature)
    /// and the bests folded sequentially in particle order, so the result
    /// is identical either way.
    fn evaluate(&mut self) {
        let values = self.evaluate_values();

        let Swarm {
            particles,
            best_position,
            best_value,
        } = &mut self.swarm;

        for (particle, value) in particles.iter_mut().zip(values) {
            // Strict `<`: ties never overwrite an earlier best.
            if value < particle.best_value {
                particle.best_value = value;
                particle.best_position.clone_from(&particle.position);
            }
            if value < *best_value {
                *best_value = value;
                best_position.clone_from(&particle.position);
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn evaluate_values(&self) -> Vec<f64> {
        use rayon::prelude::*;

        let objective = &self.objective;
        self.swarm
            .particles
            .par_iter()
            .map(|particle| objective(&particle.position))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_values(&self) -> Vec<f64> {
        self.swarm
            .particles
            .iter()
            .map(|particle| (self.objective)(&particle.position))
            .collect()
    }

    /// Phase B: move every particle, reading the global best finalized by
    /// this generation's Phase A.
    fn advance(&mut self, generation: usize) {
        let w = self.config.inertia_max
            - (self.config.inertia_max - self.config.inertia_min) * generation as f64
                / self.config.iterations as f64;
        let c1 = self.config.cognitive;
        let c2 = self.config.social;
        let zero_on_clamp = self.config.boundary == BoundaryPolicy::ClampAndZeroVelocity;

        let Swarm {
            particles,
            best_position,
            ..
        } = &mut self.swarm;

        for particle in particles.iter_mut() {
            for i in 0..self.lower.len() {
                // Two fresh draws per particle per dimension, r1 before r2.
                let r1: f64 = self.rng.random();
                let r2: f64 = self.rng.random();

                let mut v = w * particle.velocity[i]
                    + c1 * r1 * (particle.best_position[i] - particle.position[i])
                    + c2 * r2 * (best_position[i] - particle.position[i]);
                v = v.clamp(self.velocity_min[i], self.velocity_max[i]);

                let mut x = particle.position[i] + v;
                if x < self.lower[i] {
                    x = self.lower[i];
                    if zero_on_clamp {
                        v = 0.0;
                    }
                } else if x > self.upper[i] {
                    x = self.upper[i];
                    if zero_on_clamp {
                        v = 0.0;
                    }
                }

                particle.velocity[i] = v;
                particle.position[i] = x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    #[test]
    fn test_config_builder() {
        let config = PsoConfig::new()
            .with_particles(30)
            .with_iterations(100)
            .with_inertia(0.4, 0.9)
            .with_coefficients(1.5, 1.7)
            .with_boundary(BoundaryPolicy::ClampAndZeroVelocity)
            .with_seed(7);
        assert_eq!(config.particles, 30);
        assert_eq!(config.iterations, 100);
        assert!((config.inertia_min - 0.4).abs() < 1e-12);
        assert!((config.cognitive - 1.5).abs() < 1e-12);
        assert!((config.social - 1.7).abs() < 1e-12);
        assert_eq!(config.boundary, BoundaryPolicy::ClampAndZeroVelocity);
    }

    #[test]
    fn test_rejects_zero_particles() {
        let config = PsoConfig::default().with_particles(0);
        let err = ParticleSwarm::new(config, vec![-1.0], vec![1.0], sphere).unwrap_err();
        assert!(err.to_string().contains("particles"));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let config = PsoConfig::default().with_iterations(0);
        let err = ParticleSwarm::new(config, vec![-1.0], vec![1.0], sphere).unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn test_rejects_empty_bounds() {
        let err = ParticleSwarm::new(PsoConfig::default(), vec![], vec![], sphere).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn test_rejects_mismatched_bounds() {
        let err = ParticleSwarm::new(PsoConfig::default(), vec![-1.0, -1.0], vec![1.0], sphere)
            .unwrap_err();
        assert!(err.to_string().contains("upper_bound.len()"));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = ParticleSwarm::new(
            PsoConfig::default(),
            vec![-1.0, 2.0],
            vec![1.0, -2.0],
            sphere,
        )
        .unwrap_err();
        assert!(err.to_string().contains("lower_bound[1]"));
    }

    #[test]
    fn test_best_before_run_is_sentinel() {
        let config = PsoConfig::default().with_seed(1);
        let pso = ParticleSwarm::new(config, vec![-1.0; 4], vec![1.0; 4], sphere).unwrap();
        let (position, value) = pso.best();
        assert!(value.is_infinite());
        assert_eq!(position, vec![0.0; 4]);
        assert!(pso.history().is_empty());
    }

    #[test]
    fn test_initial_positions_within_bounds() {
        let config = PsoConfig::default().with_particles(50).with_seed(3);
        let pso = ParticleSwarm::new(config, vec![-3.0, 10.0], vec![-1.0, 20.0], sphere).unwrap();
        for particle in &pso.swarm().particles {
            assert!((-3.0..-1.0).contains(&particle.position[0]));
            assert!((10.0..20.0).contains(&particle.position[1]));
            assert_eq!(particle.velocity, vec![0.0, 0.0]);
        }
    }

    #[test]
    fn test_velocity_bounds_are_range_fraction() {
        let config = PsoConfig::default().with_seed(3);
        let pso = ParticleSwarm::new(config, vec![0.0, -5.0], vec![10.0, 5.0], sphere).unwrap();
        let (vmin, vmax) = pso.velocity_bounds();
        assert!((vmax[0] - 2.0).abs() < 1e-12);
        assert!((vmin[0] + 2.0).abs() < 1e-12);
        assert!((vmax[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_run_returns_full_trace() {
        let config = PsoConfig::default().with_iterations(25).with_seed(9);
        let mut pso = ParticleSwarm::new(config, vec![-5.0; 2], vec![5.0; 2], sphere).unwrap();
        let trace = pso.run();
        assert_eq!(trace.len(), 25);
    }

    #[test]
    fn test_pso_minimizes_sphere() {
        let config = PsoConfig::default()
            .with_particles(40)
            .with_iterations(300)
            .with_seed(42);
        let mut pso = ParticleSwarm::new(config, vec![-5.0; 3], vec![5.0; 3], sphere).unwrap();
        pso.run();
        let (_, value) = pso.best();
        assert!(value < 1e-2, "sphere best {value} >= 1e-2");
    }

    #[test]
    fn test_zero_velocity_boundary_policy_stops_at_wall() {
        // Minimum far outside the box pushes the swarm against a wall.
        let objective = |x: &[f64]| (x[0] - 100.0).powi(2);
        let config = PsoConfig::default()
            .with_particles(20)
            .with_iterations(50)
            .with_boundary(BoundaryPolicy::ClampAndZeroVelocity)
            .with_seed(5);
        let mut pso = ParticleSwarm::new(config, vec![-1.0], vec![1.0], objective).unwrap();
        pso.run();
        for particle in &pso.swarm().particles {
            assert!(particle.position[0] <= 1.0);
        }
        let (solution, _) = pso.best();
        assert!((solution[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = PsoConfig::default().with_particles(25).with_seed(11);
        let json = serde_json::to_string(&config).unwrap();
        let back: PsoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.particles, 25);
        assert_eq!(back.iterations, config.iterations);
        assert_eq!(back.boundary, BoundaryPolicy::Clamp);
    }
}
