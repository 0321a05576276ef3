//! Swarm population state.
//!
//! [`Swarm`] is pure data: a fixed-size collection of [`Particle`]s plus the
//! best point found so far across the whole population. It is constructed
//! zero-filled with infinity sentinels; randomizing initial positions is the
//! optimizer's job, since only the optimizer knows the search bounds.

use serde::{Deserialize, Serialize};

use crate::error::{EnjambreError, Result};

/// One candidate solution, tracked by position and velocity vectors.
///
/// `best_position`/`best_value` record the lowest-objective point this
/// particle has ever visited. `best_value` starts at `f64::INFINITY` so the
/// first evaluation always improves it, and is non-increasing afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Current coordinates, one per search dimension.
    pub position: Vec<f64>,
    /// Current per-dimension step, applied additively each generation.
    pub velocity: Vec<f64>,
    /// Best point this particle has visited.
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`.
    pub best_value: f64,
}

impl Particle {
    fn zeroed(dimensions: usize) -> Self {
        Self {
            position: vec![0.0; dimensions],
            velocity: vec![0.0; dimensions],
            best_position: vec![0.0; dimensions],
            best_value: f64::INFINITY,
        }
    }
}

/// The full population plus the global best found so far.
///
/// The particle count is fixed at construction; the population is mutated in
/// place by the optimizer and never resized or reordered during a run.
/// `best_value <= min(particle.best_value)` holds after every completed
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swarm {
    /// The population, indexed positionally.
    pub particles: Vec<Particle>,
    /// Best point any particle has ever visited.
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`; `f64::INFINITY` until the first
    /// generation completes.
    pub best_value: f64,
}

impl Swarm {
    /// Create a zero-initialized swarm of `particles` particles in
    /// `dimensions` dimensions.
    ///
    /// All positions and velocities are zero and all best values are the
    /// infinity sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`EnjambreError::InvalidConfiguration`] if either count is
    /// zero.
    pub fn new(dimensions: usize, particles: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(EnjambreError::invalid_configuration(
                "dimensions",
                dimensions,
                "> 0",
            ));
        }
        if particles == 0 {
            return Err(EnjambreError::invalid_configuration(
                "particles",
                particles,
                "> 0",
            ));
        }

        Ok(Self {
            particles: (0..particles).map(|_| Particle::zeroed(dimensions)).collect(),
            best_position: vec![0.0; dimensions],
            best_value: f64::INFINITY,
        })
    }

    /// Search-space dimensionality.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.best_position.len()
    }

    /// Number of particles in the population.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the population is empty. Always false for a constructed
    /// swarm; present for API completeness alongside [`Swarm::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
