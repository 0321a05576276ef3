//! Enjambre: particle swarm optimization for bounded continuous search.
//!
//! A population-based stochastic minimizer for objectives that are
//! non-convex, non-differentiable, or otherwise hostile to gradient
//! methods. The swarm explores the box-bounded search space; each particle
//! is pulled toward its own best point and the best point the whole swarm
//! has found, with a linearly decreasing inertia weight shifting the search
//! from exploration to exploitation.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//! use enjambre::benchmarks::sphere;
//!
//! let config = PsoConfig::default()
//!     .with_particles(40)
//!     .with_iterations(200)
//!     .with_seed(42);
//!
//! let mut pso = ParticleSwarm::new(
//!     config,
//!     vec![-10.0; 5],
//!     vec![10.0; 5],
//!     sphere,
//! ).unwrap();
//!
//! let trace = pso.run();
//! assert_eq!(trace.len(), 200);
//!
//! let (solution, value) = pso.best();
//! assert_eq!(solution.len(), 5);
//! assert!(value < 0.1);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate the swarm on the rayon thread pool. Only the
//!   evaluation phase is parallelized; best tracking is folded in particle
//!   order, so seeded runs match the serial build bit for bit. Requires
//!   the objective to be `Sync`.
//!
//! # Modules
//!
//! - [`pso`]: the optimizer and its configuration
//! - [`swarm`]: population state (particles, personal and global bests)
//! - [`benchmarks`]: standard test objectives (sphere, Rosenbrock, ...)
//! - [`error`]: error types

pub mod benchmarks;
pub mod error;
pub mod prelude;
pub mod pso;
pub mod swarm;

pub use error::{EnjambreError, Result};
pub use pso::{BoundaryPolicy, Objective, ParticleSwarm, PsoConfig};
pub use swarm::{Particle, Swarm};
