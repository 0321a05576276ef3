//! Convenience re-exports for the common path.
//!
//! ```
//! use enjambre::prelude::*;
//!
//! let config = PsoConfig::default().with_seed(42);
//! # let _ = config;
//! ```

pub use crate::error::{EnjambreError, Result};
pub use crate::pso::{BoundaryPolicy, Objective, ParticleSwarm, PsoConfig};
pub use crate::swarm::{Particle, Swarm};
