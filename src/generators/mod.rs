//! Population generators.
//!
//! A [`Generator`] fills the gaps: every dead slot receives a new genome,
//! every live slot is left alone. The same call therefore seeds a fresh
//! population (all slots dead) and replenishes one after selection.
//!
//! - [`FillGenerator`]: fresh genomes from an initializer function
//! - [`BreedingGenerator`]: varied clones of surviving candidates

mod breeding;
mod fill;

pub use breeding::BreedingGenerator;
pub use fill::FillGenerator;

use crate::core::{Fitness, Population};
use crate::error::ConfigError;

/// Fills dead population slots with new genomes.
///
/// After [`generate`](Generator::generate) returns, every candidate is
/// alive. Replaced candidates carry neutral fitness until the next
/// evaluation.
pub trait Generator<G, F: Fitness> {
    /// Replaces the genome of every dead candidate in place.
    fn generate(&mut self, population: &mut Population<G, F>);

    /// Checks the generator against the configured population size.
    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}
