//! Survivor selection.
//!
//! A [`Selector`] decides which candidates live on into the next
//! generation by setting their `alive` flag. Genomes and fitness values
//! are never touched.
//!
//! The `natural` flag fixes the direction of optimization for one call:
//!
//! - `natural = true`: higher fitness is better (maximization)
//! - `natural = false`: lower fitness is better (minimization of an error
//!   count), achieved by inverting the weights

mod roulette;

pub use roulette::RouletteSelector;

use crate::core::{Fitness, Population};
use crate::error::ConfigError;

/// Marks a subset of a population as survivors.
pub trait Selector<G, F: Fitness> {
    /// Clears every `alive` flag, then marks `min(count, len)` distinct
    /// candidates alive.
    fn select(&mut self, population: &mut Population<G, F>, count: usize, natural: bool);

    /// Checks the selector against the configured population size.
    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}
