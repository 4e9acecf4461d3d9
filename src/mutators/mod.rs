//! Genetic operators.
//!
//! A [`Mutator`] rewrites the genomes of live candidates in place. It
//! never changes fitness or `alive` flags; the next evaluation rescores
//! whatever it produced.
//!
//! - [`PassThrough`]: identity
//! - [`FixedCrossover`]: masked gene swap for arrays and tuples
//! - [`SequenceCrossover`]: multi-point splice for strings and vectors
//! - [`Transition`]: per-gene replacement from an alphabet
//! - [`Pipeline`]: ordered composition of any of the above

mod crossover;
mod pipeline;
mod transition;

pub use crossover::{CrossoverMask, FixedCrossover, SequenceCrossover};
pub use pipeline::Pipeline;
pub use transition::Transition;

use crate::core::{Fitness, Population};
use crate::error::ConfigError;

/// Transforms the genomes of live candidates.
pub trait Mutator<G, F: Fitness>: Send {
    /// Applies the operator to the population in place.
    fn mutate(&mut self, population: &mut Population<G, F>);

    /// Checks the operator against the configured population size.
    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// The identity operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<G, F: Fitness> Mutator<G, F> for PassThrough {
    fn mutate(&mut self, _population: &mut Population<G, F>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_is_identity() {
        let mut pop: Population<(i32, f64, char)> = Population::from_genomes([
            (1, 1.0, 'a'),
            (2, 2.0, 'b'),
            (3, 3.0, 'c'),
        ]);
        pop[1].alive = false;
        let before = pop.clone();

        for _ in 0..5 {
            PassThrough.mutate(&mut pop);
        }

        assert_eq!(pop, before);
    }
}
