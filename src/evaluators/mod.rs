//! Fitness evaluators.
//!
//! Two shapes of evaluation are supported:
//!
//! - **Independent**: each candidate's fitness depends only on its own
//!   genome ([`FnEvaluator`], [`MismatchEvaluator`],
//!   [`FixedMismatchEvaluator`], [`SimilarityEvaluator`],
//!   [`NullEvaluator`]). These run data-parallel over candidates.
//! - **Competitive**: contiguous groups of `N` candidates are scored
//!   together ([`CompetitiveEvaluator`]). Groups run in parallel, members
//!   of one group are scored sequentially.

mod competitive;
mod mismatch;
mod similarity;

pub use competitive::CompetitiveEvaluator;
pub use mismatch::{FixedMismatchEvaluator, MismatchEvaluator};
pub use similarity::SimilarityEvaluator;

use crate::core::{Candidate, Fitness, Population};
use crate::error::ConfigError;
use rayon::prelude::*;

/// Assigns fitness to every candidate of a population.
///
/// Evaluators only write the `fitness` field. Genomes and `alive` flags
/// are left as they are.
pub trait Evaluator<G, F: Fitness> {
    /// Scores the population in place.
    fn evaluate(&mut self, population: &mut Population<G, F>);

    /// Checks the evaluator against the configured population size.
    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Scores each candidate with `fitness(&mut candidate)`, in parallel when
/// enabled.
pub(crate) fn score_each<G, F, S>(population: &mut Population<G, F>, parallel: bool, score: S)
where
    G: Send + Sync,
    F: Fitness,
    S: Fn(&G) -> F + Send + Sync,
{
    let apply = |c: &mut Candidate<G, F>| c.fitness = score(&c.genome);
    if parallel {
        population.as_mut_slice().par_iter_mut().for_each(apply);
    } else {
        population.iter_mut().for_each(apply);
    }
}

/// Independent evaluator backed by a closure.
///
/// # Examples
///
/// ```
/// use u_evolve::core::Population;
/// use u_evolve::evaluators::{Evaluator, FnEvaluator};
///
/// let mut sum = FnEvaluator::new(|genes: &Vec<i32>| genes.iter().sum::<i32>());
/// let mut population: Population<Vec<i32>, i32> =
///     Population::from_genomes(vec![vec![1, 2], vec![3, 4]]);
/// sum.evaluate(&mut population);
/// assert_eq!(population[1].fitness, 7);
/// ```
pub struct FnEvaluator<E> {
    fitness: E,
    parallel: bool,
}

impl<E> FnEvaluator<E> {
    /// Wraps a fitness function.
    pub fn new(fitness: E) -> Self {
        Self {
            fitness,
            parallel: true,
        }
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl<G, F, E> Evaluator<G, F> for FnEvaluator<E>
where
    G: Send + Sync,
    F: Fitness,
    E: Fn(&G) -> F + Send + Sync,
{
    fn evaluate(&mut self, population: &mut Population<G, F>) {
        score_each(population, self.parallel, &self.fitness);
    }
}

/// Assigns the neutral fitness to every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvaluator;

impl<G, F: Fitness> Evaluator<G, F> for NullEvaluator {
    fn evaluate(&mut self, population: &mut Population<G, F>) {
        for c in population.iter_mut() {
            c.fitness = F::default();
        }
    }
}
