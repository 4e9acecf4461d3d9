//! Error-count evaluators against a fixed target.
//!
//! Fitness is the number of error points, so lower is better and the
//! target itself scores zero. Pair these with `natural = false` selection.

use super::{score_each, Evaluator};
use crate::core::{Fitness, FixedWidthGenome, Population, SequenceGenome};
use crate::error::ConfigError;

/// Counts mismatches between a variable-length genome and a target.
///
/// Error points:
///
/// 1. +1 for every position `i < min(len)` where the genes differ.
/// 2. +|len(target) − len(genome)| for the length difference.
///
/// # Examples
///
/// ```
/// use u_evolve::core::Population;
/// use u_evolve::evaluators::{Evaluator, MismatchEvaluator};
///
/// let mut evaluator = MismatchEvaluator::new("goose".to_string());
/// let mut population: Population<String> =
///     Population::from_genomes(["go".to_string(), "goose".to_string()]);
/// evaluator.evaluate(&mut population);
///
/// assert_eq!(population[0].fitness, 3.0);
/// assert_eq!(population[1].fitness, 0.0);
/// ```
pub struct MismatchEvaluator<G: SequenceGenome> {
    target: Vec<G::Gene>,
    parallel: bool,
}

impl<G: SequenceGenome> MismatchEvaluator<G> {
    /// Creates an evaluator for the given target genome.
    pub fn new(target: G) -> Self {
        Self {
            target: target.genes().into_owned(),
            parallel: true,
        }
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Error points of a single genome.
    pub fn mismatches(&self, genome: &G) -> usize {
        let genes = genome.genes();
        let shared = genes.len().min(self.target.len());
        let differing = self.target[..shared]
            .iter()
            .zip(&genes[..shared])
            .filter(|(t, g)| t != g)
            .count();
        differing + self.target.len().abs_diff(genes.len())
    }
}

impl<G, F> Evaluator<G, F> for MismatchEvaluator<G>
where
    G: SequenceGenome,
    F: Fitness,
{
    fn evaluate(&mut self, population: &mut Population<G, F>) {
        let this = &*self;
        score_each(population, self.parallel, |genome| {
            F::from_count(this.mismatches(genome))
        });
    }

    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyGenome);
        }
        Ok(())
    }
}

/// Counts mismatching positions between a fixed-width genome and a target.
///
/// Each position is compared with [`FixedWidthGenome::gene_eq`]; the loop
/// bound is the compile-time arity, so it unrolls for small genomes.
pub struct FixedMismatchEvaluator<G> {
    target: G,
    parallel: bool,
}

impl<G: FixedWidthGenome> FixedMismatchEvaluator<G> {
    /// Creates an evaluator for the given target genome.
    pub fn new(target: G) -> Self {
        Self {
            target,
            parallel: true,
        }
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Error points of a single genome.
    pub fn mismatches(&self, genome: &G) -> usize {
        (0..G::ARITY)
            .filter(|&i| !self.target.gene_eq(genome, i))
            .count()
    }
}

impl<G, F> Evaluator<G, F> for FixedMismatchEvaluator<G>
where
    G: FixedWidthGenome,
    F: Fitness,
{
    fn evaluate(&mut self, population: &mut Population<G, F>) {
        let this = &*self;
        score_each(population, self.parallel, |genome| {
            F::from_count(this.mismatches(genome))
        });
    }

    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        if G::ARITY == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duck_population<G: Clone>(duck: G, goose: G) -> Population<G, f64> {
        let mut genomes = vec![duck; 4];
        genomes.push(goose);
        Population::from_genomes(genomes)
    }

    #[test]
    fn test_fixed_array_mismatch() {
        let target = ['g', 'o', 'o', 's', 'e'];
        let mut evaluator = FixedMismatchEvaluator::new(target);
        let mut pop = duck_population(['d', 'u', 'c', 'k', 'k'], target);

        evaluator.evaluate(&mut pop);

        for c in pop.iter().take(4) {
            assert_eq!(c.fitness, 5.0);
        }
        assert_eq!(pop[4].fitness, 0.0);
    }

    #[test]
    fn test_fixed_tuple_mismatch() {
        let target = (99, 3.25, 'c');
        let mut evaluator = FixedMismatchEvaluator::new(target).with_parallel(false);
        let mut pop = duck_population((98, 3.0, 'a'), target);

        evaluator.evaluate(&mut pop);

        assert!(pop.iter().take(4).all(|c| c.fitness == 3.0));
        assert_eq!(pop[4].fitness, 0.0);
    }

    #[test]
    fn test_sequence_mismatch_strings() {
        let mut evaluator = MismatchEvaluator::new("goose".to_string());
        let mut pop = duck_population("duck".to_string(), "goose".to_string());

        evaluator.evaluate(&mut pop);

        // "duck" vs "goose": 4 differing positions + 1 length point.
        assert!(pop.iter().take(4).all(|c| c.fitness == 5.0));
        assert_eq!(pop[4].fitness, 0.0);
    }

    #[test]
    fn test_sequence_length_penalty() {
        let evaluator = MismatchEvaluator::new("goose".to_string());
        assert_eq!(evaluator.mismatches(&"go".to_string()), 3);
        assert_eq!(evaluator.mismatches(&"gooseberry".to_string()), 5);
        assert_eq!(evaluator.mismatches(&String::new()), 5);
    }

    #[test]
    fn test_integer_fitness() {
        let mut evaluator = MismatchEvaluator::new(vec![1, 2, 3]);
        let mut pop: Population<Vec<i32>, u32> =
            Population::from_genomes(vec![vec![1, 0, 3], vec![1, 2, 3, 4]]);

        evaluator.evaluate(&mut pop);

        assert_eq!(pop[0].fitness, 1);
        assert_eq!(pop[1].fitness, 1);
    }

    #[test]
    fn test_empty_target_rejected() {
        let evaluator = MismatchEvaluator::new(String::new());
        let result = <MismatchEvaluator<String> as Evaluator<String, f64>>::validate(&evaluator, 10);
        assert_eq!(result, Err(ConfigError::EmptyGenome));
    }
}
