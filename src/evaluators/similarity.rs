//! Match-ratio evaluator.

use super::{score_each, Evaluator};
use crate::core::{Population, SequenceGenome};
use crate::error::ConfigError;

/// Scores a genome by the fraction of positions that match a target.
///
/// Fitness lies in `[0, 1]` and higher is better, so this evaluator is the
/// maximizing counterpart of [`MismatchEvaluator`](super::MismatchEvaluator)
/// and is meant for `natural = true` selection. A genome whose length
/// differs from the target scores `0.0`.
pub struct SimilarityEvaluator<G: SequenceGenome> {
    target: Vec<G::Gene>,
    parallel: bool,
}

impl<G: SequenceGenome> SimilarityEvaluator<G> {
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

    /// Match ratio of a single genome.
    pub fn similarity(&self, genome: &G) -> f64 {
        let genes = genome.genes();
        if genes.len() != self.target.len() || genes.is_empty() {
            return 0.0;
        }
        let matches = genes
            .iter()
            .zip(&self.target)
            .filter(|(g, t)| g == t)
            .count();
        matches as f64 / self.target.len() as f64
    }
}

impl<G: SequenceGenome> Evaluator<G, f64> for SimilarityEvaluator<G> {
    fn evaluate(&mut self, population: &mut Population<G, f64>) {
        let this = &*self;
        score_each(population, self.parallel, |genome| this.similarity(genome));
    }

    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyGenome);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let evaluator = SimilarityEvaluator::new("target".to_string());
        assert!((evaluator.similarity(&"target".to_string()) - 1.0).abs() < 1e-12);
        assert!((evaluator.similarity(&"tarxxx".to_string()) - 0.5).abs() < 1e-12);
        assert_eq!(evaluator.similarity(&"short".to_string()), 0.0);
    }

    #[test]
    fn test_evaluate_population() {
        let mut evaluator = SimilarityEvaluator::new("target".to_string());
        let mut pop: Population<String> = Population::from_genomes([
            "short".to_string(),
            "short".to_string(),
            "target".to_string(),
        ]);

        evaluator.evaluate(&mut pop);

        assert_eq!(pop[0].fitness, 0.0);
        assert_eq!(pop[1].fitness, 0.0);
        assert_eq!(pop[2].fitness, 1.0);
    }
}
