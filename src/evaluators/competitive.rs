//! Grouped (competitive) evaluation.

use super::Evaluator;
use crate::core::{Candidate, Fitness, Population};
use crate::error::ConfigError;
use rayon::prelude::*;

/// Scores candidates in contiguous groups of `N`.
///
/// The population is cut into groups `[0, N)`, `[N, 2N)`, ... and the
/// `compete` function receives each group as a mutable array. It decides
/// the fitness of all members together, for example by transferring score
/// from the loser of a pairwise match to the winner.
///
/// Groups are independent of each other and run in parallel when enabled;
/// a single group is always scored by one call.
///
/// If the population length is not a multiple of `N`, the trailing partial
/// group is skipped and keeps its previous fitness. A
/// [`Simulation`](crate::simulation::Simulation) rejects such a setup at
/// construction through [`validate`](Evaluator::validate).
///
/// Fitness is not reset between calls. Scoring functions that adjust
/// rather than assign fitness accumulate across generations.
///
/// # Examples
///
/// ```
/// use u_evolve::core::{Candidate, Population};
/// use u_evolve::evaluators::{CompetitiveEvaluator, Evaluator};
///
/// let mut duel = CompetitiveEvaluator::new(|pair: &mut [Candidate<i32, f64>; 2]| {
///     let (winner, loser) = if pair[0].genome >= pair[1].genome { (0, 1) } else { (1, 0) };
///     pair[winner].fitness = 1.0;
///     pair[loser].fitness = 0.0;
/// });
///
/// let mut population: Population<i32> = Population::from_genomes([3, 8, 5, 1]);
/// duel.evaluate(&mut population);
/// assert_eq!(population.fitness_values(), vec![0.0, 1.0, 1.0, 0.0]);
/// ```
pub struct CompetitiveEvaluator<C, const N: usize> {
    compete: C,
    parallel: bool,
}

impl<C, const N: usize> CompetitiveEvaluator<C, N> {
    /// Wraps a group scoring function.
    pub fn new(compete: C) -> Self {
        Self {
            compete,
            parallel: true,
        }
    }

    /// Enables or disables parallel evaluation of groups.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl<G, F, C, const N: usize> Evaluator<G, F> for CompetitiveEvaluator<C, N>
where
    G: Send,
    F: Fitness,
    C: Fn(&mut [Candidate<G, F>; N]) + Send + Sync,
{
    fn evaluate(&mut self, population: &mut Population<G, F>) {
        if N == 0 {
            return;
        }
        let compete = &self.compete;
        let play = |chunk: &mut [Candidate<G, F>]| {
            if let Ok(group) = <&mut [Candidate<G, F>; N]>::try_from(chunk) {
                compete(group);
            }
        };

        if self.parallel {
            population
                .as_mut_slice()
                .par_chunks_exact_mut(N)
                .for_each(play);
        } else {
            population.chunks_exact_mut(N).for_each(play);
        }
    }

    fn validate(&self, population_size: usize) -> Result<(), ConfigError> {
        if N < 2 {
            return Err(ConfigError::GroupSizeTooSmall { size: N });
        }
        if population_size % N != 0 {
            return Err(ConfigError::GroupSizeMismatch {
                population: population_size,
                group: N,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pairwise score transfer: the larger genome takes half of the
    /// smaller one's value from it.
    fn transfer(pair: &mut [Candidate<i32, f64>; 2]) {
        let [a, b] = pair;
        if a.genome > b.genome {
            a.fitness += (b.genome / 2) as f64;
            b.fitness -= (a.genome / 2) as f64;
        } else {
            a.fitness -= (b.genome / 2) as f64;
            b.fitness += (a.genome / 2) as f64;
        }
    }

    #[test]
    fn test_pairwise_transfer() {
        let mut evaluator = CompetitiveEvaluator::new(transfer).with_parallel(false);
        let mut pop: Population<i32> = Population::from_genomes([10, 4, 2, 6]);

        evaluator.evaluate(&mut pop);

        assert_eq!(pop.fitness_values(), vec![2.0, -5.0, -3.0, 1.0]);
    }

    #[test]
    fn test_trailing_group_untouched() {
        let mut evaluator = CompetitiveEvaluator::new(transfer);
        let mut pop: Population<i32> = Population::new(vec![
            Candidate::new(10),
            Candidate::new(4),
            Candidate::with_fitness(8, 42.0),
        ]);

        evaluator.evaluate(&mut pop);

        assert_eq!(pop[2].fitness, 42.0);
        assert_eq!(pop[0].fitness, 2.0);
    }

    #[test]
    fn test_triples() {
        let mut evaluator = CompetitiveEvaluator::new(|group: &mut [Candidate<u32, u32>; 3]| {
            let total: u32 = group.iter().map(|c| c.genome).sum();
            for c in group.iter_mut() {
                c.fitness = total;
            }
        });
        let mut pop: Population<u32, u32> = Population::from_genomes(1..=6);

        evaluator.evaluate(&mut pop);

        assert_eq!(pop.fitness_values(), vec![6.0, 6.0, 6.0, 15.0, 15.0, 15.0]);
    }

    #[test]
    fn test_validate_group_size() {
        let pairs = CompetitiveEvaluator::<_, 2>::new(transfer);
        assert!(Evaluator::<i32, f64>::validate(&pairs, 10).is_ok());
        assert_eq!(
            Evaluator::<i32, f64>::validate(&pairs, 9),
            Err(ConfigError::GroupSizeMismatch {
                population: 9,
                group: 2
            })
        );

        let solo = CompetitiveEvaluator::<_, 1>::new(|_: &mut [Candidate<i32, f64>; 1]| {});
        assert_eq!(
            Evaluator::<i32, f64>::validate(&solo, 4),
            Err(ConfigError::GroupSizeTooSmall { size: 1 })
        );
    }
}
