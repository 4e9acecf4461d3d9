//! Point mutation over an alphabet.

use super::Mutator;
use crate::core::{Candidate, Fitness, Population, SequenceGenome};
use crate::error::ConfigError;
use crate::random::{create_rng, entropy_rng, slot_seeds};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

/// Replaces each gene, with independent probability `p`, by a symbol drawn
/// uniformly from an alphabet.
///
/// The replacement may equal the original gene, so the effective change
/// rate is `p · (1 − 1/|alphabet|)`.
///
/// # Examples
///
/// ```
/// use u_evolve::core::Population;
/// use u_evolve::mutators::{Mutator, Transition};
///
/// let mut transition = Transition::new(['0', '1'], 1.0).with_seed(3);
/// let mut population: Population<String> = Population::from_genomes(["0000".to_string()]);
/// transition.mutate(&mut population);
///
/// assert_eq!(population[0].genome.len(), 4);
/// assert!(population[0].genome.chars().all(|c| c == '0' || c == '1'));
/// ```
pub struct Transition<T> {
    alphabet: Vec<T>,
    probability: f64,
    rng: StdRng,
    parallel: bool,
}

impl<T: Clone> Transition<T> {
    /// Creates a transition with per-gene probability `probability`,
    /// clamped to `[0, 1]`.
    pub fn new<A: IntoIterator<Item = T>>(alphabet: A, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            alphabet: alphabet.into_iter().collect(),
            probability,
            rng: entropy_rng(),
            parallel: true,
        }
    }

    /// Reseeds the operator for reproducible output.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(create_rng(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Enables or disables the parallel pass over candidates.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Per-gene replacement probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Mutates a single genome with the caller's random source.
    ///
    /// Does nothing when the alphabet is empty.
    pub fn vary<G, R>(&self, genome: &mut G, rng: &mut R)
    where
        G: SequenceGenome<Gene = T>,
        R: Rng + ?Sized,
    {
        if self.alphabet.is_empty() || self.probability == 0.0 {
            return;
        }
        let mut genes = genome.genes().into_owned();
        let mut changed = false;
        for gene in &mut genes {
            if rng.random_bool(self.probability) {
                *gene = self.alphabet[rng.random_range(0..self.alphabet.len())].clone();
                changed = true;
            }
        }
        if changed {
            *genome = G::from_genes(genes);
        }
    }
}

impl<G, F, T> Mutator<G, F> for Transition<T>
where
    G: SequenceGenome<Gene = T>,
    F: Fitness,
    T: Clone + Send + Sync,
{
    fn mutate(&mut self, population: &mut Population<G, F>) {
        let seeds = slot_seeds(&mut self.rng, population.len());
        let this = &*self;

        let vary = |(candidate, seed): (&mut Candidate<G, F>, &u64)| {
            if candidate.alive {
                this.vary(&mut candidate.genome, &mut create_rng(*seed));
            }
        };

        if self.parallel {
            population
                .as_mut_slice()
                .par_iter_mut()
                .zip(seeds.par_iter())
                .for_each(vary);
        } else {
            population.iter_mut().zip(seeds.iter()).for_each(vary);
        }
    }

    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_clamped() {
        assert_eq!(Transition::new(['a'], 1.5).probability(), 1.0);
        assert_eq!(Transition::new(['a'], -0.5).probability(), 0.0);
        assert_eq!(Transition::new(['a'], f64::NAN).probability(), 0.0);
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut transition = Transition::new('a'..='z', 0.0).with_seed(1);
        let mut pop: Population<String> =
            Population::from_genomes(["hello".to_string(), "world".to_string()]);
        let before = pop.clone();

        transition.mutate(&mut pop);

        assert_eq!(pop, before);
    }

    #[test]
    fn test_full_probability_uses_alphabet() {
        let mut transition = Transition::new(['x'], 1.0).with_seed(1);
        let mut pop: Population<Vec<char>> =
            Population::from_genomes([vec!['a', 'b', 'c'], vec!['d']]);

        transition.mutate(&mut pop);

        assert_eq!(pop[0].genome, vec!['x'; 3]);
        assert_eq!(pop[1].genome, vec!['x']);
    }

    #[test]
    fn test_dead_candidates_untouched() {
        let mut transition = Transition::new([9u8], 1.0).with_seed(1);
        let mut pop: Population<Vec<u8>> = Population::from_genomes([vec![0; 3], vec![0; 3]]);
        pop[1].alive = false;

        transition.mutate(&mut pop);

        assert_eq!(pop[0].genome, vec![9; 3]);
        assert_eq!(pop[1].genome, vec![0; 3]);
    }

    #[test]
    fn test_rate_roughly_matches_probability() {
        let transition = Transition::new([1u8], 0.25);
        let mut rng = create_rng(42);
        let mut genome = vec![0u8; 10_000];

        transition.vary(&mut genome, &mut rng);

        let changed = genome.iter().filter(|&&g| g == 1).count();
        assert!((2_200..2_800).contains(&changed), "changed {changed}");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let genomes: Vec<String> = (0..64).map(|i| format!("genome{i:02}")).collect();
        let mut a: Population<String> = Population::from_genomes(genomes.clone());
        let mut b: Population<String> = Population::from_genomes(genomes);

        Transition::new('a'..='z', 0.3)
            .with_seed(8)
            .with_parallel(true)
            .mutate(&mut a);
        Transition::new('a'..='z', 0.3)
            .with_seed(8)
            .with_parallel(false)
            .mutate(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let transition: Transition<char> = Transition::new([], 0.5);
        assert_eq!(
            Mutator::<String, f64>::validate(&transition, 10),
            Err(ConfigError::EmptyAlphabet)
        );
    }
}
