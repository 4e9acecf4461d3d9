//! Generator producing fresh genomes from an initializer.

use super::Generator;
use crate::core::{Candidate, Fitness, Population};
use crate::random::{create_rng, entropy_rng, slot_seeds};
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Fills dead slots with genomes produced by an initializer function.
///
/// The initializer receives a private rng for the slot it is filling, so
/// the result is identical whether the pass runs in parallel or not.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_evolve::core::Population;
/// use u_evolve::generators::{FillGenerator, Generator};
///
/// let mut generator = FillGenerator::new(|rng: &mut rand::rngs::StdRng| {
///     (0..4).map(|_| rng.random_range('a'..='z')).collect::<String>()
/// })
/// .with_seed(42);
///
/// let mut population: Population<String> = Population::dead(8);
/// generator.generate(&mut population);
/// assert_eq!(population.alive_count(), 8);
/// ```
pub struct FillGenerator<I> {
    initializer: I,
    rng: StdRng,
    parallel: bool,
}

impl<I> FillGenerator<I> {
    /// Creates a generator seeded from system entropy.
    pub fn new(initializer: I) -> Self {
        Self {
            initializer,
            rng: entropy_rng(),
            parallel: true,
        }
    }

    /// Reseeds the generator for reproducible output.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(create_rng(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Enables or disables the parallel fill pass.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl<G, F, I> Generator<G, F> for FillGenerator<I>
where
    G: Send,
    F: Fitness,
    I: Fn(&mut StdRng) -> G + Send + Sync,
{
    fn generate(&mut self, population: &mut Population<G, F>) {
        let seeds = slot_seeds(&mut self.rng, population.len());
        let initializer = &self.initializer;

        let fill = |(candidate, seed): (&mut Candidate<G, F>, &u64)| {
            if !candidate.alive {
                let mut rng = create_rng(*seed);
                candidate.respawn(initializer(&mut rng));
            }
        };

        if self.parallel {
            population
                .as_mut_slice()
                .par_iter_mut()
                .zip(seeds.par_iter())
                .for_each(fill);
        } else {
            population.iter_mut().zip(seeds.iter()).for_each(fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn letters(rng: &mut StdRng) -> String {
        (0..5).map(|_| rng.random_range('a'..='z')).collect()
    }

    #[test]
    fn test_seeds_every_dead_slot() {
        let mut generator = FillGenerator::new(letters).with_seed(1);
        let mut pop: Population<String> = Population::dead(10);

        generator.generate(&mut pop);

        assert_eq!(pop.alive_count(), 10);
        for c in pop.iter() {
            assert_eq!(c.genome.len(), 5);
            assert_eq!(c.fitness, 0.0);
        }
    }

    #[test]
    fn test_live_slots_untouched() {
        let mut generator = FillGenerator::new(|_: &mut StdRng| String::from("fresh")).with_seed(1);
        let mut pop: Population<String> = Population::new(vec![
            Candidate::with_fitness("keep".to_string(), 3.0),
            Candidate::default(),
            Candidate::with_fitness("also".to_string(), 1.0),
            Candidate {
                genome: "dead".to_string(),
                fitness: 9.0,
                alive: false,
            },
        ]);

        generator.generate(&mut pop);

        assert_eq!(pop[0], Candidate::with_fitness("keep".to_string(), 3.0));
        assert_eq!(pop[2], Candidate::with_fitness("also".to_string(), 1.0));
        assert_eq!(pop[1], Candidate::new("fresh".to_string()));
        assert_eq!(pop[3], Candidate::new("fresh".to_string()));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut par = FillGenerator::new(letters).with_seed(9).with_parallel(true);
        let mut seq = FillGenerator::new(letters).with_seed(9).with_parallel(false);

        let mut a: Population<String> = Population::dead(64);
        let mut b: Population<String> = Population::dead(64);
        par.generate(&mut a);
        seq.generate(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_width_genome() {
        let mut generator = FillGenerator::new(|rng: &mut StdRng| {
            let mut board = [0usize; 8];
            for q in board.iter_mut() {
                *q = rng.random_range(0..8);
            }
            board
        })
        .with_seed(3);
        let mut pop: Population<[usize; 8], i32> = Population::dead(4);

        generator.generate(&mut pop);

        assert!(pop.iter().all(|c| c.alive && c.genome.iter().all(|&q| q < 8)));
    }
}
