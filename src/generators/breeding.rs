//! Generator that refills dead slots with offspring of the survivors.

use super::Generator;
use crate::core::{Candidate, Fitness, Population};
use crate::random::{create_rng, entropy_rng, slot_seeds};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

/// Fills dead slots with varied clones of randomly chosen survivors.
///
/// Each dead slot picks one live candidate uniformly at random, clones its
/// genome and passes the clone through the `variation` function. Survivors
/// themselves are never modified, so the best genomes persist between
/// generations (steady-state elitism).
///
/// When no candidate is alive (the very first seeding), the `initializer`
/// is used instead, exactly like [`FillGenerator`](super::FillGenerator).
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use rand::rngs::StdRng;
/// use u_evolve::generators::BreedingGenerator;
/// use u_evolve::mutators::Transition;
///
/// let alphabet: Vec<char> = ('a'..='z').collect();
/// let transition = Transition::new(alphabet.clone(), 0.2);
///
/// let generator = BreedingGenerator::new(
///     move |rng: &mut StdRng| {
///         (0..5).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect::<String>()
///     },
///     move |genome: &mut String, rng: &mut StdRng| transition.vary(genome, rng),
/// )
/// .with_seed(7);
/// ```
pub struct BreedingGenerator<I, V> {
    initializer: I,
    variation: V,
    rng: StdRng,
    parallel: bool,
}

impl<I, V> BreedingGenerator<I, V> {
    /// Creates a generator seeded from system entropy.
    pub fn new(initializer: I, variation: V) -> Self {
        Self {
            initializer,
            variation,
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

impl<G, F, I, V> Generator<G, F> for BreedingGenerator<I, V>
where
    G: Clone + Send + Sync,
    F: Fitness,
    I: Fn(&mut StdRng) -> G + Send + Sync,
    V: Fn(&mut G, &mut StdRng) + Send + Sync,
{
    fn generate(&mut self, population: &mut Population<G, F>) {
        // Parents are captured before any slot is revived.
        let parents: Vec<G> = population
            .iter()
            .filter(|c| c.alive)
            .map(|c| c.genome.clone())
            .collect();
        let seeds = slot_seeds(&mut self.rng, population.len());
        let initializer = &self.initializer;
        let variation = &self.variation;
        let parents = &parents;

        let fill = |(candidate, seed): (&mut Candidate<G, F>, &u64)| {
            if candidate.alive {
                return;
            }
            let mut rng = create_rng(*seed);
            let genome = if parents.is_empty() {
                initializer(&mut rng)
            } else {
                let mut child = parents[rng.random_range(0..parents.len())].clone();
                variation(&mut child, &mut rng);
                child
            };
            candidate.respawn(genome);
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

    fn zeros(_: &mut StdRng) -> Vec<u8> {
        vec![0; 4]
    }

    fn bump(genome: &mut Vec<u8>, _: &mut StdRng) {
        for g in genome.iter_mut() {
            *g += 1;
        }
    }

    #[test]
    fn test_initial_seeding_uses_initializer() {
        let mut generator = BreedingGenerator::new(zeros, bump).with_seed(1);
        let mut pop: Population<Vec<u8>> = Population::dead(6);

        generator.generate(&mut pop);

        assert_eq!(pop.alive_count(), 6);
        assert!(pop.iter().all(|c| c.genome == vec![0; 4]));
    }

    #[test]
    fn test_offspring_are_varied_survivor_clones() {
        let mut generator = BreedingGenerator::new(zeros, bump).with_seed(1);
        let mut pop: Population<Vec<u8>> = Population::new(vec![
            Candidate::with_fitness(vec![5; 4], 1.0),
            Candidate {
                genome: vec![9; 4],
                fitness: 4.0,
                alive: false,
            },
            Candidate::default(),
        ]);

        generator.generate(&mut pop);

        // Survivor untouched, dead slots cloned from it and bumped once.
        assert_eq!(pop[0], Candidate::with_fitness(vec![5; 4], 1.0));
        assert_eq!(pop[1], Candidate::new(vec![6; 4]));
        assert_eq!(pop[2], Candidate::new(vec![6; 4]));
    }

    #[test]
    fn test_parents_come_only_from_survivors() {
        let mut generator = BreedingGenerator::new(zeros, |_: &mut Vec<u8>, _: &mut StdRng| {})
            .with_seed(5);
        let mut pop: Population<Vec<u8>> = Population::new(vec![
            Candidate::new(vec![1]),
            Candidate::new(vec![2]),
            Candidate::default(),
            Candidate::default(),
            Candidate::default(),
            Candidate::default(),
        ]);

        generator.generate(&mut pop);

        for c in pop.iter().skip(2) {
            assert!(c.genome == vec![1] || c.genome == vec![2]);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pick = |rng: &mut StdRng| vec![rng.random_range(0u8..10); 3];
        let shuffle = |g: &mut Vec<u8>, rng: &mut StdRng| g[0] = rng.random_range(10..20);

        let mut base: Population<Vec<u8>> = Population::dead(32);
        BreedingGenerator::new(pick, shuffle)
            .with_seed(2)
            .generate(&mut base);
        for c in base.iter_mut().step_by(3) {
            c.alive = false;
        }

        let mut a = base.clone();
        let mut b = base;
        BreedingGenerator::new(pick, shuffle)
            .with_seed(11)
            .with_parallel(true)
            .generate(&mut a);
        BreedingGenerator::new(pick, shuffle)
            .with_seed(11)
            .with_parallel(false)
            .generate(&mut b);

        assert_eq!(a, b);
    }
}
