//! Multi-point crossover.
//!
//! Both operators pair consecutive **live** candidates in population order,
//! `(a₀, a₁), (a₂, a₃), ...`, and replace each pair's genomes with the two
//! children. An odd candidate out is left untouched.
//!
//! # Fixed-width genomes
//!
//! A [`CrossoverMask`] over the `N` gene positions is the XOR of `K`
//! single-point masks. Each single-point mask sets positions `[0, N − d)`
//! for a cut `d` drawn from `[1, N − 1]`, so `K` cuts yield up to `K`
//! run boundaries. Genes are swapped wherever the mask is set.
//!
//! # Variable-length genomes
//!
//! Each parent gets its own `K` sorted cut points in `[1, len − 1]`. The
//! children are assembled span by span, alternating parents and starting
//! from the opposite one:
//!
//! ```text
//! a = a0 | a1 | a2        child_a = b0 + a1 + b2
//! b = b0 | b1 | b2        child_b = a0 + b1 + a2      (K = 2)
//! ```
//!
//! Parents may differ in length and so may the children, but no material
//! is created or lost.
//!
//! # Reference
//!
//! De Jong & Spears (1992), "A formal analysis of the role of multi-point
//! crossover in genetic algorithms"

use super::Mutator;
use crate::core::{Fitness, FixedWidthGenome, Population, SequenceGenome};
use crate::error::ConfigError;
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;

/// Gene positions to exchange between two fixed-width parents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossoverMask(Vec<bool>);

impl CrossoverMask {
    /// Builds a mask from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Samples a `points`-point mask over `width` positions.
    ///
    /// Widths below 2 have no interior cut and produce an all-clear mask.
    pub fn random<R: Rng + ?Sized>(width: usize, points: usize, rng: &mut R) -> Self {
        let mut bits = vec![false; width];
        if width < 2 {
            return Self(bits);
        }
        for _ in 0..points {
            let cut = rng.random_range(1..width);
            for bit in &mut bits[..width - cut] {
                *bit = !*bit;
            }
        }
        Self(bits)
    }

    /// Whether position `index` is exchanged. Out-of-range positions are
    /// not.
    pub fn is_set(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mask covers no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Swaps every masked gene between `a` and `b`.
    ///
    /// Applying the same mask twice restores both genomes.
    pub fn apply<G: FixedWidthGenome>(&self, a: &mut G, b: &mut G) {
        for i in 0..G::ARITY.min(self.0.len()) {
            if self.0[i] {
                a.swap_gene(b, i);
            }
        }
    }
}

/// Pairs of consecutive live indices.
fn live_pairs<G, F: Fitness>(population: &Population<G, F>) -> Vec<(usize, usize)> {
    population
        .alive_indices()
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// K-point crossover for arrays and tuples.
///
/// A fresh mask is sampled for every pair unless a fixed one is installed
/// with [`with_mask`](FixedCrossover::with_mask).
///
/// # Examples
///
/// ```
/// use u_evolve::core::Population;
/// use u_evolve::mutators::{CrossoverMask, FixedCrossover, Mutator};
///
/// let mask = CrossoverMask::from_bits(vec![true, false, true]);
/// let mut crossover = FixedCrossover::new(2).with_mask(mask);
///
/// let mut population: Population<(i32, f64, char)> =
///     Population::from_genomes([(1, 1.0, 'a'), (2, 2.0, 'b')]);
/// crossover.mutate(&mut population);
///
/// assert_eq!(population[0].genome, (2, 1.0, 'b'));
/// assert_eq!(population[1].genome, (1, 2.0, 'a'));
/// ```
pub struct FixedCrossover {
    points: usize,
    rng: StdRng,
    mask: Option<CrossoverMask>,
}

impl FixedCrossover {
    /// Creates a `points`-point crossover seeded from system entropy.
    pub fn new(points: usize) -> Self {
        Self {
            points,
            rng: entropy_rng(),
            mask: None,
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

    /// Uses `mask` for every pair instead of sampling one.
    pub fn with_mask(mut self, mask: CrossoverMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Number of cut points per mask.
    pub fn points(&self) -> usize {
        self.points
    }
}

impl<G, F> Mutator<G, F> for FixedCrossover
where
    G: FixedWidthGenome,
    F: Fitness,
{
    fn mutate(&mut self, population: &mut Population<G, F>) {
        for (i, j) in live_pairs(population) {
            let sampled;
            let mask = match &self.mask {
                Some(mask) => mask,
                None => {
                    sampled = CrossoverMask::random(G::ARITY, self.points, &mut self.rng);
                    &sampled
                }
            };
            let (a, b) = population.pair_mut(i, j);
            mask.apply(&mut a.genome, &mut b.genome);
        }
    }

    fn validate(&self, _population_size: usize) -> Result<(), ConfigError> {
        if self.mask.is_none() && G::ARITY < 2 {
            return Err(ConfigError::GenomeTooShort {
                operator: "fixed crossover",
                arity: G::ARITY,
                required: 2,
            });
        }
        Ok(())
    }
}

/// K-point crossover for strings and vectors.
///
/// # Examples
///
/// ```
/// use u_evolve::core::Population;
/// use u_evolve::mutators::{Mutator, SequenceCrossover};
///
/// let mut crossover = SequenceCrossover::new(2).with_seed(42);
/// let mut population: Population<String> =
///     Population::from_genomes(["wwwwww".to_string(), "xxxxxx".to_string()]);
/// crossover.mutate(&mut population);
///
/// let total: usize = population.iter().map(|c| c.genome.len()).sum();
/// assert_eq!(total, 12);
/// ```
pub struct SequenceCrossover {
    points: usize,
    rng: StdRng,
}

impl SequenceCrossover {
    /// Creates a `points`-point crossover seeded from system entropy.
    pub fn new(points: usize) -> Self {
        Self {
            points,
            rng: entropy_rng(),
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

    /// Sorted cut points for a parent of length `len`.
    fn cuts(&mut self, len: usize) -> Vec<usize> {
        let mut cuts: Vec<usize> = (0..self.points)
            .map(|_| {
                if len < 2 {
                    len
                } else {
                    self.rng.random_range(1..len)
                }
            })
            .collect();
        cuts.sort_unstable();
        cuts
    }

    /// Splices two gene sequences at the given cuts.
    pub fn splice<T: Clone>(a: &[T], a_cuts: &[usize], b: &[T], b_cuts: &[usize]) -> (Vec<T>, Vec<T>) {
        let mut child_a = Vec::with_capacity(b.len());
        let mut child_b = Vec::with_capacity(a.len());
        let mut a_from = 0;
        let mut b_from = 0;

        for (k, (&a_to, &b_to)) in a_cuts.iter().zip(b_cuts).enumerate() {
            if k % 2 == 0 {
                child_a.extend_from_slice(&b[b_from..b_to]);
                child_b.extend_from_slice(&a[a_from..a_to]);
            } else {
                child_a.extend_from_slice(&a[a_from..a_to]);
                child_b.extend_from_slice(&b[b_from..b_to]);
            }
            a_from = a_to;
            b_from = b_to;
        }

        if a_cuts.len() % 2 == 0 {
            child_a.extend_from_slice(&b[b_from..]);
            child_b.extend_from_slice(&a[a_from..]);
        } else {
            child_a.extend_from_slice(&a[a_from..]);
            child_b.extend_from_slice(&b[b_from..]);
        }

        (child_a, child_b)
    }
}

impl<G, F> Mutator<G, F> for SequenceCrossover
where
    G: SequenceGenome,
    F: Fitness,
{
    fn mutate(&mut self, population: &mut Population<G, F>) {
        for (i, j) in live_pairs(population) {
            let (a, b) = population.pair_mut(i, j);
            let a_genes = a.genome.genes().into_owned();
            let b_genes = b.genome.genes().into_owned();
            let a_cuts = self.cuts(a_genes.len());
            let b_cuts = self.cuts(b_genes.len());

            let (child_a, child_b) = Self::splice(&a_genes, &a_cuts, &b_genes, &b_cuts);
            a.genome = G::from_genes(child_a);
            b.genome = G::from_genes(child_b);
        }
    }
}
