//! Fixed-size candidate collection and fitness statistics.

use super::candidate::{Candidate, Fitness};
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// An ordered, fixed-length collection of [`Candidate`]s.
///
/// The population dereferences to a slice, so candidates can be read and
/// modified in place, but its length cannot change once built. Order only
/// matters to operators that pair neighbours (crossover).
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G, F = f64> {
    candidates: Vec<Candidate<G, F>>,
}

impl<G, F: Fitness> Population<G, F> {
    /// Wraps an existing list of candidates.
    pub fn new(candidates: Vec<Candidate<G, F>>) -> Self {
        Self { candidates }
    }

    /// Builds a population of live candidates from genomes.
    pub fn from_genomes<I: IntoIterator<Item = G>>(genomes: I) -> Self {
        genomes.into_iter().map(Candidate::new).collect()
    }

    /// Allocates `size` dead candidates, ready to be seeded by a generator.
    pub fn dead(size: usize) -> Self
    where
        G: Default,
    {
        Self {
            candidates: (0..size).map(|_| Candidate::default()).collect(),
        }
    }

    /// Number of candidates currently marked alive.
    pub fn alive_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.alive).count()
    }

    /// Indices of live candidates, in population order.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.alive)
            .map(|(i, _)| i)
            .collect()
    }

    /// Fitness of every candidate as `f64`, in population order.
    pub fn fitness_values(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.fitness.to_f64()).collect()
    }

    /// Returns the best candidate.
    ///
    /// `natural = true` picks the highest fitness, `false` the lowest.
    /// Returns `None` for an empty population.
    pub fn best(&self, natural: bool) -> Option<&Candidate<G, F>> {
        let cmp = |a: &&Candidate<G, F>, b: &&Candidate<G, F>| {
            a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal)
        };
        if natural {
            self.candidates.iter().max_by(cmp)
        } else {
            self.candidates.iter().min_by(cmp)
        }
    }

    /// Mean and sample variance of the population's fitness.
    pub fn stats(&self) -> Option<FitnessStats> {
        FitnessStats::from_values(&self.fitness_values())
    }

    /// Borrows two distinct candidates mutably.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Candidate<G, F>, &mut Candidate<G, F>) {
        assert_ne!(i, j, "cannot borrow the same candidate twice");
        if i < j {
            let (head, tail) = self.candidates.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.candidates.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        }
    }

    /// The candidates as a slice.
    pub fn as_slice(&self) -> &[Candidate<G, F>] {
        &self.candidates
    }

    /// The candidates as a mutable slice. The length stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [Candidate<G, F>] {
        &mut self.candidates
    }

    /// Consumes the population, returning its candidates.
    pub fn into_inner(self) -> Vec<Candidate<G, F>> {
        self.candidates
    }
}

impl<G, F> Deref for Population<G, F> {
    type Target = [Candidate<G, F>];

    fn deref(&self) -> &Self::Target {
        &self.candidates
    }
}

impl<G, F> DerefMut for Population<G, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.candidates
    }
}

impl<G, F> FromIterator<Candidate<G, F>> for Population<G, F> {
    fn from_iter<I: IntoIterator<Item = Candidate<G, F>>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl<G, F> From<Vec<Candidate<G, F>>> for Population<G, F> {
    fn from(candidates: Vec<Candidate<G, F>>) -> Self {
        Self { candidates }
    }
}

/// Aggregate fitness statistics for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessStats {
    /// Arithmetic mean of all fitness values.
    pub mean: f64,

    /// Sample variance, `(Σx² − (Σx)²/n) / (n − 1)`.
    ///
    /// `None` when fewer than two values are available, where the sample
    /// formula is undefined.
    pub variance: Option<f64>,
}

impl FitnessStats {
    /// Computes statistics over a set of fitness values.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let sum_sq: f64 = values.iter().map(|v| v * v).sum();

        let variance = if values.len() < 2 {
            None
        } else {
            // Rounding can push a zero variance slightly negative.
            Some(((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0))
        };

        Some(Self {
            mean: sum / n,
            variance,
        })
    }
}
