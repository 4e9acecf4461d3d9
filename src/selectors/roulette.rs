//! Weighted roulette selection without replacement.
//!
//! # Algorithm
//!
//! 1. Build a weight per candidate:
//!    - natural: `w = f` (negative or non-finite fitness weighs 0)
//!    - inverted: `w = max(f) + 1 − f`, so the lowest error count weighs most
//! 2. Spin the wheel `count` times. Each winner is marked alive and its
//!    weight is zeroed, so no candidate is drawn twice.
//! 3. If the remaining weight is zero (or not finite), the spin falls back
//!    to a uniform draw among candidates not yet chosen.
//!
//! Weight construction may run in parallel; the draws are sequential
//! because each one depends on the previous zeroing.
//!
//! # Reference
//!
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", ch. 1 (roulette wheel selection)

use super::Selector;
use crate::core::{Fitness, Population};
use crate::random::{create_rng, entropy_rng};
use log::{trace, warn};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

/// Fitness-proportionate survivor selector.
///
/// # Examples
///
/// ```
/// use u_evolve::core::{Candidate, Population};
/// use u_evolve::selectors::{RouletteSelector, Selector};
///
/// let mut population: Population<u8> = (1..=6)
///     .map(|g| Candidate::with_fitness(g, g as f64))
///     .collect();
///
/// let mut selector = RouletteSelector::new().with_seed(42);
/// selector.select(&mut population, 2, false);
/// assert_eq!(population.alive_count(), 2);
/// ```
pub struct RouletteSelector {
    rng: StdRng,
    parallel: bool,
}

impl RouletteSelector {
    /// Creates a selector seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: entropy_rng(),
            parallel: false,
        }
    }

    /// Reseeds the selector for reproducible output.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(create_rng(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Builds the weight vector in parallel. Only worthwhile for large
    /// populations.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Selection weights for a set of fitness values.
    pub fn weights(fitnesses: &[f64], natural: bool, parallel: bool) -> Vec<f64> {
        let max = fitnesses
            .iter()
            .copied()
            .filter(|f| f.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        let weigh = |&f: &f64| -> f64 {
            if !f.is_finite() {
                return 0.0;
            }
            let w = if natural { f } else { max + 1.0 - f };
            if w.is_finite() && w > 0.0 {
                w
            } else {
                0.0
            }
        };

        if parallel {
            fitnesses.par_iter().map(weigh).collect()
        } else {
            fitnesses.iter().map(weigh).collect()
        }
    }

    /// Spins the wheel once over the unchosen candidates.
    fn spin(&mut self, weights: &[f64], chosen: &[bool]) -> usize {
        let total: f64 = weights.iter().sum();

        if total > 0.0 && total.is_finite() {
            let mut target = self.rng.random_range(0.0..total);
            let mut last = None;
            for (i, &w) in weights.iter().enumerate() {
                if w <= 0.0 {
                    continue;
                }
                if target < w {
                    return i;
                }
                target -= w;
                last = Some(i);
            }
            // Rounding left the target just past the final slice.
            if let Some(i) = last {
                return i;
            }
        }

        let open: Vec<usize> = (0..chosen.len()).filter(|&i| !chosen[i]).collect();
        open[self.rng.random_range(0..open.len())]
    }
}

impl Default for RouletteSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F: Fitness> Selector<G, F> for RouletteSelector {
    fn select(&mut self, population: &mut Population<G, F>, count: usize, natural: bool) {
        for c in population.iter_mut() {
            c.alive = false;
        }

        let n = population.len();
        if count > n {
            warn!("requested {count} survivors from a population of {n}; selecting all");
        }
        let draws = count.min(n);
        if draws == 0 {
            return;
        }

        let mut weights = Self::weights(&population.fitness_values(), natural, self.parallel);
        let mut chosen = vec![false; n];

        for _ in 0..draws {
            let idx = self.spin(&weights, &chosen);
            chosen[idx] = true;
            weights[idx] = 0.0;
            population[idx].alive = true;
        }

        trace!("roulette selected {draws} of {n} (natural={natural})");
    }
}
