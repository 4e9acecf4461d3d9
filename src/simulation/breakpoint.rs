//! Ready-made termination predicates.
//!
//! A breakpoint is any `FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool`.
//! The simulation calls it before every generation; returning `true` ends
//! the run. The breakpoint owns the choice of result: whatever it writes
//! into the candidate argument is returned as the elite.
//!
//! The limit wrappers stop a run that the inner predicate would keep going.
//! When they trigger, they report the best candidate of the current
//! population.
//!
//! ```
//! use std::time::Duration;
//! use u_evolve::simulation::breakpoint::{fitness_reached, with_generation_limit, with_time_limit};
//!
//! let stop = with_time_limit(
//!     with_generation_limit(fitness_reached::<String, u32>(0), 10_000, false),
//!     Duration::from_secs(5),
//!     false,
//! );
//! ```

use crate::core::{Candidate, Fitness, Population};
use log::info;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Stops as soon as some candidate's fitness equals `target`, and returns
/// that candidate.
pub fn fitness_reached<G, F>(target: F) -> impl FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool
where
    G: Clone,
    F: Fitness,
{
    move |population: &Population<G, F>, elite: &mut Candidate<G, F>| {
        match population
            .iter()
            .find(|c| c.fitness.partial_cmp(&target) == Some(Ordering::Equal))
        {
            Some(found) => {
                *elite = found.clone();
                true
            }
            None => false,
        }
    }
}

/// Stops after `limit` generations if `inner` has not stopped earlier.
///
/// With a limit of 0 the run ends right after seeding.
pub fn with_generation_limit<G, F, B>(
    mut inner: B,
    limit: u64,
    natural: bool,
) -> impl FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool
where
    G: Clone,
    F: Fitness,
    B: FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool,
{
    let mut generation = 0u64;
    move |population: &Population<G, F>, elite: &mut Candidate<G, F>| {
        if inner(population, elite) {
            return true;
        }
        if generation >= limit {
            info!("generation limit {limit} reached");
            take_best(population, elite, natural);
            return true;
        }
        generation += 1;
        false
    }
}

/// Stops once `limit` has elapsed since the first check, if `inner` has
/// not stopped earlier.
///
/// The check happens between generations, so a run may overshoot the
/// limit by the duration of one generation.
pub fn with_time_limit<G, F, B>(
    mut inner: B,
    limit: Duration,
    natural: bool,
) -> impl FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool
where
    G: Clone,
    F: Fitness,
    B: FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool,
{
    let mut started: Option<Instant> = None;
    move |population: &Population<G, F>, elite: &mut Candidate<G, F>| {
        if inner(population, elite) {
            return true;
        }
        let started = *started.get_or_insert_with(Instant::now);
        if started.elapsed() >= limit {
            info!("time limit {limit:?} reached");
            take_best(population, elite, natural);
            return true;
        }
        false
    }
}

fn take_best<G: Clone, F: Fitness>(
    population: &Population<G, F>,
    elite: &mut Candidate<G, F>,
    natural: bool,
) {
    if let Some(best) = population.best(natural) {
        *elite = best.clone();
    }
}
