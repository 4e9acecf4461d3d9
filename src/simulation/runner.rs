//! Generational loop execution.
//!
//! [`Simulation`] drives the four components through a run:
//! seeding → (selection → mutation → regeneration → evaluation → report)*.

use super::config::SimulationConfig;
use super::observer::Handler;
use super::progress::{ObserverId, ProgressData};
use crate::core::{Candidate, Fitness, FitnessStats, Population};
use crate::error::ConfigError;
use crate::evaluators::Evaluator;
use crate::generators::Generator;
use crate::mutators::Mutator;
use crate::selectors::Selector;
use log::{debug, info, trace, warn};
use std::fmt;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Where a simulation currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Constructed, never run.
    #[default]
    Uninitialized,
    /// Filling and scoring the initial population.
    Seeding,
    Selecting,
    Mutating,
    Generating,
    Evaluating,
    /// Computing statistics and publishing them to observers.
    Reporting,
    /// The breakpoint fired; the run is over.
    Terminated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Seeding => "seeding",
            Phase::Selecting => "selecting",
            Phase::Mutating => "mutating",
            Phase::Generating => "generating",
            Phase::Evaluating => "evaluating",
            Phase::Reporting => "reporting",
            Phase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationResult<G, F = f64> {
    /// The candidate chosen by the breakpoint.
    pub elite: Candidate<G, F>,

    /// Number of completed generations (0 if the breakpoint fired right
    /// after seeding).
    pub generations: u64,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Fitness statistics of the final population.
    pub final_stats: Option<FitnessStats>,
}

/// An evolutionary system: configuration, four components and a set of
/// observers.
///
/// # Usage
///
/// ```
/// use rand::Rng;
/// use rand::rngs::StdRng;
/// use u_evolve::evaluators::MismatchEvaluator;
/// use u_evolve::generators::FillGenerator;
/// use u_evolve::mutators::PassThrough;
/// use u_evolve::selectors::RouletteSelector;
/// use u_evolve::simulation::{breakpoint, Simulation, SimulationConfig};
///
/// let config = SimulationConfig::default().with_population_size(20).with_elites(4);
/// let mut simulation = Simulation::new(
///     config,
///     FillGenerator::new(|rng: &mut StdRng| {
///         (0..3).map(|_| rng.random_range('a'..='c')).collect::<String>()
///     })
///     .with_seed(1),
///     MismatchEvaluator::new("abc".to_string()),
///     RouletteSelector::new().with_seed(2),
///     PassThrough,
/// )?;
///
/// let stop = breakpoint::with_generation_limit(breakpoint::fitness_reached(0.0), 1_000, false);
/// let result = simulation.run(stop);
/// assert!(result.generations <= 1_000);
/// # Ok::<(), u_evolve::error::ConfigError>(())
/// ```
pub struct Simulation<G, F, Gen, E, S, M> {
    config: SimulationConfig,
    generator: Gen,
    evaluator: E,
    selector: S,
    mutator: M,
    observers: Vec<(ObserverId, Handler<G, F>)>,
    next_observer: u64,
    phase: Phase,
}

impl<G, F, Gen, E, S, M> Simulation<G, F, Gen, E, S, M>
where
    G: Clone + Default + Send,
    F: Fitness,
    Gen: Generator<G, F>,
    E: Evaluator<G, F>,
    S: Selector<G, F>,
    M: Mutator<G, F>,
{
    /// Builds a simulation, validating the configuration against every
    /// component.
    pub fn new(
        config: SimulationConfig,
        generator: Gen,
        evaluator: E,
        selector: S,
        mutator: M,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.population_size;
        generator.validate(size)?;
        evaluator.validate(size)?;
        selector.validate(size)?;
        mutator.validate(size)?;

        Ok(Self {
            config,
            generator,
            evaluator,
            selector,
            mutator,
            observers: Vec::new(),
            next_observer: 0,
            phase: Phase::Uninitialized,
        })
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer for all subsequent runs.
    ///
    /// During a run each observer executes on its own thread and receives
    /// every generation's snapshot exactly once, in generation order.
    pub fn register_observer<H>(&mut self, handler: H) -> ObserverId
    where
        H: FnMut(ProgressData<G, F>) + Send + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    /// Removes an observer. Returns `false` if the id is unknown.
    pub fn deregister_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Runs from a freshly generated population until `breakpoint` returns
    /// `true`.
    pub fn run<B>(&mut self, breakpoint: B) -> SimulationResult<G, F>
    where
        B: FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool,
    {
        self.run_seeded(Vec::new(), breakpoint)
    }

    /// Runs from caller-supplied genomes.
    ///
    /// The genomes occupy the first slots of the population; the generator
    /// fills the rest. Genomes beyond the population size are discarded.
    pub fn run_seeded<I, B>(&mut self, genomes: I, mut breakpoint: B) -> SimulationResult<G, F>
    where
        I: IntoIterator<Item = G>,
        B: FnMut(&Population<G, F>, &mut Candidate<G, F>) -> bool,
    {
        let start = Instant::now();
        let Self {
            config,
            generator,
            evaluator,
            selector,
            mutator,
            observers,
            phase,
            ..
        } = self;
        let size = config.population_size;

        info!(
            "starting simulation: population={}, elites={}, natural={}, observers={}",
            size,
            config.elites,
            config.natural,
            observers.len()
        );

        enter(phase, Phase::Seeding);
        let mut seeds: Vec<G> = genomes.into_iter().collect();
        if seeds.len() > size {
            warn!(
                "{} seed genomes supplied for a population of {}; truncating",
                seeds.len(),
                size
            );
            seeds.truncate(size);
        }
        let mut population: Population<G, F> = Population::dead(size);
        for (slot, genome) in population.iter_mut().zip(seeds) {
            slot.respawn(genome);
        }
        generator.generate(&mut population);
        evaluator.evaluate(&mut population);

        let mut elite = Candidate::default();
        let mut generation = 0u64;

        thread::scope(|scope| {
            let senders: Vec<Sender<ProgressData<G, F>>> = observers
                .iter_mut()
                .map(|(_, handler)| {
                    let (tx, rx) = mpsc::channel::<ProgressData<G, F>>();
                    scope.spawn(move || {
                        for data in rx {
                            handler(data);
                        }
                    });
                    tx
                })
                .collect();

            while !breakpoint(&population, &mut elite) {
                enter(phase, Phase::Selecting);
                selector.select(&mut population, config.elites, config.natural);

                enter(phase, Phase::Mutating);
                mutator.mutate(&mut population);

                enter(phase, Phase::Generating);
                generator.generate(&mut population);

                enter(phase, Phase::Evaluating);
                evaluator.evaluate(&mut population);

                enter(phase, Phase::Reporting);
                generation += 1;
                let stats = population.stats();
                let data = ProgressData {
                    generation,
                    mean_fitness: stats.map_or(0.0, |s| s.mean),
                    variance: stats.and_then(|s| s.variance),
                    elapsed: start.elapsed(),
                    best: if config.report_best {
                        population.best(config.natural).cloned()
                    } else {
                        None
                    },
                };
                debug!(
                    "generation {}: mean={:.4} variance={:?}",
                    generation, data.mean_fitness, data.variance
                );
                for tx in &senders {
                    // Observer threads only exit once their sender is gone.
                    let _ = tx.send(data.clone());
                }
            }

            enter(phase, Phase::Terminated);
            // Dropping the senders ends each observer loop; the scope joins
            // the threads before returning.
            drop(senders);
        });

        let elapsed = start.elapsed();
        info!(
            "simulation finished after {} generations in {:.2?}, elite fitness {:?}",
            generation, elapsed, elite.fitness
        );

        SimulationResult {
            elite,
            generations: generation,
            elapsed,
            final_stats: population.stats(),
        }
    }
}

fn enter(phase: &mut Phase, next: Phase) {
    trace!("{phase} -> {next}");
    *phase = next;
}
