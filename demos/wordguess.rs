//! Evolves a random string towards a target word.
//!
//! ```text
//! cargo run --example wordguess -- [target] [population] [seed]
//! RUST_LOG=info cargo run --example wordguess -- evolution 200 7
//! ```

use rand::rngs::StdRng;
use rand::Rng;
use std::env;
use u_evolve::evaluators::MismatchEvaluator;
use u_evolve::generators::BreedingGenerator;
use u_evolve::mutators::{PassThrough, Pipeline, SequenceCrossover, Transition};
use u_evolve::selectors::RouletteSelector;
use u_evolve::simulation::{breakpoint, observer, Simulation, SimulationConfig};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let target = args.next().unwrap_or_else(|| "target".to_string());
    let size: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());

    if target.is_empty() || !target.chars().all(|c| ALPHABET.contains(c)) {
        eprintln!("target must be a non-empty lowercase ascii word");
        std::process::exit(2);
    }

    let letters: Vec<char> = ALPHABET.chars().collect();
    let length = target.chars().count();
    let seed = seed.unwrap_or_else(rand::random);
    let transition = Transition::new(letters.clone(), 1.0 / length as f64);

    let generator = BreedingGenerator::new(
        move |rng: &mut StdRng| {
            (0..length)
                .map(|_| letters[rng.random_range(0..letters.len())])
                .collect::<String>()
        },
        move |word: &mut String, rng: &mut StdRng| transition.vary(word, rng),
    )
    .with_seed(seed);

    let mutator = Pipeline::new()
        .then(SequenceCrossover::new(2).with_seed(seed.wrapping_add(1)))
        .then(PassThrough);

    let config = SimulationConfig::default()
        .with_population_size(size)
        .with_elites((size / 5).max(1));

    let mut simulation: Simulation<String, f64, _, _, _, _> = match Simulation::new(
        config,
        generator,
        MismatchEvaluator::new(target.clone()),
        RouletteSelector::new().with_seed(seed.wrapping_add(2)),
        mutator,
    ) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("invalid setup: {e}");
            std::process::exit(2);
        }
    };
    simulation.register_observer(observer::log_progress());

    let stop = breakpoint::with_generation_limit(
        breakpoint::fitness_reached(0.0),
        100_000,
        false,
    );
    let result = simulation.run(stop);

    println!(
        "'{}' after {} generations in {:.2?} (fitness {}, seed {})",
        result.elite.genome, result.generations, result.elapsed, result.elite.fitness, seed
    );
}
