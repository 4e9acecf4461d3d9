//! Places eight queens on a chess board so that none attack each other.
//!
//! A board is `[row; 8]`: the queen of column `c` sits on row `board[c]`,
//! so column conflicts are impossible by construction. Fitness is the
//! number of attacking pairs.
//!
//! ```text
//! cargo run --example nqueens -- [seed]
//! ```

use rand::rngs::StdRng;
use rand::Rng;
use std::env;
use u_evolve::evaluators::FnEvaluator;
use u_evolve::generators::BreedingGenerator;
use u_evolve::mutators::{FixedCrossover, PassThrough, Pipeline};
use u_evolve::selectors::RouletteSelector;
use u_evolve::simulation::{breakpoint, observer, Simulation, SimulationConfig};

const QUEENS: usize = 8;

type Board = [usize; QUEENS];

/// Attacking pairs along rows and diagonals.
fn attacks(board: &Board) -> u32 {
    let mut count = 0;
    for col in 0..QUEENS {
        for other in col + 1..QUEENS {
            let distance = other - col;
            if board[other] == board[col]
                || board[other] + distance == board[col]
                || board[col] + distance == board[other]
            {
                count += 1;
            }
        }
    }
    count
}

fn random_board(rng: &mut StdRng) -> Board {
    std::array::from_fn(|_| rng.random_range(0..QUEENS))
}

/// Moves one queen to a random row.
fn move_queen(board: &mut Board, rng: &mut StdRng) {
    board[rng.random_range(0..QUEENS)] = rng.random_range(0..QUEENS);
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..QUEENS {
        for &queen in board {
            out.push_str(if queen == row { " Q" } else { " ." });
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed: u64 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    let config = SimulationConfig::default()
        .with_population_size(50)
        .with_elites(10);

    let mutator: Pipeline<Board, u32> = Pipeline::new()
        .then(FixedCrossover::new(2).with_seed(seed))
        .then(PassThrough);

    let mut simulation = match Simulation::new(
        config,
        BreedingGenerator::new(random_board, move_queen).with_seed(seed.wrapping_add(1)),
        FnEvaluator::new(attacks),
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
        breakpoint::fitness_reached(0),
        200_000,
        false,
    );
    let result = simulation.run(stop);

    println!(
        "{} attacking pairs after {} generations (seed {})",
        result.elite.fitness, result.generations, seed
    );
    print!("{}", render(&result.elite.genome));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacks() {
        assert_eq!(attacks(&[0, 4, 7, 5, 2, 6, 1, 3]), 0);
        assert_eq!(attacks(&[0; QUEENS]), 28);
        assert_eq!(attacks(&[0, 1, 2, 3, 4, 5, 6, 7]), 28);
    }
}
