//! Generic evolutionary computation engine.
//!
//! A population of candidates is repeatedly scored, culled and refilled
//! until a caller-supplied breakpoint is satisfied. Each step of the loop
//! is a pluggable component:
//!
//! - **Generator** ([`generators`]): fills dead population slots with new
//!   genomes.
//! - **Evaluator** ([`evaluators`]): assigns fitness, independently per
//!   candidate or competitively per group.
//! - **Selector** ([`selectors`]): marks the survivors of a generation.
//! - **Mutator** ([`mutators`]): crossover and point mutation, composable
//!   into pipelines.
//!
//! The [`simulation`] module ties them together and publishes
//! per-generation statistics to observers running on their own threads.
//!
//! # Genomes
//!
//! Any `Clone + Default + Send` type can be evolved. The built-in operators
//! are written against two capability traits in [`core`]: fixed-width
//! genomes (arrays, tuples) and sequence genomes (strings, vectors).
//!
//! # Fitness direction
//!
//! Fitness never encodes its own direction. `natural = true` selection
//! maximizes fitness; `natural = false` (the default) minimizes it, which
//! suits error-count evaluators such as
//! [`MismatchEvaluator`](evaluators::MismatchEvaluator).
//!
//! # Determinism
//!
//! Every stochastic component owns a seedable rng (see [`random`]).
//! Parallel passes derive one seed per slot, so a fully seeded run produces
//! identical results with and without parallelism.

pub mod core;
pub mod error;
pub mod evaluators;
pub mod generators;
pub mod mutators;
pub mod random;
pub mod selectors;
pub mod simulation;
