//! The generational loop.
//!
//! A [`Simulation`] owns a population for the duration of a run and drives
//! the four components in a fixed order:
//!
//! ```text
//! Seeding:   generate (all slots dead) → evaluate
//! Each generation, until the breakpoint fires:
//!            select(elites, natural) → mutate → generate (refill) → evaluate → report
//! ```
//!
//! # Key Types
//!
//! - [`SimulationConfig`]: population size, elite count, selection direction
//! - [`Simulation`]: the orchestrator, generic over its four components
//! - [`SimulationResult`]: elite candidate plus run statistics
//! - [`ProgressData`]: per-generation snapshot delivered to observers
//!
//! # Submodules
//!
//! - [`breakpoint`]: termination predicates and limit wrappers
//! - [`observer`]: ready-made observer handlers

pub mod breakpoint;
mod config;
pub mod observer;
mod progress;
mod runner;

pub use config::SimulationConfig;
pub use progress::{ObserverId, ProgressData};
pub use runner::{Phase, Simulation, SimulationResult};
