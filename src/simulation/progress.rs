//! Per-generation progress snapshots.

use crate::core::Candidate;
use std::time::Duration;

/// Statistics published to observers after every generation.
///
/// Each observer receives its own copy; nothing in a snapshot refers back
/// into the running population.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressData<G, F = f64> {
    /// Generation number, starting at 1 for the first completed generation.
    pub generation: u64,

    /// Mean fitness of the population.
    pub mean_fitness: f64,

    /// Sample variance of the population's fitness.
    pub variance: Option<f64>,

    /// Wall-clock time since the run started.
    pub elapsed: Duration,

    /// Best candidate of this generation, when
    /// [`report_best`](super::SimulationConfig::report_best) is enabled.
    pub best: Option<Candidate<G, F>>,
}

/// Handle returned by
/// [`register_observer`](super::Simulation::register_observer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(crate) u64);
