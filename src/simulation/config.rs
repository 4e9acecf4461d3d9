//! Simulation configuration.
//!
//! [`SimulationConfig`] holds the parameters of the generational loop that
//! do not belong to any single component.

use crate::error::ConfigError;

/// Configuration for a [`Simulation`](super::Simulation).
///
/// # Defaults
///
/// ```
/// use u_evolve::simulation::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elites, 10);
/// assert!(!config.natural);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::simulation::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_population_size(50)
///     .with_elites(5)
///     .with_natural(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of candidates in the population. Fixed for the whole run.
    pub population_size: usize,

    /// Number of survivors kept by selection each generation.
    ///
    /// The remaining `population_size − elites` slots are refilled by the
    /// generator.
    pub elites: usize,

    /// Direction of selection.
    ///
    /// `true` favours high fitness (maximization), `false` favours low
    /// fitness (minimization of an error count, the default).
    pub natural: bool,

    /// Whether each [`ProgressData`](super::ProgressData) snapshot carries
    /// a clone of the generation's best candidate.
    ///
    /// Disable for large genomes when observers only need statistics.
    pub report_best: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elites: 10,
            natural: false,
            report_best: true,
        }
    }
}

impl SimulationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of survivors per generation.
    pub fn with_elites(mut self, n: usize) -> Self {
        self.elites = n;
        self
    }

    /// Sets the selection direction.
    pub fn with_natural(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }

    /// Enables or disables the best candidate in progress snapshots.
    pub fn with_report_best(mut self, report_best: bool) -> Self {
        self.report_best = report_best;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.elites == 0 {
            return Err(ConfigError::NoElites);
        }
        if self.elites > self.population_size {
            return Err(ConfigError::ElitesExceedPopulation {
                elites: self.elites,
                population: self.population_size,
            });
        }
        Ok(())
    }
}
