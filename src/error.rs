//! Configuration errors.
//!
//! Every misconfiguration the engine can detect is reported once, when the
//! [`Simulation`](crate::simulation::Simulation) is constructed, rather than
//! surfacing as wrong statistics or a panic in the middle of a run.

/// Caller misuse detected while validating a simulation setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },

    #[error("elite count {elites} exceeds population size {population}")]
    ElitesExceedPopulation { elites: usize, population: usize },

    #[error("elite count must be at least 1")]
    NoElites,

    #[error("genome must contain at least one gene")]
    EmptyGenome,

    #[error("genome arity {arity} is too short for {operator} (needs at least {required})")]
    GenomeTooShort {
        operator: &'static str,
        arity: usize,
        required: usize,
    },

    #[error("competition group size must be at least 2, got {size}")]
    GroupSizeTooSmall { size: usize },

    #[error("population size {population} is not a multiple of group size {group}")]
    GroupSizeMismatch { population: usize, group: usize },

    #[error("mutation alphabet must not be empty")]
    EmptyAlphabet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        let err = ConfigError::ElitesExceedPopulation {
            elites: 12,
            population: 10,
        };
        assert_eq!(err.to_string(), "elite count 12 exceeds population size 10");

        let err = ConfigError::GroupSizeMismatch {
            population: 9,
            group: 2,
        };
        assert!(err.to_string().contains("not a multiple"));
    }
}
