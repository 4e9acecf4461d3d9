//! Data model shared by every component.
//!
//! - [`Candidate`]: genome, fitness and `alive` flag
//! - [`Population`]: fixed-length ordered collection of candidates
//! - [`Fitness`]: numeric score contract
//! - [`FixedWidthGenome`] / [`SequenceGenome`]: genome capabilities that
//!   operators and evaluators are written against

mod candidate;
mod genome;
mod population;

pub use candidate::{Candidate, Fitness};
pub use genome::{FixedWidthGenome, SequenceGenome};
pub use population::{FitnessStats, Population};
