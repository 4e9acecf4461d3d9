//! Random source helpers.
//!
//! Every stochastic component owns its own [`StdRng`]. Seeding one makes
//! its behavior reproducible; leaving it unseeded draws a seed from the OS.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic random number generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a random number generator seeded from system entropy.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}

/// Draws one child seed per slot.
///
/// Parallel passes seed a private rng per slot from these values, so the
/// outcome does not depend on how rayon schedules the work.
pub(crate) fn slot_seeds<R: Rng>(rng: &mut R, slots: usize) -> Vec<u64> {
    (0..slots).map(|_| rng.random()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_slot_seeds_length() {
        let mut rng = create_rng(1);
        assert_eq!(slot_seeds(&mut rng, 5).len(), 5);
        assert!(slot_seeds(&mut rng, 0).is_empty());
    }
}
