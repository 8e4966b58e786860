//! # Candidate Selectors
//! Tie-breaking among equally-valid candidates is injected, not hard-wired:
//! production picks uniformly at random, tests pin the choice with a seed
//! or a deterministic first-pick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::wardrobe::ClothingItem;

/// Picks one item out of a non-empty candidate pool. `None` only for an
/// empty pool (the engine's fallback policy normally prevents that).
pub trait Selector {
    fn pick<'a>(&mut self, pool: &[&'a ClothingItem]) -> Option<&'a ClothingItem>;
}

/// Uniform random selection. Seedable so tests can reproduce a run.
#[derive(Debug)]
pub struct UniformSelector {
    rng: StdRng,
}

impl UniformSelector {
    /// OS-entropy seed; production default.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed seed; same seed + same pools → same picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Selector for UniformSelector {
    fn pick<'a>(&mut self, pool: &[&'a ClothingItem]) -> Option<&'a ClothingItem> {
        if pool.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..pool.len());
        Some(pool[idx])
    }
}

/// Always the first candidate. For exact-outcome tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstSelector;

impl Selector for FirstSelector {
    fn pick<'a>(&mut self, pool: &[&'a ClothingItem]) -> Option<&'a ClothingItem> {
        pool.first().copied()
    }
}
