//! Seeded random stream for fleet generation
//!
//! Wraps `ChaCha8Rng` so identical seeds produce identical fleets on every
//! platform. Every draw advances the same stream, so the order in which the
//! generator calls these methods is part of the output contract.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random stream shared by all draws of one generation run
pub struct FleetRng(ChaCha8Rng);

impl FleetRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform float in `[lo, hi)`; returns `lo` when the range is empty
    pub fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.0.gen_range(lo..hi)
    }

    /// Uniform integer in `[lo, hi]` (inclusive); returns `lo` when `hi <= lo`
    pub fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }

    /// Uniform pick from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }

    /// Weighted pick; `None` when the slice is empty or the weights are invalid
    pub fn weighted_choice<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T> {
        if items.len() != weights.len() {
            return None;
        }
        let dist = WeightedIndex::new(weights).ok()?;
        items.get(dist.sample(&mut self.0))
    }
}
