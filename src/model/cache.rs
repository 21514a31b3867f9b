//! Generation cache
//!
//! Generation runs once per `(seed, count, profile)` per session. A refresh
//! drops the entry and regenerates; with an unchanged seed the new fleet is
//! identical to the old one.

use super::fleet::GeneratorRecord;
use super::generator::generate;
use super::profile::ProfileKind;
use std::collections::HashMap;
use tracing::info;

/// Cache key for one generated fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub seed: u64,
    pub count: usize,
    pub profile: ProfileKind,
}

/// Memoized fleets for the current session
#[derive(Debug, Default)]
pub struct FleetCache {
    entries: HashMap<CacheKey, Vec<GeneratorRecord>>,
    generations: usize,
}

impl FleetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached fleet, generating it on a miss
    pub fn get_or_generate(&mut self, key: CacheKey) -> &[GeneratorRecord] {
        let generations = &mut self.generations;
        self.entries.entry(key).or_insert_with(|| {
            *generations += 1;
            info!(seed = key.seed, count = key.count, profile = %key.profile, "generating fleet");
            generate(key.seed, key.count, &key.profile.profile())
        })
        .as_slice()
    }

    /// Cached fleet without generating
    pub fn get(&self, key: &CacheKey) -> Option<&[GeneratorRecord]> {
        self.entries.get(key).map(|v| v.as_slice())
    }

    /// Drop one entry; returns whether it was cached
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Invalidate and regenerate
    pub fn refresh(&mut self, key: CacheKey) -> &[GeneratorRecord] {
        self.invalidate(&key);
        self.get_or_generate(key)
    }

    /// Number of generation runs performed so far
    pub fn generation_count(&self) -> usize {
        self.generations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
