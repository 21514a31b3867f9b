//! Domain state - business/data state separate from UI concerns

use super::cache::{CacheKey, FleetCache};
use super::columns::{ColumnSelection, SortSpec};
use super::filter::{apply_filters, FilterState};
use super::fleet::GeneratorRecord;
use super::locale::Locale;
use super::profile::{FleetProfile, ProfileKind};
use std::path::PathBuf;
use tracing::info;

/// Domain state containing all business data
pub struct DomainState {
    /// Generated fleets for this session
    pub cache: FleetCache,

    /// Fleet currently on screen
    pub key: CacheKey,

    /// Generator constants for `key.profile`
    pub profile: FleetProfile,

    pub filter: FilterState,

    pub locale: Locale,

    /// Visible table columns, also used for export
    pub columns: ColumnSelection,

    pub sort: SortSpec,

    pub export_dir: PathBuf,
}

impl DomainState {
    pub fn new(seed: u64, count: usize, profile: ProfileKind, locale: Locale) -> Self {
        let fleet_profile = profile.profile();
        let mut domain = Self {
            cache: FleetCache::new(),
            key: CacheKey {
                seed,
                count,
                profile,
            },
            filter: FilterState::select_all(&fleet_profile),
            profile: fleet_profile,
            locale,
            columns: ColumnSelection::default(),
            sort: SortSpec::default(),
            export_dir: PathBuf::from("."),
        };
        domain.cache.get_or_generate(domain.key);
        domain
    }

    /// The full generated fleet
    pub fn records(&self) -> &[GeneratorRecord] {
        self.cache.get(&self.key).unwrap_or_default()
    }

    /// Filtered records in generation order, for KPIs and charts
    pub fn filtered(&self) -> Vec<&GeneratorRecord> {
        apply_filters(self.records(), &self.filter)
    }

    /// Filtered records in table order
    pub fn table_view(&self) -> Vec<&GeneratorRecord> {
        let mut view = self.filtered();
        self.sort.apply(&mut view);
        view
    }

    /// Regenerate the current fleet; the seed is unchanged so the data is too
    pub fn refresh(&mut self) {
        info!(seed = self.key.seed, "refreshing fleet");
        self.cache.refresh(self.key);
    }

    /// Move to the next seed and generate a new fleet
    ///
    /// The previous fleet is dropped from the cache.
    pub fn reseed(&mut self) -> u64 {
        self.cache.invalidate(&self.key);
        self.key.seed = self.key.seed.wrapping_add(1);
        info!(seed = self.key.seed, "reseeding fleet");
        self.cache.get_or_generate(self.key);
        self.key.seed
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }
}
