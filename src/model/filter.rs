//! Filter state and predicate application
//!
//! The filter never mutates the fleet; it produces an order-preserving
//! view of references into it.

use super::fleet::{GeneratorRecord, Region, Status};
use super::profile::FleetProfile;
use std::collections::BTreeSet;

/// User-controlled filter selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub regions: BTreeSet<Region>,
    pub statuses: BTreeSet<Status>,
    /// Inclusive `(min, max)` capacity in kVA
    pub capacity_range: (u32, u32),
    /// Units with fuel strictly below this go on the refuel watch list
    pub fuel_alert_threshold: Option<u8>,
}

impl FilterState {
    /// Everything selected for the given profile
    pub fn select_all(profile: &FleetProfile) -> Self {
        Self {
            regions: profile.regions.iter().copied().collect(),
            statuses: profile.statuses.iter().copied().collect(),
            capacity_range: FleetProfile::capacity_bounds(),
            fuel_alert_threshold: None,
        }
    }

    /// Whether a single record passes every predicate
    pub fn matches(&self, record: &GeneratorRecord) -> bool {
        let (min, max) = self.capacity_range;
        self.regions.contains(&record.region)
            && self.statuses.contains(&record.status)
            && record.capacity_kva >= min
            && record.capacity_kva <= max
    }

    pub fn toggle_region(&mut self, region: Region) {
        if !self.regions.remove(&region) {
            self.regions.insert(region);
        }
    }

    pub fn toggle_status(&mut self, status: Status) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    /// Set the lower capacity bound, keeping `min <= max`
    pub fn set_capacity_min(&mut self, min: u32) {
        self.capacity_range.0 = min.min(self.capacity_range.1);
    }

    /// Set the upper capacity bound, keeping `min <= max`
    pub fn set_capacity_max(&mut self, max: u32) {
        self.capacity_range.1 = max.max(self.capacity_range.0);
    }
}

/// Apply the filter, preserving input order
pub fn apply_filters<'a>(
    records: &'a [GeneratorRecord],
    filter: &FilterState,
) -> Vec<&'a GeneratorRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Apply explicit predicates without building a `FilterState`
///
/// An empty region or status set selects nothing; a range with
/// `min > max` selects nothing.
pub fn apply_filters_with<'a>(
    records: &'a [GeneratorRecord],
    regions: &BTreeSet<Region>,
    statuses: &BTreeSet<Status>,
    capacity_range: (u32, u32),
) -> Vec<&'a GeneratorRecord> {
    let filter = FilterState {
        regions: regions.clone(),
        statuses: statuses.clone(),
        capacity_range,
        fuel_alert_threshold: None,
    };
    apply_filters(records, &filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::generate_default;

    fn owned(view: &[&GeneratorRecord]) -> Vec<GeneratorRecord> {
        view.iter().map(|r| (*r).clone()).collect()
    }

    #[test]
    fn test_select_all_keeps_everything() {
        let fleet = generate_default(42, 50);
        let filter = FilterState::select_all(&FleetProfile::standard());
        assert_eq!(apply_filters(&fleet, &filter).len(), 50);
    }

    #[test]
    fn test_region_filter_returns_exact_subset_in_order() {
        let fleet = generate_default(42, 50);
        let cairo: Vec<&GeneratorRecord> =
            fleet.iter().filter(|r| r.region == Region::Cairo).collect();

        let regions = BTreeSet::from([Region::Cairo]);
        let statuses = BTreeSet::from([Status::Active, Status::Idle, Status::Maintenance]);
        let view = apply_filters_with(&fleet, &regions, &statuses, (0, 400));

        assert_eq!(view.len(), cairo.len());
        assert_eq!(view, cairo);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_empty_region_set_yields_nothing() {
        let fleet = generate_default(42, 50);
        let statuses = BTreeSet::from([Status::Active, Status::Idle, Status::Maintenance]);
        assert!(apply_filters_with(&fleet, &BTreeSet::new(), &statuses, (0, 400)).is_empty());
    }

    #[test]
    fn test_empty_status_set_yields_nothing() {
        let fleet = generate_default(42, 50);
        let regions: BTreeSet<Region> = Region::ALL.into_iter().collect();
        assert!(apply_filters_with(&fleet, &regions, &BTreeSet::new(), (0, 400)).is_empty());
    }

    #[test]
    fn test_capacity_bounds_are_inclusive() {
        let fleet = generate_default(42, 200);
        let mut filter = FilterState::select_all(&FleetProfile::standard());
        filter.capacity_range = (37, 125);
        let view = apply_filters(&fleet, &filter);
        assert!(!view.is_empty());
        assert!(view
            .iter()
            .all(|r| r.capacity_kva == 37 || r.capacity_kva == 125));

        filter.capacity_range = (200, 100);
        assert!(apply_filters(&fleet, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let fleet = generate_default(3, 80);
        let mut filter = FilterState::select_all(&FleetProfile::standard());
        filter.regions = BTreeSet::from([Region::Giza, Region::Suez]);
        filter.capacity_range = (20, 125);

        let once = owned(&apply_filters(&fleet, &filter));
        let twice = owned(&apply_filters(&once, &filter));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let fleet = generate_default(42, 50);
        let before = fleet.clone();
        let _ = apply_filters(&fleet, &FilterState::select_all(&FleetProfile::standard()));
        assert_eq!(fleet, before);
    }

    #[test]
    fn test_toggles_and_capacity_clamping() {
        let mut filter = FilterState::select_all(&FleetProfile::standard());
        filter.toggle_region(Region::Cairo);
        assert!(!filter.regions.contains(&Region::Cairo));
        filter.toggle_region(Region::Cairo);
        assert!(filter.regions.contains(&Region::Cairo));

        filter.toggle_status(Status::Idle);
        assert!(!filter.statuses.contains(&Status::Idle));

        filter.set_capacity_max(100);
        filter.set_capacity_min(300);
        assert_eq!(filter.capacity_range, (100, 100));
    }
}
