//! Synthetic fleet generator
//!
//! Builds a fixed-size inventory of generator records from a seed. Draw
//! order per record: region, latitude jitter, longitude jitter, model,
//! revenue, status, fuel, temperature, [operating hours], site number.
//! Changing that order changes every fleet generated after it.

use super::fleet::{Alert, GeneratorModel, GeneratorRecord, Status};
use super::profile::{AlertThresholds, FleetProfile};
use super::rng::FleetRng;
use tracing::{debug, warn};

/// First id number; record `i` gets `DNY-{ID_BASE + i}`
pub const ID_BASE: usize = 1000;

/// Revenue scales linearly with capacity relative to this kVA rating
const REVENUE_KVA_DIVISOR: f64 = 50.0;

/// Generate `count` records for `profile`, deterministically from `seed`
pub fn generate(seed: u64, count: usize, profile: &FleetProfile) -> Vec<GeneratorRecord> {
    let mut rng = FleetRng::from_seed_u64(seed);
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let Some(&region) = rng.choose(&profile.regions) else {
            warn!(profile = %profile.kind, "profile has no regions; fleet left empty");
            return records;
        };
        let (base_lat, base_lon) = region.base_coordinates();
        let latitude = base_lat + rng.uniform_f64(-profile.jitter, profile.jitter);
        let longitude = base_lon + rng.uniform_f64(-profile.jitter, profile.jitter);

        let model = rng
            .choose(&GeneratorModel::ALL)
            .copied()
            .unwrap_or(GeneratorModel::Dca18Esx);
        let capacity_kva = model.capacity_kva();

        let base_revenue = rng.uniform_int(*profile.revenue.start(), *profile.revenue.end());
        let monthly_revenue =
            round_cents(base_revenue as f64 * (capacity_kva as f64 / REVENUE_KVA_DIVISOR));

        let status = rng
            .weighted_choice(&profile.statuses, &profile.status_weights)
            .copied()
            .unwrap_or(Status::Active);

        let fuel_percent = rng.uniform_int(*profile.fuel.start(), *profile.fuel.end()) as u8;
        let engine_temp_c = rng.uniform_int(*profile.temp.start(), *profile.temp.end()) as u8;
        let operating_hours = profile
            .hours
            .as_ref()
            .map(|hours| rng.uniform_int(*hours.start(), *hours.end()) as u32);

        let site = rng.uniform_int(1, profile.sites_per_region);

        let active_alert = derive_alert(
            fuel_percent,
            engine_temp_c,
            status,
            operating_hours,
            &profile.thresholds,
        );

        records.push(GeneratorRecord {
            id: format!("DNY-{}", ID_BASE + i),
            model,
            capacity_kva,
            region,
            latitude,
            longitude,
            status,
            monthly_revenue,
            fuel_percent,
            engine_temp_c,
            operating_hours,
            active_alert,
            project_site: format!("{} Site-{}", region.name(), site),
        });
    }

    debug!(seed, count, profile = %profile.kind, "generated fleet");
    records
}

/// Generate with the standard profile
pub fn generate_default(seed: u64, count: usize) -> Vec<GeneratorRecord> {
    generate(seed, count, &FleetProfile::standard())
}

/// Derive the alert for one unit; the first matching guard wins.
///
/// Priority: low fuel, then overheating, then maintenance status, then
/// operating hours (only when both the hours and the threshold are known).
pub fn derive_alert(
    fuel_percent: u8,
    engine_temp_c: u8,
    status: Status,
    operating_hours: Option<u32>,
    thresholds: &AlertThresholds,
) -> Alert {
    if fuel_percent < thresholds.fuel_below {
        Alert::LowFuel
    } else if engine_temp_c > thresholds.temp_above {
        Alert::Overheating
    } else if status == Status::Maintenance {
        Alert::ServiceDue
    } else if matches!(
        (operating_hours, thresholds.hours_above),
        (Some(hours), Some(limit)) if hours > limit
    ) {
        Alert::MajorOverhaul
    } else {
        Alert::None
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
