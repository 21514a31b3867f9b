//! Fleet profiles - the generator constants for each dashboard variant
//!
//! The standard profile matches the English dashboard (3 statuses, no
//! operating hours). The extended profile matches the Arabic dashboard
//! (8 regions, 4 statuses, operating hours and the overhaul alert).

use super::error::FleetError;
use super::fleet::{Region, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Which profile to generate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Standard,
    Extended,
}

impl ProfileKind {
    pub fn profile(&self) -> FleetProfile {
        match self {
            ProfileKind::Standard => FleetProfile::standard(),
            ProfileKind::Extended => FleetProfile::extended(),
        }
    }
}

impl FromStr for ProfileKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Ok(ProfileKind::Standard),
            "extended" | "ext" => Ok(ProfileKind::Extended),
            other => Err(FleetError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKind::Standard => f.write_str("standard"),
            ProfileKind::Extended => f.write_str("extended"),
        }
    }
}

/// Guard thresholds for alert derivation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// `fuel_percent < fuel_below` raises LowFuel
    pub fuel_below: u8,
    /// `engine_temp_c > temp_above` raises Overheating
    pub temp_above: u8,
    /// `operating_hours > hours_above` raises MajorOverhaul
    pub hours_above: Option<u32>,
}

/// Constants driving one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct FleetProfile {
    pub kind: ProfileKind,
    pub regions: Vec<Region>,
    pub jitter: f64,
    pub revenue: RangeInclusive<i64>,
    pub statuses: Vec<Status>,
    /// Weights aligned with `statuses`, summing to 1.0
    pub status_weights: Vec<f64>,
    pub fuel: RangeInclusive<i64>,
    pub temp: RangeInclusive<i64>,
    pub hours: Option<RangeInclusive<i64>>,
    pub sites_per_region: i64,
    pub thresholds: AlertThresholds,
}

impl FleetProfile {
    pub fn standard() -> Self {
        Self {
            kind: ProfileKind::Standard,
            regions: Region::ALL[..6].to_vec(),
            jitter: 0.05,
            revenue: 5000..=19999,
            statuses: vec![Status::Active, Status::Idle, Status::Maintenance],
            status_weights: vec![0.8, 0.1, 0.1],
            fuel: 10..=99,
            temp: 70..=109,
            hours: None,
            sites_per_region: 4,
            thresholds: AlertThresholds {
                fuel_below: 20,
                temp_above: 100,
                hours_above: None,
            },
        }
    }

    pub fn extended() -> Self {
        Self {
            kind: ProfileKind::Extended,
            regions: Region::ALL.to_vec(),
            jitter: 0.1,
            revenue: 8000..=25000,
            statuses: vec![
                Status::Active,
                Status::Down,
                Status::Maintenance,
                Status::EnRoute,
            ],
            status_weights: vec![0.6, 0.1, 0.15, 0.15],
            fuel: 5..=100,
            temp: 65..=115,
            hours: Some(100..=12000),
            sites_per_region: 4,
            thresholds: AlertThresholds {
                fuel_below: 20,
                temp_above: 100,
                hours_above: Some(10000),
            },
        }
    }

    /// Smallest and largest capacity any record can carry
    pub fn capacity_bounds() -> (u32, u32) {
        (15, 350)
    }
}
