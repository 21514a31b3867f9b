//! Fleet record types
//!
//! A `GeneratorRecord` is one simulated generator unit. The enums here carry
//! the fixed lookup tables (model capacity, region base coordinates) so the
//! generator and the UI share a single source for them.

use std::fmt;

/// Generator model sold/rented by the fleet operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorModel {
    Dca18Esx,
    Dca25Usi,
    Dca45Usi,
    Dca150Esk,
    Dca400Esk,
}

impl GeneratorModel {
    pub const ALL: [GeneratorModel; 5] = [
        GeneratorModel::Dca18Esx,
        GeneratorModel::Dca25Usi,
        GeneratorModel::Dca45Usi,
        GeneratorModel::Dca150Esk,
        GeneratorModel::Dca400Esk,
    ];

    /// Catalogue name of the model
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorModel::Dca18Esx => "DCA-18ESX",
            GeneratorModel::Dca25Usi => "DCA-25USI",
            GeneratorModel::Dca45Usi => "DCA-45USI",
            GeneratorModel::Dca150Esk => "DCA-150ESK",
            GeneratorModel::Dca400Esk => "DCA-400ESK",
        }
    }

    /// Rated capacity in kVA
    pub fn capacity_kva(&self) -> u32 {
        match self {
            GeneratorModel::Dca18Esx => 15,
            GeneratorModel::Dca25Usi => 20,
            GeneratorModel::Dca45Usi => 37,
            GeneratorModel::Dca150Esk => 125,
            GeneratorModel::Dca400Esk => 350,
        }
    }
}

impl fmt::Display for GeneratorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Governorate or city a unit is deployed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Cairo,
    Giza,
    Alexandria,
    Aswan,
    RedSea,
    Suez,
    Luxor,
    PortSaid,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Cairo,
        Region::Giza,
        Region::Alexandria,
        Region::Aswan,
        Region::RedSea,
        Region::Suez,
        Region::Luxor,
        Region::PortSaid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Cairo => "Cairo",
            Region::Giza => "Giza",
            Region::Alexandria => "Alexandria",
            Region::Aswan => "Aswan",
            Region::RedSea => "Red Sea",
            Region::Suez => "Suez",
            Region::Luxor => "Luxor",
            Region::PortSaid => "Port Said",
        }
    }

    /// Base (latitude, longitude) the unit coordinates are jittered around
    pub fn base_coordinates(&self) -> (f64, f64) {
        match self {
            Region::Cairo => (30.0444, 31.2357),
            Region::Giza => (30.0131, 31.2089),
            Region::Alexandria => (31.2001, 29.9187),
            Region::Aswan => (24.0889, 32.8998),
            Region::RedSea => (27.2579, 33.8116),
            Region::Suez => (29.9668, 32.5498),
            Region::Luxor => (25.6872, 32.6396),
            Region::PortSaid => (31.2653, 32.3019),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operational status of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Active,
    Idle,
    Maintenance,
    Down,
    EnRoute,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Idle => "Idle",
            Status::Maintenance => "Maintenance",
            Status::Down => "Down",
            Status::EnRoute => "En Route",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived condition requiring operator attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Alert {
    #[default]
    None,
    LowFuel,
    Overheating,
    ServiceDue,
    MajorOverhaul,
}

impl Alert {
    pub const ALL: [Alert; 5] = [
        Alert::None,
        Alert::LowFuel,
        Alert::Overheating,
        Alert::ServiceDue,
        Alert::MajorOverhaul,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Alert::None => "None",
            Alert::LowFuel => "Low Fuel",
            Alert::Overheating => "Overheating",
            Alert::ServiceDue => "Service Due",
            Alert::MajorOverhaul => "Major Overhaul",
        }
    }

    /// Low fuel and overheating count towards the critical KPI
    pub fn is_critical(&self) -> bool {
        matches!(self, Alert::LowFuel | Alert::Overheating)
    }

    pub fn is_active(&self) -> bool {
        *self != Alert::None
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One simulated generator unit
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorRecord {
    pub id: String,
    pub model: GeneratorModel,
    pub capacity_kva: u32,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    pub status: Status,
    pub monthly_revenue: f64,
    pub fuel_percent: u8,
    pub engine_temp_c: u8,
    /// Only populated by the extended profile
    pub operating_hours: Option<u32>,
    pub active_alert: Alert,
    pub project_site: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_lookup_table() {
        let capacities: Vec<u32> = GeneratorModel::ALL.iter().map(|m| m.capacity_kva()).collect();
        assert_eq!(capacities, vec![15, 20, 37, 125, 350]);
    }

    #[test]
    fn test_critical_alerts() {
        assert!(Alert::LowFuel.is_critical());
        assert!(Alert::Overheating.is_critical());
        assert!(!Alert::ServiceDue.is_critical());
        assert!(!Alert::MajorOverhaul.is_critical());
        assert!(!Alert::None.is_active());
    }

    #[test]
    fn test_region_display_uses_name() {
        assert_eq!(Region::RedSea.to_string(), "Red Sea");
        assert_eq!(Region::PortSaid.to_string(), "Port Said");
    }
}
