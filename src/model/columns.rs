//! Column schema for the fleet table and CSV export
//!
//! Maps a configured field name to its label, formatter and comparator.

use super::error::FleetError;
use super::fleet::GeneratorRecord;
use super::locale::{Labels, Locale};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// One displayable field of a `GeneratorRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Model,
    Capacity,
    Region,
    Latitude,
    Longitude,
    Status,
    Revenue,
    Fuel,
    Temperature,
    Hours,
    Alert,
    Site,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::Id,
        Column::Model,
        Column::Capacity,
        Column::Region,
        Column::Latitude,
        Column::Longitude,
        Column::Status,
        Column::Revenue,
        Column::Fuel,
        Column::Temperature,
        Column::Hours,
        Column::Alert,
        Column::Site,
    ];

    /// Columns shown when nothing (or nothing valid) is configured
    pub const DEFAULT: [Column; 9] = [
        Column::Id,
        Column::Model,
        Column::Region,
        Column::Status,
        Column::Revenue,
        Column::Fuel,
        Column::Temperature,
        Column::Alert,
        Column::Site,
    ];

    /// Stable name used in the config file
    pub fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Model => "model",
            Column::Capacity => "capacity_kva",
            Column::Region => "region",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Status => "status",
            Column::Revenue => "monthly_revenue",
            Column::Fuel => "fuel_percent",
            Column::Temperature => "engine_temp_c",
            Column::Hours => "operating_hours",
            Column::Alert => "active_alert",
            Column::Site => "project_site",
        }
    }

    pub fn label(&self, labels: &Labels) -> &'static str {
        match self {
            Column::Id => labels.col_id,
            Column::Model => labels.col_model,
            Column::Capacity => labels.col_capacity,
            Column::Region => labels.col_region,
            Column::Latitude => labels.col_latitude,
            Column::Longitude => labels.col_longitude,
            Column::Status => labels.col_status,
            Column::Revenue => labels.col_revenue,
            Column::Fuel => labels.col_fuel,
            Column::Temperature => labels.col_temp,
            Column::Hours => labels.col_hours,
            Column::Alert => labels.col_alert,
            Column::Site => labels.col_site,
        }
    }

    /// Cell text for a record in the given locale
    pub fn format(&self, record: &GeneratorRecord, locale: &Locale) -> String {
        match self {
            Column::Id => record.id.clone(),
            Column::Model => locale.model(record.model).to_string(),
            Column::Capacity => locale.format_int(record.capacity_kva as u64),
            Column::Region => locale.region(record.region).to_string(),
            Column::Latitude => locale.format_number(record.latitude, 4),
            Column::Longitude => locale.format_number(record.longitude, 4),
            Column::Status => locale.status(record.status).to_string(),
            Column::Revenue => locale.format_number(record.monthly_revenue, 2),
            Column::Fuel => locale.format_int(record.fuel_percent as u64),
            Column::Temperature => locale.format_int(record.engine_temp_c as u64),
            Column::Hours => match record.operating_hours {
                Some(hours) => locale.format_int(hours as u64),
                None => String::new(),
            },
            Column::Alert => locale.alert(record.active_alert).to_string(),
            Column::Site => locale.site(record),
        }
    }

    /// Cell value for CSV export: localized text, plain ASCII numbers
    pub fn export_value(&self, record: &GeneratorRecord, locale: &Locale) -> String {
        match self {
            Column::Capacity => record.capacity_kva.to_string(),
            Column::Latitude => format!("{:.6}", record.latitude),
            Column::Longitude => format!("{:.6}", record.longitude),
            Column::Revenue => format!("{:.2}", record.monthly_revenue),
            Column::Fuel => record.fuel_percent.to_string(),
            Column::Temperature => record.engine_temp_c.to_string(),
            Column::Hours => record
                .operating_hours
                .map(|h| h.to_string())
                .unwrap_or_default(),
            _ => self.format(record, locale),
        }
    }

    /// Natural ordering of the field, independent of locale
    pub fn compare(&self, a: &GeneratorRecord, b: &GeneratorRecord) -> Ordering {
        match self {
            Column::Id => id_number(&a.id)
                .cmp(&id_number(&b.id))
                .then_with(|| a.id.cmp(&b.id)),
            Column::Model => a.model.cmp(&b.model),
            Column::Capacity => a.capacity_kva.cmp(&b.capacity_kva),
            Column::Region => a.region.name().cmp(b.region.name()),
            Column::Latitude => a.latitude.total_cmp(&b.latitude),
            Column::Longitude => a.longitude.total_cmp(&b.longitude),
            Column::Status => a.status.cmp(&b.status),
            Column::Revenue => a.monthly_revenue.total_cmp(&b.monthly_revenue),
            Column::Fuel => a.fuel_percent.cmp(&b.fuel_percent),
            Column::Temperature => a.engine_temp_c.cmp(&b.engine_temp_c),
            Column::Hours => a.operating_hours.cmp(&b.operating_hours),
            Column::Alert => a.active_alert.cmp(&b.active_alert),
            Column::Site => a.project_site.cmp(&b.project_site),
        }
    }

    /// Numeric columns are right-aligned in the table
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::Capacity
                | Column::Latitude
                | Column::Longitude
                | Column::Revenue
                | Column::Fuel
                | Column::Temperature
                | Column::Hours
        )
    }
}

impl FromStr for Column {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.key() == name)
            .ok_or_else(|| FleetError::UnknownColumn(name.to_string()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Numeric part of a `DNY-<n>` id, so `DNY-10000` sorts after `DNY-9999`
fn id_number(id: &str) -> Option<u64> {
    id.rsplit('-').next().and_then(|n| n.parse().ok())
}

/// Ordered, duplicate-free list of visible columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<Column>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            columns: Column::DEFAULT.to_vec(),
        }
    }
}

impl ColumnSelection {
    /// Validate configured column names
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn parse(names: &[String]) -> Result<Self, FleetError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let column: Column = name.parse()?;
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        if columns.is_empty() {
            return Err(FleetError::EmptySelection);
        }
        Ok(Self { columns })
    }

    /// Parse a configured list, or the defaults when it is absent or invalid
    pub fn from_config(names: Option<&[String]>) -> Self {
        match names {
            None => Self::default(),
            Some(names) => Self::parse(names).unwrap_or_else(|e| {
                warn!(error = %e, "invalid table_columns in config, using defaults");
                Self::default()
            }),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn contains(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Show or hide a column; the last visible column cannot be hidden
    pub fn toggle(&mut self, column: Column) -> bool {
        if let Some(pos) = self.columns.iter().position(|c| *c == column) {
            if self.columns.len() == 1 {
                return false;
            }
            self.columns.remove(pos);
        } else {
            // Keep schema order when re-adding
            let rank = |c: &Column| Column::ALL.iter().position(|x| x == c).unwrap_or(usize::MAX);
            let insert_at = self
                .columns
                .iter()
                .position(|c| rank(c) > rank(&column))
                .unwrap_or(self.columns.len());
            self.columns.insert(insert_at, column);
        }
        true
    }

    pub fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.key().to_string()).collect()
    }
}

/// Sort key and direction for the fleet table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub column: Option<Column>,
    pub descending: bool,
}

impl SortSpec {
    pub fn by(column: Column, descending: bool) -> Self {
        Self {
            column: Some(column),
            descending,
        }
    }

    /// Stable sort of a view; equal keys keep their input order
    pub fn apply(&self, view: &mut [&GeneratorRecord]) {
        let Some(column) = self.column else {
            return;
        };
        if self.descending {
            view.sort_by(|a, b| column.compare(b, a));
        } else {
            view.sort_by(|a, b| column.compare(a, b));
        }
    }
}
