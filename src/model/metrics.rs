//! Aggregates over a filtered view
//!
//! Every function here is total: an empty view produces zeros or `None`,
//! never a panic or a NaN.

use super::fleet::{GeneratorRecord, Status};
use super::locale::Labels;
use std::collections::HashMap;

/// Utilization below this percentage is reported as a falling trend
const UTILIZATION_TREND_PIVOT: f64 = 70.0;

/// KPI values for the header cards
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FleetSummary {
    pub count: usize,
    pub total_revenue: f64,
    /// Percentage of units with status Active; 0 when the view is empty
    pub utilization_rate: f64,
    pub critical_alert_count: usize,
    /// Mean fuel level; `None` when the view is empty
    pub avg_fuel: Option<f64>,
}

impl FleetSummary {
    pub fn compute(view: &[&GeneratorRecord]) -> Self {
        let count = view.len();
        let total_revenue = view.iter().map(|r| r.monthly_revenue).sum();
        let active = view.iter().filter(|r| r.status == Status::Active).count();
        let utilization_rate = if count == 0 {
            0.0
        } else {
            active as f64 / count as f64 * 100.0
        };
        let critical_alert_count = view.iter().filter(|r| r.active_alert.is_critical()).count();
        let avg_fuel = if count == 0 {
            None
        } else {
            Some(view.iter().map(|r| r.fuel_percent as f64).sum::<f64>() / count as f64)
        };

        Self {
            count,
            total_revenue,
            utilization_rate,
            critical_alert_count,
            avg_fuel,
        }
    }

    /// Delta label shown under the utilization card
    pub fn utilization_trend(&self) -> &'static str {
        if self.utilization_rate < UTILIZATION_TREND_PIVOT {
            "-2%"
        } else {
            "+5%"
        }
    }

    /// Whether the critical alerts card should ask for attention
    pub fn needs_attention(&self) -> bool {
        self.critical_alert_count > 0
    }

    /// Delta label shown under the critical alerts card
    pub fn alert_trend(&self, labels: &Labels) -> &'static str {
        if self.needs_attention() {
            labels.needs_attention
        } else {
            labels.stable
        }
    }
}

/// Month-over-month revenue delta shown on the revenue card, in percent
///
/// Fixed per seed so a refresh does not change it.
pub fn revenue_trend(seed: u64) -> u64 {
    2 + seed % 6
}

/// Field to group revenue by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Site,
    Region,
    Model,
}

impl GroupKey {
    fn key_of(&self, record: &GeneratorRecord) -> String {
        match self {
            GroupKey::Site => record.project_site.clone(),
            GroupKey::Region => record.region.name().to_string(),
            GroupKey::Model => record.model.name().to_string(),
        }
    }
}

/// Revenue total for one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub label: String,
    pub revenue: f64,
}

/// Sum revenue per group, sorted descending; ties break on label ascending
pub fn revenue_by_group(
    view: &[&GeneratorRecord],
    key: GroupKey,
    top_n: Option<usize>,
) -> Vec<GroupTotal> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in view {
        *totals.entry(key.key_of(record)).or_default() += record.monthly_revenue;
    }

    let mut groups: Vec<GroupTotal> = totals
        .into_iter()
        .map(|(label, revenue)| GroupTotal { label, revenue })
        .collect();
    groups.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.label.cmp(&b.label))
    });

    if let Some(n) = top_n {
        groups.truncate(n);
    }
    groups
}

/// Unit count per status, in the order given
pub fn status_breakdown(view: &[&GeneratorRecord], statuses: &[Status]) -> Vec<(Status, usize)> {
    statuses
        .iter()
        .map(|status| (*status, view.iter().filter(|r| r.status == *status).count()))
        .collect()
}

/// Records carrying any alert, order preserved
pub fn alert_rows<'a>(view: &[&'a GeneratorRecord]) -> Vec<&'a GeneratorRecord> {
    view.iter()
        .copied()
        .filter(|r| r.active_alert.is_active())
        .collect()
}

/// Records whose fuel is strictly below `threshold`
pub fn below_fuel_threshold<'a>(
    view: &[&'a GeneratorRecord],
    threshold: u8,
) -> Vec<&'a GeneratorRecord> {
    view.iter()
        .copied()
        .filter(|r| r.fuel_percent < threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fleet::{Alert, GeneratorModel, Region};
    use crate::model::generator::generate_default;

    fn record(
        id: &str,
        site: &str,
        revenue: f64,
        status: Status,
        fuel: u8,
        alert: Alert,
    ) -> GeneratorRecord {
        GeneratorRecord {
            id: id.to_string(),
            model: GeneratorModel::Dca45Usi,
            capacity_kva: 37,
            region: Region::Cairo,
            latitude: 30.0,
            longitude: 31.0,
            status,
            monthly_revenue: revenue,
            fuel_percent: fuel,
            engine_temp_c: 80,
            operating_hours: None,
            active_alert: alert,
            project_site: site.to_string(),
        }
    }

    #[test]
    fn test_empty_view_is_safe() {
        let summary = FleetSummary::compute(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.utilization_rate, 0.0);
        assert!(!summary.utilization_rate.is_nan());
        assert_eq!(summary.critical_alert_count, 0);
        assert_eq!(summary.avg_fuel, None);
        assert!(revenue_by_group(&[], GroupKey::Site, Some(10)).is_empty());
    }

    #[test]
    fn test_summary_values() {
        let records = [
            record("a", "Cairo Site-1", 1000.0, Status::Active, 10, Alert::LowFuel),
            record("b", "Cairo Site-2", 500.0, Status::Idle, 50, Alert::None),
            record("c", "Cairo Site-1", 250.5, Status::Active, 90, Alert::Overheating),
            record("d", "Cairo Site-3", 0.0, Status::Maintenance, 30, Alert::ServiceDue),
        ];
        let view: Vec<&GeneratorRecord> = records.iter().collect();
        let summary = FleetSummary::compute(&view);

        assert_eq!(summary.count, 4);
        assert!((summary.total_revenue - 1750.5).abs() < 1e-9);
        assert!((summary.utilization_rate - 50.0).abs() < 1e-9);
        assert_eq!(summary.critical_alert_count, 2);
        assert_eq!(summary.avg_fuel, Some(45.0));
        assert_eq!(summary.utilization_trend(), "-2%");
        assert!(summary.needs_attention());
    }

    #[test]
    fn test_revenue_by_site_sorted_descending() {
        let records = [
            record("a", "Giza Site-1", 4000.0, Status::Active, 50, Alert::None),
            record("b", "Suez Site-2", 9500.0, Status::Active, 50, Alert::None),
            record("c", "Giza Site-1", 3000.0, Status::Active, 50, Alert::None),
            record("d", "Cairo Site-4", 12000.0, Status::Active, 50, Alert::None),
        ];
        let view: Vec<&GeneratorRecord> = records.iter().collect();
        let groups = revenue_by_group(&view, GroupKey::Site, None);

        let totals: Vec<f64> = groups.iter().map(|g| g.revenue).collect();
        assert_eq!(totals, vec![12000.0, 9500.0, 7000.0]);
        assert_eq!(groups[0].label, "Cairo Site-4");
        assert_eq!(groups[2].label, "Giza Site-1");

        let top = revenue_by_group(&view, GroupKey::Site, Some(2));
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_revenue_groups_sum_to_total() {
        let fleet = generate_default(42, 50);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let total = FleetSummary::compute(&view).total_revenue;
        for key in [GroupKey::Site, GroupKey::Region, GroupKey::Model] {
            let sum: f64 = revenue_by_group(&view, key, None).iter().map(|g| g.revenue).sum();
            assert!((sum - total).abs() < 1e-6);
        }
        assert!(revenue_by_group(&view, GroupKey::Model, None).len() <= 5);
    }

    #[test]
    fn test_status_breakdown_and_alert_rows() {
        let records = [
            record("a", "s", 1.0, Status::Active, 10, Alert::LowFuel),
            record("b", "s", 1.0, Status::Idle, 50, Alert::None),
            record("c", "s", 1.0, Status::Active, 15, Alert::ServiceDue),
        ];
        let view: Vec<&GeneratorRecord> = records.iter().collect();

        let breakdown =
            status_breakdown(&view, &[Status::Active, Status::Idle, Status::Maintenance]);
        assert_eq!(
            breakdown,
            vec![(Status::Active, 2), (Status::Idle, 1), (Status::Maintenance, 0)]
        );

        let alerts: Vec<&str> = alert_rows(&view).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(alerts, vec!["a", "c"]);

        let low: Vec<&str> = below_fuel_threshold(&view, 15)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(low, vec!["a"]);
    }

    #[test]
    fn test_revenue_trend_range() {
        for seed in 0..20 {
            assert!((2..=7).contains(&revenue_trend(seed)));
        }
        assert_eq!(revenue_trend(42), revenue_trend(42));
    }

    #[test]
    fn test_utilization_trend_pivot() {
        let summary = FleetSummary {
            utilization_rate: 70.0,
            ..Default::default()
        };
        assert_eq!(summary.utilization_trend(), "+5%");
        assert!(!summary.needs_attention());
        assert_eq!(
            summary.alert_trend(crate::model::locale::Locale::English.labels()),
            "Stable"
        );
    }
}
