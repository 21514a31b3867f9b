//! Canned reports and the insight card
//!
//! Reports are plain text templates filled from the current filtered view.

use super::fleet::{GeneratorRecord, Region};
use super::locale::Locale;
use super::metrics::{
    alert_rows, below_fuel_threshold, revenue_by_group, status_breakdown, FleetSummary, GroupKey,
};
use super::profile::FleetProfile;

/// Number of sites listed in the executive summary
const EXECUTIVE_TOP_SITES: usize = 3;

/// Asset shown on the insight card when the view is empty
const FALLBACK_ASSET_ID: &str = "DNY-1023";
const FALLBACK_ASSET_REGION: Region = Region::Aswan;

/// Report templates available from the report selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Executive,
    Maintenance,
    Revenue,
    Fuel,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Executive,
        ReportKind::Maintenance,
        ReportKind::Revenue,
        ReportKind::Fuel,
    ];

    pub fn title(&self, locale: &Locale) -> &'static str {
        let labels = locale.labels();
        match self {
            ReportKind::Executive => labels.report_executive,
            ReportKind::Maintenance => labels.report_maintenance,
            ReportKind::Revenue => labels.report_revenue,
            ReportKind::Fuel => labels.report_fuel,
        }
    }
}

/// A rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

/// Fill a report template from the filtered view
///
/// `fuel_threshold` drives the refuel watch list of the fuel report; when
/// unset the profile's low-fuel alert threshold is used.
pub fn build_report(
    kind: ReportKind,
    view: &[&GeneratorRecord],
    profile: &FleetProfile,
    fuel_threshold: Option<u8>,
    locale: &Locale,
) -> Report {
    let labels = locale.labels();
    let summary = FleetSummary::compute(view);
    let mut lines = Vec::new();

    match kind {
        ReportKind::Executive => {
            lines.push(format!(
                "{} {} {}",
                labels.tracking_prefix,
                locale.format_int(summary.count as u64),
                labels.tracking_suffix
            ));
            lines.push(format!(
                "{}: {}",
                labels.kpi_revenue,
                locale.format_money(summary.total_revenue)
            ));
            lines.push(format!(
                "{}: {} ({})",
                labels.kpi_utilization,
                locale.format_percent(summary.utilization_rate, 1),
                summary.utilization_trend()
            ));
            lines.push(format!(
                "{}: {} ({})",
                labels.kpi_alerts,
                locale.format_int(summary.critical_alert_count as u64),
                summary.alert_trend(labels)
            ));
            lines.push(format!("{}: {}", labels.kpi_fuel, avg_fuel_text(&summary, locale)));
            lines.push(String::new());
            lines.push(format!("{}:", labels.top_sites));
            for group in revenue_by_group(view, GroupKey::Site, Some(EXECUTIVE_TOP_SITES)) {
                lines.push(format!(
                    "  {}  {}",
                    site_label(&group.label, view, locale),
                    locale.format_money(group.revenue)
                ));
            }
        }
        ReportKind::Maintenance => {
            lines.push(format!("{}:", labels.status_breakdown));
            for (status, count) in status_breakdown(view, &profile.statuses) {
                lines.push(format!(
                    "  {}: {}",
                    locale.status(status),
                    locale.format_int(count as u64)
                ));
            }
            lines.push(String::new());
            lines.push(format!("{}:", labels.alerts_title));
            let alerts = alert_rows(view);
            if alerts.is_empty() {
                lines.push(format!("  {}", labels.no_alerts));
            }
            for record in alerts {
                lines.push(format!(
                    "  {}  {}  {}  {}°C  {}%",
                    record.id,
                    locale.region(record.region),
                    locale.alert(record.active_alert),
                    locale.format_int(record.engine_temp_c as u64),
                    locale.format_int(record.fuel_percent as u64)
                ));
            }
        }
        ReportKind::Revenue => {
            lines.push(format!(
                "{}: {}",
                labels.kpi_revenue,
                locale.format_money(summary.total_revenue)
            ));
            lines.push(String::new());
            lines.push(format!("{}:", labels.by_region));
            for group in revenue_by_group(view, GroupKey::Region, None) {
                let name = Region::ALL
                    .into_iter()
                    .find(|r| r.name() == group.label)
                    .map(|r| locale.region(r).to_string())
                    .unwrap_or_else(|| group.label.clone());
                lines.push(format!("  {}  {}", name, locale.format_money(group.revenue)));
            }
            lines.push(String::new());
            lines.push(format!("{}:", labels.by_model));
            for group in revenue_by_group(view, GroupKey::Model, None) {
                lines.push(format!("  {}  {}", group.label, locale.format_money(group.revenue)));
            }
        }
        ReportKind::Fuel => {
            let threshold = fuel_threshold.unwrap_or(profile.thresholds.fuel_below);
            lines.push(format!("{}: {}", labels.kpi_fuel, avg_fuel_text(&summary, locale)));
            lines.push(format!(
                "{} (< {}%):",
                labels.refuel_watch,
                locale.format_int(threshold as u64)
            ));
            let watch = below_fuel_threshold(view, threshold);
            if watch.is_empty() {
                lines.push(format!("  {}", labels.not_available));
            }
            for record in watch {
                lines.push(format!(
                    "  {}  {}  {}%",
                    record.id,
                    locale.site(record),
                    locale.format_int(record.fuel_percent as u64)
                ));
            }
        }
    }

    if view.is_empty() {
        lines.push(String::new());
        lines.push(labels.empty_view.to_string());
    }

    Report {
        title: kind.title(locale).to_string(),
        lines,
    }
}

/// Canned predictive-maintenance card
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub asset_id: String,
    pub region: Region,
    /// Engine temperature of the chosen asset; `None` for the canned fallback
    pub engine_temp_c: Option<u8>,
}

impl Insight {
    /// Highest engine temperature in the view, first one on ties
    pub fn from_view(view: &[&GeneratorRecord]) -> Self {
        let hottest = view
            .iter()
            .copied()
            .reduce(|best, r| if r.engine_temp_c > best.engine_temp_c { r } else { best });

        match hottest {
            Some(record) => Self {
                asset_id: record.id.clone(),
                region: record.region,
                engine_temp_c: Some(record.engine_temp_c),
            },
            None => Self {
                asset_id: FALLBACK_ASSET_ID.to_string(),
                region: FALLBACK_ASSET_REGION,
                engine_temp_c: None,
            },
        }
    }

    /// `(label, value)` pairs for the card body
    pub fn fields(&self, locale: &Locale) -> Vec<(&'static str, String)> {
        let labels = locale.labels();
        let asset = match self.engine_temp_c {
            Some(temp) => format!(
                "{} ({}, {}°C)",
                self.asset_id,
                locale.region(self.region),
                locale.format_int(temp as u64)
            ),
            None => format!("{} ({})", self.asset_id, locale.region(self.region)),
        };
        vec![
            (labels.insight_asset, asset),
            (labels.insight_issue, labels.insight_issue_text.to_string()),
            (labels.insight_risk, labels.insight_risk_value.to_string()),
            (
                labels.insight_recommendation,
                labels.insight_recommendation_text.to_string(),
            ),
        ]
    }
}

fn avg_fuel_text(summary: &FleetSummary, locale: &Locale) -> String {
    match summary.avg_fuel {
        Some(avg) => locale.format_percent(avg, 1),
        None => locale.labels().not_available.to_string(),
    }
}

/// Localized name of a site key produced by `GroupKey::Site`
fn site_label(site: &str, view: &[&GeneratorRecord], locale: &Locale) -> String {
    view.iter()
        .find(|r| r.project_site == site)
        .map(|r| locale.site(r))
        .unwrap_or_else(|| site.to_string())
}
