//! Locale label tables and number formatting
//!
//! One dashboard, two label tables. Arabic switches to Arabic-Indic digits,
//! right-aligned text panels and the tabbed layout by default.

use super::error::FleetError;
use super::fleet::{Alert, GeneratorModel, GeneratorRecord, Region, Status};
use super::ui::{LayoutMode, Tab};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

/// Every user-visible string of the dashboard
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub tracking_prefix: &'static str,
    pub tracking_suffix: &'static str,
    pub kpi_revenue: &'static str,
    pub kpi_utilization: &'static str,
    pub kpi_alerts: &'static str,
    pub kpi_fuel: &'static str,
    pub units: &'static str,
    pub vs_last_month: &'static str,
    pub needs_attention: &'static str,
    pub stable: &'static str,
    pub refuel_schedule: &'static str,
    pub not_available: &'static str,
    pub map_title: &'static str,
    pub map_caption: &'static str,
    pub revenue_chart_title: &'static str,
    pub insights_title: &'static str,
    pub alerts_title: &'static str,
    pub no_alerts: &'static str,
    pub empty_view: &'static str,
    pub table_title: &'static str,
    pub currency: &'static str,
    pub million_suffix: &'static str,
    pub footer: &'static str,
    pub filter_title: &'static str,
    pub filter_regions: &'static str,
    pub filter_statuses: &'static str,
    pub filter_capacity_min: &'static str,
    pub filter_capacity_max: &'static str,
    pub filter_fuel: &'static str,
    pub off: &'static str,
    pub columns_title: &'static str,
    pub sort_by: &'static str,
    pub ascending: &'static str,
    pub descending: &'static str,
    pub reports_title: &'static str,
    pub refuel_watch: &'static str,
    pub quit_prompt: &'static str,
    pub quit_yes: &'static str,
    pub quit_no: &'static str,
    pub exported: &'static str,
    pub refreshed: &'static str,
    pub reseeded: &'static str,
    pub last_column: &'static str,
    pub site_word: &'static str,
    pub report_executive: &'static str,
    pub report_maintenance: &'static str,
    pub report_revenue: &'static str,
    pub report_fuel: &'static str,
    pub top_sites: &'static str,
    pub by_region: &'static str,
    pub by_model: &'static str,
    pub status_breakdown: &'static str,
    pub insight_heading: &'static str,
    pub insight_asset: &'static str,
    pub insight_issue: &'static str,
    pub insight_issue_text: &'static str,
    pub insight_risk: &'static str,
    pub insight_risk_value: &'static str,
    pub insight_recommendation: &'static str,
    pub insight_recommendation_text: &'static str,
    pub route_note: &'static str,
    pub col_id: &'static str,
    pub col_model: &'static str,
    pub col_capacity: &'static str,
    pub col_region: &'static str,
    pub col_latitude: &'static str,
    pub col_longitude: &'static str,
    pub col_status: &'static str,
    pub col_revenue: &'static str,
    pub col_fuel: &'static str,
    pub col_temp: &'static str,
    pub col_hours: &'static str,
    pub col_alert: &'static str,
    pub col_site: &'static str,
}

static ENGLISH: Labels = Labels {
    app_title: "Elkatamy Power Systems | Executive Dashboard",
    tracking_prefix: "Live Overview: Tracking",
    tracking_suffix: "Generators across Egypt",
    kpi_revenue: "Total Monthly Revenue",
    kpi_utilization: "Fleet Utilization",
    kpi_alerts: "Critical Alerts",
    kpi_fuel: "Avg Fuel Level",
    units: "units",
    vs_last_month: "vs last month",
    needs_attention: "Needs Attention",
    stable: "Stable",
    refuel_schedule: "Refuel Schd:",
    not_available: "n/a",
    map_title: "Asset Geolocation",
    map_caption: "Real-time GPS telemetry from IoT modules.",
    revenue_chart_title: "Revenue by Project Site",
    insights_title: "Elkatamy AI Insights",
    alerts_title: "Active Fleet Alerts",
    no_alerts: "No critical fleet alerts at this time.",
    empty_view: "No generators match the current filters.",
    table_title: "Fleet Table",
    currency: "EGP",
    million_suffix: "M",
    footer: "Elkatamy Group Internal System | Powered by Industrial IoT Telemetry | v2.4.0",
    filter_title: "Fleet Controls",
    filter_regions: "Filter by Region",
    filter_statuses: "Filter by Status",
    filter_capacity_min: "Capacity min (kVA)",
    filter_capacity_max: "Capacity max (kVA)",
    filter_fuel: "Fuel alert threshold (%)",
    off: "Off",
    columns_title: "Table Columns",
    sort_by: "Sort by",
    ascending: "ascending",
    descending: "descending",
    reports_title: "Reports",
    refuel_watch: "Refuel watch list",
    quit_prompt: "Are you sure you want to quit?",
    quit_yes: "Yes, quit",
    quit_no: "No, cancel",
    exported: "Exported",
    refreshed: "Fleet data refreshed",
    reseeded: "Fleet regenerated with seed",
    last_column: "At least one column must stay visible",
    site_word: "Site",
    report_executive: "Executive Summary",
    report_maintenance: "Maintenance Report",
    report_revenue: "Revenue Report",
    report_fuel: "Fuel Report",
    top_sites: "Top project sites",
    by_region: "Revenue by Region",
    by_model: "Revenue by Model",
    status_breakdown: "Status breakdown",
    insight_heading: "Predictive Maint. Alert",
    insight_asset: "Asset",
    insight_issue: "Issue",
    insight_issue_text: "Irregular vibration patterns detected in alternator bearing.",
    insight_risk: "Risk Score",
    insight_risk_value: "High (85%)",
    insight_recommendation: "Recommendation",
    insight_recommendation_text: "Dispatch technician team from Luxor branch within 24 hours to prevent catastrophic failure.",
    route_note: "System optimized fuel routes for Cairo sector, saving estimated 12,000 EGP next cycle.",
    col_id: "Gen ID",
    col_model: "Model",
    col_capacity: "Capacity (kVA)",
    col_region: "Location",
    col_latitude: "Latitude",
    col_longitude: "Longitude",
    col_status: "Status",
    col_revenue: "Monthly Revenue (EGP)",
    col_fuel: "Fuel Level (%)",
    col_temp: "Engine Temp (°C)",
    col_hours: "Operating Hours",
    col_alert: "Active Alert",
    col_site: "Project Site",
};

static ARABIC: Labels = Labels {
    app_title: "الكتامي لأنظمة الطاقة | لوحة القيادة التنفيذية",
    tracking_prefix: "نظرة حية: متابعة",
    tracking_suffix: "مولد في أنحاء مصر",
    kpi_revenue: "إجمالي الإيرادات الشهرية",
    kpi_utilization: "نسبة تشغيل الأسطول",
    kpi_alerts: "التنبيهات الحرجة",
    kpi_fuel: "متوسط مستوى الوقود",
    units: "وحدة",
    vs_last_month: "مقارنة بالشهر الماضي",
    needs_attention: "يحتاج إلى متابعة",
    stable: "مستقر",
    refuel_schedule: "موعد التزويد:",
    not_available: "غير متاح",
    map_title: "المواقع الجغرافية للأصول",
    map_caption: "بيانات تحديد المواقع لحظياً من وحدات إنترنت الأشياء.",
    revenue_chart_title: "الإيرادات حسب موقع المشروع",
    insights_title: "رؤى الكتامي بالذكاء الاصطناعي",
    alerts_title: "تنبيهات الأسطول النشطة",
    no_alerts: "لا توجد تنبيهات حرجة في الوقت الحالي.",
    empty_view: "لا توجد مولدات مطابقة للفلاتر الحالية.",
    table_title: "جدول الأسطول",
    currency: "ج.م",
    million_suffix: "مليون",
    footer: "نظام داخلي لمجموعة الكتامي | مدعوم بقياسات إنترنت الأشياء الصناعي | v2.4.0",
    filter_title: "أدوات التحكم بالأسطول",
    filter_regions: "تصفية حسب المنطقة",
    filter_statuses: "تصفية حسب الحالة",
    filter_capacity_min: "أدنى قدرة (ك.ف.أ)",
    filter_capacity_max: "أقصى قدرة (ك.ف.أ)",
    filter_fuel: "حد تنبيه الوقود (%)",
    off: "إيقاف",
    columns_title: "أعمدة الجدول",
    sort_by: "ترتيب حسب",
    ascending: "تصاعدي",
    descending: "تنازلي",
    reports_title: "التقارير",
    refuel_watch: "قائمة متابعة التزويد بالوقود",
    quit_prompt: "هل تريد الخروج؟",
    quit_yes: "نعم، خروج",
    quit_no: "لا، إلغاء",
    exported: "تم التصدير",
    refreshed: "تم تحديث بيانات الأسطول",
    reseeded: "تم توليد الأسطول بالبذرة",
    last_column: "يجب إبقاء عمود واحد على الأقل ظاهراً",
    site_word: "موقع",
    report_executive: "الملخص التنفيذي",
    report_maintenance: "تقرير الصيانة",
    report_revenue: "تقرير الإيرادات",
    report_fuel: "تقرير الوقود",
    top_sites: "أعلى مواقع المشاريع",
    by_region: "الإيرادات حسب المنطقة",
    by_model: "الإيرادات حسب الطراز",
    status_breakdown: "توزيع الحالات",
    insight_heading: "تنبيه صيانة تنبؤية",
    insight_asset: "الأصل",
    insight_issue: "المشكلة",
    insight_issue_text: "تم رصد أنماط اهتزاز غير منتظمة في محمل المولد.",
    insight_risk: "درجة الخطورة",
    insight_risk_value: "مرتفعة (٨٥٪)",
    insight_recommendation: "التوصية",
    insight_recommendation_text: "إرسال فريق فني من فرع الأقصر خلال ٢٤ ساعة لتفادي عطل جسيم.",
    route_note: "قام النظام بتحسين مسارات الوقود لقطاع القاهرة، بتوفير متوقع ١٢٬٠٠٠ ج.م في الدورة القادمة.",
    col_id: "رقم المولد",
    col_model: "الطراز",
    col_capacity: "القدرة (ك.ف.أ)",
    col_region: "الموقع",
    col_latitude: "خط العرض",
    col_longitude: "خط الطول",
    col_status: "الحالة",
    col_revenue: "الإيراد الشهري (ج.م)",
    col_fuel: "مستوى الوقود (%)",
    col_temp: "حرارة المحرك (°م)",
    col_hours: "ساعات التشغيل",
    col_alert: "التنبيه النشط",
    col_site: "موقع المشروع",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Arabic => &ARABIC,
        }
    }

    pub fn toggle(&self) -> Locale {
        match self {
            Locale::English => Locale::Arabic,
            Locale::Arabic => Locale::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Arabic)
    }

    /// The Arabic dashboard ships with the tabbed layout
    pub fn default_layout(&self) -> LayoutMode {
        match self {
            Locale::English => LayoutMode::Grid,
            Locale::Arabic => LayoutMode::Tabbed,
        }
    }

    pub fn region(&self, region: Region) -> &'static str {
        match self {
            Locale::English => region.name(),
            Locale::Arabic => match region {
                Region::Cairo => "القاهرة",
                Region::Giza => "الجيزة",
                Region::Alexandria => "الإسكندرية",
                Region::Aswan => "أسوان",
                Region::RedSea => "البحر الأحمر",
                Region::Suez => "السويس",
                Region::Luxor => "الأقصر",
                Region::PortSaid => "بورسعيد",
            },
        }
    }

    pub fn status(&self, status: Status) -> &'static str {
        match self {
            Locale::English => status.name(),
            Locale::Arabic => match status {
                Status::Active => "نشط",
                Status::Idle => "خامل",
                Status::Maintenance => "صيانة",
                Status::Down => "متوقف",
                Status::EnRoute => "في الطريق",
            },
        }
    }

    pub fn alert(&self, alert: Alert) -> &'static str {
        match self {
            Locale::English => alert.name(),
            Locale::Arabic => match alert {
                Alert::None => "لا يوجد",
                Alert::LowFuel => "وقود منخفض",
                Alert::Overheating => "ارتفاع الحرارة",
                Alert::ServiceDue => "صيانة مستحقة",
                Alert::MajorOverhaul => "عمرة رئيسية",
            },
        }
    }

    /// Model catalogue names are not translated
    pub fn model(&self, model: GeneratorModel) -> &'static str {
        model.name()
    }

    /// Project site with the region and the word "Site" localized
    pub fn site(&self, record: &GeneratorRecord) -> String {
        match self {
            Locale::English => record.project_site.clone(),
            Locale::Arabic => {
                let number = record.project_site.rsplit('-').next().unwrap_or_default();
                format!(
                    "{} {}-{}",
                    self.region(record.region),
                    self.labels().site_word,
                    self.digits(number)
                )
            }
        }
    }

    pub fn tab(&self, tab: Tab) -> &'static str {
        match (self, tab) {
            (Locale::English, Tab::Overview) => "Overview",
            (Locale::English, Tab::Map) => "Map",
            (Locale::English, Tab::Revenue) => "Revenue",
            (Locale::English, Tab::Alerts) => "Alerts",
            (Locale::English, Tab::Fleet) => "Fleet",
            (Locale::Arabic, Tab::Overview) => "نظرة عامة",
            (Locale::Arabic, Tab::Map) => "الخريطة",
            (Locale::Arabic, Tab::Revenue) => "الإيرادات",
            (Locale::Arabic, Tab::Alerts) => "التنبيهات",
            (Locale::Arabic, Tab::Fleet) => "الأسطول",
        }
    }

    /// Replace ASCII digits and separators with the locale's forms
    pub fn digits(&self, text: &str) -> String {
        match self {
            Locale::English => text.to_string(),
            Locale::Arabic => text
                .chars()
                .map(|c| match c {
                    '0'..='9' => char::from_u32('\u{0660}' as u32 + (c as u32 - '0' as u32))
                        .unwrap_or(c),
                    '.' => '\u{066B}',
                    ',' => '\u{066C}',
                    _ => c,
                })
                .collect(),
        }
    }

    /// Number with thousands separators and fixed decimals
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        self.digits(&group_thousands(value, decimals))
    }

    /// Integer with thousands separators
    pub fn format_int(&self, value: u64) -> String {
        self.format_number(value as f64, 0)
    }

    /// Currency amount, e.g. `12,500.00 EGP`
    pub fn format_money(&self, value: f64) -> String {
        format!("{} {}", self.format_number(value, 2), self.labels().currency)
    }

    /// Currency amount in millions, e.g. `1.25M EGP`
    pub fn format_millions(&self, value: f64) -> String {
        let labels = self.labels();
        match self {
            Locale::English => format!(
                "{}{} {}",
                self.format_number(value / 1_000_000.0, 2),
                labels.million_suffix,
                labels.currency
            ),
            Locale::Arabic => format!(
                "{} {} {}",
                self.format_number(value / 1_000_000.0, 2),
                labels.million_suffix,
                labels.currency
            ),
        }
    }

    /// Percentage with the given decimals, e.g. `82.0%`
    pub fn format_percent(&self, value: f64, decimals: usize) -> String {
        format!("{}%", self.format_number(value, decimals))
    }
}

impl FromStr for Locale {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ar" | "arabic" => Ok(Locale::Arabic),
            other => Err(FleetError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(1000.0, 0), "1,000");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(-12500.0, 2), "-12,500.00");
        assert_eq!(group_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_english_formatting() {
        let en = Locale::English;
        assert_eq!(en.format_money(12500.0), "12,500.00 EGP");
        assert_eq!(en.format_millions(1_250_000.0), "1.25M EGP");
        assert_eq!(en.format_percent(82.0, 1), "82.0%");
        assert_eq!(en.format_int(1049), "1,049");
    }

    #[test]
    fn test_arabic_digits() {
        let ar = Locale::Arabic;
        assert_eq!(ar.digits("2024"), "٢٠٢٤");
        assert_eq!(ar.format_number(1234.5, 1), "١٬٢٣٤٫٥");
        assert!(ar.format_money(10.0).ends_with("ج.م"));
    }

    #[test]
    fn test_every_enum_has_a_label_in_both_locales() {
        for locale in [Locale::English, Locale::Arabic] {
            for region in Region::ALL {
                assert!(!locale.region(region).is_empty());
            }
            for status in [
                Status::Active,
                Status::Idle,
                Status::Maintenance,
                Status::Down,
                Status::EnRoute,
            ] {
                assert!(!locale.status(status).is_empty());
            }
            for alert in Alert::ALL {
                assert!(!locale.alert(alert).is_empty());
            }
            for tab in Tab::all() {
                assert!(!locale.tab(tab).is_empty());
            }
        }
    }

    #[test]
    fn test_locale_parse_and_defaults() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Arabic));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::English));
        assert!("fr".parse::<Locale>().is_err());
        assert!(Locale::Arabic.is_rtl());
        assert_eq!(Locale::Arabic.default_layout(), LayoutMode::Tabbed);
        assert_eq!(Locale::English.default_layout(), LayoutMode::Grid);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Locale::Arabic).unwrap(), "\"ar\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::English);
    }
}
