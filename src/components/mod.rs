//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alerts;
pub mod column_dialog;
pub mod dashboard;
pub mod filter_dialog;
pub mod fleet_map;
pub mod help_dialog;
pub mod insights;
pub mod kpi;
pub mod layout;
pub mod quit_dialog;
pub mod report_selector;
pub mod report_view;
pub mod revenue_chart;
pub mod splash;
pub mod table;

pub use column_dialog::ColumnDialog;
pub use dashboard::{draw_dashboard, DashboardComponent, DashboardRenderContext};
pub use filter_dialog::FilterDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_dashboard_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use report_selector::ReportSelectorDialog;
pub use report_view::ReportViewDialog;
pub use splash::SplashComponent;
pub use table::TableComponent;
