//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::columns::Column;
use crate::model::fleet::{Region, Status};
use crate::model::report::ReportKind;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row of the fleet table
    NextItem,
    /// Move to previous row of the fleet table
    PrevItem,
    /// Jump to first row
    FirstItem,
    /// Jump to last row
    LastItem,
    /// Move one page down the fleet table
    PageDown,
    /// Move one page up the fleet table
    PageUp,
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the fleet filter dialog
    OpenFilter,
    /// Open the column and sort dialog
    OpenColumns,
    /// Open the report selector
    OpenReports,
    /// Render a report over the selector
    OpenReport(ReportKind),
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Navigate up in modal (e.g., previous option)
    ModalUp,
    /// Navigate down in modal (e.g., next option)
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    ToggleRegion(Region),
    ToggleStatus(Status),
    SetCapacityMin(u32),
    SetCapacityMax(u32),
    /// `None` switches the refuel watch list off
    SetFuelThreshold(Option<u8>),
    /// Select every region and status again
    ResetFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Table
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or hide a column
    ToggleColumn(Column),
    /// Sort by a column; repeating flips the direction
    SortBy(Column),
    /// Back to generation order
    ClearSort,

    // ─────────────────────────────────────────────────────────────────────────
    // Fleet Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Regenerate with the current seed
    RefreshFleet,
    /// Regenerate with the next seed
    ReseedFleet,
    /// Write the filtered table to CSV
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // View Toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between English and Arabic
    ToggleLocale,
    /// Switch between grid and tabbed layout
    ToggleLayout,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::PageDown => write!(f, "PageDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenFilter => write!(f, "OpenFilter"),
            Action::OpenColumns => write!(f, "OpenColumns"),
            Action::OpenReports => write!(f, "OpenReports"),
            Action::OpenReport(kind) => write!(f, "OpenReport({:?})", kind),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::ToggleRegion(region) => write!(f, "ToggleRegion({})", region),
            Action::ToggleStatus(status) => write!(f, "ToggleStatus({})", status),
            Action::SetCapacityMin(kva) => write!(f, "SetCapacityMin({})", kva),
            Action::SetCapacityMax(kva) => write!(f, "SetCapacityMax({})", kva),
            Action::SetFuelThreshold(Some(pct)) => write!(f, "SetFuelThreshold({})", pct),
            Action::SetFuelThreshold(None) => write!(f, "SetFuelThreshold(off)"),
            Action::ResetFilters => write!(f, "ResetFilters"),
            Action::ToggleColumn(column) => write!(f, "ToggleColumn({})", column),
            Action::SortBy(column) => write!(f, "SortBy({})", column),
            Action::ClearSort => write!(f, "ClearSort"),
            Action::RefreshFleet => write!(f, "RefreshFleet"),
            Action::ReseedFleet => write!(f, "ReseedFleet"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::ToggleLocale => write!(f, "ToggleLocale"),
            Action::ToggleLayout => write!(f, "ToggleLayout"),
        }
    }
}
