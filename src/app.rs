//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates between components; fleet data and filtering live in
//! `DomainState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_dashboard, ColumnDialog, DashboardComponent, DashboardRenderContext, FilterDialog,
    HelpDialog, QuitDialog, ReportSelectorDialog, ReportViewDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::columns::{ColumnSelection, SortSpec};
use crate::model::domain::DomainState;
use crate::model::filter::FilterState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::report::{build_report, Report, ReportKind};
use crate::model::ui::AppMode;
use crate::services::export::write_export;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (fleet data, filters, table settings)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Where locale and column choices are remembered; `None` keeps them in memory
    config_path: Option<PathBuf>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub dashboard: DashboardComponent,
    pub quit_dialog: QuitDialog,
    pub filter_dialog: FilterDialog,
    pub column_dialog: ColumnDialog,
    pub report_selector: ReportSelectorDialog,
    pub report_view: ReportViewDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Build the app from a resolved config
    pub fn new(config: &Config, config_path: Option<PathBuf>, show_splash: bool) -> App {
        let mut domain = DomainState::new(config.seed, config.count, config.profile, config.locale);
        domain.columns = ColumnSelection::from_config(config.table_columns.as_deref());
        domain.export_dir = config.export_dir();

        info!(
            seed = config.seed,
            count = config.count,
            profile = %config.profile,
            locale = config.locale.code(),
            "fleet loaded"
        );

        let mut app = App {
            mode: if show_splash {
                AppMode::Splash
            } else {
                AppMode::Running
            },
            dashboard: DashboardComponent::new(config.locale.default_layout()),
            domain,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            config_path,
            splash: SplashComponent::new(),
            quit_dialog: QuitDialog::default(),
            filter_dialog: FilterDialog::new(),
            column_dialog: ColumnDialog::new(),
            report_selector: ReportSelectorDialog::new(),
            report_view: ReportViewDialog::default(),
            help_dialog: HelpDialog::default(),
        };
        app.sync_dialogs();
        app
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }
                // Esc dismisses an error before anything else
                if key.code == KeyCode::Esc && self.error.is_some() {
                    self.error = None;
                    return Ok(None);
                }
                self.dashboard.handle_key_event(key)
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode == AppMode::Running && self.modals.is_empty() {
            return self.dashboard.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        debug!(%action, "update");
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to DashboardComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem
            | Action::PrevItem
            | Action::FirstItem
            | Action::LastItem
            | Action::PageDown
            | Action::PageUp
            | Action::NextTab
            | Action::PrevTab
            | Action::ToggleLayout => {
                return self.dashboard.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenFilter => {
                self.sync_dialogs();
                self.modals.push(Modal::Filter {
                    selected_index: self.filter_dialog.selected_index,
                });
            }
            Action::OpenColumns => {
                self.sync_dialogs();
                self.modals.push(Modal::Columns {
                    selected_index: self.column_dialog.selected_index,
                });
            }
            Action::OpenReports => {
                self.sync_dialogs();
                self.modals.push(Modal::Reports {
                    selected_index: self.report_selector.selected_index,
                });
            }
            Action::OpenReport(kind) => {
                self.report_view.reset();
                self.modals.push(Modal::ReportView { kind });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                // Dialogs move their own cursor; mirror it into the stack
                match self.modals.top_mut() {
                    Some(Modal::Filter { selected_index }) => {
                        *selected_index = self.filter_dialog.selected_index;
                    }
                    Some(Modal::Columns { selected_index }) => {
                        *selected_index = self.column_dialog.selected_index;
                    }
                    Some(Modal::Reports { selected_index }) => {
                        *selected_index = self.report_selector.selected_index;
                    }
                    _ => {}
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleRegion(region) => {
                self.domain.filter.toggle_region(region);
                self.filters_changed();
            }
            Action::ToggleStatus(status) => {
                self.domain.filter.toggle_status(status);
                self.filters_changed();
            }
            Action::SetCapacityMin(kva) => {
                self.domain.filter.set_capacity_min(kva);
                self.filters_changed();
            }
            Action::SetCapacityMax(kva) => {
                self.domain.filter.set_capacity_max(kva);
                self.filters_changed();
            }
            Action::SetFuelThreshold(threshold) => {
                self.domain.filter.fuel_alert_threshold = threshold;
                self.filters_changed();
            }
            Action::ResetFilters => {
                let threshold = self.domain.filter.fuel_alert_threshold;
                self.domain.filter = FilterState::select_all(&self.domain.profile);
                self.domain.filter.fuel_alert_threshold = threshold;
                self.filters_changed();
            }

            // ─────────────────────────────────────────────────────────────────
            // Table
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleColumn(column) => {
                if self.domain.columns.toggle(column) {
                    self.persist_preferences();
                } else {
                    self.status_message = Some(self.domain.locale.labels().last_column.to_string());
                }
                self.sync_dialogs();
            }
            Action::SortBy(column) => {
                self.domain.sort = match self.domain.sort.column {
                    Some(current) if current == column => {
                        SortSpec::by(column, !self.domain.sort.descending)
                    }
                    _ => SortSpec::by(column, false),
                };
                self.sync_dialogs();
            }
            Action::ClearSort => {
                self.domain.sort = SortSpec::default();
                self.sync_dialogs();
            }

            // ─────────────────────────────────────────────────────────────────
            // Fleet Data
            // ─────────────────────────────────────────────────────────────────
            Action::RefreshFleet => {
                self.domain.refresh();
                self.error = None;
                self.status_message = Some(self.domain.locale.labels().refreshed.to_string());
                self.sync_dialogs();
            }
            Action::ReseedFleet => {
                let seed = self.domain.reseed();
                self.error = None;
                self.status_message =
                    Some(format!("{} {}", self.domain.locale.labels().reseeded, seed));
                self.sync_dialogs();
            }
            Action::ExportCsv => self.export_csv(),

            // ─────────────────────────────────────────────────────────────────
            // View Toggles
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleLocale => {
                let locale = self.domain.toggle_locale();
                self.dashboard.set_layout(locale.default_layout());
                self.status_message = None;
                self.persist_preferences();
                self.sync_dialogs();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let filtered = self.domain.filtered();
                let table_view = self.domain.table_view();

                // Build render context
                let ctx = DashboardRenderContext {
                    filtered: &filtered,
                    table_view: &table_view,
                    fleet_size: self.domain.records().len(),
                    columns: self.domain.columns.columns(),
                    sort: self.domain.sort,
                    locale: self.domain.locale,
                    seed: self.domain.key.seed,
                    profile: self.domain.key.profile,
                    today: Local::now().date_naive(),
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };

                draw_dashboard(frame, area, &mut self.dashboard, &ctx)?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Filter { .. } => self.filter_dialog.handle_key_event(key),
            Modal::Columns { .. } => self.column_dialog.handle_key_event(key),
            Modal::Reports { .. } => self.report_selector.handle_key_event(key),
            Modal::ReportView { .. } => self.report_view.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Filter { .. } => self.filter_dialog.draw(frame, area)?,
            Modal::Columns { .. } => self.column_dialog.draw(frame, area)?,
            Modal::Reports { .. } => self.report_selector.draw(frame, area)?,
            Modal::ReportView { kind } => {
                let report = self.build_report(*kind);
                self.report_view
                    .draw_with_report(frame, area, &report, &self.domain.locale)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    /// Render one report over the current filtered view
    fn build_report(&self, kind: ReportKind) -> Report {
        let view = self.domain.filtered();
        build_report(
            kind,
            &view,
            &self.domain.profile,
            self.domain.filter.fuel_alert_threshold,
            &self.domain.locale,
        )
    }

    /// Push domain state into every dialog so open overlays stay current
    fn sync_dialogs(&mut self) {
        let locale = self.domain.locale;
        self.quit_dialog.locale = locale;
        self.filter_dialog
            .set_filter(&self.domain.profile, &self.domain.filter, locale);
        self.column_dialog
            .set_columns(&self.domain.columns, self.domain.sort, locale);
        let previews = ReportKind::ALL
            .iter()
            .map(|kind| self.build_report(*kind))
            .collect();
        self.report_selector.set_reports(previews, locale);
    }

    fn filters_changed(&mut self) {
        debug!(
            regions = self.domain.filter.regions.len(),
            statuses = self.domain.filter.statuses.len(),
            capacity_min = self.domain.filter.capacity_range.0,
            capacity_max = self.domain.filter.capacity_range.1,
            "filters changed"
        );
        self.sync_dialogs();
    }

    fn export_csv(&mut self) {
        let view = self.domain.table_view();
        match write_export(
            &self.domain.export_dir,
            &view,
            self.domain.columns.columns(),
            &self.domain.locale,
        ) {
            Ok(path) => {
                self.error = None;
                self.status_message = Some(format!(
                    "{}: {}",
                    self.domain.locale.labels().exported,
                    path.display()
                ));
            }
            Err(e) => {
                error!(error = %format!("{:#}", e), "export failed");
                self.error = Some(format!("{:#}", e));
            }
        }
    }

    /// Remember locale and visible columns in the config file
    ///
    /// Only these two fields are written; flags given on the command line
    /// for this run are not persisted.
    fn persist_preferences(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        let mut stored = match Config::load_from(&path) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "not overwriting unreadable config");
                return;
            }
        };
        stored.locale = self.domain.locale;
        stored.table_columns = Some(self.domain.columns.keys());
        if let Err(e) = stored.save_to(&path) {
            warn!(error = %format!("{:#}", e), "could not save preferences");
            self.error = Some(format!("{:#}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::columns::Column;
    use crate::model::fleet::Region;
    use crate::model::locale::Locale;
    use crate::model::ui::LayoutMode;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::tempdir;

    fn app() -> App {
        App::new(&Config::default(), None, false)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the app the way the main loop does
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_splash_advances_on_key() {
        let mut app = App::new(&Config::default(), None, true);
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_region_toggle_filters_table() {
        let mut app = app();
        let total = app.domain.filtered().len();
        let cairo = app
            .domain
            .records()
            .iter()
            .filter(|r| r.region == Region::Cairo)
            .count();

        app.update(Action::ToggleRegion(Region::Cairo)).unwrap();
        assert_eq!(app.domain.filtered().len(), total - cairo);

        app.update(Action::ResetFilters).unwrap();
        assert_eq!(app.domain.filtered().len(), total);
    }

    #[test]
    fn test_reset_keeps_fuel_threshold() {
        let mut app = app();
        app.update(Action::SetFuelThreshold(Some(35))).unwrap();
        app.update(Action::ResetFilters).unwrap();
        assert_eq!(app.domain.filter.fuel_alert_threshold, Some(35));
    }

    #[test]
    fn test_sort_by_same_column_flips_direction() {
        let mut app = app();
        app.update(Action::SortBy(Column::Revenue)).unwrap();
        assert_eq!(app.domain.sort, SortSpec::by(Column::Revenue, false));
        app.update(Action::SortBy(Column::Revenue)).unwrap();
        assert_eq!(app.domain.sort, SortSpec::by(Column::Revenue, true));
        app.update(Action::SortBy(Column::Fuel)).unwrap();
        assert_eq!(app.domain.sort, SortSpec::by(Column::Fuel, false));
        app.update(Action::ClearSort).unwrap();
        assert_eq!(app.domain.sort, SortSpec::default());
    }

    #[test]
    fn test_last_column_cannot_be_hidden() {
        let mut config = Config::default();
        config.table_columns = Some(vec!["id".to_string()]);
        let mut app = App::new(&config, None, false);

        app.update(Action::ToggleColumn(Column::Id)).unwrap();
        assert_eq!(app.domain.columns.columns(), &[Column::Id]);
        assert_eq!(
            app.status_message.as_deref(),
            Some("At least one column must stay visible")
        );
    }

    #[test]
    fn test_reseed_changes_fleet_and_refresh_does_not() {
        let mut app = app();
        let before = app.domain.records().to_vec();

        app.update(Action::RefreshFleet).unwrap();
        assert_eq!(app.domain.records(), before.as_slice());

        app.update(Action::ReseedFleet).unwrap();
        assert_eq!(app.domain.key.seed, 43);
        assert_ne!(app.domain.records(), before.as_slice());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fleet regenerated with seed 43")
        );
    }

    #[test]
    fn test_toggle_locale_switches_layout() {
        let mut app = app();
        assert_eq!(app.dashboard.layout_mode, LayoutMode::Grid);

        app.update(Action::ToggleLocale).unwrap();
        assert_eq!(app.domain.locale, Locale::Arabic);
        assert_eq!(app.dashboard.layout_mode, LayoutMode::Tabbed);
        assert_eq!(app.quit_dialog.locale, Locale::Arabic);
    }

    #[test]
    fn test_preferences_are_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut app = App::new(&Config::default(), Some(path.clone()), false);

        app.update(Action::ToggleColumn(Column::Alert)).unwrap();
        app.update(Action::ToggleLocale).unwrap();

        let stored = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(stored.locale, Locale::Arabic);
        let columns = stored.table_columns.unwrap();
        assert!(!columns.contains(&"active_alert".to_string()));
        assert_eq!(stored.seed, Config::default().seed);
    }

    #[test]
    fn test_export_writes_file_and_reports_path() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.export_dir = Some(dir.path().to_path_buf());
        let mut app = App::new(&config, None, false);

        press(&mut app, KeyCode::Char('x'));

        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Exported"));
        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_report_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'));
        assert!(matches!(app.modals.top(), Some(Modal::Reports { .. })));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.modals.top(), Some(&Modal::Reports { selected_index: 1 }));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::ReportView {
                kind: ReportKind::Maintenance
            })
        );

        let text = screen_text(&mut app);
        assert!(text.contains(ReportKind::Maintenance.title(&Locale::English)));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.modals.top(), Some(Modal::Reports { .. })));
    }

    #[test]
    fn test_filter_dialog_updates_open_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert!(matches!(app.modals.top(), Some(Modal::Filter { .. })));

        // First row is the first region; Space toggles it off
        let first_region = app.domain.profile.regions[0];
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.domain.filter.regions.contains(&first_region));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.domain.filter.regions.contains(&first_region));
    }

    #[test]
    fn test_draws_dashboard_with_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        let text = screen_text(&mut app);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_esc_clears_error() {
        let mut app = app();
        app.error = Some("boom".to_string());
        press(&mut app, KeyCode::Esc);
        assert!(app.error.is_none());
    }
}
