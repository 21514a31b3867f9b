//! Dashboard component - Main application screen
//!
//! Displays the KPI cards, map, revenue chart, insights, alerts and the fleet
//! table, either all at once (grid) or one group per tab.
//! Owns tab, layout and table cursor state.

use crate::action::Action;
use crate::component::Component;
use crate::components::alerts::render_alerts_table;
use crate::components::fleet_map::render_fleet_map;
use crate::components::insights::render_insights;
use crate::components::kpi::render_kpi_cards;
use crate::components::layout::calculate_dashboard_layout;
use crate::components::revenue_chart::render_revenue_chart;
use crate::components::table::TableComponent;
use crate::model::columns::{Column, SortSpec};
use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use crate::model::metrics::FleetSummary;
use crate::model::profile::ProfileKind;
use crate::model::ui::{LayoutMode, Tab};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Brand accent used for map points and highlights
pub const BRAND_BLUE: Color = Color::Rgb(0, 168, 232);

// ═══════════════════════════════════════════════════════════════════════════════
// Dashboard Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Dashboard component for the main application view
pub struct DashboardComponent {
    /// Current tab (tabbed layout only)
    pub active_tab: Tab,

    /// Grid or tabbed arrangement
    pub layout_mode: LayoutMode,

    /// Fleet table with its row cursor
    pub table: TableComponent,
}

impl DashboardComponent {
    pub fn new(layout_mode: LayoutMode) -> Self {
        Self {
            active_tab: Tab::Overview,
            layout_mode,
            table: TableComponent::new(),
        }
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    pub fn toggle_layout(&mut self) {
        self.layout_mode = self.layout_mode.toggle();
    }

    pub fn set_layout(&mut self, mode: LayoutMode) {
        self.layout_mode = mode;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for DashboardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Table navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Tabs
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('f') => Some(Action::OpenFilter),
            KeyCode::Char('c') => Some(Action::OpenColumns),
            KeyCode::Char('o') => Some(Action::OpenReports),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            // Fleet data
            KeyCode::Char('R') => Some(Action::RefreshFleet),
            KeyCode::Char('S') => Some(Action::ReseedFleet),
            KeyCode::Char('x') => Some(Action::ExportCsv),

            // View toggles
            KeyCode::Char('L') => Some(Action::ToggleLocale),
            KeyCode::Char('v') => Some(Action::ToggleLayout),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextTab if self.layout_mode == LayoutMode::Tabbed => self.next_tab(),
            Action::PrevTab if self.layout_mode == LayoutMode::Tabbed => self.previous_tab(),
            Action::ToggleLayout => self.toggle_layout(),
            Action::NextItem
            | Action::PrevItem
            | Action::FirstItem
            | Action::LastItem
            | Action::PageDown
            | Action::PageUp => return self.table.update(action),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_dashboard which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the dashboard
pub struct DashboardRenderContext<'a> {
    /// Filtered view in generation order
    pub filtered: &'a [&'a GeneratorRecord],
    /// Filtered view in table sort order
    pub table_view: &'a [&'a GeneratorRecord],
    /// Unfiltered fleet size, shown beside the view count in the status bar
    pub fleet_size: usize,
    pub columns: &'a [Column],
    pub sort: SortSpec,
    pub locale: Locale,
    pub seed: u64,
    pub profile: ProfileKind,
    pub today: NaiveDate,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

fn text_alignment(locale: &Locale) -> Alignment {
    if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Draw the dashboard
pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let layout = calculate_dashboard_layout(area, dashboard.layout_mode, dashboard.active_tab);
    let summary = FleetSummary::compute(ctx.filtered);

    render_header(frame, layout.header, ctx);

    if let Some(tabs_area) = layout.tabs {
        render_tabs(frame, tabs_area, dashboard.active_tab, &ctx.locale);
    }
    if let Some(kpi_area) = layout.kpis {
        render_kpi_cards(frame, kpi_area, &summary, ctx.seed, ctx.today, &ctx.locale);
    }
    if let Some(map_area) = layout.map {
        render_fleet_map(frame, map_area, ctx.filtered, &ctx.locale);
    }
    if let Some(revenue_area) = layout.revenue {
        render_revenue_chart(frame, revenue_area, ctx.filtered, &ctx.locale);
    }
    if let Some(insights_area) = layout.insights {
        render_insights(frame, insights_area, ctx.filtered, &ctx.locale);
    }
    if let Some(alerts_area) = layout.alerts {
        render_alerts_table(frame, alerts_area, ctx.filtered, &ctx.locale);
    }

    // Table rows follow the view even while hidden so the cursor stays valid
    dashboard
        .table
        .set_data(ctx.columns, ctx.table_view, ctx.sort, &ctx.locale);
    if let Some(table_area) = layout.table {
        dashboard.table.draw(frame, table_area)?;
    }

    render_footer(frame, layout.footer, &ctx.locale);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, dashboard.layout_mode);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let labels = ctx.locale.labels();
    let lines = vec![
        Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                labels.app_title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", labels.tracking_prefix),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                ctx.locale.format_int(ctx.filtered.len() as u64),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", labels.tracking_suffix),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(text_alignment(&ctx.locale));
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Tab, locale: &Locale) {
    let mut all_tabs = Tab::all();
    if locale.is_rtl() {
        all_tabs.reverse();
    }
    let titles: Vec<&str> = all_tabs.iter().map(|t| locale.tab(*t)).collect();
    let selected = all_tabs.iter().position(|t| *t == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, locale: &Locale) {
    let paragraph = Paragraph::new(Span::styled(
        locale.labels().footer,
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let chip = |text: String, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        chip(format!(" seed {} ", ctx.seed), Color::Cyan),
        Span::raw(" "),
        chip(format!(" {} ", ctx.profile), Color::Magenta),
        Span::raw(" "),
        chip(format!(" {} ", ctx.locale.code().to_uppercase()), Color::Blue),
        Span::raw(" "),
        Span::styled(
            format!("{}/{} ", ctx.filtered.len(), ctx.fleet_size),
            Style::default().fg(Color::White),
        ),
        Span::styled(ctx.locale.labels().units, Style::default().fg(Color::DarkGray)),
    ];

    // Error message if present
    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    // Status message if present
    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, mode: LayoutMode) {
    let key = |text: &'static str, color: Color| {
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let mut help_spans = vec![
        key(" q ", Color::Yellow),
        Span::raw("Quit "),
        key(" f ", Color::Green),
        Span::raw("Filter "),
        key(" c ", Color::Cyan),
        Span::raw("Columns "),
        key(" o ", Color::Cyan),
        Span::raw("Reports "),
        key(" x ", Color::Green),
        Span::raw("Export "),
        key(" R ", Color::Magenta),
        Span::raw("Refresh "),
        key(" S ", Color::Magenta),
        Span::raw("Reseed "),
        key(" L ", Color::Cyan),
        Span::raw("Language "),
        key(" v ", Color::Cyan),
        Span::raw("Layout "),
    ];
    if mode == LayoutMode::Tabbed {
        help_spans.push(key(" Tab ", Color::Cyan));
        help_spans.push(Span::raw("Switch "));
    }
    help_spans.push(key(" ? ", Color::White));
    help_spans.push(Span::raw("Help"));

    let paragraph = Paragraph::new(Line::from(help_spans));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::generate_default;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(dashboard: &mut DashboardComponent, locale: Locale) -> String {
        let fleet = generate_default(42, 50);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let ctx = DashboardRenderContext {
            filtered: &view,
            table_view: &view,
            fleet_size: fleet.len(),
            columns: &Column::DEFAULT,
            sort: SortSpec::default(),
            locale,
            seed: 42,
            profile: ProfileKind::Standard,
            today: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            error: None,
            status_message: Some("ready"),
        };

        let mut terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
        terminal
            .draw(|frame| draw_dashboard(frame, frame.area(), dashboard, &ctx).unwrap())
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
    fn test_key_mapping() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        let cases = [
            (KeyCode::Char('j'), Action::NextItem),
            (KeyCode::Char('f'), Action::OpenFilter),
            (KeyCode::Char('c'), Action::OpenColumns),
            (KeyCode::Char('o'), Action::OpenReports),
            (KeyCode::Char('R'), Action::RefreshFleet),
            (KeyCode::Char('S'), Action::ReseedFleet),
            (KeyCode::Char('L'), Action::ToggleLocale),
            (KeyCode::Char('v'), Action::ToggleLayout),
            (KeyCode::Char('x'), Action::ExportCsv),
            (KeyCode::Char('q'), Action::OpenQuitDialog),
            (KeyCode::Tab, Action::NextTab),
        ];
        for (code, expected) in cases {
            assert_eq!(dashboard.handle_key_event(key(code)).unwrap(), Some(expected));
        }
        assert_eq!(dashboard.handle_key_event(key(KeyCode::Char('z'))).unwrap(), None);
    }

    #[test]
    fn test_mouse_wheel_moves_rows() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            dashboard
                .handle_mouse_event(wheel(MouseEventKind::ScrollDown))
                .unwrap(),
            Some(Action::NextItem)
        );
        assert_eq!(
            dashboard
                .handle_mouse_event(wheel(MouseEventKind::ScrollUp))
                .unwrap(),
            Some(Action::PrevItem)
        );
    }

    #[test]
    fn test_tabs_only_move_in_tabbed_mode() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        dashboard.update(Action::NextTab).unwrap();
        assert_eq!(dashboard.active_tab, Tab::Overview);

        dashboard.update(Action::ToggleLayout).unwrap();
        assert_eq!(dashboard.layout_mode, LayoutMode::Tabbed);
        dashboard.update(Action::NextTab).unwrap();
        assert_eq!(dashboard.active_tab, Tab::Map);
        dashboard.update(Action::PrevTab).unwrap();
        dashboard.update(Action::PrevTab).unwrap();
        assert_eq!(dashboard.active_tab, Tab::Fleet);
    }

    #[test]
    fn test_grid_renders_every_panel() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        let text = render(&mut dashboard, Locale::English);
        assert!(text.contains("Executive Dashboard"));
        assert!(text.contains("Total Monthly Revenue"));
        assert!(text.contains("Asset Geolocation"));
        assert!(text.contains("Elkatamy AI Insights"));
        assert!(text.contains("Fleet Table"));
        assert!(text.contains("seed 42"));
        assert!(text.contains("ready"));
        assert_eq!(dashboard.table.row_count(), 50);
    }

    #[test]
    fn test_header_counts_filtered_view() {
        let fleet = generate_default(42, 50);
        let cairo: Vec<&GeneratorRecord> = fleet
            .iter()
            .filter(|r| r.region == crate::model::fleet::Region::Cairo)
            .collect();
        assert!(!cairo.is_empty() && cairo.len() < fleet.len());

        let ctx = DashboardRenderContext {
            filtered: &cairo,
            table_view: &cairo,
            fleet_size: fleet.len(),
            columns: &Column::DEFAULT,
            sort: SortSpec::default(),
            locale: Locale::English,
            seed: 42,
            profile: ProfileKind::Standard,
            today: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            error: None,
            status_message: None,
        };
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        let mut terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
        terminal
            .draw(|frame| draw_dashboard(frame, frame.area(), &mut dashboard, &ctx).unwrap())
            .unwrap();

        let header: String = (0..200u16)
            .map(|x| terminal.backend().buffer()[(x, 1u16)].symbol().to_string())
            .collect();
        let expected = format!("Tracking {} Generators", cairo.len());
        assert!(header.contains(&expected), "header was {:?}", header.trim_end());
        assert!(!header.contains("Tracking 50 Generators"));
    }

    #[test]
    fn test_tabbed_renders_selected_tab() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Tabbed);
        dashboard.active_tab = Tab::Alerts;
        let text = render(&mut dashboard, Locale::English);
        assert!(text.contains("Overview"));
        assert!(text.contains("Active Fleet Alerts"));
        assert!(!text.contains("Asset Geolocation"));
        // Hidden table still tracks the view
        assert_eq!(dashboard.table.row_count(), 50);
    }

    #[test]
    fn test_navigation_reaches_table() {
        let mut dashboard = DashboardComponent::new(LayoutMode::Grid);
        render(&mut dashboard, Locale::English);
        dashboard.update(Action::NextItem).unwrap();
        assert_eq!(dashboard.table.selected(), Some(1));
        dashboard.update(Action::LastItem).unwrap();
        assert_eq!(dashboard.table.selected(), Some(49));
    }
}
