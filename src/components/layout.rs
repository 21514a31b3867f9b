//! Layout calculations for the UI

use crate::model::ui::{LayoutMode, Tab};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard screen areas; panels not shown in the current mode are `None`
#[derive(Debug, Clone, Default)]
pub struct DashboardLayout {
    pub header: Rect,
    pub tabs: Option<Rect>,
    pub kpis: Option<Rect>,
    pub map: Option<Rect>,
    pub revenue: Option<Rect>,
    pub insights: Option<Rect>,
    pub alerts: Option<Rect>,
    pub table: Option<Rect>,
    pub footer: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard layout for the given mode and tab
pub fn calculate_dashboard_layout(area: Rect, mode: LayoutMode, tab: Tab) -> DashboardLayout {
    // header + content + footer + status + help bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let mut layout = DashboardLayout {
        header: outer[0],
        footer: outer[2],
        status: outer[3],
        help: outer[4],
        ..Default::default()
    };

    match mode {
        LayoutMode::Grid => fill_grid(&mut layout, outer[1]),
        LayoutMode::Tabbed => fill_tabbed(&mut layout, outer[1], tab),
    }

    layout
}

fn fill_grid(layout: &mut DashboardLayout, content: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Min(5),
        ])
        .split(content);

    // Map (40%) beside revenue chart (60%)
    let visuals = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    // Insights (1/3) beside alerts (2/3)
    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(rows[2]);

    layout.kpis = Some(rows[0]);
    layout.map = Some(visuals[0]);
    layout.revenue = Some(visuals[1]);
    layout.insights = Some(lower[0]);
    layout.alerts = Some(lower[1]);
    layout.table = Some(rows[3]);
}

fn fill_tabbed(layout: &mut DashboardLayout, content: Rect, tab: Tab) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(content);

    layout.tabs = Some(chunks[0]);
    let body = chunks[1];

    match tab {
        Tab::Overview => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(0)])
                .split(body);
            layout.kpis = Some(parts[0]);
            layout.insights = Some(parts[1]);
        }
        Tab::Map => layout.map = Some(body),
        Tab::Revenue => layout.revenue = Some(body),
        Tab::Alerts => layout.alerts = Some(body),
        Tab::Fleet => layout.table = Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shows_every_panel() {
        let layout =
            calculate_dashboard_layout(Rect::new(0, 0, 160, 60), LayoutMode::Grid, Tab::Overview);
        assert!(layout.tabs.is_none());
        assert!(layout.kpis.is_some());
        assert!(layout.map.is_some());
        assert!(layout.revenue.is_some());
        assert!(layout.insights.is_some());
        assert!(layout.alerts.is_some());
        assert!(layout.table.is_some());
        assert_eq!(layout.status.y, 58);
        assert_eq!(layout.help.y, 59);
    }

    #[test]
    fn test_tabbed_shows_one_group() {
        let area = Rect::new(0, 0, 120, 40);
        let map = calculate_dashboard_layout(area, LayoutMode::Tabbed, Tab::Map);
        assert!(map.tabs.is_some());
        assert!(map.map.is_some());
        assert!(map.kpis.is_none() && map.table.is_none() && map.alerts.is_none());
        assert_eq!(map.footer.y, 37);

        let overview = calculate_dashboard_layout(area, LayoutMode::Tabbed, Tab::Overview);
        assert!(overview.kpis.is_some() && overview.insights.is_some());
        assert!(overview.map.is_none());
    }

    #[test]
    fn test_centered_popup_fits() {
        let popup = centered_popup(Rect::new(0, 0, 100, 30), 40, 10);
        assert_eq!(popup, Rect::new(30, 10, 40, 10));
        let clipped = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(clipped.width, 20);
        assert_eq!(clipped.height, 5);
    }
}
