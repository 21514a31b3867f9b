//! UI state - presentation state separate from domain data

/// Tabs of the tabbed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Map,
    Revenue,
    Alerts,
    Fleet,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Overview, Tab::Map, Tab::Revenue, Tab::Alerts, Tab::Fleet]
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(idx + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(idx + tabs.len() - 1) % tabs.len()]
    }
}

/// How the dashboard arranges its panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Every panel on one screen
    Grid,
    /// One panel group per tab
    Tabbed,
}

impl LayoutMode {
    pub fn toggle(&self) -> LayoutMode {
        match self {
            LayoutMode::Grid => LayoutMode::Tabbed,
            LayoutMode::Tabbed => LayoutMode::Grid,
        }
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Fleet.next(), Tab::Overview);
        assert_eq!(Tab::Overview.previous(), Tab::Fleet);
        assert_eq!(Tab::Map.next(), Tab::Revenue);
    }

    #[test]
    fn test_layout_toggle() {
        assert_eq!(LayoutMode::Grid.toggle(), LayoutMode::Tabbed);
        assert_eq!(LayoutMode::Tabbed.toggle(), LayoutMode::Grid);
    }
}
