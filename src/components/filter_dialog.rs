//! Fleet filter dialog component
//!
//! Region and status multi-select, capacity range and the fuel alert
//! threshold. Every edit is emitted as an Action; the App applies it and
//! hands the new filter back through `set_filter`.

use crate::action::Action;
use crate::component::Component;
use crate::model::filter::FilterState;
use crate::model::fleet::{GeneratorModel, Region, Status};
use crate::model::locale::Locale;
use crate::model::profile::FleetProfile;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Fuel threshold moves in steps of this many percent
const FUEL_STEP: u8 = 5;
const FUEL_MAX: u8 = 95;

/// One editable row of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Region(Region),
    Status(Status),
    CapacityMin,
    CapacityMax,
    FuelThreshold,
}

/// Capacity values the range can snap to, ascending
fn capacity_steps() -> Vec<u32> {
    let mut steps: Vec<u32> = GeneratorModel::ALL.iter().map(|m| m.capacity_kva()).collect();
    steps.sort_unstable();
    steps.dedup();
    steps
}

/// Next capacity step after (or before) `current`
fn step_capacity(current: u32, forward: bool) -> u32 {
    let steps = capacity_steps();
    if forward {
        steps
            .iter()
            .copied()
            .find(|s| *s > current)
            .unwrap_or(current)
    } else {
        steps
            .iter()
            .rev()
            .copied()
            .find(|s| *s < current)
            .unwrap_or(current)
    }
}

/// Next fuel threshold; stepping below the first step switches it off
fn step_fuel(current: Option<u8>, forward: bool) -> Option<u8> {
    match (current, forward) {
        (None, true) => Some(FUEL_STEP),
        (None, false) => None,
        (Some(pct), true) => Some(pct.saturating_add(FUEL_STEP).min(FUEL_MAX)),
        (Some(pct), false) if pct <= FUEL_STEP => None,
        (Some(pct), false) => Some(pct - FUEL_STEP),
    }
}

/// Fleet filter dialog
pub struct FilterDialog {
    /// Selected row index
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    rows: Vec<FilterRow>,
    filter: Option<FilterState>,
    /// Threshold restored when the fuel row is switched on
    default_fuel: u8,
    locale: Locale,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            rows: Vec::new(),
            filter: None,
            default_fuel: 20,
            locale: Locale::default(),
        }
    }

    /// Load the current filter; rows follow the profile's regions and statuses
    pub fn set_filter(&mut self, profile: &FleetProfile, filter: &FilterState, locale: Locale) {
        self.rows = profile
            .regions
            .iter()
            .map(|r| FilterRow::Region(*r))
            .chain(profile.statuses.iter().map(|s| FilterRow::Status(*s)))
            .chain([
                FilterRow::CapacityMin,
                FilterRow::CapacityMax,
                FilterRow::FuelThreshold,
            ])
            .collect();
        self.filter = Some(filter.clone());
        self.default_fuel = profile.thresholds.fuel_below;
        self.locale = locale;
        self.selected_index = self.selected_index.min(self.rows.len().saturating_sub(1));
    }

    pub fn selected_row(&self) -> Option<FilterRow> {
        self.rows.get(self.selected_index).copied()
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Enter/Space: toggle a region or status, switch the fuel threshold
    fn activate(&self) -> Option<Action> {
        let filter = self.filter.as_ref()?;
        match self.selected_row()? {
            FilterRow::Region(region) => Some(Action::ToggleRegion(region)),
            FilterRow::Status(status) => Some(Action::ToggleStatus(status)),
            FilterRow::FuelThreshold => Some(Action::SetFuelThreshold(
                match filter.fuel_alert_threshold {
                    Some(_) => None,
                    None => Some(self.default_fuel),
                },
            )),
            FilterRow::CapacityMin | FilterRow::CapacityMax => None,
        }
    }

    /// Left/Right: step a numeric row
    fn adjust(&self, forward: bool) -> Option<Action> {
        let filter = self.filter.as_ref()?;
        let (min, max) = filter.capacity_range;
        match self.selected_row()? {
            FilterRow::CapacityMin => Some(Action::SetCapacityMin(step_capacity(min, forward))),
            FilterRow::CapacityMax => Some(Action::SetCapacityMax(step_capacity(max, forward))),
            FilterRow::FuelThreshold => Some(Action::SetFuelThreshold(step_fuel(
                filter.fuel_alert_threshold,
                forward,
            ))),
            FilterRow::Region(_) | FilterRow::Status(_) => self.activate(),
        }
    }

    fn row_line(&self, row: FilterRow, filter: &FilterState) -> Line<'static> {
        let labels = self.locale.labels();
        let checkbox = |on: bool, text: &'static str| {
            Line::from(vec![
                Span::styled(
                    if on { "[x] " } else { "[ ] " },
                    Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
                ),
                Span::styled(
                    text,
                    if on {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
            ])
        };
        let value = |label: &'static str, text: String| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::White)),
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ])
        };

        match row {
            FilterRow::Region(region) => {
                checkbox(filter.regions.contains(&region), self.locale.region(region))
            }
            FilterRow::Status(status) => {
                checkbox(filter.statuses.contains(&status), self.locale.status(status))
            }
            FilterRow::CapacityMin => value(
                labels.filter_capacity_min,
                self.locale.format_int(filter.capacity_range.0 as u64),
            ),
            FilterRow::CapacityMax => value(
                labels.filter_capacity_max,
                self.locale.format_int(filter.capacity_range.1 as u64),
            ),
            FilterRow::FuelThreshold => value(
                labels.filter_fuel,
                filter
                    .fuel_alert_threshold
                    .map(|pct| self.locale.format_percent(pct as f64, 0))
                    .unwrap_or_else(|| labels.off.to_string()),
            ),
        }
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust(false),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(true),
            KeyCode::Char('a') => Some(Action::ResetFilters),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(filter) = self.filter.clone() else {
            return Ok(());
        };
        let labels = self.locale.labels();
        let alignment = if self.locale.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        };

        // Rows grouped under section headers, like a display list
        let mut items: Vec<ListItem> = Vec::new();
        let mut display_index = 0;
        let mut last_section = None;
        for (i, row) in self.rows.iter().enumerate() {
            let section = match row {
                FilterRow::Region(_) => Some(labels.filter_regions),
                FilterRow::Status(_) => Some(labels.filter_statuses),
                _ => None,
            };
            if section != last_section {
                let header = section.unwrap_or("");
                items.push(ListItem::new(
                    Line::from(Span::styled(
                        format!("── {} ", header),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(alignment),
                ));
                last_section = section;
            }
            if i == self.selected_index {
                display_index = items.len();
            }
            items.push(ListItem::new(self.row_line(*row, &filter).alignment(alignment)));
        }
        self.list_state.select(Some(display_index));

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = (items.len() as u16 + 8).min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Rows
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let region_rows = self
            .rows
            .iter()
            .filter(|r| matches!(r, FilterRow::Region(_)))
            .count();
        let status_rows = self
            .rows
            .iter()
            .filter(|r| matches!(r, FilterRow::Status(_)))
            .count();
        let header_text = format!(
            "{} {}/{} · {} {}/{}",
            labels.col_region,
            self.locale.format_int(filter.regions.len() as u64),
            self.locale.format_int(region_rows as u64),
            labels.col_status,
            self.locale.format_int(filter.statuses.len() as u64),
            self.locale.format_int(status_rows as u64),
        );
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .alignment(alignment)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.filter_title))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);

        let help_text = vec![
            Span::styled(" Space ", Style::default().fg(Color::Green)),
            Span::raw("Toggle  "),
            Span::styled(" h/l ", Style::default().fg(Color::Cyan)),
            Span::raw("Adjust  "),
            Span::styled(" a ", Style::default().fg(Color::Cyan)),
            Span::raw("Reset  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Close"),
        ];
        let help = Paragraph::new(Line::from(help_text))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> (FilterDialog, FleetProfile) {
        let profile = FleetProfile::standard();
        let filter = FilterState::select_all(&profile);
        let mut dialog = FilterDialog::new();
        dialog.set_filter(&profile, &filter, Locale::English);
        (dialog, profile)
    }

    #[test]
    fn test_rows_follow_profile() {
        let (dialog, profile) = dialog();
        assert_eq!(
            dialog.rows.len(),
            profile.regions.len() + profile.statuses.len() + 3
        );
        assert_eq!(dialog.selected_row(), Some(FilterRow::Region(profile.regions[0])));
    }

    #[test]
    fn test_space_toggles_region() {
        let (mut dialog, profile) = dialog();
        let action = dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(action, Some(Action::ToggleRegion(profile.regions[0])));
    }

    #[test]
    fn test_capacity_steps() {
        assert_eq!(capacity_steps(), vec![15, 20, 37, 125, 350]);
        assert_eq!(step_capacity(15, true), 20);
        assert_eq!(step_capacity(350, true), 350);
        assert_eq!(step_capacity(350, false), 125);
        assert_eq!(step_capacity(15, false), 15);
    }

    #[test]
    fn test_fuel_steps() {
        assert_eq!(step_fuel(None, true), Some(5));
        assert_eq!(step_fuel(Some(5), false), None);
        assert_eq!(step_fuel(Some(20), false), Some(15));
        assert_eq!(step_fuel(Some(95), true), Some(95));
    }

    #[test]
    fn test_adjust_capacity_and_fuel_rows() {
        let (mut dialog, profile) = dialog();
        let capacity_min = profile.regions.len() + profile.statuses.len();
        dialog.selected_index = capacity_min;
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::SetCapacityMin(20))
        );
        dialog.selected_index = capacity_min + 1;
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('h'))).unwrap(),
            Some(Action::SetCapacityMax(125))
        );
        dialog.selected_index = capacity_min + 2;
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SetFuelThreshold(Some(20)))
        );
    }

    #[test]
    fn test_navigation_is_clamped() {
        let (mut dialog, _) = dialog();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('k'))).unwrap(),
            Some(Action::ModalUp)
        );
        assert_eq!(dialog.selected_index, 0);
        for _ in 0..50 {
            dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(dialog.selected_index, dialog.rows.len() - 1);
        assert_eq!(dialog.selected_row(), Some(FilterRow::FuelThreshold));
    }

    #[test]
    fn test_close_and_reset_keys() {
        let (mut dialog, _) = dialog();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::ResetFilters)
        );
    }
}
