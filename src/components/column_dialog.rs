//! Column and sort dialog component

use crate::action::Action;
use crate::component::Component;
use crate::model::columns::{Column, ColumnSelection, SortSpec};
use crate::model::locale::Locale;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Column and sort dialog
pub struct ColumnDialog {
    pub selected_index: usize,
    pub list_state: ListState,
    selection: ColumnSelection,
    sort: SortSpec,
    locale: Locale,
}

impl Default for ColumnDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            selection: ColumnSelection::default(),
            sort: SortSpec::default(),
            locale: Locale::default(),
        }
    }

    pub fn set_columns(&mut self, selection: &ColumnSelection, sort: SortSpec, locale: Locale) {
        self.selection = selection.clone();
        self.sort = sort;
        self.locale = locale;
    }

    pub fn selected_column(&self) -> Column {
        Column::ALL[self.selected_index.min(Column::ALL.len() - 1)]
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < Column::ALL.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn sort_text(&self) -> String {
        let labels = self.locale.labels();
        match self.sort.column {
            Some(column) => format!(
                "{}: {} ({})",
                labels.sort_by,
                column.label(labels),
                if self.sort.descending {
                    labels.descending
                } else {
                    labels.ascending
                }
            ),
            None => format!("{}: —", labels.sort_by),
        }
    }
}

impl Component for ColumnDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') => Some(Action::CloseModal),
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Action::ToggleColumn(self.selected_column()))
            }
            KeyCode::Char('s') => Some(Action::SortBy(self.selected_column())),
            KeyCode::Char('n') => Some(Action::ClearSort),
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
        let labels = self.locale.labels();

        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let popup_height = (Column::ALL.len() as u16 + 8).min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(Span::styled(
            self.sort_text(),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.columns_title))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let items: Vec<ListItem> = Column::ALL
            .iter()
            .map(|column| {
                let visible = self.selection.contains(*column);
                let sort_marker = match self.sort.column {
                    Some(sorted) if sorted == *column => {
                        if self.sort.descending {
                            " ▼"
                        } else {
                            " ▲"
                        }
                    }
                    _ => "",
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if visible { "[x] " } else { "[ ] " },
                        Style::default().fg(if visible { Color::Green } else { Color::DarkGray }),
                    ),
                    Span::styled(
                        column.label(labels),
                        if visible {
                            Style::default().fg(Color::White)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                    Span::styled(
                        sort_marker,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();

        self.list_state.select(Some(self.selected_index));
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
            Span::raw("Show/Hide  "),
            Span::styled(" s ", Style::default().fg(Color::Cyan)),
            Span::raw("Sort  "),
            Span::styled(" n ", Style::default().fg(Color::Cyan)),
            Span::raw("Unsort  "),
            Span::styled(" Esc/c ", Style::default().fg(Color::Yellow)),
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

    #[test]
    fn test_keys_target_selected_column() {
        let mut dialog = ColumnDialog::new();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ToggleColumn(Column::Id))
        );
        dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('s'))).unwrap(),
            Some(Action::SortBy(Column::Model))
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('n'))).unwrap(),
            Some(Action::ClearSort)
        );
    }

    #[test]
    fn test_navigation_stays_in_schema() {
        let mut dialog = ColumnDialog::new();
        for _ in 0..40 {
            dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dialog.selected_column(), Column::Site);
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.selected_column(), Column::Alert);
    }

    #[test]
    fn test_sort_text() {
        let mut dialog = ColumnDialog::new();
        assert_eq!(dialog.sort_text(), "Sort by: —");
        dialog.set_columns(
            &ColumnSelection::default(),
            SortSpec::by(Column::Revenue, true),
            Locale::English,
        );
        assert_eq!(dialog.sort_text(), "Sort by: Monthly Revenue (EGP) (descending)");
    }
}
