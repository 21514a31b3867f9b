//! Report selector dialog component
//!
//! Two-panel layout:
//! - Left panel: report templates with number shortcuts
//! - Right panel: preview of the selected report for the current view

use crate::action::Action;
use crate::component::Component;
use crate::model::locale::Locale;
use crate::model::report::{Report, ReportKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Report selector dialog
pub struct ReportSelectorDialog {
    pub selected_index: usize,
    pub list_state: ListState,
    /// Previews aligned with `ReportKind::ALL`
    previews: Vec<Report>,
    locale: Locale,
}

impl Default for ReportSelectorDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSelectorDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            previews: Vec::new(),
            locale: Locale::default(),
        }
    }

    /// Set the report previews, one per `ReportKind::ALL` entry
    pub fn set_reports(&mut self, previews: Vec<Report>, locale: Locale) {
        self.previews = previews;
        self.locale = locale;
    }

    pub fn selected_kind(&self) -> ReportKind {
        ReportKind::ALL[self.selected_index.min(ReportKind::ALL.len() - 1)]
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < ReportKind::ALL.len() {
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

    fn shortcut(&mut self, index: usize) -> Option<Action> {
        let kind = ReportKind::ALL.get(index).copied()?;
        self.selected_index = index;
        self.list_state.select(Some(index));
        Some(Action::OpenReport(kind))
    }
}

impl Component for ReportSelectorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('o') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::OpenReport(self.selected_kind())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            KeyCode::Char(c @ '1'..='4') => self.shortcut(c as usize - '1' as usize),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let labels = self.locale.labels();

        let popup_width = 90u16.min(area.width.saturating_sub(4));
        let popup_height = 22u16.min(area.height.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        // Main layout: header, content, help
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Content (two panels)
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(Span::styled(
            self.selected_kind().title(&self.locale),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.reports_title))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Left panel - templates
                Constraint::Min(30),    // Right panel - preview
            ])
            .split(main_chunks[1]);

        let items: Vec<ListItem> = ReportKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let is_selected = i == self.selected_index;
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        if is_selected { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(kind.title(&self.locale), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

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
            );
        frame.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        // Right panel: preview of the selected report
        let preview_lines: Vec<Line> = self
            .previews
            .get(self.selected_index)
            .map(|report| {
                report
                    .lines
                    .iter()
                    .map(|line| {
                        Line::from(Span::styled(line.clone(), Style::default().fg(Color::Gray)))
                    })
                    .collect()
            })
            .unwrap_or_default();
        let alignment = if self.locale.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let preview = Paragraph::new(preview_lines)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(preview, content_chunks[1]);

        let help_text = vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Open  "),
            Span::styled(" 1-4 ", Style::default().fg(Color::Green)),
            Span::raw("Quick open  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/o ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ];
        let help = Paragraph::new(Line::from(help_text))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}
