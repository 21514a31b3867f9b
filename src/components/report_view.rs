//! Report view dialog
//!
//! Shows one rendered report full screen with scrolling.

use crate::action::Action;
use crate::component::Component;
use crate::model::locale::Locale;
use crate::model::report::Report;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct ReportViewDialog {
    pub scroll_offset: usize,
}

impl ReportViewDialog {
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    /// Draw `report`; scroll offset is clamped to the content
    pub fn draw_with_report(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        report: &Report,
        locale: &Locale,
    ) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, dialog_area);

        let content: Vec<Line> = report
            .lines
            .iter()
            .map(|line| {
                // Section headings end with a colon
                if line.ends_with(':') {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(line.clone(), Style::default().fg(Color::White)))
                }
            })
            .collect();

        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let alignment = if locale.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        };

        let paragraph = Paragraph::new(content)
            .alignment(alignment)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", report.title))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

impl Component for ReportViewDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            // Exporting from a report writes the table behind it
            KeyCode::Char('x') => Some(Action::ExportCsv),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with_report
        Ok(())
    }
}
