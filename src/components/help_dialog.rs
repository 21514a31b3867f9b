//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
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
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
                .position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:16}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Fleet Table");
    add_shortcut(&mut lines, "j / ↓", "Move to next unit");
    add_shortcut(&mut lines, "k / ↑", "Move to previous unit");
    add_shortcut(&mut lines, "g / G", "Jump to first / last unit");
    add_shortcut(&mut lines, "PgDn / Ctrl+d", "Page down");
    add_shortcut(&mut lines, "PgUp / Ctrl+u", "Page up");

    add_section(&mut lines, "Layout");
    add_shortcut(&mut lines, "v", "Toggle grid / tabbed layout");
    add_shortcut(&mut lines, "Tab", "Next tab (tabbed layout)");
    add_shortcut(&mut lines, "Shift+Tab", "Previous tab");
    add_shortcut(&mut lines, "L", "Switch English / Arabic");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "f", "Filter regions, statuses, capacity, fuel");
    add_shortcut(&mut lines, "c", "Choose columns and sort order");
    add_shortcut(&mut lines, "o", "Open a report");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");

    add_section(&mut lines, "Filter Dialog");
    add_shortcut(&mut lines, "Space", "Toggle region or status");
    add_shortcut(&mut lines, "h / l", "Step capacity or fuel threshold");
    add_shortcut(&mut lines, "a", "Select everything again");

    add_section(&mut lines, "Column Dialog");
    add_shortcut(&mut lines, "Space", "Show / hide column");
    add_shortcut(&mut lines, "s", "Sort by column (again to flip)");
    add_shortcut(&mut lines, "n", "Back to fleet order");

    add_section(&mut lines, "Fleet Data");
    add_shortcut(&mut lines, "R", "Refresh (same seed)");
    add_shortcut(&mut lines, "S", "Regenerate with the next seed");
    add_shortcut(&mut lines, "x", "Export table to CSV");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn flatten(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_help_lists_fleet_keys() {
        let text = flatten(&build_help_content());
        for needle in ["Export table to CSV", "Switch English / Arabic", "Open a report"] {
            assert!(text.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let action = dialog
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }
}
