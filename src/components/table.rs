//! Fleet table component
//!
//! Renders the filtered, sorted fleet with the selected columns and keeps
//! the row cursor.

use crate::action::Action;
use crate::component::Component;
use crate::model::columns::{Column, SortSpec};
use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table, TableState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Widest a column may grow before its text is cut
const MAX_COLUMN_WIDTH: usize = 28;

/// Table component for the fleet view
pub struct TableComponent {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Right-align flag per column
    numeric: Vec<bool>,
    /// Critical-alert flag per row
    critical: Vec<bool>,
    title: String,
    empty_message: String,
    state: TableState,
}

impl Default for TableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            numeric: Vec::new(),
            critical: Vec::new(),
            title: String::new(),
            empty_message: String::new(),
            state: TableState::default(),
        }
    }

    /// Load the rows to display; keeps the cursor inside the new row count
    pub fn set_data(
        &mut self,
        columns: &[Column],
        view: &[&GeneratorRecord],
        sort: SortSpec,
        locale: &Locale,
    ) {
        let labels = locale.labels();

        let mut ordered: Vec<Column> = columns.to_vec();
        if locale.is_rtl() {
            ordered.reverse();
        }

        self.headers = ordered
            .iter()
            .map(|column| {
                let label = column.label(labels);
                match sort.column {
                    Some(sorted) if sorted == *column => {
                        let arrow = if sort.descending { "▼" } else { "▲" };
                        format!("{} {}", label, arrow)
                    }
                    _ => label.to_string(),
                }
            })
            .collect();
        self.numeric = ordered.iter().map(|c| c.is_numeric()).collect();
        self.rows = view
            .iter()
            .map(|record| ordered.iter().map(|c| c.format(record, locale)).collect())
            .collect();
        self.critical = view
            .iter()
            .map(|record| record.active_alert.is_critical())
            .collect();
        self.title = format!(
            " {} ({}) ",
            labels.table_title,
            locale.format_int(view.len() as u64)
        );
        self.empty_message = labels.empty_view.to_string();

        self.clamp_selection();
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.state.select(None);
            return;
        }
        let last = self.rows.len() - 1;
        let selected = self.state.selected().unwrap_or(0).min(last);
        self.state.select(Some(selected));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select next row, wrapping to the first
    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(next));
    }

    /// Select previous row, wrapping to the last
    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    pub fn page_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state
            .select(Some((current + PAGE_SIZE).min(self.rows.len() - 1)));
    }

    pub fn page_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some(current.saturating_sub(PAGE_SIZE)));
    }

    /// Display width per column: widest of header and cells, capped
    fn column_widths(&self) -> Vec<u16> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.width());
                }
            }
        }
        widths
            .into_iter()
            .map(|w| w.min(MAX_COLUMN_WIDTH) as u16)
            .collect()
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .border_style(Style::default().fg(Color::DarkGray))
    }
}

/// Pad `text` to `width` display columns, on the left when `right` is set
fn align_cell(text: &str, width: usize, right: bool) -> String {
    let pad = width.saturating_sub(text.width());
    if right {
        format!("{}{}", " ".repeat(pad), text)
    } else {
        format!("{}{}", text, " ".repeat(pad))
    }
}

impl Component for TableComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.next(),
            Action::PrevItem => self.previous(),
            Action::FirstItem => self.select_first(),
            Action::LastItem => self.select_last(),
            Action::PageDown => self.page_down(),
            Action::PageUp => self.page_up(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.rows.is_empty() {
            let paragraph = Paragraph::new(self.empty_message.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(self.block());
            frame.render_widget(paragraph, area);
            return Ok(());
        }

        let widths = self.column_widths();
        let numeric = &self.numeric;

        let header = Row::new(self.headers.iter().enumerate().map(|(i, h)| {
            let right = numeric.get(i).copied().unwrap_or(false);
            Cell::from(align_cell(h, widths[i] as usize, right))
        }))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.rows.iter().zip(&self.critical).map(|(row, critical)| {
            let style = if *critical {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(row.iter().enumerate().map(|(i, cell)| {
                let right = numeric.get(i).copied().unwrap_or(false);
                Cell::from(align_cell(cell, widths[i] as usize, right))
            }))
            .style(style)
        });

        let table = Table::new(rows, widths.iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .block(self.block())
            .column_spacing(2)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);

        // Scrollbar once rows exceed the visible area (borders + header)
        let visible_height = area.height.saturating_sub(3) as usize;
        let total = self.rows.len();
        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
                .position(self.state.selected().unwrap_or(0));

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::generate_default;
    use ratatui::{backend::TestBackend, Terminal};

    fn loaded(count: usize, locale: Locale) -> TableComponent {
        let fleet = generate_default(42, count);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let mut table = TableComponent::new();
        table.set_data(&Column::DEFAULT, &view, SortSpec::default(), &locale);
        table
    }

    #[test]
    fn test_selection_wraps() {
        let mut table = loaded(3, Locale::English);
        assert_eq!(table.selected(), Some(0));
        table.previous();
        assert_eq!(table.selected(), Some(2));
        table.next();
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_paging_clamps() {
        let mut table = loaded(15, Locale::English);
        table.page_down();
        assert_eq!(table.selected(), Some(10));
        table.page_down();
        assert_eq!(table.selected(), Some(14));
        table.page_up();
        assert_eq!(table.selected(), Some(4));
        table.update(Action::FirstItem).unwrap();
        assert_eq!(table.selected(), Some(0));
        table.update(Action::LastItem).unwrap();
        assert_eq!(table.selected(), Some(14));
    }

    #[test]
    fn test_selection_clamps_on_shrink() {
        let mut table = loaded(20, Locale::English);
        table.select_last();

        let fleet = generate_default(42, 5);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        table.set_data(&Column::DEFAULT, &view, SortSpec::default(), &Locale::English);
        assert_eq!(table.selected(), Some(4));

        table.set_data(&Column::DEFAULT, &[], SortSpec::default(), &Locale::English);
        assert_eq!(table.selected(), None);
        table.next();
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_sort_indicator_in_header() {
        let fleet = generate_default(42, 4);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let mut table = TableComponent::new();
        table.set_data(
            &[Column::Id, Column::Revenue],
            &view,
            SortSpec::by(Column::Revenue, true),
            &Locale::English,
        );
        assert_eq!(table.headers[0], "Gen ID");
        assert!(table.headers[1].ends_with('▼'));
    }

    #[test]
    fn test_arabic_reverses_columns() {
        let fleet = generate_default(42, 2);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let mut table = TableComponent::new();
        table.set_data(
            &[Column::Id, Column::Fuel],
            &view,
            SortSpec::default(),
            &Locale::Arabic,
        );
        assert_eq!(table.rows[0][1], fleet[0].id);
        assert!(table.numeric[0]);
    }

    #[test]
    fn test_align_cell() {
        assert_eq!(align_cell("42", 5, true), "   42");
        assert_eq!(align_cell("ab", 4, false), "ab  ");
        assert_eq!(align_cell("toolong", 3, false), "toolong");
    }

    #[test]
    fn test_draws_rows_and_empty_placeholder() {
        let mut table = loaded(5, Locale::English);
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                table.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Fleet"));

        table.set_data(&Column::DEFAULT, &[], SortSpec::default(), &Locale::English);
        terminal
            .draw(|frame| {
                table.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No"));
    }
}
