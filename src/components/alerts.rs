//! Active fleet alerts panel

use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use crate::model::metrics::alert_rows;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn alerts_block(locale: &Locale, count: usize) -> Block<'static> {
    let labels = locale.labels();
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " ⚠ {} ({}) ",
            labels.alerts_title,
            locale.format_int(count as u64)
        ))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

/// Cells for one alert row: id, model, location, alert, temperature, fuel
fn alert_cells(record: &GeneratorRecord, locale: &Locale) -> Vec<String> {
    vec![
        record.id.clone(),
        locale.model(record.model).to_string(),
        locale.region(record.region).to_string(),
        locale.alert(record.active_alert).to_string(),
        format!("{}°C", locale.format_int(record.engine_temp_c as u64)),
        locale.format_percent(record.fuel_percent as f64, 0),
    ]
}

pub fn render_alerts_table(
    frame: &mut Frame,
    area: Rect,
    view: &[&GeneratorRecord],
    locale: &Locale,
) {
    let labels = locale.labels();
    let alerts = alert_rows(view);

    if alerts.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            format!("✔ {}", labels.no_alerts),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(alerts_block(locale, 0));
        frame.render_widget(message, area);
        return;
    }

    let mut headers = vec![
        labels.col_id,
        labels.col_model,
        labels.col_region,
        labels.col_alert,
        labels.col_temp,
        labels.col_fuel,
    ];
    let mut widths = vec![
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    if locale.is_rtl() {
        headers.reverse();
        widths.reverse();
    }

    let header = Row::new(headers.into_iter().map(Cell::from)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = alerts.iter().map(|record| {
        let mut cells = alert_cells(record, locale);
        let alert_idx = if locale.is_rtl() { 2 } else { 3 };
        if locale.is_rtl() {
            cells.reverse();
        }
        Row::new(cells.into_iter().enumerate().map(|(i, text)| {
            if i == alert_idx && record.active_alert.is_critical() {
                Cell::from(text).style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(text)
            }
        }))
        .style(Style::default().fg(Color::White))
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(alerts_block(locale, alerts.len()));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fleet::Alert;
    use crate::model::generator::generate_default;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(view: &[&GeneratorRecord]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|frame| render_alerts_table(frame, frame.area(), view, &Locale::English))
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
    fn test_alert_cells() {
        let mut fleet = generate_default(42, 1);
        fleet[0].active_alert = Alert::LowFuel;
        fleet[0].fuel_percent = 12;
        fleet[0].engine_temp_c = 88;
        let cells = alert_cells(&fleet[0], &Locale::English);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], fleet[0].id);
        assert_eq!(cells[3], "Low Fuel");
        assert_eq!(cells[4], "88°C");
        assert_eq!(cells[5], "12%");
    }

    #[test]
    fn test_no_alerts_message() {
        let mut fleet = generate_default(42, 3);
        for record in &mut fleet {
            record.active_alert = Alert::None;
        }
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        assert!(render(&view).contains("No critical fleet alerts"));
    }

    #[test]
    fn test_alert_rows_listed() {
        let mut fleet = generate_default(42, 3);
        fleet[1].active_alert = Alert::Overheating;
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let text = render(&view);
        assert!(text.contains(&fleet[1].id));
        assert!(text.contains("Overheating"));
    }
}
